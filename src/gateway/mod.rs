//! Submission gateway module

mod client;
mod traits;

pub use client::{ReportPayload, SheetsClient, DEFAULT_WEB_APP_URL};
pub use traits::SubmissionGateway;

#[cfg(test)]
pub use traits::MockSubmissionGateway;
