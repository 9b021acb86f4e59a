//! Trait abstraction for the submission gateway to enable mocking in tests

use anyhow::Result;
use async_trait::async_trait;

use super::client::ReportPayload;

/// External service that durably records a submitted report.
///
/// The app sees a boolean outcome only: `Ok(())` means the report was logged,
/// any error is a recoverable gateway failure the user may retry.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubmissionGateway: Send + Sync {
    /// Transfer the full report, attachments included
    async fn submit(&self, payload: ReportPayload) -> Result<()>;
}
