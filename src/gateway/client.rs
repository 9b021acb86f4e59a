//! HTTP client for the spreadsheet-backed submission endpoint
//!
//! The endpoint is a web app that appends the report to an audit sheet. It
//! takes the whole report as one JSON document; attachments travel inline as
//! base64 so the deployment can file them next to the row it writes.

use crate::state::{ExpenseCategory, LineItem, ReportDraft};
use anyhow::{anyhow, Result};
use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde::Serialize;

use super::traits::SubmissionGateway;

/// Default web-app deployment URL
pub const DEFAULT_WEB_APP_URL: &str =
    "https://script.google.com/macros/s/AKfycbxVBgR3gN-XLimGVwFEH5gFjNPFVpPNdR7yjstwxCPyKobg786kfEWDwIncYrvrcE8axQ/exec";

/// Attachment on the wire: base64 content plus metadata
#[derive(Debug, Clone, Serialize)]
pub struct AttachmentPayload {
    pub base64: String,
    #[serde(rename = "mimeType")]
    pub mime_type: String,
    pub name: String,
}

/// One expense entry on the wire. `from`/`to` only appear for travel entries.
#[derive(Debug, Clone, Serialize)]
pub struct EntryPayload {
    pub id: String,
    pub date: String,
    pub amount: String,
    pub attachment: Option<AttachmentPayload>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
}

impl EntryPayload {
    fn from_item(item: &LineItem, travel: bool) -> Self {
        let attachment = item.attachment.as_ref().map(|a| AttachmentPayload {
            base64: BASE64.encode(&a.bytes),
            mime_type: a.mime_type.clone(),
            name: a.file_name.clone(),
        });
        let (from, to) = if travel {
            (
                Some(item.origin().to_string()),
                Some(item.destination().to_string()),
            )
        } else {
            (None, None)
        };
        Self {
            id: item.id.to_string(),
            date: item.date.to_string(),
            amount: item.amount.clone(),
            attachment,
            from,
            to,
        }
    }
}

/// The full report as the endpoint expects it
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportPayload {
    pub expense_date: String,
    pub branch_name: String,
    pub salesperson_name: String,
    pub categories: Vec<String>,
    pub travel_entries: Vec<EntryPayload>,
    pub food_entries: Vec<EntryPayload>,
    pub accommodation_entries: Vec<EntryPayload>,
    pub other_entries: Vec<EntryPayload>,
    pub remark: String,
}

impl ReportPayload {
    /// Flatten a draft into the wire shape. Unset identity fields become
    /// empty strings; validation is the session's job, not the gateway's.
    pub fn from_draft(draft: &ReportDraft) -> Self {
        let entries = |category: ExpenseCategory| -> Vec<EntryPayload> {
            let travel = category == ExpenseCategory::Travel;
            draft
                .entries(category)
                .iter()
                .map(|item| EntryPayload::from_item(item, travel))
                .collect()
        };
        Self {
            expense_date: draft.report_date.to_string(),
            branch_name: draft.branch.clone().unwrap_or_default(),
            salesperson_name: draft.salesperson.clone().unwrap_or_default(),
            categories: draft
                .selected_categories()
                .iter()
                .map(|c| c.label().to_string())
                .collect(),
            travel_entries: entries(ExpenseCategory::Travel),
            food_entries: entries(ExpenseCategory::Food),
            accommodation_entries: entries(ExpenseCategory::Accommodation),
            other_entries: entries(ExpenseCategory::Other),
            remark: draft.remark.clone(),
        }
    }
}

/// Client posting reports to the web-app endpoint
pub struct SheetsClient {
    http: reqwest::Client,
    url: String,
}

impl SheetsClient {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            url: url.into(),
        }
    }
}

#[async_trait]
impl SubmissionGateway for SheetsClient {
    async fn submit(&self, payload: ReportPayload) -> Result<()> {
        let body = serde_json::to_string(&payload)?;
        tracing::info!(url = %self.url, bytes = body.len(), "posting expense report");

        // text/plain keeps the web-app deployment from demanding a preflight
        let response = self
            .http
            .post(&self.url)
            .header(reqwest::header::CONTENT_TYPE, "text/plain")
            .body(body)
            .send()
            .await
            .map_err(|e| anyhow!("failed to reach submission endpoint: {e}"))?;

        response
            .error_for_status()
            .map_err(|e| anyhow!("submission endpoint rejected the report: {e}"))?;
        Ok(())
    }
}
