//! Session state machine for the report form
//!
//! A session moves `Editing → Submitting → Submitted`. Validation failures
//! and gateway failures keep the draft intact and the session editable;
//! `Submitted` is terminal and only exits through `reset`.

use super::draft::ReportDraft;
use thiserror::Error;

/// Reasons a submission attempt is refused before reaching the gateway
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("required field not set: {0}")]
    MissingRequiredField(&'static str),
    #[error("select at least one expense category")]
    NoCategorySelected,
    #[error("a submission is already in flight")]
    SubmissionInFlight,
}

/// Where the session currently is in its lifecycle
#[derive(Debug, Clone, PartialEq)]
pub enum Phase {
    Editing,
    Submitting,
    /// Terminal; carries the grand total captured at submission time
    Submitted { grand_total: f64 },
}

/// Owns the draft and the submission lifecycle around it
#[derive(Debug)]
pub struct ReportSession {
    pub draft: ReportDraft,
    phase: Phase,
}

impl ReportSession {
    pub fn new() -> Self {
        Self {
            draft: ReportDraft::new_today(),
            phase: Phase::Editing,
        }
    }

    #[cfg(test)]
    pub fn with_draft(draft: ReportDraft) -> Self {
        Self {
            draft,
            phase: Phase::Editing,
        }
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.phase, Phase::Submitting)
    }

    pub fn is_submitted(&self) -> bool {
        matches!(self.phase, Phase::Submitted { .. })
    }

    /// Grand total snapshot carried by the terminal phase
    pub fn submitted_total(&self) -> Option<f64> {
        match self.phase {
            Phase::Submitted { grand_total } => Some(grand_total),
            _ => None,
        }
    }

    /// Check the draft is complete enough to submit: branch and salesperson
    /// set, at least one category selected.
    pub fn validate_for_submission(&self) -> Result<(), SubmitError> {
        if self.draft.branch.is_none() {
            return Err(SubmitError::MissingRequiredField("branch"));
        }
        if self.draft.salesperson.is_none() {
            return Err(SubmitError::MissingRequiredField("salesperson"));
        }
        if self.draft.selected_categories().is_empty() {
            return Err(SubmitError::NoCategorySelected);
        }
        Ok(())
    }

    /// Validate and move to `Submitting`. At most one submission may be in
    /// flight; a second call while submitting is refused.
    pub fn begin_submit(&mut self) -> Result<(), SubmitError> {
        if self.is_submitting() {
            return Err(SubmitError::SubmissionInFlight);
        }
        self.validate_for_submission()?;
        self.phase = Phase::Submitting;
        Ok(())
    }

    /// Record the gateway outcome. Success reaches the terminal `Submitted`
    /// phase with the grand total snapshotted; failure returns to `Editing`
    /// with the draft untouched so the user can retry.
    pub fn complete_submit(&mut self, success: bool) {
        if !self.is_submitting() {
            return;
        }
        self.phase = if success {
            Phase::Submitted {
                grand_total: self.draft.grand_total(),
            }
        } else {
            Phase::Editing
        };
    }

    /// Discard everything and start a brand-new editing session
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for ReportSession {
    fn default() -> Self {
        Self::new()
    }
}
