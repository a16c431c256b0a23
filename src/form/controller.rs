use chrono::NaiveDate;
use thiserror::Error;
use tracing::{debug, error, warn};

use crate::api::LeaveService;
use crate::messages;
use crate::model::{Attachment, LeaveHistoryEntry, LeaveRequestDraft, LeaveType, days_inclusive};

/// Lifecycle of one form instance. `Bound` is the transient step between
/// receiving the ready notification and finishing default population.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormState {
    Uninitialized,
    Bound,
    Ready,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindOutcome {
    Bound,
    /// Second and later bind calls are no-ops.
    AlreadyBound,
}

/// Result of a day-count recomputation. `StaleRange` means the range was
/// inverted and the previously displayed count was left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayCount {
    Updated(u32),
    StaleRange,
}

#[derive(Debug, Error)]
#[error("attachment section is hidden for the selected category")]
pub struct AttachmentHidden;

/// What the host should tell the user after a submission attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Accepted { message: String },
    Rejected { message: String },
    Failed { message: String },
    /// A previous submission has not settled yet; nothing was sent.
    InFlight,
}

/// The leave-request form: field state, attachment visibility, the submission
/// guard, and the history rows last fetched for display.
pub struct FormController {
    state: FormState,
    today: NaiveDate,
    draft: LeaveRequestDraft,
    attachment_visible: bool,
    submitting: bool,
    history: Vec<LeaveHistoryEntry>,
}

impl FormController {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            state: FormState::Uninitialized,
            today,
            draft: LeaveRequestDraft::new(today),
            attachment_visible: false,
            submitting: false,
            history: Vec::new(),
        }
    }

    /// Called exactly once by whoever owns content insertion, after the form
    /// markup exists. Populates defaults, applies the optional pre-selected
    /// category (the `leave_type` query parameter of the original page), and
    /// runs the attachment toggle once.
    pub fn bind(&mut self, prefill: Option<LeaveType>) -> BindOutcome {
        if self.state != FormState::Uninitialized {
            debug!("bind called on an already-bound form");
            return BindOutcome::AlreadyBound;
        }
        self.state = FormState::Bound;

        self.draft = LeaveRequestDraft::new(self.today);
        if let Some(leave_type) = prefill {
            self.draft.leave_type = leave_type;
        }
        self.toggle_attachment_section();

        self.state = FormState::Ready;
        BindOutcome::Bound
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    pub fn draft(&self) -> &LeaveRequestDraft {
        &self.draft
    }

    pub fn history(&self) -> &[LeaveHistoryEntry] {
        &self.history
    }

    pub fn attachment_visible(&self) -> bool {
        self.attachment_visible
    }

    pub fn set_start_date(&mut self, date: NaiveDate) -> DayCount {
        self.draft.start_date = date;
        self.compute_days()
    }

    pub fn set_end_date(&mut self, date: NaiveDate) -> DayCount {
        self.draft.end_date = date;
        self.compute_days()
    }

    /// Inclusive whole-day count. An inverted range leaves the field
    /// unchanged and reports `StaleRange` so the host can surface it.
    pub fn compute_days(&mut self) -> DayCount {
        match days_inclusive(self.draft.start_date, self.draft.end_date) {
            Some(days) => {
                self.draft.days_requested = Some(days);
                DayCount::Updated(days)
            }
            None => DayCount::StaleRange,
        }
    }

    pub fn set_reason(&mut self, reason: impl Into<String>) {
        self.draft.reason = reason.into();
    }

    pub fn set_leave_type(&mut self, leave_type: LeaveType) {
        self.draft.leave_type = leave_type;
        self.toggle_attachment_section();
    }

    /// The certificate section is visible only for sick leave; hiding it
    /// discards any file already chosen.
    pub fn toggle_attachment_section(&mut self) {
        self.attachment_visible = self.draft.leave_type.requires_certificate();
        if !self.attachment_visible {
            self.draft.attachment = None;
        }
    }

    pub fn attach(&mut self, attachment: Attachment) -> Result<(), AttachmentHidden> {
        if !self.attachment_visible {
            return Err(AttachmentHidden);
        }
        self.draft.attachment = Some(attachment);
        Ok(())
    }

    /// Send the draft. Guarded: a second call while one is pending returns
    /// `InFlight` without touching the network. On acceptance the fields go
    /// back to their bind-time defaults and the history is reloaded once.
    pub async fn submit<S: LeaveService>(&mut self, api: &S) -> SubmitOutcome {
        if self.submitting {
            return SubmitOutcome::InFlight;
        }
        self.submitting = true;
        let result = api.submit_request(&self.draft).await;
        self.submitting = false;

        match result {
            Ok(ack) if ack.success => {
                self.reset_fields();
                self.load_history(api).await;
                SubmitOutcome::Accepted {
                    message: messages::SUBMIT_OK.to_string(),
                }
            }
            Ok(ack) => SubmitOutcome::Rejected {
                message: format!(
                    "{}{}",
                    messages::SERVER_ERROR_PREFIX,
                    ack.message.unwrap_or_default()
                ),
            },
            Err(err) => {
                error!(error = %err, "leave submission failed");
                SubmitOutcome::Failed {
                    message: messages::SUBMIT_FAILED.to_string(),
                }
            }
        }
    }

    /// Refresh the history rows. A failed fetch keeps whatever was already
    /// displayed.
    pub async fn load_history<S: LeaveService>(&mut self, api: &S) {
        match api.my_requests().await {
            Ok(leaves) => self.history = leaves,
            Err(err) => warn!(error = %err, "failed to load leave history"),
        }
    }

    fn reset_fields(&mut self) {
        self.draft = LeaveRequestDraft::new(self.today);
        self.toggle_attachment_section();
    }

    #[cfg(test)]
    fn force_in_flight(&mut self) {
        self.submitting = true;
    }
}
