use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// Leave categories accepted by the leave API.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum LeaveType {
    Sick,
    Vacation,
    #[default]
    Personal,
    Other,
}

impl LeaveType {
    pub fn badge_class(&self) -> &'static str {
        match self {
            LeaveType::Sick => "bg-danger",
            LeaveType::Vacation => "bg-primary",
            LeaveType::Personal => "bg-warning",
            LeaveType::Other => "bg-secondary",
        }
    }

    /// Sick leave is the one category where a medical certificate applies.
    pub fn requires_certificate(&self) -> bool {
        matches!(self, LeaveType::Sick)
    }
}

/// Approval status of a submitted request. Unknown server values are kept
/// verbatim rather than rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum LeaveStatus {
    Pending,
    Approved,
    Rejected,
    Other(String),
}

impl From<String> for LeaveStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "pending" => LeaveStatus::Pending,
            "approved" => LeaveStatus::Approved,
            "rejected" => LeaveStatus::Rejected,
            _ => LeaveStatus::Other(value),
        }
    }
}

impl From<LeaveStatus> for String {
    fn from(value: LeaveStatus) -> Self {
        match value {
            LeaveStatus::Pending => "pending".to_string(),
            LeaveStatus::Approved => "approved".to_string(),
            LeaveStatus::Rejected => "rejected".to_string(),
            LeaveStatus::Other(raw) => raw,
        }
    }
}

impl LeaveStatus {
    pub fn badge_class(&self) -> &'static str {
        match self {
            LeaveStatus::Pending => "bg-warning",
            LeaveStatus::Approved => "bg-success",
            LeaveStatus::Rejected => "bg-danger",
            LeaveStatus::Other(_) => "bg-secondary",
        }
    }

    pub fn label(&self) -> &str {
        match self {
            LeaveStatus::Pending => crate::messages::STATUS_PENDING,
            LeaveStatus::Approved => crate::messages::STATUS_APPROVED,
            LeaveStatus::Rejected => crate::messages::STATUS_REJECTED,
            LeaveStatus::Other(raw) => raw,
        }
    }
}

/// A file chosen for upload alongside a sick-leave request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// The in-progress, not-yet-submitted request held by the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaveRequestDraft {
    pub leave_type: LeaveType,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub days_requested: Option<u32>,
    pub reason: String,
    pub attachment: Option<Attachment>,
}

impl LeaveRequestDraft {
    /// A blank draft with both dates set to `today`.
    pub fn new(today: NaiveDate) -> Self {
        Self {
            leave_type: LeaveType::default(),
            start_date: today,
            end_date: today,
            days_requested: None,
            reason: String::new(),
            attachment: None,
        }
    }
}

/// Whole days between two dates, inclusive of both endpoints.
/// `None` when the range is inverted.
pub fn days_inclusive(start: NaiveDate, end: NaiveDate) -> Option<u32> {
    if end >= start {
        Some((end - start).num_days() as u32 + 1)
    } else {
        None
    }
}
