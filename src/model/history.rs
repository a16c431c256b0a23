use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::leave_request::{LeaveStatus, LeaveType};

/// One row of the leave-history table, exactly as the server returns it.
/// Created server-side on submission; never mutated locally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaveHistoryEntry {
    pub id: i64,
    pub leave_type: LeaveType,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub days_requested: u32,
    pub reason: String,
    pub status: LeaveStatus,
    #[serde(default)]
    pub approved_by: Option<String>,
    #[serde(default)]
    pub medical_certificate_path: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl LeaveHistoryEntry {
    /// The download control is offered only for sick leave with a stored
    /// certificate.
    pub fn has_downloadable_certificate(&self) -> bool {
        self.leave_type.requires_certificate()
            && self
                .medical_certificate_path
                .as_deref()
                .is_some_and(|path| !path.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(leave_type: LeaveType, path: Option<&str>) -> LeaveHistoryEntry {
        LeaveHistoryEntry {
            id: 1,
            leave_type,
            start_date: NaiveDate::from_ymd_opt(2026, 8, 10).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2026, 8, 11).unwrap(),
            days_requested: 2,
            reason: "flu".to_string(),
            status: LeaveStatus::Pending,
            approved_by: None,
            medical_certificate_path: path.map(str::to_string),
            created_at: None,
        }
    }

    #[test]
    fn certificate_only_for_sick_with_path() {
        assert!(entry(LeaveType::Sick, Some("uploads/cert.pdf")).has_downloadable_certificate());
        assert!(!entry(LeaveType::Sick, None).has_downloadable_certificate());
        assert!(!entry(LeaveType::Sick, Some("")).has_downloadable_certificate());
        assert!(
            !entry(LeaveType::Vacation, Some("uploads/cert.pdf")).has_downloadable_certificate()
        );
    }

    #[test]
    fn deserializes_server_payload() {
        let json = r#"{
            "id": 7,
            "leave_type": "sick",
            "start_date": "2026-08-10",
            "end_date": "2026-08-12",
            "days_requested": 3,
            "reason": "fever",
            "status": "approved",
            "approved_by": "HR Manager",
            "medical_certificate_path": "uploads/7.pdf",
            "created_at": "2026-08-09T08:30:00Z"
        }"#;
        let entry: LeaveHistoryEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.leave_type, LeaveType::Sick);
        assert_eq!(entry.status, LeaveStatus::Approved);
        assert_eq!(entry.days_requested, 3);
        assert!(entry.has_downloadable_certificate());
    }

    #[test]
    fn optional_fields_default_to_none() {
        let json = r#"{
            "id": 8,
            "leave_type": "personal",
            "start_date": "2026-08-10",
            "end_date": "2026-08-10",
            "days_requested": 1,
            "reason": "errand",
            "status": "pending"
        }"#;
        let entry: LeaveHistoryEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.approved_by, None);
        assert_eq!(entry.medical_certificate_path, None);
        assert_eq!(entry.created_at, None);
    }
}
