//! Renders the leave-history table body. Produces the same markup the
//! dashboard tbody expects: one `<tr>` per entry, or a single placeholder row.

use crate::messages;
use crate::model::LeaveHistoryEntry;

const DATE_FORMAT: &str = "%Y-%m-%d";

pub fn render_history(entries: &[LeaveHistoryEntry]) -> String {
    if entries.is_empty() {
        return placeholder_row();
    }
    entries.iter().map(render_row).collect()
}

fn render_row(entry: &LeaveHistoryEntry) -> String {
    let download_cell = if entry.has_downloadable_certificate() {
        format!(
            "<button class=\"btn btn-sm btn-info\" onclick=\"downloadCertificate({})\" \
             title=\"Download medical certificate\"><i class=\"fas fa-download\"></i></button>",
            entry.id
        )
    } else {
        "<span class=\"text-muted\">-</span>".to_string()
    };

    format!(
        "<tr>\
         <td><span class=\"badge {type_badge}\">{leave_type}</span></td>\
         <td>{start}</td>\
         <td>{end}</td>\
         <td>{days} {days_suffix}</td>\
         <td>{reason}</td>\
         <td><span class=\"badge {status_badge}\">{status_label}</span></td>\
         <td>{approver}</td>\
         <td>{download_cell}</td>\
         </tr>",
        type_badge = entry.leave_type.badge_class(),
        leave_type = entry.leave_type,
        start = entry.start_date.format(DATE_FORMAT),
        end = entry.end_date.format(DATE_FORMAT),
        days = entry.days_requested,
        days_suffix = messages::DAYS_SUFFIX,
        reason = escape(&entry.reason),
        status_badge = entry.status.badge_class(),
        status_label = escape(entry.status.label()),
        approver = entry
            .approved_by
            .as_deref()
            .map(escape)
            .unwrap_or_else(|| messages::NO_APPROVER.to_string()),
    )
}

fn placeholder_row() -> String {
    format!(
        "<tr><td colspan=\"8\" class=\"text-center text-muted\">\
         <i class=\"fas fa-info-circle me-1\"></i>{}</td></tr>",
        messages::NO_HISTORY
    )
}

fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{LeaveStatus, LeaveType};
    use chrono::NaiveDate;

    fn entry() -> LeaveHistoryEntry {
        LeaveHistoryEntry {
            id: 7,
            leave_type: LeaveType::Sick,
            start_date: NaiveDate::from_ymd_opt(2026, 8, 10).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2026, 8, 12).unwrap(),
            days_requested: 3,
            reason: "fever".to_string(),
            status: LeaveStatus::Pending,
            approved_by: None,
            medical_certificate_path: Some("uploads/7.pdf".to_string()),
            created_at: None,
        }
    }

    #[test]
    fn sick_with_certificate_gets_a_download_button() {
        let html = render_history(&[entry()]);
        assert!(html.contains("downloadCertificate(7)"));
        assert!(html.contains("badge bg-danger"));
        assert!(html.contains("awaiting approval"));
        assert!(html.contains("<td>2026-08-10</td>"));
        assert!(html.contains("3 day(s)"));
    }

    #[test]
    fn non_sick_entries_never_offer_a_download() {
        let mut vacation = entry();
        vacation.leave_type = LeaveType::Vacation;
        let html = render_history(&[vacation]);
        assert!(!html.contains("downloadCertificate"));
        assert!(html.contains("<span class=\"text-muted\">-</span>"));
    }

    #[test]
    fn sick_without_a_stored_path_has_no_download() {
        let mut no_path = entry();
        no_path.medical_certificate_path = None;
        let html = render_history(&[no_path]);
        assert!(!html.contains("downloadCertificate"));
    }

    #[test]
    fn approver_falls_back_to_a_dash() {
        let mut approved = entry();
        approved.status = LeaveStatus::Approved;
        approved.approved_by = Some("HR Manager".to_string());
        let html = render_history(&[approved, entry()]);
        assert!(html.contains("<td>HR Manager</td>"));
        assert!(html.contains("<td>-</td>"));
        assert!(html.contains("badge bg-success"));
    }

    #[test]
    fn empty_history_is_one_placeholder_row() {
        let html = render_history(&[]);
        assert_eq!(html.matches("<tr>").count(), 1);
        assert!(html.contains("colspan=\"8\""));
        assert!(html.contains(messages::NO_HISTORY));
    }

    #[test]
    fn reason_text_is_escaped() {
        let mut sneaky = entry();
        sneaky.reason = "<script>alert(1)</script>".to_string();
        let html = render_history(&[sneaky]);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
