pub mod history;
pub mod leave_request;

pub use history::LeaveHistoryEntry;
pub use leave_request::{days_inclusive, Attachment, LeaveRequestDraft, LeaveStatus, LeaveType};
