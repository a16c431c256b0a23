//! User-facing strings, kept in one place so the host page can swap them out.

pub const SUBMIT_OK: &str = "Leave request submitted successfully";
pub const SUBMIT_FAILED: &str = "Something went wrong while submitting the request";
pub const SERVER_ERROR_PREFIX: &str = "Request failed: ";

pub const STATUS_PENDING: &str = "awaiting approval";
pub const STATUS_APPROVED: &str = "approved";
pub const STATUS_REJECTED: &str = "rejected";

pub const NO_HISTORY: &str = "No leave history yet";
pub const DAYS_SUFFIX: &str = "day(s)";
pub const NO_APPROVER: &str = "-";
