pub mod client;

pub use client::{ApiError, LeaveApi, SubmitAck};

use crate::model::{LeaveHistoryEntry, LeaveRequestDraft};

/// The two calls the form controller makes. `LeaveApi` is the real
/// implementation; tests substitute an in-memory one.
pub trait LeaveService {
    async fn submit_request(&self, draft: &LeaveRequestDraft) -> Result<SubmitAck, ApiError>;
    async fn my_requests(&self) -> Result<Vec<LeaveHistoryEntry>, ApiError>;
}

impl LeaveService for LeaveApi {
    async fn submit_request(&self, draft: &LeaveRequestDraft) -> Result<SubmitAck, ApiError> {
        LeaveApi::submit_request(self, draft).await
    }

    async fn my_requests(&self) -> Result<Vec<LeaveHistoryEntry>, ApiError> {
        LeaveApi::my_requests(self).await
    }
}
