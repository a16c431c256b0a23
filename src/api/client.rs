use reqwest::multipart;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::Config;
use crate::model::{LeaveHistoryEntry, LeaveRequestDraft};

const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("server returned HTTP {0}")]
    UnexpectedStatus(reqwest::StatusCode),
}

/// `{ success, message? }` envelope returned by the submission endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitAck {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Deserialize)]
struct HistoryPayload {
    #[serde(default)]
    leaves: Vec<LeaveHistoryEntry>,
}

/// Async client for the leave API.
#[derive(Clone)]
pub struct LeaveApi {
    http: reqwest::Client,
    base_url: String,
}

impl LeaveApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn from_config(config: &Config) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.http_timeout_secs))
            .build()?;
        Ok(Self {
            http,
            base_url: config.api_base_url.clone(),
        })
    }

    /// POST the draft as multipart form data. The certificate part is added
    /// only when a file was actually chosen.
    pub async fn submit_request(&self, draft: &LeaveRequestDraft) -> Result<SubmitAck, ApiError> {
        let mut form = multipart::Form::new()
            .text("leave_type", draft.leave_type.to_string())
            .text("start_date", draft.start_date.format(DATE_FORMAT).to_string())
            .text("end_date", draft.end_date.format(DATE_FORMAT).to_string())
            .text(
                "days_requested",
                draft
                    .days_requested
                    .map(|days| days.to_string())
                    .unwrap_or_default(),
            )
            .text("reason", draft.reason.clone());

        if let Some(attachment) = &draft.attachment {
            let part = multipart::Part::bytes(attachment.bytes.clone())
                .file_name(attachment.file_name.clone());
            form = form.part("medical_certificate", part);
        }

        let response = self
            .http
            .post(format!("{}/api/leave/request", self.base_url))
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::UnexpectedStatus(status));
        }

        Ok(response.json::<SubmitAck>().await?)
    }

    /// GET the caller's leave history, newest first as the server orders it.
    pub async fn my_requests(&self) -> Result<Vec<LeaveHistoryEntry>, ApiError> {
        let response = self
            .http
            .get(format!("{}/api/leave/my-requests", self.base_url))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::UnexpectedStatus(status));
        }

        let payload = response.json::<HistoryPayload>().await?;
        Ok(payload.leaves)
    }

    /// The per-id download endpoint; the original navigated the page here.
    pub fn certificate_url(&self, id: i64) -> String {
        format!("{}/api/leave/download-certificate/{}", self.base_url, id)
    }

    pub async fn download_certificate(&self, id: i64) -> Result<Vec<u8>, ApiError> {
        let response = self.http.get(self.certificate_url(id)).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::UnexpectedStatus(status));
        }

        Ok(response.bytes().await?.to_vec())
    }
}
