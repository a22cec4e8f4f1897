//! HTTP dispatch to the prediction endpoint.
//!
//! One spawned task per accepted submission. The task never returns an error
//! to the caller; every failure mode is folded into an [`Outcome`] and sent
//! back over the event channel tagged with the submission id, so the handler
//! can discard anything stale.

use crate::app::event::{AppEvent, SubmissionId};
use crate::predict::outcome::{ErrorBody, Outcome, PredictionResponse};
use crate::predict::payload::SubmissionPayload;
use anyhow::{Context, Result};
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;
use tokio::sync::mpsc;

#[derive(Debug, Error)]
enum SubmitError {
    #[error("request timed out after {0}s")]
    Timeout(u64),
    #[error("{0}")]
    Transport(String),
    #[error("invalid response body: {0}")]
    Decode(String),
}

impl SubmitError {
    fn from_reqwest(err: reqwest::Error, timeout_secs: u64) -> Self {
        if err.is_timeout() {
            SubmitError::Timeout(timeout_secs)
        } else if err.is_decode() {
            SubmitError::Decode(err.to_string())
        } else {
            SubmitError::Transport(err.to_string())
        }
    }
}

impl From<SubmitError> for Outcome {
    fn from(err: SubmitError) -> Self {
        match err {
            SubmitError::Timeout(secs) => Outcome::TimedOut { secs },
            SubmitError::Transport(msg) => Outcome::TransportError(msg),
            SubmitError::Decode(msg) => Outcome::TransportError(msg),
        }
    }
}

/// Client for the prediction endpoint. Cheap to clone into spawned tasks.
#[derive(Debug, Clone)]
pub struct PredictClient {
    http: reqwest::Client,
    predict_url: String,
    timeout_secs: u64,
    event_tx: mpsc::UnboundedSender<AppEvent>,
}

impl PredictClient {
    pub fn new(
        base_url: &str,
        predict_path: &str,
        timeout_secs: u64,
        event_tx: mpsc::UnboundedSender<AppEvent>,
    ) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .context("Failed to build HTTP client")?;
        let predict_url = format!(
            "{}/{}",
            base_url.trim_end_matches('/'),
            predict_path.trim_start_matches('/')
        );
        Ok(Self {
            http,
            predict_url,
            timeout_secs,
            event_tx,
        })
    }

    pub fn predict_url(&self) -> &str {
        &self.predict_url
    }

    /// Spawn the request for one submission. Exactly one `AppEvent::Outcome`
    /// is emitted per call (unless the channel is already closed on
    /// shutdown).
    pub fn spawn_submit(&self, submission_id: SubmissionId, payload: SubmissionPayload) {
        let client = self.clone();
        tokio::spawn(async move {
            tracing::debug!(submission_id, age = payload.age, "dispatching submission");
            let outcome = client.submit(&payload).await;
            tracing::debug!(submission_id, ?outcome, "submission resolved");
            let _ = client.event_tx.send(AppEvent::Outcome {
                submission_id,
                outcome,
            });
        });
    }

    /// POST the payload form-urlencoded and classify the response.
    ///
    /// The body is decoded as JSON before the status split, so a non-JSON
    /// body is a transport-level failure regardless of status. A non-2xx
    /// JSON body always yields a server error, even when it matches neither
    /// of the expected message fields.
    async fn submit(&self, payload: &SubmissionPayload) -> Outcome {
        let response = match self
            .http
            .post(&self.predict_url)
            .form(payload)
            .send()
            .await
        {
            Ok(r) => r,
            Err(e) => return SubmitError::from_reqwest(e, self.timeout_secs).into(),
        };

        let status = response.status();
        let body: Value = match response.json().await {
            Ok(v) => v,
            Err(e) => return SubmitError::from_reqwest(e, self.timeout_secs).into(),
        };

        if status.is_success() {
            match serde_json::from_value::<PredictionResponse>(body) {
                Ok(resp) => Outcome::Success(resp),
                Err(e) => SubmitError::Decode(e.to_string()).into(),
            }
        } else {
            let body = serde_json::from_value::<ErrorBody>(body).unwrap_or_default();
            Outcome::ServerError(body)
        }
    }
}
