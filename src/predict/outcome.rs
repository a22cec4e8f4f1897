//! Submission outcomes and their display rendering.
//!
//! Every submission cycle terminates in exactly one [`Outcome`], and every
//! outcome renders to exactly one line of text for the result panel. The
//! result panel shows the latest line only; rendering never appends.

use serde::Deserialize;
use serde_json::Value;

/// Fallback shown when a server error body carries neither `detail` nor
/// `error`.
pub const UNKNOWN_ERROR: &str = "unknown error";

/// Successful response body from the prediction endpoint.
///
/// `prediction` is whatever JSON the model returns (string label, number,
/// structured object). `probability` may be null when the model does not
/// report one.
#[derive(Debug, Clone, Deserialize)]
pub struct PredictionResponse {
    pub prediction: Value,
    #[serde(default)]
    pub probability: Option<f64>,
}

/// Error response body from the prediction endpoint.
///
/// Both fields are optional; servers in the wild send either. `detail` wins
/// when both are present.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Terminal result of one submission cycle.
#[derive(Debug, Clone)]
pub enum Outcome {
    /// 2xx status with a decodable body.
    Success(PredictionResponse),
    /// Non-2xx status. The body is kept even when it matched neither error
    /// field.
    ServerError(ErrorBody),
    /// The request itself failed: connection refused, DNS, TLS, or a body
    /// that was not valid JSON.
    TransportError(String),
    /// The per-request deadline elapsed.
    TimedOut { secs: u64 },
}

impl Outcome {
    /// Render the single display line for this outcome.
    pub fn display_line(&self) -> String {
        match self {
            Outcome::Success(resp) => match resp.probability {
                Some(p) => format!(
                    "Prediction: {} — probability: {}%",
                    format_prediction(&resp.prediction),
                    round_percent(p)
                ),
                None => format!("Prediction: {}", format_prediction(&resp.prediction)),
            },
            Outcome::ServerError(body) => {
                let msg = body
                    .detail
                    .as_deref()
                    .or(body.error.as_deref())
                    .unwrap_or(UNKNOWN_ERROR);
                format!("Error: {}", msg)
            }
            Outcome::TransportError(msg) => format!("Network/error: {}", msg),
            Outcome::TimedOut { secs } => {
                format!("Network/error: request timed out after {}s", secs)
            }
        }
    }
}

/// Probability as a whole percentage.
///
/// Uses `f64::round`, which rounds halfway cases away from zero
/// (0.005 -> 1%, not 0%).
fn round_percent(p: f64) -> i64 {
    (p * 100.0).round() as i64
}

/// Strings render bare ("high-risk", not "\"high-risk\""); any other JSON
/// value renders as compact JSON.
fn format_prediction(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
