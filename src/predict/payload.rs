//! Payload collection and pre-dispatch validation.

use serde::Serialize;

/// The form values sent to the prediction endpoint, built fresh per
/// submission.
///
/// Serializes to `application/x-www-form-urlencoded` keys `age` and `gender`.
#[derive(Debug, Clone, Serialize)]
pub struct SubmissionPayload {
    pub age: f64,
    pub gender: String,
}

impl SubmissionPayload {
    /// Build a payload from raw field text.
    ///
    /// Age coercion never fails: non-numeric text becomes NaN, which the
    /// validation step rejects before anything reaches the wire.
    pub fn collect(age_text: &str, gender_text: &str) -> Self {
        let age = age_text.trim().parse::<f64>().unwrap_or(f64::NAN);
        Self {
            age,
            gender: gender_text.trim().to_string(),
        }
    }

    /// Check the payload before dispatch. Returns the message to show in the
    /// result panel when the input is unusable.
    pub fn validate(&self) -> Result<(), String> {
        if !self.age.is_finite() {
            return Err("age must be a number".to_string());
        }
        if self.age < 0.0 {
            return Err("age must not be negative".to_string());
        }
        if self.gender.is_empty() {
            return Err("gender must not be empty".to_string());
        }
        Ok(())
    }
}
