use crate::app::event::SubmissionId;
use crate::config::AppConfig;
use crate::predict::outcome::Outcome;
use crate::predict::payload::SubmissionPayload;
use chrono::Local;

/// Which rendering path produced the current result line. Drives the panel
/// color only; the text itself is final.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ResultKind {
    Success,
    ServerError,
    TransportError,
    TimedOut,
    Invalid,
}

/// The single region showing the latest outcome. Each new line fully
/// replaces the previous one; there is no history.
#[derive(Debug, Default)]
pub struct DisplaySurface {
    pub line: Option<String>,
    pub kind: Option<ResultKind>,
    pub timestamp: Option<String>,
}

impl DisplaySurface {
    pub fn set(&mut self, line: String, kind: ResultKind, timestamp: String) {
        self.line = Some(line);
        self.kind = Some(kind);
        self.timestamp = Some(timestamp);
    }
}

/// One editable form field with cursor editing.
#[derive(Debug, Default)]
pub struct FieldState {
    pub text: String,
    pub cursor: usize,
}

impl FieldState {
    pub fn insert_char(&mut self, c: char) {
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn delete_back(&mut self) {
        if self.cursor > 0 {
            let prev = self.text[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
            self.text.drain(prev..self.cursor);
            self.cursor = prev;
        }
    }

    pub fn delete_forward(&mut self) {
        if self.cursor < self.text.len() {
            let next = self.text[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.text.len());
            self.text.drain(self.cursor..next);
        }
    }

    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor = self.text[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
        }
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.text.len() {
            self.cursor = self.text[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.text.len());
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.text.len();
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FocusField {
    Age,
    Gender,
}

pub struct AppState {
    pub config: AppConfig,
    pub age: FieldState,
    pub gender: FieldState,
    pub focus: FocusField,
    pub surface: DisplaySurface,
    pub in_flight: Option<SubmissionId>,
    pub should_quit: bool,
    pub dirty: bool,
    pub tick_count: u64,
    pub status_message: Option<String>,
    next_submission_id: SubmissionId,
    latest_submission_id: Option<SubmissionId>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            age: FieldState::default(),
            gender: FieldState::default(),
            focus: FocusField::Age,
            surface: DisplaySurface::default(),
            in_flight: None,
            should_quit: false,
            dirty: true,
            tick_count: 0,
            status_message: None,
            next_submission_id: 0,
            latest_submission_id: None,
        }
    }

    pub fn allocate_submission_id(&mut self) -> SubmissionId {
        self.next_submission_id += 1;
        self.latest_submission_id = Some(self.next_submission_id);
        self.next_submission_id
    }

    /// True when `id` is the latest issued submission. Also clears the
    /// in-flight marker so the form accepts input again.
    pub fn accept_outcome(&mut self, id: SubmissionId) -> bool {
        if self.in_flight == Some(id) {
            self.in_flight = None;
        }
        self.latest_submission_id == Some(id)
    }

    pub fn is_submitting(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn focused_field_mut(&mut self) -> &mut FieldState {
        match self.focus {
            FocusField::Age => &mut self.age,
            FocusField::Gender => &mut self.gender,
        }
    }

    pub fn cycle_focus(&mut self) {
        self.focus = match self.focus {
            FocusField::Age => FocusField::Gender,
            FocusField::Gender => FocusField::Age,
        };
    }

    /// Read the current field values into a fresh payload.
    pub fn collect_payload(&self) -> SubmissionPayload {
        SubmissionPayload::collect(&self.age.text, &self.gender.text)
    }

    pub fn render_outcome(&mut self, outcome: &Outcome) {
        let kind = match outcome {
            Outcome::Success(_) => ResultKind::Success,
            Outcome::ServerError(_) => ResultKind::ServerError,
            Outcome::TransportError(_) => ResultKind::TransportError,
            Outcome::TimedOut { .. } => ResultKind::TimedOut,
        };
        let line = outcome.display_line();
        self.surface.set(line, kind, self.now_timestamp());
    }

    pub fn render_invalid(&mut self, reason: &str) {
        let line = format!("Invalid input: {}", reason);
        self.surface.set(line, ResultKind::Invalid, self.now_timestamp());
    }

    fn now_timestamp(&self) -> String {
        Local::now()
            .format(&self.config.ui.timestamp_format)
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predict::outcome::PredictionResponse;
    use serde_json::json;

    fn state() -> AppState {
        AppState::new(AppConfig::default())
    }

    fn success_outcome(label: &str) -> Outcome {
        Outcome::Success(PredictionResponse {
            prediction: json!(label),
            probability: None,
        })
    }

    #[test]
    fn test_submission_ids_increase() {
        let mut s = state();
        assert_eq!(s.allocate_submission_id(), 1);
        assert_eq!(s.allocate_submission_id(), 2);
        assert_eq!(s.allocate_submission_id(), 3);
    }

    #[test]
    fn test_stale_outcome_rejected() {
        let mut s = state();
        let first = s.allocate_submission_id();
        let second = s.allocate_submission_id();
        assert!(!s.accept_outcome(first));
        assert!(s.accept_outcome(second));
    }

    #[test]
    fn test_accept_outcome_clears_in_flight() {
        let mut s = state();
        let id = s.allocate_submission_id();
        s.in_flight = Some(id);
        assert!(s.accept_outcome(id));
        assert!(!s.is_submitting());
    }

    #[test]
    fn test_surface_overwrites() {
        let mut s = state();
        s.render_outcome(&success_outcome("low-risk"));
        assert_eq!(s.surface.line.as_deref(), Some("Prediction: low-risk"));

        s.render_outcome(&success_outcome("high-risk"));
        assert_eq!(s.surface.line.as_deref(), Some("Prediction: high-risk"));
        assert_eq!(s.surface.kind, Some(ResultKind::Success));
    }

    #[test]
    fn test_render_invalid() {
        let mut s = state();
        s.render_invalid("age must be a number");
        assert_eq!(
            s.surface.line.as_deref(),
            Some("Invalid input: age must be a number")
        );
        assert_eq!(s.surface.kind, Some(ResultKind::Invalid));
    }

    #[test]
    fn test_cycle_focus() {
        let mut s = state();
        assert_eq!(s.focus, FocusField::Age);
        s.cycle_focus();
        assert_eq!(s.focus, FocusField::Gender);
        s.cycle_focus();
        assert_eq!(s.focus, FocusField::Age);
    }

    #[test]
    fn test_field_editing_utf8() {
        let mut f = FieldState::default();
        f.insert_char('é');
        f.insert_char('x');
        assert_eq!(f.text, "éx");
        f.move_left();
        f.move_left();
        f.delete_forward();
        assert_eq!(f.text, "x");
        f.move_end();
        f.delete_back();
        assert_eq!(f.text, "");
    }

    #[test]
    fn test_collect_payload_reads_fields() {
        let mut s = state();
        for c in "42".chars() {
            s.age.insert_char(c);
        }
        for c in "female".chars() {
            s.gender.insert_char(c);
        }
        let p = s.collect_payload();
        assert_eq!(p.age, 42.0);
        assert_eq!(p.gender, "female");
    }
}
