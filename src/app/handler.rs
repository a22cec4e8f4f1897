use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::state::*;
use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => {
            state.dirty = true;
            handle_terminal(state, cevent)
        }
        AppEvent::Outcome {
            submission_id,
            outcome,
        } => {
            if state.accept_outcome(submission_id) {
                state.render_outcome(&outcome);
            } else {
                tracing::debug!(submission_id, "discarding stale outcome");
            }
            state.dirty = true;
            vec![]
        }
        AppEvent::Tick => {
            state.tick_count = state.tick_count.wrapping_add(1);
            // Spinner animation only needs redraws while a request is out
            if state.is_submitting() {
                state.dirty = true;
            }
            vec![]
        }
    }
}

fn handle_terminal(state: &mut AppState, event: CEvent) -> Vec<Action> {
    match event {
        CEvent::Key(key) => handle_key(state, key),
        CEvent::Resize(_, _) => vec![],
        _ => vec![],
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    if key.kind == KeyEventKind::Release {
        return vec![];
    }

    state.status_message = None;

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        if let KeyCode::Char('c') = key.code {
            return vec![Action::Quit];
        }
    }

    match key.code {
        KeyCode::Esc => vec![Action::Quit],
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
            state.cycle_focus();
            vec![]
        }
        KeyCode::Enter => submit(state),
        KeyCode::Char(c) => {
            state.focused_field_mut().insert_char(c);
            vec![]
        }
        KeyCode::Backspace => {
            state.focused_field_mut().delete_back();
            vec![]
        }
        KeyCode::Delete => {
            state.focused_field_mut().delete_forward();
            vec![]
        }
        KeyCode::Left => {
            state.focused_field_mut().move_left();
            vec![]
        }
        KeyCode::Right => {
            state.focused_field_mut().move_right();
            vec![]
        }
        KeyCode::Home => {
            state.focused_field_mut().move_home();
            vec![]
        }
        KeyCode::End => {
            state.focused_field_mut().move_end();
            vec![]
        }
        _ => vec![],
    }
}

/// Collect, validate, and dispatch the form. One submission at a time: Enter
/// is refused while a request is out, so responses cannot race for the
/// result panel.
fn submit(state: &mut AppState) -> Vec<Action> {
    if state.is_submitting() {
        state.status_message = Some("A submission is already in flight".to_string());
        return vec![];
    }

    let payload = state.collect_payload();
    if let Err(reason) = payload.validate() {
        state.render_invalid(&reason);
        return vec![];
    }

    let submission_id = state.allocate_submission_id();
    state.in_flight = Some(submission_id);
    tracing::info!(submission_id, age = payload.age, gender = %payload.gender, "submitting");
    vec![Action::Submit {
        submission_id,
        payload,
    }]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::predict::outcome::{ErrorBody, Outcome};
    use crossterm::event::KeyEventState;

    fn state() -> AppState {
        AppState::new(AppConfig::default())
    }

    fn press(state: &mut AppState, code: KeyCode) -> Vec<Action> {
        let key = KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        };
        handle_event(state, AppEvent::Terminal(CEvent::Key(key)))
    }

    fn type_text(state: &mut AppState, text: &str) {
        for c in text.chars() {
            press(state, KeyCode::Char(c));
        }
    }

    fn fill_valid_form(state: &mut AppState) {
        type_text(state, "42");
        press(state, KeyCode::Tab);
        type_text(state, "female");
    }

    #[test]
    fn test_enter_dispatches_valid_form() {
        let mut s = state();
        fill_valid_form(&mut s);
        let actions = press(&mut s, KeyCode::Enter);
        match actions.as_slice() {
            [Action::Submit {
                submission_id,
                payload,
            }] => {
                assert_eq!(*submission_id, 1);
                assert_eq!(payload.age, 42.0);
                assert_eq!(payload.gender, "female");
            }
            other => panic!("unexpected actions: {:?}", other),
        }
        assert!(s.is_submitting());
    }

    #[test]
    fn test_enter_refused_while_in_flight() {
        let mut s = state();
        fill_valid_form(&mut s);
        assert_eq!(press(&mut s, KeyCode::Enter).len(), 1);
        // Second Enter while the first request is still out
        assert!(press(&mut s, KeyCode::Enter).is_empty());
        assert!(s.status_message.is_some());
    }

    #[test]
    fn test_non_numeric_age_renders_validation_without_dispatch() {
        let mut s = state();
        type_text(&mut s, "abc");
        press(&mut s, KeyCode::Tab);
        type_text(&mut s, "male");
        let actions = press(&mut s, KeyCode::Enter);
        assert!(actions.is_empty());
        assert_eq!(
            s.surface.line.as_deref(),
            Some("Invalid input: age must be a number")
        );
        assert!(!s.is_submitting());
    }

    #[test]
    fn test_empty_gender_renders_validation_without_dispatch() {
        let mut s = state();
        type_text(&mut s, "30");
        let actions = press(&mut s, KeyCode::Enter);
        assert!(actions.is_empty());
        assert_eq!(
            s.surface.line.as_deref(),
            Some("Invalid input: gender must not be empty")
        );
    }

    #[test]
    fn test_fresh_outcome_renders_and_clears_in_flight() {
        let mut s = state();
        fill_valid_form(&mut s);
        press(&mut s, KeyCode::Enter);

        let outcome = Outcome::ServerError(ErrorBody {
            detail: Some("invalid gender".into()),
            error: None,
        });
        handle_event(
            &mut s,
            AppEvent::Outcome {
                submission_id: 1,
                outcome,
            },
        );
        assert_eq!(s.surface.line.as_deref(), Some("Error: invalid gender"));
        assert!(!s.is_submitting());
    }

    #[test]
    fn test_stale_outcome_does_not_touch_surface() {
        let mut s = state();
        fill_valid_form(&mut s);
        press(&mut s, KeyCode::Enter);
        s.accept_outcome(1);

        // A second cycle supersedes the first
        press(&mut s, KeyCode::Enter);
        handle_event(
            &mut s,
            AppEvent::Outcome {
                submission_id: 1,
                outcome: Outcome::TransportError("late".into()),
            },
        );
        assert_eq!(s.surface.line, None);

        handle_event(
            &mut s,
            AppEvent::Outcome {
                submission_id: 2,
                outcome: Outcome::TransportError("fetch failed".into()),
            },
        );
        assert_eq!(
            s.surface.line.as_deref(),
            Some("Network/error: fetch failed")
        );
    }

    #[test]
    fn test_resubmission_after_completion_gets_new_id() {
        let mut s = state();
        fill_valid_form(&mut s);
        press(&mut s, KeyCode::Enter);
        handle_event(
            &mut s,
            AppEvent::Outcome {
                submission_id: 1,
                outcome: Outcome::TransportError("fetch failed".into()),
            },
        );

        let actions = press(&mut s, KeyCode::Enter);
        match actions.as_slice() {
            [Action::Submit { submission_id, .. }] => assert_eq!(*submission_id, 2),
            other => panic!("unexpected actions: {:?}", other),
        }
    }

    #[test]
    fn test_esc_quits() {
        let mut s = state();
        let actions = press(&mut s, KeyCode::Esc);
        assert!(matches!(actions.as_slice(), [Action::Quit]));
    }
}
