use crate::predict::outcome::Outcome;
use crossterm::event::Event as CrosstermEvent;

/// Monotonically increasing token allocated at collection time. Outcomes
/// carrying anything but the latest issued id are discarded.
pub type SubmissionId = u64;

#[derive(Debug)]
pub enum AppEvent {
    /// Terminal input event
    Terminal(CrosstermEvent),

    /// A submission task resolved
    Outcome {
        submission_id: SubmissionId,
        outcome: Outcome,
    },

    /// Tick for UI refresh
    Tick,
}
