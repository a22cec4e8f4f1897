use crate::app::event::SubmissionId;
use crate::predict::payload::SubmissionPayload;

#[derive(Debug)]
pub enum Action {
    Submit { submission_id: SubmissionId, payload: SubmissionPayload },
    Quit,
}
