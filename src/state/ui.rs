//! Transient UI chrome state: the pending acknowledgment notice.
//!
//! DESIGN
//! ======
//! Keeping the notice out of `board` lets domain operations stay pure value
//! transitions while the dialog layer owns presentation concerns.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use crate::state::board::QuestionId;

/// A modal-style acknowledgment awaiting dismissal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Notice {
    /// Draft text was submitted for a question.
    ResponseSubmitted { question_id: QuestionId, text: String },
    /// The "Ask a Question" stub was invoked.
    AskQuestionComingSoon,
}

impl Notice {
    /// Human-readable dialog body for this notice.
    pub fn message(&self) -> String {
        match self {
            Self::ResponseSubmitted { question_id, text } => {
                format!("Response for question {question_id}: \"{text}\"")
            }
            Self::AskQuestionComingSoon => "Feature to ask a new question coming soon!".to_owned(),
        }
    }
}

/// UI state shared across the page: at most one notice is open at a time.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub notice: Option<Notice>,
}
