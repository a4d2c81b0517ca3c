//! Board state: seeded questions plus per-question interaction records.
//!
//! SYSTEM CONTEXT
//! ==============
//! This model is the single source of truth for the widget. Questions are
//! immutable after seeding except for their vote counts; everything a user
//! can flip or type lives in one [`QuestionUi`] record per question, keyed
//! by id in an ordered map so iteration order is stable and every key is
//! guaranteed to name an existing question.

#[cfg(test)]
#[path = "board_test.rs"]
mod board_test;

use std::collections::BTreeMap;

use crate::util::avatar;

/// Stable identifier for a question. Unique within the board.
pub type QuestionId = u32;

/// A discussion prompt with a vote count and zero or more responses.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Question {
    pub id: QuestionId,
    pub content: String,
    pub votes: u32,
    pub responses: Vec<Response>,
}

/// A text reply to a question, paired with a placeholder avatar URL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Response {
    pub text: String,
    pub avatar: String,
}

/// Per-question interaction record: upvote latch, visibility flags, and the
/// uncommitted draft response text.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QuestionUi {
    /// Latched on the first successful upvote; further upvotes are no-ops.
    pub has_upvoted: bool,
    /// Whether the response list is expanded.
    pub responses_visible: bool,
    /// Whether the draft input row is shown. Independent of
    /// `responses_visible`.
    pub input_visible: bool,
    /// Uncommitted response text; cleared on submit.
    pub draft: String,
}

/// The whole board: ordered questions plus one interaction record each.
///
/// `ui` is populated at seed time with exactly one entry per question, so
/// a key can never name a question that does not exist. Mutators look up
/// by id and silently no-op on unknown identifiers.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BoardState {
    pub questions: Vec<Question>,
    pub ui: BTreeMap<QuestionId, QuestionUi>,
}

impl BoardState {
    /// Build a board from a fixed question list, creating one interaction
    /// record per question.
    pub fn new(questions: Vec<Question>) -> Self {
        let ui = questions.iter().map(|q| (q.id, QuestionUi::default())).collect();
        Self { questions, ui }
    }

    /// The fixed seed board shown at mount.
    pub fn seeded() -> Self {
        Self::new(seed_questions())
    }

    /// Look up a question by id.
    pub fn question(&self, id: QuestionId) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == id)
    }

    /// Upvote a question. At most one upvote per question per session:
    /// returns `true` and increments the vote count only on the first call
    /// for a given id; repeat calls and unknown ids change nothing.
    pub fn upvote(&mut self, id: QuestionId) -> bool {
        let Some(record) = self.ui.get_mut(&id) else {
            return false;
        };
        if record.has_upvoted {
            return false;
        }
        record.has_upvoted = true;
        if let Some(question) = self.questions.iter_mut().find(|q| q.id == id) {
            question.votes += 1;
        }
        true
    }

    /// Flip response-list visibility. Questions with zero responses have
    /// nothing to reveal, so the toggle is a guarded no-op for them (the
    /// control is also rendered disabled).
    pub fn toggle_responses(&mut self, id: QuestionId) {
        let has_responses = self.question(id).is_some_and(|q| !q.responses.is_empty());
        if !has_responses {
            return;
        }
        if let Some(record) = self.ui.get_mut(&id) {
            record.responses_visible = !record.responses_visible;
        }
    }

    /// Flip draft-input visibility. Unconditional for known ids.
    pub fn toggle_input(&mut self, id: QuestionId) {
        if let Some(record) = self.ui.get_mut(&id) {
            record.input_visible = !record.input_visible;
        }
    }

    /// Overwrite the draft text for a question. No validation.
    pub fn set_draft(&mut self, id: QuestionId, text: String) {
        if let Some(record) = self.ui.get_mut(&id) {
            record.draft = text;
        }
    }

    /// Take the current draft text, leaving it empty.
    ///
    /// Deliberately does not append a [`Response`] and does not close the
    /// input row: submitting only surfaces the typed text through the
    /// caller's acknowledgment path.
    pub fn submit_draft(&mut self, id: QuestionId) -> String {
        self.ui
            .get_mut(&id)
            .map(|record| std::mem::take(&mut record.draft))
            .unwrap_or_default()
    }

    /// Whether the user has already upvoted this question.
    pub fn has_upvoted(&self, id: QuestionId) -> bool {
        self.ui.get(&id).is_some_and(|r| r.has_upvoted)
    }

    /// Whether the response list is currently expanded.
    pub fn responses_visible(&self, id: QuestionId) -> bool {
        self.ui.get(&id).is_some_and(|r| r.responses_visible)
    }

    /// Whether the draft input row is currently shown.
    pub fn input_visible(&self, id: QuestionId) -> bool {
        self.ui.get(&id).is_some_and(|r| r.input_visible)
    }

    /// The current draft text (empty string if none typed yet).
    pub fn draft(&self, id: QuestionId) -> String {
        self.ui.get(&id).map(|r| r.draft.clone()).unwrap_or_default()
    }
}

fn response(text: &str) -> Response {
    Response { text: text.to_owned(), avatar: avatar::placeholder_url() }
}

/// The fixed "Leaning In: Unconscious Bias" discussion seed.
fn seed_questions() -> Vec<Question> {
    vec![
        Question {
            id: 1,
            content: "What happens if unconscious bias is not addressed within a team?".to_owned(),
            votes: 0,
            responses: Vec::new(),
        },
        Question {
            id: 2,
            content: "Tell me more about how unconscious bias affects decision-making?".to_owned(),
            votes: 0,
            responses: vec![
                response(
                    "Unconscious bias can skew our perception, leading to decisions that may not \
                     be based on objective criteria but on preconceived notions or stereotypes. \
                     This can impact hiring, promotions, and daily interactions, limiting \
                     opportunities for diverse talents.",
                ),
                response(
                    "It can cause us to make assumptions or draw conclusions quickly without \
                     considering all the facts or perspectives. Recognizing and challenging these \
                     biases can lead to more deliberate, fair, and inclusive decision-making \
                     processes.",
                ),
            ],
        },
        Question {
            id: 3,
            content: "How can we create safe spaces for discussing unconscious bias?".to_owned(),
            votes: 0,
            responses: vec![response(
                "Creating safe spaces starts with fostering an environment of trust and openness, \
                 where team members feel comfortable sharing their experiences and perspectives \
                 without fear of judgment or retribution. Active listening and empathy are key.",
            )],
        },
        Question {
            id: 4,
            content: "What role does leadership play in addressing unconscious bias?".to_owned(),
            votes: 0,
            responses: vec![
                response(
                    "Leadership is crucial in setting the tone for an inclusive culture. By \
                     acknowledging their own biases and leading by example, leaders can inspire \
                     their teams to do the same and implement strategies to mitigate bias across \
                     the organization.",
                ),
                response(
                    "Leaders must actively support diversity and inclusion initiatives, provide \
                     resources for continuous learning, and ensure that policies and procedures \
                     are in place to address bias and foster an environment of equality and \
                     respect.",
                ),
            ],
        },
        Question {
            id: 5,
            content: "Can unconscious bias training really make a difference?".to_owned(),
            votes: 0,
            responses: Vec::new(),
        },
    ]
}
