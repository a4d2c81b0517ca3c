use super::*;

// =============================================================
// UiState defaults
// =============================================================

#[test]
fn ui_state_default_has_no_notice() {
    let state = UiState::default();
    assert!(state.notice.is_none());
}

// =============================================================
// Notice messages
// =============================================================

#[test]
fn response_submitted_message_carries_id_and_quoted_text() {
    let notice = Notice::ResponseSubmitted { question_id: 3, text: "Great point".to_owned() };
    assert_eq!(notice.message(), "Response for question 3: \"Great point\"");
}

#[test]
fn response_submitted_message_keeps_empty_text_quoted() {
    let notice = Notice::ResponseSubmitted { question_id: 1, text: String::new() };
    assert_eq!(notice.message(), "Response for question 1: \"\"");
}

#[test]
fn ask_question_message_is_the_coming_soon_stub() {
    assert_eq!(
        Notice::AskQuestionComingSoon.message(),
        "Feature to ask a new question coming soon!"
    );
}

#[test]
fn notice_variants_are_distinct() {
    let submitted = Notice::ResponseSubmitted { question_id: 1, text: String::new() };
    assert_ne!(submitted, Notice::AskQuestionComingSoon);
}
