use super::*;

#[test]
fn toggle_label_shows_count_when_hidden() {
    assert_eq!(responses_toggle_label(false, 2), "Show Responses (2)");
    assert_eq!(responses_toggle_label(false, 0), "Show Responses (0)");
}

#[test]
fn toggle_label_flips_verb_when_visible() {
    assert_eq!(responses_toggle_label(true, 1), "Hide Responses (1)");
}
