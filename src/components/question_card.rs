//! One question card: upvote control, toggles, response list, draft input.
//!
//! DESIGN
//! ======
//! The card renders through a single path parameterized by the question's
//! interaction record: the response list and the draft input row are gated
//! by independent `Show` blocks, so the input appears in exactly one place
//! whether or not responses are expanded.

#[cfg(test)]
#[path = "question_card_test.rs"]
mod question_card_test;

use leptos::prelude::*;

use crate::state::board::{BoardState, QuestionId, Response};
use crate::state::ui::{Notice, UiState};

/// Label for the response visibility toggle, always carrying the count.
fn responses_toggle_label(visible: bool, count: usize) -> String {
    if visible {
        format!("Hide Responses ({count})")
    } else {
        format!("Show Responses ({count})")
    }
}

/// A single question card. Reads and mutates the shared board through
/// context; `id` must name a seeded question.
#[component]
pub fn QuestionCard(id: QuestionId) -> impl IntoView {
    let board = expect_context::<RwSignal<BoardState>>();

    // Content is immutable after seeding; capture it once.
    let content = board.with_untracked(|b| {
        b.question(id).map_or_else(String::new, |q| q.content.clone())
    });

    let votes = move || board.get().question(id).map_or(0, |q| q.votes);
    let has_upvoted = move || board.get().has_upvoted(id);
    let response_count = move || board.get().question(id).map_or(0, |q| q.responses.len());
    let responses = move || {
        board.get().question(id).map_or_else(Vec::new, |q| q.responses.clone())
    };

    let on_upvote = move |_| {
        board.update(|b| {
            if b.upvote(id) {
                log::debug!("upvoted question {id}");
            }
        });
    };

    view! {
        <div class="question-card">
            <div class="question-card__vote">
                <button
                    class="btn question-card__upvote"
                    class:question-card__upvote--spent=has_upvoted
                    disabled=has_upvoted
                    on:click=on_upvote
                >
                    "↑ "
                    <span class="question-card__votes">{votes}</span>
                </button>
            </div>
            <div class="question-card__body">
                <p class="question-card__content">{content}</p>
                <div class="question-card__actions">
                    <button
                        class="btn btn--link"
                        on:click=move |_| board.update(|b| b.toggle_input(id))
                    >
                        "Respond"
                    </button>
                    <button
                        class="btn btn--link"
                        disabled=move || response_count() == 0
                        on:click=move |_| board.update(|b| b.toggle_responses(id))
                    >
                        {move || responses_toggle_label(board.get().responses_visible(id), response_count())}
                    </button>
                </div>
                <Show when=move || board.get().responses_visible(id)>
                    <div class="question-card__responses">
                        {move || {
                            responses()
                                .into_iter()
                                .map(|r| view! { <ResponseItem response=r/> })
                                .collect::<Vec<_>>()
                        }}
                    </div>
                </Show>
                <Show when=move || board.get().input_visible(id)>
                    <ResponseInput id=id/>
                </Show>
            </div>
        </div>
    }
}

/// One response row: avatar image plus reply text.
#[component]
fn ResponseItem(response: Response) -> impl IntoView {
    view! {
        <div class="question-card__response">
            <img class="question-card__avatar" src=response.avatar alt="Avatar"/>
            <p class="question-card__response-text">{response.text}</p>
        </div>
    }
}

/// Draft input row for a question. Submit surfaces the typed text in an
/// acknowledgment notice and clears the draft; it never appends to the
/// response list and leaves the row open.
#[component]
fn ResponseInput(id: QuestionId) -> impl IntoView {
    let board = expect_context::<RwSignal<BoardState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let input_ref = NodeRef::<leptos::html::Input>::new();

    let submit = Callback::new(move |()| {
        let mut text = String::new();
        board.update(|b| text = b.submit_draft(id));
        log::debug!("submitted draft for question {id}");
        ui.update(|u| u.notice = Some(Notice::ResponseSubmitted { question_id: id, text }));
    });

    // Focus the field when the row is revealed.
    #[cfg(feature = "csr")]
    Effect::new(move || {
        if let Some(el) = input_ref.get() {
            let _ = el.focus();
        }
    });

    view! {
        <div class="question-card__input-row">
            <input
                class="question-card__input"
                type="text"
                placeholder="Write a response..."
                node_ref=input_ref
                prop:value=move || board.get().draft(id)
                on:input=move |ev| {
                    board.update(|b| b.set_draft(id, event_target_value(&ev)));
                }
                on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                    if ev.key() == "Enter" {
                        ev.prevent_default();
                        submit.run(());
                    }
                }
            />
            <button class="btn btn--primary" on:click=move |_| submit.run(())>
                "Submit"
            </button>
        </div>
    }
}
