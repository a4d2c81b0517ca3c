//! The question board page: header, card list, and the ask-a-question stub.

use leptos::prelude::*;

use crate::components::notice_modal::NoticeModal;
use crate::components::question_card::QuestionCard;
use crate::state::board::{BoardState, QuestionId};
use crate::state::ui::{Notice, UiState};

/// The sole page. Renders every seeded question as a card and hosts the
/// floating "Ask a Question" button plus the notice dialog.
#[component]
pub fn BoardPage() -> impl IntoView {
    let board = expect_context::<RwSignal<BoardState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    // The question set is fixed for the session; only per-question fields
    // change, so the card list itself is rendered once.
    let ids: Vec<QuestionId> =
        board.with_untracked(|b| b.questions.iter().map(|q| q.id).collect());

    let on_ask = move |_| {
        log::debug!("ask-a-question stub invoked");
        ui.update(|u| u.notice = Some(Notice::AskQuestionComingSoon));
    };

    view! {
        <div class="board-page">
            <h1 class="board-page__title">"Leaning In: Unconscious Bias"</h1>
            <div class="board-page__cards">
                {ids.into_iter().map(|id| view! { <QuestionCard id=id/> }).collect::<Vec<_>>()}
            </div>
            <button class="btn board-page__ask" on:click=on_ask>
                "Ask a Question"
            </button>
            <NoticeModal/>
        </div>
    }
}
