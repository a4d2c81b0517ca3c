//! Root application component and context providers.
//!
//! DESIGN
//! ======
//! All shared state lives in `RwSignal` containers provided via context so
//! cards and dialogs read/write the same board without prop drilling. The
//! widget is a single screen; there is no router.

use leptos::prelude::*;

use crate::pages::board::BoardPage;
use crate::state::board::BoardState;
use crate::state::ui::UiState;

/// Root application component.
///
/// Seeds the board, provides the reactive state contexts, and renders the
/// one and only page.
#[component]
pub fn App() -> impl IntoView {
    let board = RwSignal::new(BoardState::seeded());
    let ui = RwSignal::new(UiState::default());

    provide_context(board);
    provide_context(ui);

    apply_document_title("Leaning In: Unconscious Bias");

    view! { <BoardPage/> }
}

/// Set the document title. Requires a browser environment; no-ops on the
/// host so tests stay deterministic.
fn apply_document_title(title: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            doc.set_title(title);
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = title;
    }
}
