//! Modal acknowledgment dialog for submit and ask-a-question notices.

use leptos::prelude::*;

use crate::state::ui::UiState;

/// Renders the pending [`crate::state::ui::Notice`], if any, as a blocking
/// dialog. Backdrop click or the OK button dismisses it.
#[component]
pub fn NoticeModal() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let dismiss = Callback::new(move |()| ui.update(|u| u.notice = None));

    view! {
        <Show when=move || ui.get().notice.is_some()>
            <div class="dialog-backdrop" on:click=move |_| dismiss.run(())>
                <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                    <p class="dialog__message">
                        {move || ui.get().notice.map_or_else(String::new, |n| n.message())}
                    </p>
                    <div class="dialog__actions">
                        <button class="btn btn--primary" on:click=move |_| dismiss.run(())>
                            "OK"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
