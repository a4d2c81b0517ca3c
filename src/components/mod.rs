//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the question cards and the acknowledgment dialog while
//! reading/writing shared state from Leptos context providers.

pub mod notice_modal;
pub mod question_card;
