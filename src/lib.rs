//! # askboard
//!
//! Leptos + WASM client for a question-and-answer discussion board widget.
//! Users upvote questions (once each), expand and collapse threaded text
//! responses, and draft response text held only in local component state.
//!
//! There is no server, no persistence, and no network layer: the board is
//! seeded at mount and every interaction is a synchronous local state
//! transition. Rendering is a pure function of the signal state.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;
