//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`board` for questions and per-question
//! interaction records, `ui` for transient chrome like the notice dialog)
//! so components can depend on small focused models.

pub mod board;
pub mod ui;
