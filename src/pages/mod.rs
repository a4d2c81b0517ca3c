//! Page modules for screen-level layout.
//!
//! ARCHITECTURE
//! ============
//! The widget has a single screen; `board` owns page-level orchestration and
//! delegates rendering details to `components`.

pub mod board;
