//! Shared client-side UI state helpers.
//!
//! DESIGN
//! ======
//! Persisted session data lives in `crate::session`. This module adapts it
//! to Leptos signals (`session`) and holds small per-form concerns shared by
//! several pages (`submit`).

pub mod session;
pub mod submit;
