//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read the `SessionService` from Leptos context and render
//! shared chrome (header, route guards) and page building blocks.

pub mod care_assistant;
pub mod header;
pub mod provider_card;
pub mod route_guard;
