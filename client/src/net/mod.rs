//! HTTP access to the MediData API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `http` owns URL building, bearer headers and error decoding; the resource
//! modules (`auth`, `requests`, `providers`, `profile`, `favorites`, `chat`)
//! expose one async function per endpoint. `types` holds the wire schema.

pub mod auth;
pub mod chat;
pub mod favorites;
pub mod http;
pub mod profile;
pub mod providers;
pub mod requests;
pub mod types;

pub use http::ApiError;
