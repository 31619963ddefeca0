// ============================================================================
// CAMPUS MATERIALS - student resource front-end (Yew + WASM)
// ============================================================================
// - components: Yew pages and dialogs
// - hooks: context providers, per-view fetch, toasts, theme
// - viewmodels: pure state transitions behind the pages
// - services: REST access, session, uploads (plain Rust, host-testable)
// - state: shared session state, fetch state, cancellation
// - models: wire records
// ============================================================================

pub mod components;
pub mod config;
pub mod error;
pub mod hooks;
pub mod models;
pub mod router;
pub mod services;
pub mod state;
pub mod utils;
pub mod viewmodels;

pub use error::{AppError, AppResult};
