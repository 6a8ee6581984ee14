//! Core, DOM-free primitives and helpers for the Web UI.
pub mod config;
pub mod enrollment;
pub mod errors;
pub mod live_status;
pub mod nav;
pub mod notifications;
pub mod session;
pub mod store;
pub mod wizard;
