//! Camera-driven face enrollment.
//!
//! # Design
//! - Capture timing and the phase narrative live in `core::enrollment`; this
//!   module only owns the camera, canvas and timers.

#[cfg(target_arch = "wasm32")]
pub mod view;
