//! Profile editing and password change.
//!
//! # Design
//! - Only changed fields are sent; an untouched form issues no request.
//! - Password change is two steps: verify the current password, then choose a new one.

pub mod logic;
#[cfg(target_arch = "wasm32")]
pub mod view;
