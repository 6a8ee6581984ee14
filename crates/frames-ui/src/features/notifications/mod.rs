//! Full notification list.

#[cfg(target_arch = "wasm32")]
pub mod view;
