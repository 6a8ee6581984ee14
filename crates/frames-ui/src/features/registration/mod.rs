//! Registration wizard and post-registration status pages.

#[cfg(target_arch = "wasm32")]
pub mod status;
#[cfg(target_arch = "wasm32")]
pub mod view;
