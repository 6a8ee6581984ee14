//! Faculty dashboard and class list with per-class attendance reports.

pub mod logic;
#[cfg(target_arch = "wasm32")]
pub mod classes;
#[cfg(target_arch = "wasm32")]
pub mod dashboard;
