//! Student dashboard and weekly schedule.
//!
//! # Design
//! - The dashboard polls the history endpoint for the live status card.
//! - Schedule grouping is pure so it is tested natively.

pub mod logic;
#[cfg(target_arch = "wasm32")]
pub mod dashboard;
#[cfg(target_arch = "wasm32")]
pub mod schedule;
