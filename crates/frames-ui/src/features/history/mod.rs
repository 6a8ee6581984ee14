//! Student attendance history and personal report export.
//!
//! # Design
//! - Logs are fetched once per visit, mapped to subjects against the weekly schedule.
//! - The report form builds a `HistoryQuery`; the table and the export share it.

pub mod logic;
#[cfg(target_arch = "wasm32")]
pub mod view;
