//! Department head pages: overview, user management and department reports.
//!
//! # Design
//! - User management reuses the shared directory and verification filters.
//! - Approve, reject and delete re-fetch the listing on success.
//! - Directory names open a summary with the account's class timetable.

pub mod logic;
#[cfg(target_arch = "wasm32")]
pub mod dashboard;
#[cfg(target_arch = "wasm32")]
pub mod reports;
#[cfg(target_arch = "wasm32")]
pub mod summary;
#[cfg(target_arch = "wasm32")]
pub mod users;
