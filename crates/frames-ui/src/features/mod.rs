//! Feature slices, one per page group.
//!
//! Views compile for wasm32 only; `logic` modules hold the DOM-free parts.

pub mod admin;
pub mod dept_head;
pub mod enrollment;
pub mod faculty;
pub mod history;
pub mod landing;
pub mod notifications;
pub mod profile;
pub mod registration;
pub mod student;
