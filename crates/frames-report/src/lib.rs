#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]

//! Report building and export for FRAMES.
//!
//! Layout:
//! - `table.rs`: ordered report rows and the column-fixed table view
//! - `info.rs`: report header descriptor, category context, formats, file names
//! - `csv.rs` / `pdf/`: renderers
//! - `export.rs`: format dispatch producing a named byte payload
//! - `filter.rs` / `directory.rs`: client-side search and role/status filters
//! - `history.rs`: attendance history windows and subject mapping
//! - `rows.rs`: API DTO to report row builders
//!
//! Nothing here touches the DOM or the network, so the browser app and the
//! CLI share one implementation and it is tested natively.

pub mod csv;
pub mod directory;
pub mod error;
pub mod export;
pub mod filter;
pub mod history;
pub mod info;
pub mod pdf;
pub mod rows;
pub mod table;

pub use csv::render_csv;
pub use directory::{FaceStatus, RoleCounts, UserListing};
pub use error::{ReportError, ReportResult};
pub use export::{ExportedReport, export};
pub use filter::{DirectoryFilter, RoleFilter, StatusFilter, VerificationFilter, matches_search};
pub use history::{HistoryQuery, HistoryReportKind, MappedLog, Semester};
pub use info::{ReportCategory, ReportFormat, ReportInfo, file_name, generated_label};
pub use pdf::render_pdf;
pub use table::{ReportRow, ReportTable, header_label};
