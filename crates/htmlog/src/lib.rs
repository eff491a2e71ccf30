//! # htmlog
//!
//! Leveled structured logging into a single HTML document.
//!
//! This crate provides:
//!
//! - [`HtmlLog`] — The document writer: severity filtering, table cursor,
//!   validity tracking
//! - [`OutputLevel`] — Severity levels (Error, Critical, Warning,
//!   Information, All)
//! - [`Element`] — The structural element kinds a document is built from
//! - [`RenderSink`] — Abstract trait for rendering/persistence backends
//! - [`HtmlRenderer`] — File-backed HTML rendering engine
//!
//! Write requests carry a severity level; a request is persisted only when
//! its level is at least as severe as the document's configured threshold.
//! After construction the facility is fail-soft: write failures mark the
//! document invalid and silently disable further writes instead of erroring
//! into the host workload.
//!
//! ## Example
//!
//! ```no_run
//! use htmlog::{HtmlLog, OutputLevel};
//!
//! # fn main() -> htmlog::Result<()> {
//! let log = HtmlLog::open("report.html", "Import Report")?;
//!
//! log.write_heading("Source files", OutputLevel::Information);
//! log.begin_table(OutputLevel::Information);
//! log.write("name", OutputLevel::Information);
//! log.change_column(OutputLevel::Information);
//! log.write("rows", OutputLevel::Information);
//! log.change_row(OutputLevel::Information);
//! log.write("orders.csv", OutputLevel::Information);
//! log.change_column(OutputLevel::Information);
//! log.write("1204", OutputLevel::Information);
//! log.end_table(OutputLevel::Information);
//!
//! log.write_line_strongly("2 rows rejected", OutputLevel::Warning);
//! log.close()?;
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod render;
pub mod traits;
pub mod types;
pub mod writer;

// Re-export main types
pub use error::{LogError, Result};
pub use render::HtmlRenderer;
pub use traits::RenderSink;
pub use types::{Element, OutputLevel};
pub use writer::HtmlLog;
