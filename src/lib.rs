//! # task-index
//!
//! Builds a consolidated index of exported task files.
//!
//! An export is a directory of HTML files, one per task, each describing the
//! task's metadata in semi-structured markup. This crate walks the export,
//! pulls out a fixed set of canonical fields (identifier, label, result,
//! severity and four timestamps) plus any other labelled values it finds,
//! and writes the records as JSON and optionally CSV.
//!
//! ## Quick Start
//!
//! ```rust
//! use task_index::parse_task_html;
//!
//! let html = r#"<dl><dt>Task ID</dt><dd>T-1</dd></dl>
//! <p><b>Owner:</b> alice</p>"#;
//!
//! let record = parse_task_html(html, "t-1.html", "t-1");
//! assert_eq!(record.task_id.as_deref(), Some("T-1"));
//! assert_eq!(record.extra_value("Owner"), Some("alice"));
//! ```
//!
//! ## Matching
//!
//! Label/value pairs come from, in priority order:
//!
//! - **Definition lists**: `<dt>` paired with the next `<dd>` sibling
//! - **Table rows**: `<th>`/`<td>` rows or two-or-more `<td>` rows
//! - **Inline labels**: `<b>`, `<strong>` or `<span>` ending in `:`
//! - **Plain text**: `label: value`, `label - value` or `label | value` lines
//!
//! The first value found for a canonical field wins. Files never fail to
//! index: malformed markup or undecodable bytes just produce sparser records.

mod error;
mod options;
mod record;

/// DOM helpers over `dom_query`.
pub mod dom;

/// Character decoding for export files.
pub mod encoding;

/// Canonical fields and label aliases.
pub mod fields;

/// Compiled plain-text fallback patterns.
pub mod patterns;

/// Structural label/value matchers.
pub mod matcher;

/// Plain-text fallback scanner.
pub mod fallback;

/// File discovery and per-file parsing.
pub mod indexer;

/// JSON and CSV writers.
pub mod output;

// Public API - re-exports
pub use error::{Error, Result};
pub use fields::Field;
pub use indexer::{
    build_index, collect_html_files, index_directory, parse_task_file, parse_task_html,
};
pub use options::{Options, DEFAULT_OUTPUT_JSON};
pub use output::{render_csv, render_json, write_csv, write_json};
pub use record::{TaskRecord, SOURCE_PATH_KEY};
