//! Configuration for an indexing run.

use std::path::PathBuf;

/// Default location of the JSON index.
pub const DEFAULT_OUTPUT_JSON: &str = "data/tasks.json";

/// Configuration options for [`build_index`](crate::build_index).
///
/// All fields are public. Use `Default::default()` for the standard layout:
/// index the current directory into `data/tasks.json`, no CSV.
///
/// # Example
///
/// ```rust
/// use std::path::PathBuf;
/// use task_index::Options;
///
/// let options = Options {
///     export_dir: PathBuf::from("exports"),
///     output_csv: Some(PathBuf::from("data/tasks.csv")),
///     ..Options::default()
/// };
/// assert_eq!(options.output_json, PathBuf::from("data/tasks.json"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Directory holding the exported task files.
    ///
    /// Default: `.`
    pub export_dir: PathBuf,

    /// Where the JSON index is written. Parent directories are created.
    ///
    /// Default: `data/tasks.json`
    pub output_json: PathBuf,

    /// Where the CSV index is written, if wanted.
    ///
    /// Default: `None`
    pub output_csv: Option<PathBuf>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            export_dir: PathBuf::from("."),
            output_json: PathBuf::from(DEFAULT_OUTPUT_JSON),
            output_csv: None,
        }
    }
}
