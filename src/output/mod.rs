//! Serializers for the consolidated index.
//!
//! Both formats are rendered fully in memory before the target file is
//! touched, so a failed render never leaves a partial file behind.

mod csv;
mod json;

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

pub use self::csv::{render_csv, write_csv};
pub use self::json::{render_json, write_json};

/// Write `contents` to `path`, creating parent directories first.
pub(crate) fn write_output(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }
    fs::write(path, contents).map_err(|e| Error::io(path, e))
}
