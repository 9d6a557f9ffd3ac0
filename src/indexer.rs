//! Locating export files and turning each one into a [`TaskRecord`].

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};
use walkdir::WalkDir;

use crate::dom;
use crate::encoding;
use crate::error::{Error, Result};
use crate::fallback;
use crate::matcher;
use crate::options::Options;
use crate::output;
use crate::record::TaskRecord;

/// Suffix of files picked up from the export directory (case-sensitive).
pub const HTML_SUFFIX: &str = ".html";

/// Every `*.html` file under `root`, sorted component-wise by path.
///
/// `root` itself is never a candidate, so a file root yields nothing.
/// Entries that cannot be read while walking are logged and skipped.
#[must_use]
pub fn collect_html_files(root: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(root)
        .min_depth(1)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(err) => {
                warn!(error = %err, "skipping unreadable directory entry");
                None
            }
        })
        .filter(|entry| {
            entry
                .file_name()
                .to_str()
                .is_some_and(|name| name.ends_with(HTML_SUFFIX))
        })
        .map(walkdir::DirEntry::into_path)
        .filter(|path| path.is_file())
        .collect();

    files.sort();
    files
}

/// Extract a record from HTML text.
///
/// Structural matches are applied first, then the plain-text fallback, and
/// finally `task_id` defaults to `default_task_id` if nothing supplied one.
#[must_use]
pub fn parse_task_html(html: &str, source_path: &str, default_task_id: &str) -> TaskRecord {
    let mut record = TaskRecord::new(source_path);
    let doc = dom::parse(html);

    let pairs = matcher::apply_structural_matches(&doc, &mut record);
    let recovered = fallback::apply_text_fallback(&doc, &mut record);

    if record.task_id.is_none() {
        record.task_id = Some(default_task_id.to_string());
    }

    debug!(
        source = source_path,
        pairs,
        recovered = recovered.len(),
        extra = record.extra.len(),
        "parsed task file"
    );
    record
}

/// Read and parse one export file.
///
/// Never fails: undecodable bytes are dropped, and a file that cannot be
/// read at all is treated as empty so it still yields a record.
#[must_use]
pub fn parse_task_file(path: &Path, export_root: &Path) -> TaskRecord {
    let source_path = path
        .strip_prefix(export_root)
        .unwrap_or(path)
        .to_string_lossy()
        .into_owned();
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    let html = match fs::read(path) {
        Ok(bytes) => encoding::decode_html(&bytes),
        Err(err) => {
            warn!(path = %path.display(), error = %err, "could not read task file, indexing as empty");
            String::new()
        }
    };

    parse_task_html(&html, &source_path, &stem)
}

/// Absolute form of `dir`, with symlinks resolved when it exists.
#[must_use]
pub fn resolve_dir(dir: &Path) -> PathBuf {
    fs::canonicalize(dir)
        .or_else(|_| std::path::absolute(dir))
        .unwrap_or_else(|_| dir.to_path_buf())
}

/// Parse every export file under `export_dir`, in sorted path order.
pub fn index_directory(export_dir: &Path) -> Result<Vec<TaskRecord>> {
    if !export_dir.exists() {
        return Err(Error::ExportDirNotFound(export_dir.to_path_buf()));
    }

    let files = collect_html_files(export_dir);
    debug!(dir = %export_dir.display(), files = files.len(), "located task files");

    Ok(files
        .iter()
        .map(|path| parse_task_file(path, export_dir))
        .collect())
}

/// Index the export directory and write the configured outputs.
///
/// Fails before touching any output if the export directory is missing.
pub fn build_index(options: &Options) -> Result<Vec<TaskRecord>> {
    let records = index_directory(&options.export_dir)?;

    output::write_json(&records, &options.output_json)?;
    if let Some(csv_path) = &options.output_csv {
        output::write_csv(&records, csv_path)?;
    }

    info!(
        records = records.len(),
        json = %options.output_json.display(),
        csv = ?options.output_csv,
        "index written"
    );
    Ok(records)
}
