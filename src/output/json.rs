use std::path::Path;

use tracing::debug;

use crate::error::Result;
use crate::record::TaskRecord;

use super::write_output;

/// Render records as a pretty-printed JSON array.
///
/// Objects have their keys sorted, unset canonical fields are `null`, and
/// the document ends with a newline.
pub fn render_json(records: &[TaskRecord]) -> Result<String> {
    let mut out = serde_json::to_string_pretty(records)?;
    out.push('\n');
    Ok(out)
}

/// Render and write the JSON index to `path`.
pub fn write_json(records: &[TaskRecord], path: &Path) -> Result<()> {
    let json = render_json(records)?;
    write_output(path, &json)?;
    debug!(path = %path.display(), records = records.len(), "wrote JSON index");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_index_is_empty_array() {
        assert_eq!(render_json(&[]).ok().as_deref(), Some("[]\n"));
    }

    #[test]
    fn keys_sorted_with_nulls_and_two_space_indent() {
        let mut record = TaskRecord::new("a.html");
        record.apply_pair("Task ID", "T-1");
        record.apply_pair("Owner", "alice");

        let json = render_json(&[record]).unwrap_or_default();
        let expected = r#"[
  {
    "Owner": "alice",
    "completed_at": null,
    "created_at": null,
    "label": null,
    "result": null,
    "severity": null,
    "source_path": "a.html",
    "started_at": null,
    "task_id": "T-1",
    "timestamp": null,
    "updated_at": null
  }
]
"#;
        assert_eq!(json, expected);
    }

    #[test]
    fn non_ascii_is_written_as_utf8() {
        let mut record = TaskRecord::new("ü.html");
        record.task_id = Some("Größe".to_string());

        let json = render_json(&[record]).unwrap_or_default();
        assert!(json.contains("\"Größe\""));
        assert!(json.contains("\"ü.html\""));
    }
}
