use std::path::Path;

use tracing::debug;

use crate::error::Result;
use crate::record::{TaskRecord, SOURCE_PATH_KEY};

use super::write_output;

const DELIMITER: char = ',';
const QUOTE: char = '"';
const TERMINATOR: &str = "\r\n";

/// Render records as CSV.
///
/// The header is the key list of the first record, or just `source_path`
/// when there are no records. Every row is projected onto that header:
/// missing or unset columns are empty and keys outside the header are
/// dropped.
#[must_use]
pub fn render_csv(records: &[TaskRecord]) -> String {
    let header: Vec<String> = records.first().map_or_else(
        || vec![SOURCE_PATH_KEY.to_string()],
        |first| first.keys().into_iter().map(str::to_string).collect(),
    );

    let mut out = String::new();
    push_row(&mut out, header.iter().map(String::as_str));

    for record in records {
        let row = record.to_map();
        let cells: Vec<&str> = header
            .iter()
            .map(|key| row.get(key).and_then(Option::as_deref).unwrap_or(""))
            .collect();
        push_row(&mut out, cells.into_iter());
    }

    out
}

/// Render and write the CSV index to `path`.
pub fn write_csv(records: &[TaskRecord], path: &Path) -> Result<()> {
    let csv = render_csv(records);
    write_output(path, &csv)?;
    debug!(path = %path.display(), records = records.len(), "wrote CSV index");
    Ok(())
}

fn push_row<'a>(out: &mut String, cells: impl ExactSizeIterator<Item = &'a str>) {
    let single = cells.len() == 1;
    for (i, cell) in cells.enumerate() {
        if i > 0 {
            out.push(DELIMITER);
        }
        if single && cell.is_empty() {
            // A lone empty field would otherwise be indistinguishable from a blank line.
            out.push(QUOTE);
            out.push(QUOTE);
        } else {
            push_cell(out, cell);
        }
    }
    out.push_str(TERMINATOR);
}

fn push_cell(out: &mut String, cell: &str) {
    let needs_quotes = cell
        .chars()
        .any(|c| c == DELIMITER || c == QUOTE || c == '\r' || c == '\n');
    if !needs_quotes {
        out.push_str(cell);
        return;
    }

    out.push(QUOTE);
    for c in cell.chars() {
        if c == QUOTE {
            out.push(QUOTE);
        }
        out.push(c);
    }
    out.push(QUOTE);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_index_has_source_path_header_only() {
        assert_eq!(render_csv(&[]), "source_path\r\n");
    }

    #[test]
    fn header_follows_first_record() {
        let mut first = TaskRecord::new("a.html");
        first.apply_pair("Task ID", "T-1");
        first.apply_pair("Owner", "alice");

        let csv = render_csv(&[first]);
        let mut lines = csv.split("\r\n");
        assert_eq!(
            lines.next(),
            Some("source_path,task_id,label,result,severity,created_at,updated_at,started_at,completed_at,timestamp,Owner")
        );
        assert_eq!(lines.next(), Some("a.html,T-1,,,,,,,,,alice"));
    }

    #[test]
    fn later_extra_keys_are_dropped_and_missing_ones_blank() {
        let mut first = TaskRecord::new("a.html");
        first.apply_pair("Owner", "alice");
        let mut second = TaskRecord::new("b.html");
        second.apply_pair("Reviewer", "bob");

        let csv = render_csv(&[first, second]);
        assert!(!csv.contains("Reviewer"));
        assert!(!csv.contains("bob"));
        assert!(csv.ends_with("b.html,,,,,,,,,,\r\n"));
    }

    #[test]
    fn cells_with_special_characters_are_quoted() {
        let mut out = String::new();
        push_row(&mut out, ["plain", "a,b", "say \"hi\"", "two\nlines"].into_iter());
        assert_eq!(out, "plain,\"a,b\",\"say \"\"hi\"\"\",\"two\nlines\"\r\n");
    }

    #[test]
    fn lone_empty_field_is_quoted() {
        let mut out = String::new();
        push_row(&mut out, [""].into_iter());
        assert_eq!(out, "\"\"\r\n");
    }
}
