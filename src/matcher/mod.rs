//! Structural label/value matching.
//!
//! Three independent heuristics each walk the parsed document and emit
//! `(label, value)` pairs. They run in a fixed order, definition lists
//! first, then table rows, then inline labels, and the pairs are applied to
//! the record in that order so earlier sources win.

mod definition_list;
mod inline_labels;
mod table_rows;

use crate::dom::Document;
use crate::record::TaskRecord;

pub use definition_list::definition_list_pairs;
pub use inline_labels::inline_label_pairs;
pub use table_rows::table_row_pairs;

/// A candidate label and the text found next to it.
pub type LabelValue = (String, String);

/// All structural pairs in the document, in priority order.
#[must_use]
pub fn label_value_pairs(doc: &Document) -> Vec<LabelValue> {
    let mut pairs = definition_list_pairs(doc);
    pairs.extend(table_row_pairs(doc));
    pairs.extend(inline_label_pairs(doc));
    pairs
}

/// Apply every structural pair to `record`. Returns the number of pairs seen.
pub fn apply_structural_matches(doc: &Document, record: &mut TaskRecord) -> usize {
    let pairs = label_value_pairs(doc);
    for (label, value) in &pairs {
        record.apply_pair(label, value);
    }
    pairs.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom;

    #[test]
    fn sources_are_ordered_dl_table_inline() {
        let doc = dom::parse(
            r"
            <p><strong>Status:</strong> inline</p>
            <table><tr><th>Status</th><td>table</td></tr></table>
            <dl><dt>Status</dt><dd>dl</dd></dl>
            ",
        );

        let values: Vec<String> = label_value_pairs(&doc).into_iter().map(|(_, v)| v).collect();
        assert_eq!(values, ["dl", "table", "inline"]);
    }

    #[test]
    fn definition_list_beats_table_for_same_field() {
        let doc = dom::parse(
            r"
            <table><tr><th>Severity</th><td>low</td></tr></table>
            <dl><dt>Level</dt><dd>high</dd></dl>
            ",
        );
        let mut record = TaskRecord::new("t.html");
        let seen = apply_structural_matches(&doc, &mut record);

        assert_eq!(seen, 2);
        assert_eq!(record.severity.as_deref(), Some("high"));
    }

    #[test]
    fn document_without_structure_yields_nothing() {
        let doc = dom::parse("<p>Just some prose about a task.</p>");
        assert!(label_value_pairs(&doc).is_empty());
    }
}
