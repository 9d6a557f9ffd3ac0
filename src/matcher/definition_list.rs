use crate::dom::{self, Document};

use super::LabelValue;

/// Pair every `<dt>` with the nearest `<dd>` sibling after it.
///
/// Terms without a later `<dd>` sibling are skipped.
#[must_use]
pub fn definition_list_pairs(doc: &Document) -> Vec<LabelValue> {
    let mut pairs = Vec::new();
    for term in dom::select_nodes(&doc.select("html"), "dt") {
        let Some(description) = dom::next_sibling_with_tag(&term, "dd") else {
            continue;
        };
        pairs.push((
            dom::joined_text(&term, " "),
            dom::joined_text(&description, " "),
        ));
    }
    pairs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pairs_terms_with_descriptions() {
        let doc = dom::parse(
            "<dl><dt>Task ID</dt><dd>T-1</dd><dt>Status</dt><dd> <em>ok</em> </dd></dl>",
        );

        assert_eq!(
            definition_list_pairs(&doc),
            [
                ("Task ID".to_string(), "T-1".to_string()),
                ("Status".to_string(), "ok".to_string()),
            ]
        );
    }

    #[test]
    fn consecutive_terms_share_next_description() {
        let doc = dom::parse("<dl><dt>Created</dt><dt>Updated</dt><dd>2024-01-02</dd></dl>");

        let pairs = definition_list_pairs(&doc);
        assert_eq!(pairs.len(), 2);
        assert!(pairs.iter().all(|(_, value)| value == "2024-01-02"));
    }

    #[test]
    fn trailing_term_without_description_is_skipped() {
        let doc = dom::parse("<dl><dt>Label</dt><dd>nightly</dd><dt>Orphan</dt></dl>");

        let pairs = definition_list_pairs(&doc);
        assert_eq!(pairs, [("Label".to_string(), "nightly".to_string())]);
    }

    #[test]
    fn description_in_other_list_is_not_used() {
        let doc = dom::parse("<dl><dt>Status</dt></dl><dl><dd>elsewhere</dd></dl>");
        assert!(definition_list_pairs(&doc).is_empty());
    }
}
