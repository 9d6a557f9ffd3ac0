use crate::dom::{self, Document};

use super::LabelValue;

/// Elements whose text may act as an inline label.
const LABEL_SELECTOR: &str = "strong, b, span";

/// Label/value pairs from inline markup such as `<b>Status:</b> ok`.
///
/// Any `strong`, `b` or `span` whose text ends in `:` is a label. Its value
/// is the text of the first following sibling (text node or element) with
/// non-empty text. Only siblings are searched: a value nested inside the
/// label, or elsewhere under the label's parent, is not found.
#[must_use]
pub fn inline_label_pairs(doc: &Document) -> Vec<LabelValue> {
    let mut pairs = Vec::new();

    for element in dom::select_nodes(&doc.select("html"), LABEL_SELECTOR) {
        let text = dom::joined_text(&element, " ");
        if !text.ends_with(':') {
            continue;
        }

        let value = dom::following_siblings(&element)
            .iter()
            .map(|sibling| dom::joined_text(sibling, " "))
            .find(|value| !value.is_empty());

        if let Some(value) = value {
            pairs.push((text.trim_end_matches(':').to_string(), value));
        }
    }

    pairs
}
