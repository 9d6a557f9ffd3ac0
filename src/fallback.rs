//! Plain-text fallback scanner.
//!
//! After structural matching, any canonical field still unset is looked for
//! in the document's flattened text, one line at a time, using the patterns
//! from [`crate::patterns`].

use tracing::trace;

use crate::dom::{self, Document};
use crate::fields::Field;
use crate::patterns;
use crate::record::TaskRecord;

/// Document text with one trimmed text node per line.
#[must_use]
pub fn flattened_text(doc: &Document) -> String {
    dom::joined_text(&doc.root(), "\n")
}

/// Fill unset fields of `record` from `text`.
///
/// For each line, every still-unset field tries its alias patterns in order;
/// the first match sets the field. Returns the fields filled by this pass.
pub fn fill_from_text(record: &mut TaskRecord, text: &str) -> Vec<Field> {
    let mut filled = Vec::new();

    for line in text.lines().map(str::trim).filter(|line| !line.is_empty()) {
        for field in Field::ALL {
            if record.is_set(field) {
                continue;
            }
            let found = patterns::patterns_for(field)
                .iter()
                .find_map(|re| re.captures(line))
                .and_then(|caps| caps.name("value"))
                .map(|m| m.as_str());

            if let Some(value) = found {
                if record.set_if_unset(field, value) {
                    trace!(%field, line, "fallback match");
                    filled.push(field);
                }
            }
        }
    }

    filled
}

/// Run the fallback pass over a parsed document.
pub fn apply_text_fallback(doc: &Document, record: &mut TaskRecord) -> Vec<Field> {
    if record.unset_fields().is_empty() {
        return Vec::new();
    }
    fill_from_text(record, &flattened_text(doc))
}
