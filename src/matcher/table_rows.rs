use crate::dom::{self, Document, Selection};

use super::LabelValue;

/// Label/value pairs read from table rows.
///
/// A row with exactly one `<th>` and at least one `<td>` maps the header to
/// the joined data cells. A row with no `<th>` and at least two `<td>` maps
/// the first cell to the joined remaining cells. Other rows are ignored.
#[must_use]
pub fn table_row_pairs(doc: &Document) -> Vec<LabelValue> {
    let mut pairs = Vec::new();

    for row in dom::select_nodes(&doc.select("html"), "tr") {
        let row_sel = Selection::from(row);
        let headers = dom::select_nodes(&row_sel, "th");
        let cells = dom::select_nodes(&row_sel, "td");

        match (headers.as_slice(), cells.as_slice()) {
            ([header], [_, ..]) => {
                let value = join_cells(&cells);
                pairs.push((dom::joined_text(header, " "), value));
            }
            ([], [first, rest @ ..]) if !rest.is_empty() => {
                pairs.push((dom::joined_text(first, " "), join_cells(rest)));
            }
            _ => {}
        }
    }

    pairs
}

fn join_cells(cells: &[dom::NodeRef]) -> String {
    cells
        .iter()
        .map(|cell| dom::joined_text(cell, " "))
        .collect::<Vec<_>>()
        .join(" ")
}
