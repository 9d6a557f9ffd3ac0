//! DOM helpers on top of `dom_query`.
//!
//! Task exports are matched with a handful of primitive operations: parse a
//! document, read an element's tag, collect the visible text of a subtree,
//! and walk following siblings. They live here so the matchers read as
//! plain heuristics instead of tree plumbing.

pub use dom_query::{Document, NodeRef, Selection};
pub use tendril::StrTendril;

/// Elements whose contents are never treated as visible text.
const NON_TEXT_CONTAINERS: &[&str] = &["script", "style", "template"];

/// Parse HTML into a document.
///
/// html5ever recovers from any malformed input, so this never fails; broken
/// markup simply produces a tree with fewer recognisable structures.
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

/// Lowercase tag name of an element node, `None` for text and comment nodes.
#[must_use]
pub fn tag_name(node: &NodeRef) -> Option<StrTendril> {
    if node.is_element() {
        node.node_name()
    } else {
        None
    }
}

/// Whether `node` is an element with the given (lowercase) tag name.
#[must_use]
pub fn is_tag(node: &NodeRef, tag: &str) -> bool {
    tag_name(node).is_some_and(|name| name.eq_ignore_ascii_case(tag))
}

/// Whether a text node sits inside `script`, `style` or `template`.
fn is_hidden_text(node: &NodeRef) -> bool {
    let mut current = node.parent();
    while let Some(parent) = current {
        if let Some(tag) = tag_name(&parent) {
            if NON_TEXT_CONTAINERS
                .iter()
                .any(|hidden| tag.eq_ignore_ascii_case(hidden))
            {
                return true;
            }
        }
        current = parent.parent();
    }
    false
}

/// Trimmed, non-empty text fragments under `node`, in document order.
///
/// A text node yields itself; an element or document yields each of its
/// descendant text nodes. Comment nodes have no descendants and yield nothing.
#[must_use]
pub fn text_fragments(node: &NodeRef) -> Vec<String> {
    if node.is_text() {
        if is_hidden_text(node) {
            return Vec::new();
        }
        let text = node.text();
        let trimmed = text.trim();
        return if trimmed.is_empty() {
            Vec::new()
        } else {
            vec![trimmed.to_string()]
        };
    }

    let mut fragments = Vec::new();
    for descendant in node.descendants() {
        if !descendant.is_text() || is_hidden_text(&descendant) {
            continue;
        }
        let text = descendant.text();
        let trimmed = text.trim();
        if !trimmed.is_empty() {
            fragments.push(trimmed.to_string());
        }
    }
    fragments
}

/// Visible text of a node: trimmed fragments joined by `separator`.
///
/// `joined_text(node, " ")` is the text used for labels, values and cells.
#[must_use]
pub fn joined_text(node: &NodeRef, separator: &str) -> String {
    text_fragments(node).join(separator)
}

/// All siblings after `node`, nearest first, including text and comment nodes.
#[must_use]
pub fn following_siblings<'a>(node: &NodeRef<'a>) -> Vec<NodeRef<'a>> {
    let mut siblings = Vec::new();
    let mut current = node.next_sibling();
    while let Some(sibling) = current {
        current = sibling.next_sibling();
        siblings.push(sibling);
    }
    siblings
}

/// Nearest later sibling element with the given tag name.
#[must_use]
pub fn next_sibling_with_tag<'a>(node: &NodeRef<'a>, tag: &str) -> Option<NodeRef<'a>> {
    following_siblings(node)
        .into_iter()
        .find(|sibling| is_tag(sibling, tag))
}

/// Element nodes matching a CSS selector, in document order.
#[must_use]
pub fn select_nodes<'a>(sel: &Selection<'a>, selector: &str) -> Vec<NodeRef<'a>> {
    sel.select(selector).nodes().to_vec()
}
