use scraper::ElementRef;
use visa_qa_core::normalize_whitespace;

use crate::dom::{child_elements, element_text, fragments, is_list, tag_name, Fragment};

/// Indent prepended once per nesting level.
pub const INDENT_UNIT: &str = "  ";
/// Marker of unordered list items.
pub const BULLET: &str = "-";

/// Render an `<ol>`/`<ul>` into `out`, one line per item with text.
///
/// Ordered items are numbered by their position among the list's direct
/// `<li>` children, so an item without text still consumes its number.
/// Lists nested directly under an item follow that item's line at
/// `depth + 1`.
pub fn flatten_list(list: ElementRef<'_>, depth: usize, out: &mut Vec<String>) {
    let indent = INDENT_UNIT.repeat(depth);
    let ordered = tag_name(&list) == "ol";

    let items = child_elements(list).filter(|child| tag_name(child) == "li");
    for (index, item) in items.enumerate() {
        let text = item_own_text(item);
        if !text.is_empty() {
            let marker = if ordered {
                format!("{}.", index + 1)
            } else {
                BULLET.to_string()
            };
            out.push(format!("{indent}{marker} {text}"));
        }

        for nested in child_elements(item).filter(is_list) {
            flatten_list(nested, depth + 1, out);
        }
    }
}

/// Text of an item without the text of its nested lists.
fn item_own_text(item: ElementRef<'_>) -> String {
    let parts: Vec<String> = fragments(item)
        .filter_map(|fragment| match fragment {
            Fragment::Text(text) => Some(normalize_whitespace(text)),
            Fragment::Element(element) if is_list(&element) => None,
            Fragment::Element(element) => Some(element_text(element)),
        })
        .filter(|part| !part.is_empty())
        .collect();
    normalize_whitespace(&parts.join(" "))
}
