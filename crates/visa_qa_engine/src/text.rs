use crate::dom::{child_elements, element_text, is_list, is_publish_info, tag_name};
use crate::list::flatten_list;
use crate::region::ContentRegion;

/// Structured text of the region: flattened lists and prose blocks.
///
/// Only the region's direct element children are considered. Tables are left
/// to the table transcriber, and the publish-metadata list is skipped wherever
/// it sits so that a date change alone never reads as a content change.
pub fn extract_text(region: &ContentRegion<'_>) -> Option<Vec<String>> {
    let mut lines = Vec::new();

    for child in child_elements(region.element()) {
        let skipped = matches!(tag_name(&child), "script" | "style" | "table");
        if skipped || is_publish_info(child.value()) {
            continue;
        }

        if is_list(&child) {
            flatten_list(child, 0, &mut lines);
            continue;
        }

        let text = element_text(child);
        if !text.is_empty() {
            lines.push(text);
        }
    }

    (!lines.is_empty()).then_some(lines)
}
