//! Small DOM helpers shared by the extractors.
use ego_tree::NodeRef;
use scraper::node::{Element, Node};
use scraper::{ElementRef, Selector};
use visa_qa_core::normalize_whitespace;

/// Class of the publish-metadata list that some pages nest inside the body.
pub(crate) const PUBLISH_INFO_CLASS: &str = "publish_info";

/// A child node as the extractors see it: either a run of text or an element.
pub(crate) enum Fragment<'a> {
    Text(&'a str),
    Element(ElementRef<'a>),
}

impl<'a> Fragment<'a> {
    pub(crate) fn from_node(node: NodeRef<'a, Node>) -> Option<Self> {
        match node.value() {
            Node::Text(text) => Some(Fragment::Text(&**text)),
            Node::Element(_) => ElementRef::wrap(node).map(Fragment::Element),
            _ => None,
        }
    }
}

/// Direct children of `element`, comments and doctypes dropped.
pub(crate) fn fragments<'a>(element: ElementRef<'a>) -> impl Iterator<Item = Fragment<'a>> {
    element.children().filter_map(Fragment::from_node)
}

/// Direct element children of `element`.
pub(crate) fn child_elements<'a>(element: ElementRef<'a>) -> impl Iterator<Item = ElementRef<'a>> {
    element.children().filter_map(ElementRef::wrap)
}

/// All descendants of `scope` matching `css`, in document order.
pub(crate) fn select_all<'a>(scope: ElementRef<'a>, css: &str) -> Vec<ElementRef<'a>> {
    match Selector::parse(css) {
        Ok(selector) => scope.select(&selector).collect(),
        Err(_) => Vec::new(),
    }
}

pub(crate) fn tag_name<'a>(element: &ElementRef<'a>) -> &'a str {
    element.value().name()
}

pub(crate) fn is_list(element: &ElementRef<'_>) -> bool {
    matches!(tag_name(element), "ol" | "ul")
}

pub(crate) fn is_publish_info(element: &Element) -> bool {
    element.name() == "ul" && element.classes().any(|class| class == PUBLISH_INFO_CLASS)
}

/// Normalized text of everything below `element`, skipping scripts, styles and
/// any nested publish-info list. Text runs are joined with a space.
pub(crate) fn element_text(element: ElementRef<'_>) -> String {
    let mut buffer = String::new();
    push_text(*element, Joiner::Space, &mut buffer);
    normalize_whitespace(&buffer)
}

/// Like [`element_text`], but each text run is trimmed and the runs are
/// concatenated with nothing in between, so `NT$<span>1,600</span>` reads
/// `NT$1,600`. Used for titles, table cells and other short labels.
pub(crate) fn strip_concat_text(element: ElementRef<'_>) -> String {
    let mut buffer = String::new();
    push_text(*element, Joiner::Concat, &mut buffer);
    normalize_whitespace(&buffer)
}

#[derive(Clone, Copy)]
enum Joiner {
    Space,
    Concat,
}

fn push_text(node: NodeRef<'_, Node>, joiner: Joiner, buffer: &mut String) {
    match node.value() {
        Node::Text(text) => match joiner {
            Joiner::Space => {
                buffer.push_str(text);
                buffer.push(' ');
            }
            Joiner::Concat => buffer.push_str(text.trim()),
        },
        Node::Element(element) => {
            if matches!(element.name(), "script" | "style") || is_publish_info(element) {
                return;
            }
            for child in node.children() {
                push_text(child, joiner, buffer);
            }
        }
        _ => {
            for child in node.children() {
                push_text(child, joiner, buffer);
            }
        }
    }
}
