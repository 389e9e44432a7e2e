//! Shared props and helpers for the stateless wrappers.

use crate::core::classes::with_extra;
use yew::prelude::*;
use yew::virtual_dom::VTag;

/// Minimal props shared by the container-only sub-parts (headers, titles, footers).
#[derive(Properties, PartialEq)]
pub struct BasicProps {
    /// Element id.
    #[prop_or_default]
    pub id: Option<AttrValue>,
    /// Extra classes appended after the computed ones.
    #[prop_or_default]
    pub class: Classes,
    /// Content.
    #[prop_or_default]
    pub children: Children,
}

/// Caller classes as a plain string, `None` when there are none.
#[must_use]
pub fn extra_class(class: &Classes) -> Option<String> {
    (!class.is_empty()).then(|| class.to_string())
}

/// Merge a base class list with caller classes, dropping duplicates.
#[must_use]
pub fn merge_classes(base: &str, extra: &Classes) -> String {
    with_extra(base, extra_class(extra).as_deref())
}

/// Render `tag` with the merged class list and the caller's children.
#[must_use]
pub fn render_container(tag: &'static str, class: String, props: &BasicProps) -> Html {
    let mut node = VTag::new(tag);
    if let Some(id) = &props.id {
        node.add_attribute("id", id.clone());
    }
    if !class.is_empty() {
        node.add_attribute("class", class);
    }
    for child in props.children.iter() {
        node.add_child(child);
    }
    node.into()
}
