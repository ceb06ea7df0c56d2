//! Link annotations.

use super::bordered_container;
use crate::config::RenderConfig;
use crate::node::{ElementKind, Node};
use crate::record::AnnotationRecord;
use crate::style::compute_style;

/// Class name of the link container.
pub const LINK_CLASS: &str = "annotLink";

/// Build a bordered container holding an anchor to the record's URL.
///
/// A record without a URL still gets an anchor, with empty `href`.
pub(super) fn build(record: &AnnotationRecord, config: &RenderConfig) -> Node {
    let style = compute_style(&record.rect, &record.border_style, record.color);
    let url = record.link_url().unwrap_or_default();

    let mut anchor = Node::new(ElementKind::Anchor)
        .with_attr("href", url)
        .with_attr("title", url);
    if !url.is_empty() && config.open_external_links_in_new_window {
        anchor.set_attr("target", "_blank");
    }

    bordered_container(&style).with_class(LINK_CLASS).with_child(anchor)
}
