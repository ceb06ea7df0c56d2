//! Widgets in static mode: the field value as read-only text.

use crate::fonts::FontResolver;
use crate::node::{ElementKind, Node};
use crate::record::AnnotationRecord;
use crate::widgets::TextStyle;

/// Build a text box showing the field value, vertically centered in the
/// field rectangle. The box carries no widget class, so it is never taken
/// for an interactive control.
pub(super) fn build(record: &AnnotationRecord, fonts: &dyn FontResolver) -> Node {
    let mut cell = Node::new(ElementKind::Container)
        .with_text(record.field_value.clone())
        .with_style("text-align", record.text_alignment.css_value())
        .with_style("vertical-align", "middle")
        .with_style("display", "table-cell");
    TextStyle::from_record(record, fonts).apply(&mut cell);

    Node::new(ElementKind::Container)
        .with_size(record.rect.width(), record.rect.height())
        .with_style("display", "table")
        .with_child(cell)
}
