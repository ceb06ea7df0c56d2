//! Choice field controls (field type Ch): combo boxes and list boxes.

use super::FormWidget;
use crate::annotation_types::FieldType;
use crate::node::{ElementKind, Node};
use crate::record::AnnotationRecord;

/// Visible rows of a list box.
///
/// The control is already sized to the field rectangle, so a fixed small
/// row count is enough for it to render as a list rather than a dropdown.
/// It is not derived from the field height and row metrics.
pub const LIST_BOX_VISIBLE_ROWS: u32 = 2;

/// One selectable item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceItem {
    /// Stored value
    pub value: String,
    /// Shown text
    pub label: String,
    /// Initially selected
    pub selected: bool,
}

/// A combo box or list box.
#[derive(Debug, Clone, PartialEq)]
pub struct ChoiceFieldWidget {
    combo: bool,
    multi_select: bool,
    items: Vec<ChoiceItem>,
    value: String,
    disabled: bool,
}

impl ChoiceFieldWidget {
    /// Build a choice field from a widget record.
    ///
    /// Items keep the record's order. An item is selected when its label
    /// equals the field value.
    pub fn from_record(record: &AnnotationRecord) -> Self {
        let flags = record.flags();
        let items = record
            .options
            .iter()
            .map(|option| ChoiceItem {
                value: option.value.clone(),
                label: option.label.clone(),
                selected: option.label == record.field_value,
            })
            .collect();

        Self {
            combo: flags.is_combo(),
            multi_select: flags.is_multi_select(),
            items,
            value: record.field_value.clone(),
            disabled: false,
        }
    }

    /// Whether this is a dropdown rather than a list box.
    pub fn is_combo(&self) -> bool {
        self.combo
    }

    /// Whether several items may be selected.
    pub fn is_multi_select(&self) -> bool {
        self.multi_select
    }

    /// Items in display order.
    pub fn items(&self) -> &[ChoiceItem] {
        &self.items
    }

    /// Currently selected items.
    pub fn selected(&self) -> impl Iterator<Item = &ChoiceItem> {
        self.items.iter().filter(|item| item.selected)
    }
}

impl FormWidget for ChoiceFieldWidget {
    fn field_type(&self) -> FieldType {
        FieldType::Choice
    }

    fn control_kind(&self) -> ElementKind {
        ElementKind::SelectList
    }

    fn value(&self) -> &str {
        &self.value
    }

    fn is_disabled(&self) -> bool {
        self.disabled
    }

    fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    fn to_node(&self, width: f32, height: f32) -> Node {
        let mut node = Node::new(ElementKind::SelectList)
            .with_class(super::CONTROL_CLASS)
            .with_size(width, height);

        if !self.combo {
            node.set_attr("size", LIST_BOX_VISIBLE_ROWS.to_string());
        }
        if self.multi_select {
            node.set_attr("multiple", "");
        }
        if self.disabled {
            node.set_attr("disabled", "");
        }

        for item in &self.items {
            let mut option = Node::new(ElementKind::OptionItem)
                .with_attr("value", item.value.clone())
                .with_text(item.label.clone());
            if item.selected {
                option.set_attr("selected", "");
            }
            node.push_child(option);
        }
        node
    }
}
