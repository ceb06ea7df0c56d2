//! Button field controls (field type Btn): checkboxes and radio buttons.
//!
//! Push buttons trigger actions rather than hold a value and are not
//! rendered.

use super::{fitted_font_size, FormWidget};
use crate::annotation_types::FieldType;
use crate::node::{ElementKind, Node};
use crate::record::AnnotationRecord;

/// Kind of toggle button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonKind {
    /// Independent on/off box
    Checkbox,
    /// Member of a mutually exclusive group
    Radio,
}

/// Whether a button value means "on".
///
/// Any non-empty value other than `Off` (in any case) is on.
///
/// # Examples
///
/// ```
/// use pdf_annotation_layer::widgets::is_checked_value;
///
/// assert!(is_checked_value("Yes"));
/// assert!(!is_checked_value("off"));
/// assert!(!is_checked_value(""));
/// ```
pub fn is_checked_value(value: &str) -> bool {
    !value.is_empty() && !value.eq_ignore_ascii_case("off")
}

/// A checkbox or radio button with an adjacent marker.
#[derive(Debug, Clone, PartialEq)]
pub struct ButtonWidget {
    kind: ButtonKind,
    checked: bool,
    value: String,
    font_size: f32,
    disabled: bool,
}

impl ButtonWidget {
    /// Build a toggle button from a widget record, `None` for push buttons.
    pub fn from_record(record: &AnnotationRecord) -> Option<Self> {
        let flags = record.flags();
        if flags.is_pushbutton() {
            log::warn!("Unsupported form field: push button");
            return None;
        }

        let kind = if flags.is_radio() {
            ButtonKind::Radio
        } else {
            ButtonKind::Checkbox
        };

        Some(Self {
            kind,
            checked: is_checked_value(&record.field_value),
            value: record.field_value.clone(),
            // Same height-based guess as short text fields, applied always.
            font_size: fitted_font_size(record.rect.height()),
            disabled: false,
        })
    }

    /// Checkbox or radio.
    pub fn kind(&self) -> ButtonKind {
        self.kind
    }

    /// Whether the button is on.
    pub fn is_checked(&self) -> bool {
        self.checked
    }

    /// Font size of the label.
    pub fn font_size(&self) -> f32 {
        self.font_size
    }
}

impl FormWidget for ButtonWidget {
    fn field_type(&self) -> FieldType {
        FieldType::Button
    }

    fn control_kind(&self) -> ElementKind {
        match self.kind {
            ButtonKind::Checkbox => ElementKind::Checkbox,
            ButtonKind::Radio => ElementKind::Radio,
        }
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
        let mut input = Node::new(self.control_kind());
        if self.checked {
            input.set_attr("checked", "");
        }
        if self.disabled {
            input.set_attr("disabled", "");
        }

        Node::new(ElementKind::Label)
            .with_class(super::CONTROL_CLASS)
            .with_size(width, height)
            .with_style("font-size", format!("{}px", self.font_size))
            .with_child(input)
            .with_child(Node::new(ElementKind::Span))
    }
}
