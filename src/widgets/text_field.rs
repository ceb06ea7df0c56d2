//! Text field controls (field type Tx).

use super::text_style::TextStyle;
use super::{fitted_font_size, FormWidget, UNDERSIZED_FIELD_HEIGHT};
use crate::annotation_types::{FieldType, TextAlignment};
use crate::fonts::FontResolver;
use crate::node::{ElementKind, Node};
use crate::record::AnnotationRecord;

/// A single-line input or multi-line text area.
#[derive(Debug, Clone, PartialEq)]
pub struct TextFieldWidget {
    multiline: bool,
    value: String,
    alignment: TextAlignment,
    max_len: Option<u32>,
    text_style: TextStyle,
    disabled: bool,
}

impl TextFieldWidget {
    /// Build a text field from a widget record.
    pub fn from_record(record: &AnnotationRecord, fonts: &dyn FontResolver) -> Self {
        let multiline = record.flags().is_multiline();
        let mut text_style = TextStyle::from_record(record, fonts);

        // Without a default appearance to read the size from, guess one from
        // the field height so text in short single-line fields stays visible.
        // This is an approximation, not the appearance the PDF would produce.
        let height = record.rect.height();
        if !multiline && record.explicit_font_size().is_none() && height < UNDERSIZED_FIELD_HEIGHT {
            text_style.font_size = Some(fitted_font_size(height));
        }

        Self {
            multiline,
            value: record.field_value.clone(),
            alignment: record.text_alignment,
            max_len: record.max_len,
            text_style,
            disabled: false,
        }
    }

    /// Whether this is a multi-line text area.
    pub fn is_multiline(&self) -> bool {
        self.multiline
    }

    /// Maximum input length.
    pub fn max_len(&self) -> Option<u32> {
        self.max_len
    }

    /// Horizontal alignment.
    pub fn alignment(&self) -> TextAlignment {
        self.alignment
    }

    /// Text styling.
    pub fn text_style(&self) -> &TextStyle {
        &self.text_style
    }
}

impl FormWidget for TextFieldWidget {
    fn field_type(&self) -> FieldType {
        FieldType::Text
    }

    fn control_kind(&self) -> ElementKind {
        if self.multiline {
            ElementKind::TextArea
        } else {
            ElementKind::TextInput
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
        let mut node = Node::new(self.control_kind())
            .with_class(super::CONTROL_CLASS)
            .with_size(width, height);

        if self.multiline {
            node = node.with_text(self.value.clone());
        } else {
            node = node
                .with_attr("type", "text")
                .with_attr("value", self.value.clone());
        }

        node.set_style("text-align", self.alignment.css_value());
        node.set_style("vertical-align", "middle");
        if let Some(max_len) = self.max_len {
            node.set_attr("maxlength", max_len.to_string());
        }
        self.text_style.apply(&mut node);
        if self.disabled {
            node.set_attr("disabled", "");
        }
        node
    }
}
