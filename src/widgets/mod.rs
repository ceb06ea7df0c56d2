//! Interactive form controls for widget annotations.
//!
//! This module turns a widget record into an editable control per
//! ISO 32000-1:2008 Section 12.7 (Interactive Forms).
//!
//! # Supported Field Types
//!
//! - **Text Fields** (`TextFieldWidget`): Single-line input and multi-line text area
//! - **Choice Fields** (`ChoiceFieldWidget`): Combo boxes and list boxes
//! - **Buttons** (`ButtonWidget`): Checkboxes and radio buttons
//!
//! Push buttons and signature fields produce no control.
//!
//! # Example
//!
//! ```
//! use pdf_annotation_layer::annotation_types::FieldType;
//! use pdf_annotation_layer::fonts::NoFonts;
//! use pdf_annotation_layer::geometry::Rect;
//! use pdf_annotation_layer::record::AnnotationRecord;
//! use pdf_annotation_layer::widgets::{build_widget, FormWidget};
//!
//! let rect = Rect::from_points(72.0, 700.0, 272.0, 720.0);
//! let record = AnnotationRecord::widget(FieldType::Text, rect).with_value("John Doe");
//! let container = build_widget(&record, &NoFonts).unwrap();
//! assert_eq!(container.widget().value(), "John Doe");
//! ```

mod button_field;
mod choice_field;
mod text_field;
pub mod text_style;

pub use button_field::{is_checked_value, ButtonKind, ButtonWidget};
pub use choice_field::{ChoiceFieldWidget, ChoiceItem, LIST_BOX_VISIBLE_ROWS};
pub use text_field::TextFieldWidget;
pub use text_style::{Direction, FontFace, FontStyle, FontWeight, TextStyle};

use crate::annotation_types::FieldType;
use crate::fonts::FontResolver;
use crate::node::{ElementKind, Node};
use crate::record::AnnotationRecord;
use std::fmt;

/// Class name of widget containers.
pub const CONTAINER_CLASS: &str = "widgetContainer";

/// Class name of form controls.
pub const CONTROL_CLASS: &str = "widgetControl";

/// Fields shorter than this get a font size guessed from their height.
pub const UNDERSIZED_FIELD_HEIGHT: f32 = 15.0;

/// Font size guessed for a field of the given height.
///
/// A stand-in until default appearance strings are honoured: one unit less
/// than the field height keeps a line of text inside short fields.
pub fn fitted_font_size(height: f32) -> f32 {
    height - 1.0
}

/// Common trait for all form controls.
pub trait FormWidget: fmt::Debug {
    /// Field type this control renders.
    fn field_type(&self) -> FieldType;

    /// Element kind of the control itself.
    fn control_kind(&self) -> ElementKind;

    /// Field value the control was built with.
    fn value(&self) -> &str;

    /// Whether the control is disabled.
    fn is_disabled(&self) -> bool;

    /// Enable or disable the control.
    fn set_disabled(&mut self, disabled: bool);

    /// Build the control's node, sized to `width × height`.
    fn to_node(&self, width: f32, height: f32) -> Node;
}

/// A form control in a fixed-size container matching the field rectangle.
#[derive(Debug)]
pub struct WidgetContainer {
    width: f32,
    height: f32,
    widget: Box<dyn FormWidget>,
}

impl WidgetContainer {
    /// Wrap a control in a container of the given size.
    pub fn new(width: f32, height: f32, widget: Box<dyn FormWidget>) -> Self {
        Self {
            width,
            height,
            widget,
        }
    }

    /// Container width.
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Container height.
    pub fn height(&self) -> f32 {
        self.height
    }

    /// The wrapped control.
    pub fn widget(&self) -> &dyn FormWidget {
        self.widget.as_ref()
    }

    /// Mutable access to the wrapped control.
    pub fn widget_mut(&mut self) -> &mut dyn FormWidget {
        self.widget.as_mut()
    }

    /// Build the container node with the control as its only child.
    pub fn to_node(&self) -> Node {
        Node::new(ElementKind::Container)
            .with_class(CONTAINER_CLASS)
            .with_size(self.width, self.height)
            .with_child(self.widget.to_node(self.width, self.height))
    }
}

/// Build the interactive control for a widget record.
///
/// Returns `None` when no control applies: push buttons, signature or
/// unknown field types, or a record without a field type. The read-only
/// flag disables the control.
pub fn build_widget(
    record: &AnnotationRecord,
    fonts: &dyn FontResolver,
) -> Option<WidgetContainer> {
    let field_type = record.field_type.unwrap_or(FieldType::Unknown);
    let mut widget: Box<dyn FormWidget> = match field_type {
        FieldType::Text => Box::new(TextFieldWidget::from_record(record, fonts)),
        FieldType::Choice => Box::new(ChoiceFieldWidget::from_record(record)),
        FieldType::Button => Box::new(ButtonWidget::from_record(record)?),
        FieldType::Signature | FieldType::Unknown => {
            log::debug!("No form control for field type {}", field_type.pdf_name());
            return None;
        },
    };

    widget.set_disabled(record.flags().is_read_only());

    Some(WidgetContainer::new(record.rect.width(), record.rect.height(), widget))
}
