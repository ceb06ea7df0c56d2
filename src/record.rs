//! Decoded annotation records.
//!
//! An [`AnnotationRecord`] is the flattened, already-decoded view of one
//! annotation dictionary: everything the builders need and nothing that
//! still refers back into the PDF object graph. Records arrive as camelCase
//! JSON from the document worker, or are constructed directly.

use crate::annotation_types::{AnnotationBorderStyle, AnnotationType, FieldType, TextAlignment};
use crate::error::{Error, Result};
use crate::field_flags::DecodedFlags;
use crate::geometry::Rect;
use serde::Deserialize;

/// One entry of a choice field's option list.
///
/// The label is what the user sees; the value is what the field stores.
/// Options given as a bare string use it for both.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "RawChoiceOption")]
pub struct ChoiceOption {
    /// Export value
    pub value: String,
    /// Display text
    pub label: String,
}

impl ChoiceOption {
    /// Option whose value and label are the same string.
    pub fn new(label: impl Into<String>) -> Self {
        let label = label.into();
        Self {
            value: label.clone(),
            label,
        }
    }

    /// Option with a separate export value.
    pub fn with_value(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawChoiceOption {
    Pair([String; 2]),
    Label(String),
    #[serde(rename_all = "camelCase")]
    Entry {
        export_value: String,
        display_value: String,
    },
}

impl From<RawChoiceOption> for ChoiceOption {
    fn from(raw: RawChoiceOption) -> Self {
        match raw {
            RawChoiceOption::Pair([value, label]) => Self::with_value(value, label),
            RawChoiceOption::Label(label) => Self::new(label),
            RawChoiceOption::Entry {
                export_value,
                display_value,
            } => Self::with_value(export_value, display_value),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_icon_name() -> String {
    "Note".to_string()
}

/// Flag words arrive as signed or unsigned integers of any width.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawFlagWord {
    Signed(i64),
    Unsigned(u64),
}

/// Keeps the low 32 bits of the flag word, so bit 32 survives a negative
/// encoding.
fn deserialize_flag_word<'de, D>(deserializer: D) -> std::result::Result<u32, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(match RawFlagWord::deserialize(deserializer)? {
        RawFlagWord::Signed(word) => word as u32,
        RawFlagWord::Unsigned(word) => word as u32,
    })
}

/// A decoded annotation.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnotationRecord {
    /// Bounds `[x0, y0, x1, y1]`
    pub rect: Rect,

    /// Annotation type
    pub annotation_type: AnnotationType,

    /// Border style dictionary
    #[serde(default)]
    pub border_style: AnnotationBorderStyle,

    /// Annotation color, channels in 0.0–1.0
    #[serde(default)]
    pub color: Option<[f32; 3]>,

    // ===== Widget annotation fields =====
    /// Form field type (widgets only)
    #[serde(default)]
    pub field_type: Option<FieldType>,

    /// Raw field flags (`/Ff`), low 32 bits
    #[serde(default, deserialize_with = "deserialize_flag_word")]
    pub field_flags: u32,

    /// Current field value
    #[serde(default)]
    pub field_value: String,

    /// Maximum text length
    #[serde(default)]
    pub max_len: Option<u32>,

    /// Text alignment (`/Q`)
    #[serde(default)]
    pub text_alignment: TextAlignment,

    /// Font resource name from the default appearance
    #[serde(default)]
    pub font_ref_name: Option<String>,

    /// Font size from the default appearance; absent or zero means auto
    #[serde(default)]
    pub font_size: Option<f32>,

    /// Font direction; negative means right-to-left
    #[serde(default)]
    pub font_direction: f32,

    /// Choice field options in display order
    #[serde(default)]
    pub options: Vec<ChoiceOption>,

    // ===== Text annotation fields =====
    /// Popup title (usually the author)
    #[serde(default)]
    pub title: String,

    /// Popup body
    #[serde(default)]
    pub content: String,

    /// Whether the popup background uses the annotation color
    #[serde(default)]
    pub has_bg_color: bool,

    /// Icon name (`Note`, `Comment`, `Help`, ...)
    #[serde(default = "default_icon_name")]
    pub name: String,

    // ===== Link annotation fields =====
    /// Link target
    #[serde(default)]
    pub url: Option<String>,

    /// Whether the annotation has an HTML representation at all
    #[serde(default = "default_true")]
    pub has_html: bool,
}

impl AnnotationRecord {
    /// Create a record of the given type with defaults for everything else.
    pub fn new(annotation_type: AnnotationType, rect: Rect) -> Self {
        Self {
            rect,
            annotation_type,
            border_style: AnnotationBorderStyle::default(),
            color: None,
            field_type: None,
            field_flags: 0,
            field_value: String::new(),
            max_len: None,
            text_alignment: TextAlignment::Left,
            font_ref_name: None,
            font_size: None,
            font_direction: 0.0,
            options: Vec::new(),
            title: String::new(),
            content: String::new(),
            has_bg_color: false,
            name: default_icon_name(),
            url: None,
            has_html: true,
        }
    }

    /// Create a form widget record.
    pub fn widget(field_type: FieldType, rect: Rect) -> Self {
        Self {
            field_type: Some(field_type),
            ..Self::new(AnnotationType::Widget, rect)
        }
    }

    /// Create a text (sticky note) record.
    pub fn text(rect: Rect, title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            ..Self::new(AnnotationType::Text, rect)
        }
    }

    /// Create a link record.
    pub fn link(rect: Rect, url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            ..Self::new(AnnotationType::Link, rect)
        }
    }

    /// Decode a record from JSON.
    ///
    /// The rectangle must be finite; its corners are normalized so that
    /// `x0 <= x1` and `y0 <= y1`.
    pub fn from_json(json: &str) -> Result<Self> {
        let mut record: Self = serde_json::from_str(json)?;
        if !record.rect.to_array().iter().all(|c| c.is_finite()) {
            return Err(Error::InvalidRecord(format!(
                "rect has non-finite coordinates: {:?}",
                record.rect.to_array()
            )));
        }
        record.rect = record.rect.normalized();
        Ok(record)
    }

    /// Decoded view of the field flags.
    pub fn flags(&self) -> DecodedFlags {
        DecodedFlags::new(self.field_flags)
    }

    /// Explicit font size, if the record carries a usable one.
    pub fn explicit_font_size(&self) -> Option<f32> {
        self.font_size.filter(|size| *size > 0.0)
    }

    /// Link target, if non-empty.
    pub fn link_url(&self) -> Option<&str> {
        self.url.as_deref().filter(|url| !url.is_empty())
    }

    /// Set the border style.
    pub fn with_border_style(mut self, border_style: AnnotationBorderStyle) -> Self {
        self.border_style = border_style;
        self
    }

    /// Set the annotation color.
    pub fn with_color(mut self, r: f32, g: f32, b: f32) -> Self {
        self.color = Some([r, g, b]);
        self
    }

    /// Set the raw field flags.
    pub fn with_field_flags(mut self, flags: u32) -> Self {
        self.field_flags = flags;
        self
    }

    /// Set the field value.
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.field_value = value.into();
        self
    }

    /// Set the maximum text length.
    pub fn with_max_len(mut self, max_len: u32) -> Self {
        self.max_len = Some(max_len);
        self
    }

    /// Set the text alignment.
    pub fn with_alignment(mut self, alignment: TextAlignment) -> Self {
        self.text_alignment = alignment;
        self
    }

    /// Set the font resource name and size.
    pub fn with_font(mut self, ref_name: impl Into<String>, size: Option<f32>) -> Self {
        self.font_ref_name = Some(ref_name.into());
        self.font_size = size;
        self
    }

    /// Set the font size.
    pub fn with_font_size(mut self, size: f32) -> Self {
        self.font_size = Some(size);
        self
    }

    /// Set the font direction (negative for right-to-left).
    pub fn with_font_direction(mut self, direction: f32) -> Self {
        self.font_direction = direction;
        self
    }

    /// Set the choice options.
    pub fn with_options(mut self, options: Vec<ChoiceOption>) -> Self {
        self.options = options;
        self
    }

    /// Set the text annotation icon name.
    pub fn with_icon(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Use the annotation color as popup background.
    pub fn with_bg_color(mut self, has_bg_color: bool) -> Self {
        self.has_bg_color = has_bg_color;
        self
    }

    /// Set whether the annotation has an HTML representation.
    pub fn with_html(mut self, has_html: bool) -> Self {
        self.has_html = has_html;
        self
    }
}
