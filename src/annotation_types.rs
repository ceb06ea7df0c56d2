//! Closed enumerations for the tagged fields of an annotation record.
//!
//! Upstream decoders emit these either as PDF names (`/Subtype /Widget`,
//! `/FT /Tx`, `/S /D`) or as the numeric codes of the viewer protocol, so
//! every enum here accepts both when deserialized.

use serde::{Deserialize, Serialize};

/// Raw tag as it appears in a decoded record: a PDF name or a numeric code.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum RawTag {
    Code(i64),
    Name(String),
}

/// Annotation type per PDF spec Table 169.
///
/// Numeric codes follow the viewer protocol (1 = Text … 26 = Redact).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawTag", into = "String")]
pub enum AnnotationType {
    /// Text annotation (sticky note)
    Text,
    /// Link annotation
    Link,
    /// Free text annotation
    FreeText,
    /// Line annotation
    Line,
    /// Square annotation
    Square,
    /// Circle annotation
    Circle,
    /// Polygon annotation
    Polygon,
    /// Polyline annotation
    PolyLine,
    /// Highlight annotation
    Highlight,
    /// Underline annotation
    Underline,
    /// Squiggly underline annotation
    Squiggly,
    /// Strikeout annotation
    StrikeOut,
    /// Rubber stamp annotation
    Stamp,
    /// Caret annotation
    Caret,
    /// Ink annotation
    Ink,
    /// Popup annotation
    Popup,
    /// File attachment annotation
    FileAttachment,
    /// Sound annotation
    Sound,
    /// Movie annotation
    Movie,
    /// Widget annotation (form field)
    Widget,
    /// Screen annotation
    Screen,
    /// Printer's mark annotation
    PrinterMark,
    /// Trap network annotation
    TrapNet,
    /// Watermark annotation
    Watermark,
    /// 3D annotation
    ThreeD,
    /// Redaction annotation
    Redact,
    /// Anything the decoder could not classify
    Unknown,
}

const ANNOTATION_TYPES: [AnnotationType; 26] = [
    AnnotationType::Text,
    AnnotationType::Link,
    AnnotationType::FreeText,
    AnnotationType::Line,
    AnnotationType::Square,
    AnnotationType::Circle,
    AnnotationType::Polygon,
    AnnotationType::PolyLine,
    AnnotationType::Highlight,
    AnnotationType::Underline,
    AnnotationType::Squiggly,
    AnnotationType::StrikeOut,
    AnnotationType::Stamp,
    AnnotationType::Caret,
    AnnotationType::Ink,
    AnnotationType::Popup,
    AnnotationType::FileAttachment,
    AnnotationType::Sound,
    AnnotationType::Movie,
    AnnotationType::Widget,
    AnnotationType::Screen,
    AnnotationType::PrinterMark,
    AnnotationType::TrapNet,
    AnnotationType::Watermark,
    AnnotationType::ThreeD,
    AnnotationType::Redact,
];

impl AnnotationType {
    /// Get the PDF name for this annotation type.
    pub fn pdf_name(&self) -> &'static str {
        match self {
            Self::Text => "Text",
            Self::Link => "Link",
            Self::FreeText => "FreeText",
            Self::Line => "Line",
            Self::Square => "Square",
            Self::Circle => "Circle",
            Self::Polygon => "Polygon",
            Self::PolyLine => "PolyLine",
            Self::Highlight => "Highlight",
            Self::Underline => "Underline",
            Self::Squiggly => "Squiggly",
            Self::StrikeOut => "StrikeOut",
            Self::Stamp => "Stamp",
            Self::Caret => "Caret",
            Self::Ink => "Ink",
            Self::Popup => "Popup",
            Self::FileAttachment => "FileAttachment",
            Self::Sound => "Sound",
            Self::Movie => "Movie",
            Self::Widget => "Widget",
            Self::Screen => "Screen",
            Self::PrinterMark => "PrinterMark",
            Self::TrapNet => "TrapNet",
            Self::Watermark => "Watermark",
            Self::ThreeD => "3D",
            Self::Redact => "Redact",
            Self::Unknown => "Unknown",
        }
    }

    /// Parse from PDF name. Matching is case-insensitive so upper-case
    /// protocol names (`WIDGET`) are accepted too.
    pub fn from_pdf_name(name: &str) -> Self {
        ANNOTATION_TYPES
            .iter()
            .copied()
            .find(|t| t.pdf_name().eq_ignore_ascii_case(name))
            .unwrap_or(Self::Unknown)
    }

    /// Numeric protocol code, `0` for [`AnnotationType::Unknown`].
    pub fn code(&self) -> i64 {
        ANNOTATION_TYPES
            .iter()
            .position(|t| t == self)
            .map(|i| i as i64 + 1)
            .unwrap_or(0)
    }

    /// Parse from numeric protocol code.
    pub fn from_code(code: i64) -> Self {
        if code < 1 {
            return Self::Unknown;
        }
        ANNOTATION_TYPES
            .get((code - 1) as usize)
            .copied()
            .unwrap_or(Self::Unknown)
    }
}

impl From<RawTag> for AnnotationType {
    fn from(raw: RawTag) -> Self {
        match raw {
            RawTag::Code(code) => Self::from_code(code),
            RawTag::Name(name) => Self::from_pdf_name(&name),
        }
    }
}

impl From<AnnotationType> for String {
    fn from(t: AnnotationType) -> Self {
        t.pdf_name().to_string()
    }
}

/// Form field type per PDF spec Table 220 (`/FT`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FieldType {
    /// Text field (Tx)
    Text,
    /// Choice field (Ch)
    Choice,
    /// Button field (Btn): checkbox, radio or push button
    Button,
    /// Signature field (Sig)
    Signature,
    /// Anything else
    Unknown,
}

impl FieldType {
    /// Get the PDF name (`Tx`, `Ch`, `Btn`, `Sig`).
    pub fn pdf_name(&self) -> &'static str {
        match self {
            Self::Text => "Tx",
            Self::Choice => "Ch",
            Self::Button => "Btn",
            Self::Signature => "Sig",
            Self::Unknown => "Unknown",
        }
    }

    /// Parse from PDF name.
    pub fn from_pdf_name(name: &str) -> Self {
        match name {
            "Tx" => Self::Text,
            "Ch" => Self::Choice,
            "Btn" => Self::Button,
            "Sig" => Self::Signature,
            _ => Self::Unknown,
        }
    }
}

impl From<String> for FieldType {
    fn from(name: String) -> Self {
        Self::from_pdf_name(&name)
    }
}

impl From<FieldType> for String {
    fn from(t: FieldType) -> Self {
        t.pdf_name().to_string()
    }
}

/// Border style type per PDF spec Table 166.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "RawTag", into = "String")]
pub enum BorderStyleType {
    /// Solid border (S, code 1)
    #[default]
    Solid,
    /// Dashed border (D, code 2)
    Dashed,
    /// Beveled border (B, code 3)
    Beveled,
    /// Inset border (I, code 4)
    Inset,
    /// Underline border (U, code 5)
    Underline,
}

impl BorderStyleType {
    /// Get PDF name for this border style.
    pub fn pdf_name(&self) -> &'static str {
        match self {
            Self::Solid => "S",
            Self::Dashed => "D",
            Self::Beveled => "B",
            Self::Inset => "I",
            Self::Underline => "U",
        }
    }

    /// Parse from PDF name.
    pub fn from_pdf_name(name: &str) -> Self {
        match name {
            "S" => Self::Solid,
            "D" => Self::Dashed,
            "B" => Self::Beveled,
            "I" => Self::Inset,
            "U" => Self::Underline,
            _ => Self::Solid,
        }
    }

    /// Parse from numeric protocol code.
    pub fn from_code(code: i64) -> Self {
        match code {
            2 => Self::Dashed,
            3 => Self::Beveled,
            4 => Self::Inset,
            5 => Self::Underline,
            _ => Self::Solid,
        }
    }
}

impl From<RawTag> for BorderStyleType {
    fn from(raw: RawTag) -> Self {
        match raw {
            RawTag::Code(code) => Self::from_code(code),
            RawTag::Name(name) => Self::from_pdf_name(&name),
        }
    }
}

impl From<BorderStyleType> for String {
    fn from(s: BorderStyleType) -> Self {
        s.pdf_name().to_string()
    }
}

/// Border style dictionary of an annotation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnnotationBorderStyle {
    /// Border width in layout units.
    pub width: f32,
    /// Border style type.
    pub style: BorderStyleType,
    /// Horizontal corner radius.
    pub horizontal_corner_radius: f32,
    /// Vertical corner radius.
    pub vertical_corner_radius: f32,
}

impl Default for AnnotationBorderStyle {
    /// PDF default border: solid, 1 unit wide, square corners.
    fn default() -> Self {
        Self::solid(1.0)
    }
}

impl AnnotationBorderStyle {
    /// Create a solid border with given width.
    pub fn solid(width: f32) -> Self {
        Self {
            width,
            style: BorderStyleType::Solid,
            horizontal_corner_radius: 0.0,
            vertical_corner_radius: 0.0,
        }
    }

    /// Create a border of the given style.
    pub fn with_style(width: f32, style: BorderStyleType) -> Self {
        Self {
            style,
            ..Self::solid(width)
        }
    }

    /// Create no visible border.
    pub fn none() -> Self {
        Self::solid(0.0)
    }

    /// Set rounded corners.
    pub fn with_corner_radius(mut self, horizontal: f32, vertical: f32) -> Self {
        self.horizontal_corner_radius = horizontal;
        self.vertical_corner_radius = vertical;
        self
    }
}

/// Text alignment (quadding, `/Q`) per PDF spec.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "i32", into = "i32")]
pub enum TextAlignment {
    /// Left-justified (0)
    #[default]
    Left,
    /// Centered (1)
    Center,
    /// Right-justified (2)
    Right,
}

impl TextAlignment {
    /// Get PDF integer value.
    pub fn to_pdf_int(&self) -> i32 {
        match self {
            Self::Left => 0,
            Self::Center => 1,
            Self::Right => 2,
        }
    }

    /// Parse from PDF integer.
    pub fn from_pdf_int(value: i32) -> Self {
        match value {
            1 => Self::Center,
            2 => Self::Right,
            _ => Self::Left,
        }
    }

    /// CSS `text-align` keyword.
    pub fn css_value(&self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
        }
    }
}

impl From<i32> for TextAlignment {
    fn from(value: i32) -> Self {
        Self::from_pdf_int(value)
    }
}

impl From<TextAlignment> for i32 {
    fn from(a: TextAlignment) -> Self {
        a.to_pdf_int()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_annotation_type_roundtrip() {
        let types = vec![
            AnnotationType::Text,
            AnnotationType::Link,
            AnnotationType::Widget,
            AnnotationType::ThreeD,
            AnnotationType::Redact,
        ];

        for t in types {
            assert_eq!(AnnotationType::from_pdf_name(t.pdf_name()), t);
            assert_eq!(AnnotationType::from_code(t.code()), t);
        }
    }

    #[test]
    fn test_annotation_type_codes() {
        assert_eq!(AnnotationType::Text.code(), 1);
        assert_eq!(AnnotationType::Link.code(), 2);
        assert_eq!(AnnotationType::Widget.code(), 20);
        assert_eq!(AnnotationType::Unknown.code(), 0);
        assert_eq!(AnnotationType::from_code(0), AnnotationType::Unknown);
        assert_eq!(AnnotationType::from_code(99), AnnotationType::Unknown);
    }

    #[test]
    fn test_annotation_type_accepts_upper_case() {
        assert_eq!(AnnotationType::from_pdf_name("WIDGET"), AnnotationType::Widget);
        assert_eq!(AnnotationType::from_pdf_name("link"), AnnotationType::Link);
        assert_eq!(AnnotationType::from_pdf_name("Bogus"), AnnotationType::Unknown);
    }

    #[test]
    fn test_annotation_type_deserialize() {
        let by_code: AnnotationType = serde_json::from_str("20").unwrap();
        let by_name: AnnotationType = serde_json::from_str("\"Widget\"").unwrap();
        assert_eq!(by_code, AnnotationType::Widget);
        assert_eq!(by_name, AnnotationType::Widget);
    }

    #[test]
    fn test_field_type_names() {
        assert_eq!(FieldType::from_pdf_name("Tx"), FieldType::Text);
        assert_eq!(FieldType::from_pdf_name("Ch"), FieldType::Choice);
        assert_eq!(FieldType::from_pdf_name("Btn"), FieldType::Button);
        assert_eq!(FieldType::from_pdf_name("Sig"), FieldType::Signature);
        assert_eq!(FieldType::from_pdf_name("Xx"), FieldType::Unknown);
    }

    #[test]
    fn test_border_style_parsing() {
        assert_eq!(BorderStyleType::from_pdf_name("U"), BorderStyleType::Underline);
        assert_eq!(BorderStyleType::from_code(2), BorderStyleType::Dashed);
        assert_eq!(BorderStyleType::from_code(42), BorderStyleType::Solid);

        let style: AnnotationBorderStyle =
            serde_json::from_str(r#"{"width": 2, "style": 5, "verticalCornerRadius": 3}"#)
                .unwrap();
        assert_eq!(style.width, 2.0);
        assert_eq!(style.style, BorderStyleType::Underline);
        assert_eq!(style.horizontal_corner_radius, 0.0);
        assert_eq!(style.vertical_corner_radius, 3.0);
    }

    #[test]
    fn test_text_alignment() {
        assert_eq!(TextAlignment::from_pdf_int(1), TextAlignment::Center);
        assert_eq!(TextAlignment::from_pdf_int(7), TextAlignment::Left);
        assert_eq!(TextAlignment::Right.css_value(), "right");
        assert_eq!(TextAlignment::Center.to_pdf_int(), 1);
    }
}
