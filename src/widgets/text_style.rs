//! Text styling shared by form controls and static widget text.

use crate::fonts::{FontResolver, FontResource};
use crate::node::Node;
use crate::record::AnnotationRecord;

/// Family list used when a font carries no fallback of its own.
pub const DEFAULT_FALLBACK_FAMILY: &str = "Helvetica, sans-serif";

/// Inline text direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Left to right
    #[default]
    Ltr,
    /// Right to left
    Rtl,
}

impl Direction {
    /// Direction for a record's font direction; negative means RTL.
    pub fn from_font_direction(font_direction: f32) -> Self {
        if font_direction < 0.0 {
            Self::Rtl
        } else {
            Self::Ltr
        }
    }

    /// CSS keyword.
    pub fn css_value(&self) -> &'static str {
        match self {
            Self::Ltr => "ltr",
            Self::Rtl => "rtl",
        }
    }
}

/// Font weight derived from a font resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontWeight {
    /// Regular
    Normal,
    /// Bold
    Bold,
    /// Bolder than the inherited weight
    Bolder,
}

impl FontWeight {
    /// CSS keyword.
    pub fn css_value(&self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Bold => "bold",
            Self::Bolder => "bolder",
        }
    }
}

/// Font style derived from a font resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontStyle {
    /// Upright
    Normal,
    /// Italic
    Italic,
}

impl FontStyle {
    /// CSS keyword.
    pub fn css_value(&self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Italic => "italic",
        }
    }
}

/// Face attributes taken from a resolved font.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontFace {
    /// Weight
    pub weight: FontWeight,
    /// Style
    pub style: FontStyle,
    /// CSS family list
    pub family: String,
}

impl FontFace {
    /// Derive the face from a font resource.
    pub fn from_resource(font: &FontResource) -> Self {
        let weight = match (font.black, font.bold) {
            (true, true) => FontWeight::Bolder,
            (true, false) | (false, true) => FontWeight::Bold,
            (false, false) => FontWeight::Normal,
        };
        let style = if font.italic {
            FontStyle::Italic
        } else {
            FontStyle::Normal
        };
        let fallback = font
            .fallback_name
            .as_deref()
            .filter(|name| !name.is_empty())
            .unwrap_or(DEFAULT_FALLBACK_FAMILY);
        let family = match font.loaded_name.as_deref().filter(|name| !name.is_empty()) {
            Some(loaded) => format!("\"{}\", {}", loaded, fallback),
            None => fallback.to_string(),
        };
        Self {
            weight,
            style,
            family,
        }
    }
}

/// Text styling of a control or text box.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TextStyle {
    /// Font size in layout units
    pub font_size: Option<f32>,
    /// Text direction
    pub direction: Direction,
    /// Face from the resolved font, if the font is loaded
    pub face: Option<FontFace>,
}

impl TextStyle {
    /// Build the styling for a record, resolving its font reference.
    pub fn from_record(record: &AnnotationRecord, fonts: &dyn FontResolver) -> Self {
        let face = record
            .font_ref_name
            .as_deref()
            .and_then(|name| {
                let font = fonts.resolve(name);
                if font.is_none() {
                    log::debug!("Font resource {} is not loaded", name);
                }
                font
            })
            .map(|font| FontFace::from_resource(&font));

        Self {
            font_size: record.explicit_font_size(),
            direction: Direction::from_font_direction(record.font_direction),
            face,
        }
    }

    /// Write the styling onto a node.
    pub fn apply(&self, node: &mut Node) {
        if let Some(size) = self.font_size {
            node.set_style("font-size", format!("{}px", size));
        }
        node.set_style("direction", self.direction.css_value());
        if let Some(face) = &self.face {
            node.set_style("font-weight", face.weight.css_value());
            node.set_style("font-style", face.style.css_value());
            node.set_style("font-family", face.family.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotation_types::FieldType;
    use crate::fonts::NoFonts;
    use crate::geometry::Rect;
    use crate::node::ElementKind;
    use std::collections::HashMap;

    fn record() -> AnnotationRecord {
        AnnotationRecord::widget(FieldType::Text, Rect::from_points(0.0, 0.0, 100.0, 20.0))
    }

    #[test]
    fn test_weight_combinations() {
        let weight = |black, bold| {
            let font = FontResource {
                black,
                bold,
                ..Default::default()
            };
            FontFace::from_resource(&font).weight
        };
        assert_eq!(weight(true, true), FontWeight::Bolder);
        assert_eq!(weight(true, false), FontWeight::Bold);
        assert_eq!(weight(false, true), FontWeight::Bold);
        assert_eq!(weight(false, false), FontWeight::Normal);
    }

    #[test]
    fn test_family_quotes_loaded_name() {
        let face = FontFace::from_resource(&FontResource::new("g_font_7").with_fallback("serif"));
        assert_eq!(face.family, "\"g_font_7\", serif");
    }

    #[test]
    fn test_family_default_fallback() {
        let face = FontFace::from_resource(&FontResource::new("g_font_7"));
        assert_eq!(face.family, "\"g_font_7\", Helvetica, sans-serif");
        let face = FontFace::from_resource(&FontResource::default());
        assert_eq!(face.family, DEFAULT_FALLBACK_FAMILY);
    }

    #[test]
    fn test_rtl_direction() {
        assert_eq!(Direction::from_font_direction(-1.0), Direction::Rtl);
        assert_eq!(Direction::from_font_direction(0.0), Direction::Ltr);
        assert_eq!(Direction::from_font_direction(1.0), Direction::Ltr);
    }

    #[test]
    fn test_apply_without_font() {
        let style = TextStyle::from_record(&record().with_font_size(11.0), &NoFonts);
        let mut node = Node::new(ElementKind::TextInput);
        style.apply(&mut node);
        assert_eq!(node.style("font-size"), Some("11px"));
        assert_eq!(node.style("direction"), Some("ltr"));
        assert!(node.style("font-family").is_none());
    }

    #[test]
    fn test_apply_with_resolved_font() {
        let mut fonts = HashMap::new();
        fonts.insert("F1".to_string(), FontResource::new("g_f1").italic().bold());
        let rec = record().with_font("F1", None).with_font_direction(-1.0);

        let mut node = Node::new(ElementKind::TextInput);
        TextStyle::from_record(&rec, &fonts).apply(&mut node);
        assert_eq!(node.style("direction"), Some("rtl"));
        assert_eq!(node.style("font-weight"), Some("bold"));
        assert_eq!(node.style("font-style"), Some("italic"));
        assert_eq!(node.style("font-family"), Some("\"g_f1\", Helvetica, sans-serif"));
        assert!(node.style("font-size").is_none());
    }
}
