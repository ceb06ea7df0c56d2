//! Border and content-box computation for annotation containers.
//!
//! Turns an annotation's border style dictionary and color into concrete
//! paint attributes, and shrinks the rectangle to the box left for content.

use crate::annotation_types::{AnnotationBorderStyle, BorderStyleType};
use crate::geometry::Rect;
use serde::Serialize;
use std::fmt;

/// Background lightening factor for text annotation popups.
pub const BACKGROUND_ENLIGHT: f32 = 0.7;

/// An 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Rgb {
    /// Red
    pub r: u8,
    /// Green
    pub g: u8,
    /// Blue
    pub b: u8,
}

impl Rgb {
    /// Opaque black.
    pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

    /// Create a color from 8-bit channels.
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Convert 0.0–1.0 channels, rounding half up.
    ///
    /// # Examples
    ///
    /// ```
    /// use pdf_annotation_layer::style::Rgb;
    ///
    /// assert_eq!(Rgb::from_unit([1.0, 0.5, 0.0]), Rgb::new(255, 128, 0));
    /// ```
    pub fn from_unit(color: [f32; 3]) -> Self {
        Self {
            r: unit_to_byte_rounded(color[0]),
            g: unit_to_byte_rounded(color[1]),
            b: unit_to_byte_rounded(color[2]),
        }
    }

    /// Mix `factor` of white into a 0.0–1.0 color, truncating to 8 bits.
    ///
    /// Used for popup backgrounds so the note text stays readable on top of
    /// the annotation color.
    pub fn enlightened(color: [f32; 3], factor: f32) -> Self {
        let lighten = |c: f32| factor * (1.0 - c) + c;
        Self {
            r: unit_to_byte_truncated(lighten(color[0])),
            g: unit_to_byte_truncated(lighten(color[1])),
            b: unit_to_byte_truncated(lighten(color[2])),
        }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

fn unit_to_byte_rounded(c: f32) -> u8 {
    // f32::round rounds half away from zero, which is half up for c >= 0.
    (c.clamp(0.0, 1.0) * 255.0).round() as u8
}

fn unit_to_byte_truncated(c: f32) -> u8 {
    (c.clamp(0.0, 1.0) * 255.0) as u8
}

/// How the border line is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BorderLine {
    /// Solid line on all edges
    Solid,
    /// Dashed line on all edges
    Dashed,
    /// Solid line on the bottom edge only
    Underline,
}

/// Elliptical corner radius, rendered as `h / v`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CornerRadius {
    /// Horizontal radius
    pub horizontal: f32,
    /// Vertical radius
    pub vertical: f32,
}

impl fmt::Display for CornerRadius {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}px / {}px", self.horizontal, self.vertical)
    }
}

/// Paint attributes of a visible border.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BorderPaint {
    /// Border width
    pub width: f32,
    /// Corner radius, when either radius is positive
    pub radius: Option<CornerRadius>,
    /// Line treatment; `None` for styles that are not drawn (beveled, inset)
    pub line: Option<BorderLine>,
    /// Border color
    pub color: Rgb,
}

/// Geometry and paint derived from a record's rectangle and border.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComputedStyle {
    /// Width left for content
    pub content_width: f32,
    /// Height left for content
    pub content_height: f32,
    /// Border paint, `None` when the border width is zero
    pub border: Option<BorderPaint>,
}

/// Compute the content box and border paint of an annotation container.
///
/// A non-underline border of width `w` takes `2w` from both spans; an
/// underline only paints the bottom edge and takes no space, which matches
/// how Acrobat lays these out. Without an explicit color the border is black.
///
/// # Examples
///
/// ```
/// use pdf_annotation_layer::annotation_types::AnnotationBorderStyle;
/// use pdf_annotation_layer::geometry::Rect;
/// use pdf_annotation_layer::style::compute_style;
///
/// let rect = Rect::from_points(0.0, 0.0, 100.0, 20.0);
/// let style = compute_style(&rect, &AnnotationBorderStyle::solid(2.0), None);
/// assert_eq!(style.content_width, 96.0);
/// assert_eq!(style.content_height, 16.0);
/// ```
pub fn compute_style(
    rect: &Rect,
    border_style: &AnnotationBorderStyle,
    color: Option<[f32; 3]>,
) -> ComputedStyle {
    let mut content_width = rect.width();
    let mut content_height = rect.height();

    if border_style.width <= 0.0 {
        return ComputedStyle {
            content_width,
            content_height,
            border: None,
        };
    }

    if border_style.style != BorderStyleType::Underline {
        content_width -= 2.0 * border_style.width;
        content_height -= 2.0 * border_style.width;
    }

    let radius = (border_style.horizontal_corner_radius > 0.0
        || border_style.vertical_corner_radius > 0.0)
        .then_some(CornerRadius {
            horizontal: border_style.horizontal_corner_radius,
            vertical: border_style.vertical_corner_radius,
        });

    let line = match border_style.style {
        BorderStyleType::Solid => Some(BorderLine::Solid),
        BorderStyleType::Dashed => Some(BorderLine::Dashed),
        BorderStyleType::Underline => Some(BorderLine::Underline),
        BorderStyleType::Beveled => {
            log::warn!("Unimplemented border style: beveled");
            None
        },
        BorderStyleType::Inset => {
            log::warn!("Unimplemented border style: inset");
            None
        },
    };

    ComputedStyle {
        content_width,
        content_height,
        border: Some(BorderPaint {
            width: border_style.width,
            radius,
            line,
            color: color.map(Rgb::from_unit).unwrap_or(Rgb::BLACK),
        }),
    }
}
