// Allow some clippy lints that are too pedantic for this project
#![allow(clippy::should_implement_trait)]
#![allow(clippy::match_like_matches_macro)]

//! # PDF Annotation Layer
//!
//! Builds the interactive layer drawn over a rendered PDF page: one element
//! per annotation, positioned by the host and sized to the annotation
//! rectangle.
//!
//! ## Core Features
//!
//! - **Form Fields**: Editable text inputs, text areas, combo boxes, list
//!   boxes, checkboxes and radio buttons (ISO 32000-1:2008 §12.7)
//! - **Static Widgets**: Field values shown as read-only text
//! - **Text Annotations**: Note icons with a hover/pin popup (§12.5.6.4)
//! - **Link Annotations**: Anchors with an optional new-window policy (§12.5.6.5)
//! - **Borders**: Solid, dashed and underline borders with corner radii (§12.5.4)
//! - **HTML Output**: Element trees serialized to HTML fragments
//!
//! ## Architecture
//!
//! Records come in already decoded ([`record::AnnotationRecord`]). The
//! dispatcher in [`render`] builds a rendering-surface neutral element tree
//! ([`node::Node`]); converters such as [`converters::HtmlRenderer`] turn the
//! tree into a concrete format. Text annotation popups are driven by a small
//! state machine ([`popup::PopupController`]).
//!
//! ## Quick Start
//!
//! ```
//! use pdf_annotation_layer::{
//!     AnnotationRecord, AnnotationRenderer, FieldType, HtmlRenderer, NoFonts, Rect,
//!     RenderConfig, RenderMode,
//! };
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let renderer = AnnotationRenderer::new(RenderConfig::default());
//! let rect = Rect::from_points(72.0, 700.0, 272.0, 720.0);
//! let record = AnnotationRecord::widget(FieldType::Text, rect).with_value("John Doe");
//!
//! let element = renderer.render(&record, &NoFonts, RenderMode::Interactive)?;
//! let html = HtmlRenderer::new().render(element.as_ref().unwrap().root());
//! assert!(html.contains(r#"value="John Doe""#));
//! # Ok(())
//! # }
//! ```

// Error handling
pub mod error;

// Configuration
pub mod config;

// Decoded annotation data
pub mod annotation_types;
pub mod field_flags;
pub mod fonts;
pub mod geometry;
pub mod record;

// Element trees and styling
pub mod node;
pub mod style;

// Builders
pub mod popup;
pub mod render;
pub mod widgets;

// Output formats
pub mod converters;

// Re-exports
pub use annotation_types::{
    AnnotationBorderStyle, AnnotationType, BorderStyleType, FieldType, TextAlignment,
};
pub use config::RenderConfig;
pub use converters::HtmlRenderer;
pub use error::{Error, Result};
pub use fonts::{FontResolver, FontResource, NoFonts};
pub use geometry::Rect;
pub use node::{ElementKind, Node, PointerEvent};
pub use popup::{PopupAction, PopupController, PopupState, Transition};
pub use record::{AnnotationRecord, ChoiceOption};
pub use render::{render, AnnotationElement, AnnotationRenderer, PopupTarget, RenderMode};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
