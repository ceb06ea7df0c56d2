//! Output converters for annotation element trees.
//!
//! The element trees built by [`crate::render`] describe what to create, not
//! how. Converters turn them into a concrete format:
//! - **HTML**: an HTML fragment per annotation
//!
//! # Examples
//!
//! ```
//! use pdf_annotation_layer::converters::HtmlRenderer;
//! use pdf_annotation_layer::fonts::NoFonts;
//! use pdf_annotation_layer::geometry::Rect;
//! use pdf_annotation_layer::record::AnnotationRecord;
//! use pdf_annotation_layer::config::RenderConfig;
//! use pdf_annotation_layer::render::{render, RenderMode};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let rect = Rect::from_points(0.0, 0.0, 50.0, 12.0);
//! let record = AnnotationRecord::link(rect, "https://example.com");
//! let config = RenderConfig::default();
//! if let Some(element) = render(&record, &NoFonts, RenderMode::Static, &config)? {
//!     let html = HtmlRenderer::new().render(element.root());
//!     assert!(html.contains(r#"href="https://example.com""#));
//! }
//! # Ok(())
//! # }
//! ```

pub mod html;

pub use html::{escape_html, HtmlRenderer};
