//! Font resources referenced by annotation records.
//!
//! Fonts are loaded elsewhere. Widgets only look a loaded font up by the
//! resource name the record carries (`fontRefName`) and read a handful of
//! style attributes from it.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A loaded font, as far as text styling is concerned.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FontResource {
    /// Font is bold
    pub bold: bool,
    /// Font is italic
    pub italic: bool,
    /// Font is black (heavier than bold)
    pub black: bool,
    /// Name the font was registered under on the rendering surface
    pub loaded_name: Option<String>,
    /// Generic family list to fall back to
    pub fallback_name: Option<String>,
}

impl FontResource {
    /// Create a font registered under `loaded_name`.
    pub fn new(loaded_name: impl Into<String>) -> Self {
        Self {
            loaded_name: Some(loaded_name.into()),
            ..Default::default()
        }
    }

    /// Mark as bold.
    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Mark as italic.
    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    /// Mark as black.
    pub fn black(mut self) -> Self {
        self.black = true;
        self
    }

    /// Set the fallback family list.
    pub fn with_fallback(mut self, fallback: impl Into<String>) -> Self {
        self.fallback_name = Some(fallback.into());
        self
    }
}

/// Looks up loaded fonts by resource name.
///
/// Lookups are synchronous and must not have side effects; in practice this
/// is a cache of fonts already loaded for the page.
pub trait FontResolver {
    /// Resolve a font resource name, `None` when it is not loaded.
    fn resolve(&self, ref_name: &str) -> Option<FontResource>;
}

impl FontResolver for HashMap<String, FontResource> {
    fn resolve(&self, ref_name: &str) -> Option<FontResource> {
        self.get(ref_name).cloned()
    }
}

impl<F> FontResolver for F
where
    F: Fn(&str) -> Option<FontResource>,
{
    fn resolve(&self, ref_name: &str) -> Option<FontResource> {
        self(ref_name)
    }
}

/// Resolver that knows no fonts.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoFonts;

impl FontResolver for NoFonts {
    fn resolve(&self, _ref_name: &str) -> Option<FontResource> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_resolver() {
        let mut fonts = HashMap::new();
        fonts.insert("F1".to_string(), FontResource::new("g_font_1").bold());

        let font = fonts.resolve("F1").unwrap();
        assert!(font.bold);
        assert_eq!(font.loaded_name.as_deref(), Some("g_font_1"));
        assert!(fonts.resolve("F2").is_none());
    }

    #[test]
    fn test_closure_resolver() {
        let resolver = |name: &str| (name == "Helv").then(|| FontResource::new("Helvetica"));
        assert!(resolver.resolve("Helv").is_some());
        assert!(resolver.resolve("Cour").is_none());
    }

    #[test]
    fn test_no_fonts() {
        assert!(NoFonts.resolve("F1").is_none());
    }

    #[test]
    fn test_font_resource_deserialize() {
        let font: FontResource =
            serde_json::from_str(r#"{"italic": true, "loadedName": "g_f3"}"#).unwrap();
        assert!(font.italic);
        assert!(!font.bold);
        assert_eq!(font.loaded_name.as_deref(), Some("g_f3"));
        assert!(font.fallback_name.is_none());
    }
}
