//! Configuration for annotation rendering.

/// Smallest width/height (in layout units) a text annotation icon may have.
pub const ANNOT_MIN_SIZE: f32 = 10.0;

/// Annotation rendering configuration.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Base path prepended to text-annotation icon file names.
    pub image_resources_path: String,

    /// Open link annotations with a URL in a new browsing context.
    pub open_external_links_in_new_window: bool,

    /// Minimum icon size for text annotations.
    pub min_annotation_size: f32,

    /// Stacking order a text annotation container starts at.
    pub base_z_index: i32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderConfig {
    /// Create new configuration with defaults.
    pub fn new() -> Self {
        Self {
            image_resources_path: "./images/".to_string(),
            open_external_links_in_new_window: false,
            min_annotation_size: ANNOT_MIN_SIZE,
            base_z_index: 0,
        }
    }

    /// Set the icon asset base path.
    pub fn with_image_resources_path(mut self, path: impl Into<String>) -> Self {
        self.image_resources_path = path.into();
        self
    }

    /// Open external links in a new window.
    pub fn with_external_links_in_new_window(mut self, enable: bool) -> Self {
        self.open_external_links_in_new_window = enable;
        self
    }

    /// Set the minimum text annotation size.
    pub fn with_min_annotation_size(mut self, size: f32) -> Self {
        self.min_annotation_size = size;
        self
    }

    /// Set the starting stacking order of popup containers.
    pub fn with_base_z_index(mut self, z_index: i32) -> Self {
        self.base_z_index = z_index;
        self
    }

    /// Resolve the icon image path for a text annotation icon name.
    pub fn icon_path(&self, icon_name: &str) -> String {
        format!("{}annotation-{}.svg", self.image_resources_path, icon_name.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RenderConfig::default();
        assert_eq!(config.min_annotation_size, 10.0);
        assert!(!config.open_external_links_in_new_window);
        assert_eq!(config.base_z_index, 0);
    }

    #[test]
    fn test_builders() {
        let config = RenderConfig::new()
            .with_image_resources_path("/static/")
            .with_external_links_in_new_window(true)
            .with_min_annotation_size(16.0)
            .with_base_z_index(3);
        assert_eq!(config.image_resources_path, "/static/");
        assert!(config.open_external_links_in_new_window);
        assert_eq!(config.min_annotation_size, 16.0);
        assert_eq!(config.base_z_index, 3);
    }

    #[test]
    fn test_icon_path_lowercases_name() {
        let config = RenderConfig::new().with_image_resources_path("img/");
        assert_eq!(config.icon_path("NewParagraph"), "img/annotation-newparagraph.svg");
    }
}
