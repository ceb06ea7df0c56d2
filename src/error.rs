//! Error types for the annotation layer.
//!
//! Most degenerate inputs (push buttons, unknown field types, records without
//! an HTML representation) are not errors: they render to nothing. Only the
//! cases below abort a build.

/// Result type alias for annotation layer operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while building an annotation element.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Annotation type has no static-mode builder
    #[error("Unsupported annotationType: {0}")]
    UnsupportedAnnotationType(String),

    /// Annotation record could not be decoded
    #[error("Invalid annotation record: {0}")]
    InvalidRecord(String),

    /// JSON decoding error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_annotation_type_error() {
        let err = Error::UnsupportedAnnotationType("Ink".to_string());
        let msg = format!("{}", err);
        assert!(msg.contains("Unsupported annotationType"));
        assert!(msg.contains("Ink"));
    }

    #[test]
    fn test_invalid_record_error() {
        let err = Error::InvalidRecord("rect must have 4 entries".to_string());
        assert!(format!("{}", err).contains("rect must have 4 entries"));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: Error = json_err.into();
        assert!(format!("{}", err).starts_with("JSON error"));
    }

    #[test]
    fn test_error_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Error>();
    }
}
