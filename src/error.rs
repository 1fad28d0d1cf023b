//! Error types for schema conversion and rendering.
use thiserror::Error;

/// Failure of a single conversion call. There is no partial result: a call
/// either yields a complete `SchemaNode` or one of these.
#[derive(Debug, Error)]
pub enum ConversionError {
    /// The supplied JSON text could not be decoded.
    #[error("malformed JSON input at {path}: {message}")]
    MalformedInput { path: String, message: String },

    /// A value reached the classifier that has no schema kind.
    #[error("unsupported value type: {found}")]
    UnsupportedType { found: String },

    /// The value nests deeper than the converter is configured to follow.
    #[error("value nesting exceeds the depth limit of {limit}")]
    DepthLimitExceeded { limit: usize },
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to render schema as JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to render schema as YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T, E = ConversionError> = std::result::Result<T, E>;
