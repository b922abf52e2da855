//! Error types for review_descriptors
//!
//! The extraction core itself never fails; errors come from configuration
//! validation, JSON parsing and the tagger seam.

use thiserror::Error;

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, DescriptorError>;

/// Errors surfaced by the crate
#[derive(Debug, Error)]
pub enum DescriptorError {
    /// Configuration values outside their allowed range
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The tagging service could not produce tokens for a review
    #[error("tagger error: {0}")]
    Tagger(String),

    /// Malformed JSON input (config, lexicon, tokens or summary)
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl DescriptorError {
    /// Create an invalid configuration error
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        DescriptorError::InvalidConfig(msg.into())
    }

    /// Create a tagger error
    pub fn tagger(msg: impl Into<String>) -> Self {
        DescriptorError::Tagger(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DescriptorError::invalid_config("adjective_top_k must be > 0");
        assert_eq!(
            err.to_string(),
            "invalid configuration: adjective_top_k must be > 0"
        );

        let err = DescriptorError::tagger("model not loaded");
        assert_eq!(err.to_string(), "tagger error: model not loaded");
    }

    #[test]
    fn test_json_error_conversion() {
        fn parse(input: &str) -> Result<serde_json::Value> {
            Ok(serde_json::from_str(input)?)
        }

        let err = parse("{not json").unwrap_err();
        assert!(matches!(err, DescriptorError::Json(_)));
    }
}
