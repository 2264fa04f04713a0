//! # Section Error Types
//!
//! Errors raised while loading, validating or saving section configuration.
//! Rendering and ticking cannot fail.

use storefront_core::ValidationError;
use thiserror::Error;

/// Result type alias for section operations.
pub type SectionResult<T> = Result<T, SectionError>;

/// Section error type.
#[derive(Debug, Error)]
pub enum SectionError {
    /// Configuration is structurally valid TOML but semantically wrong.
    #[error("Invalid section configuration: {0}")]
    InvalidConfig(String),

    /// A configured value failed a shared validation rule.
    #[error("Invalid section configuration: {0}")]
    Validation(#[from] ValidationError),

    /// Failed to read or parse the config file.
    #[error("Failed to load config: {0}")]
    ConfigLoadFailed(String),

    /// Failed to write the config file.
    #[error("Failed to save config: {0}")]
    ConfigSaveFailed(String),
}

// =============================================================================
// Error Conversions
// =============================================================================

impl From<std::io::Error> for SectionError {
    fn from(err: std::io::Error) -> Self {
        SectionError::ConfigLoadFailed(err.to_string())
    }
}

impl From<toml::de::Error> for SectionError {
    fn from(err: toml::de::Error) -> Self {
        SectionError::ConfigLoadFailed(err.to_string())
    }
}

impl From<toml::ser::Error> for SectionError {
    fn from(err: toml::ser::Error) -> Self {
        SectionError::ConfigSaveFailed(err.to_string())
    }
}

impl SectionError {
    /// Returns true if the problem is in the config contents rather than
    /// in reading or writing the file.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            SectionError::InvalidConfig(_) | SectionError::Validation(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SectionError::InvalidConfig("tick_interval_ms must be greater than 0".into());
        assert_eq!(
            err.to_string(),
            "Invalid section configuration: tick_interval_ms must be greater than 0"
        );
    }

    #[test]
    fn test_categorization() {
        let err: SectionError = ValidationError::Required {
            field: "title".into(),
        }
        .into();
        assert!(err.is_config_error());

        let err: SectionError = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert!(!err.is_config_error());
        assert!(matches!(err, SectionError::ConfigLoadFailed(_)));
    }
}
