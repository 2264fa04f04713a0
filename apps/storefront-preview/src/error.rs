//! # Preview Error Type
//!
//! Unified error type for preview commands.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Command Function  ──►  Result<T, ApiError>                             │
//! │         │                                                               │
//! │         ├── CoreError::ProductNotFound ─────► NOT_FOUND                 │
//! │         ├── CoreError::QuantityTooLarge ────► VALIDATION_ERROR          │
//! │         ├── CoreError::CartTooLarge ────────► CART_ERROR                │
//! │         └── SectionError::* ────────────────► CONFIG_ERROR              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Errors serialize as `{ "code": "...", "message": "..." }` so the preview
//! output matches what a front-end would receive.

use serde::Serialize;
use storefront_core::CoreError;
use storefront_sections::SectionError;
use thiserror::Error;

/// Error returned from preview commands.
#[derive(Debug, Clone, Serialize, Error)]
#[serde(rename_all = "camelCase")]
#[error("[{code:?}] {message}")]
pub struct ApiError {
    /// Machine-readable error code
    pub code: ErrorCode,

    /// Human-readable error message
    pub message: String,
}

/// Error codes for command responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Resource not found
    NotFound,

    /// Input validation failed
    ValidationError,

    /// Cart operation failed
    CartError,

    /// Section configuration could not be loaded or is invalid
    ConfigError,

    /// Output could not be written
    Internal,
}

impl ApiError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    pub fn not_found(resource: &str, id: impl std::fmt::Display) -> Self {
        ApiError::new(ErrorCode::NotFound, format!("{} not found: {}", resource, id))
    }

    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ProductNotFound(id) => ApiError::not_found("Product", id),
            CoreError::ItemNotInCart(id) => ApiError::not_found("Cart line for product", id),
            CoreError::ProductMismatch { .. } => {
                tracing::error!("{}", err);
                ApiError::new(ErrorCode::CartError, "Cart line does not match its product")
            }
            CoreError::CartTooLarge { max } => ApiError::new(
                ErrorCode::CartError,
                format!("Cart cannot have more than {} items", max),
            ),
            CoreError::QuantityTooLarge { requested, max } => ApiError::validation(format!(
                "Quantity {} exceeds maximum allowed ({})",
                requested, max
            )),
            CoreError::Validation(e) => ApiError::validation(e.to_string()),
        }
    }
}

impl From<SectionError> for ApiError {
    fn from(err: SectionError) -> Self {
        ApiError::new(ErrorCode::ConfigError, err.to_string())
    }
}

impl From<std::io::Error> for ApiError {
    fn from(err: std::io::Error) -> Self {
        ApiError::internal(err.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_error_codes() {
        assert_eq!(ApiError::from(CoreError::ProductNotFound(7)).code, ErrorCode::NotFound);
        assert_eq!(ApiError::from(CoreError::ItemNotInCart(7)).code, ErrorCode::NotFound);
        assert_eq!(
            ApiError::from(CoreError::CartTooLarge { max: 100 }).code,
            ErrorCode::CartError
        );
        assert_eq!(
            ApiError::from(CoreError::QuantityTooLarge { requested: 100, max: 99 }).code,
            ErrorCode::ValidationError
        );
    }

    #[test]
    fn test_serialization() {
        let err = ApiError::not_found("Product", 42);
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], "NOT_FOUND");
        assert_eq!(json["message"], "Product not found: 42");
    }

    #[test]
    fn test_section_error_maps_to_config() {
        let err = ApiError::from(SectionError::InvalidConfig("bad".into()));
        assert_eq!(err.code, ErrorCode::ConfigError);
        assert!(err.to_string().contains("bad"));
    }
}
