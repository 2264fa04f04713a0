//! # Error Types
//!
//! Domain-specific error types for storefront-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  storefront-core errors (this file)                                    │
//! │  ├── CoreError        - Cart and catalog failures                      │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  storefront-sections errors (separate crate)                           │
//! │  └── SectionError     - Configuration load/save failures               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Cart and catalog errors.
///
/// Providers of [`crate::CartContext`] return these; the storefront turns
/// them into shopper-facing notices.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Product id is not known to the catalog.
    ///
    /// ## When This Occurs
    /// - A cart line references a product that was removed from the catalog
    /// - Resolution runs against a stale catalog snapshot
    #[error("Product not found: {0}")]
    ProductNotFound(i64),

    /// No cart line holds the given product.
    #[error("Product {0} is not in the cart")]
    ItemNotInCart(i64),

    /// A cart line was paired with a product other than the one it references.
    #[error("Cart item {item_id} references product {expected}, got product {actual}")]
    ProductMismatch {
        item_id: i64,
        expected: i64,
        actual: i64,
    },

    /// Cart has exceeded maximum allowed lines.
    #[error("Cart cannot have more than {max} items")]
    CartTooLarge { max: usize },

    /// Line quantity exceeds maximum allowed.
    #[error("Quantity {requested} exceeds maximum allowed ({max})")]
    QuantityTooLarge { requested: i64, max: i64 },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (e.g. a link that is not http(s)).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
