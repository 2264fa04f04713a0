//! # Validation Module
//!
//! Input checks shared by the cart and the section configuration.
//!
//! ## Usage
//! ```rust
//! use storefront_core::validation::{validate_link, validate_quantity};
//!
//! validate_quantity(5).unwrap();
//! validate_link("cta_href", "/collections/summer").unwrap();
//! ```

use crate::error::ValidationError;
use crate::{MAX_ITEM_QUANTITY, MAX_PRICE_CENTS};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Longest text accepted for a single line of display copy.
pub const MAX_DISPLAY_TEXT_LEN: usize = 200;

/// Characters that could end a quoted CSS `url()` or an attribute early.
const LINK_FORBIDDEN_CHARS: [char; 5] = ['\'', '"', '(', ')', '\\'];

// =============================================================================
// String Validators
// =============================================================================

/// Validates a short piece of display copy (ticker message, banner title).
///
/// ## Rules
/// - Must not be empty after trimming
/// - At most [`MAX_DISPLAY_TEXT_LEN`] characters
///
/// ```rust
/// use storefront_core::validation::validate_display_text;
///
/// assert!(validate_display_text("message", "Free shipping over $50").is_ok());
/// assert!(validate_display_text("message", "   ").is_err());
/// ```
pub fn validate_display_text(field: &str, text: &str) -> ValidationResult<()> {
    let text = text.trim();

    if text.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if text.chars().count() > MAX_DISPLAY_TEXT_LEN {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max: MAX_DISPLAY_TEXT_LEN,
        });
    }

    Ok(())
}

/// Validates a product name.
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    validate_display_text("name", name)
}

/// Validates a link target.
///
/// ## Rules
/// - Absolute `http://` / `https://` URLs, or site-relative paths starting with `/`
/// - No whitespace, quotes, parentheses or backslashes, so the link can
///   also sit inside a CSS `url('…')`
pub fn validate_link(field: &str, href: &str) -> ValidationResult<()> {
    if href.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    let scheme_ok =
        href.starts_with("https://") || href.starts_with("http://") || href.starts_with('/');

    if !scheme_ok {
        return Err(ValidationError::InvalidFormat {
            field: field.to_string(),
            reason: "must be an http(s) URL or a path starting with '/'".to_string(),
        });
    }

    if href.chars().any(|c| c.is_whitespace() || LINK_FORBIDDEN_CHARS.contains(&c)) {
        return Err(ValidationError::InvalidFormat {
            field: field.to_string(),
            reason: "must not contain whitespace, quotes, parentheses or backslashes".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a line quantity.
///
/// ## Rules
/// - Must be positive (> 0)
/// - Must not exceed MAX_ITEM_QUANTITY
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    if qty > MAX_ITEM_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max: MAX_ITEM_QUANTITY,
        });
    }

    Ok(())
}

/// Validates a price in cents.
///
/// ## Rules
/// - Zero is allowed (free gifts)
/// - Must not exceed MAX_PRICE_CENTS
pub fn validate_price_cents(cents: i64) -> ValidationResult<()> {
    if !(0..=MAX_PRICE_CENTS).contains(&cents) {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: MAX_PRICE_CENTS,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_display_text() {
        assert!(validate_display_text("title", "Summer Sale").is_ok());
        assert!(validate_display_text("title", "").is_err());
        assert!(validate_display_text("title", &"A".repeat(201)).is_err());
        assert!(validate_display_text("title", &"é".repeat(200)).is_ok());
    }

    #[test]
    fn test_validate_link() {
        assert!(validate_link("href", "https://instagram.com/shop").is_ok());
        assert!(validate_link("href", "/collections/all").is_ok());

        assert!(validate_link("href", "").is_err());
        assert!(validate_link("href", "javascript:alert(1)").is_err());
        assert!(validate_link("href", "/has space").is_err());
        assert!(validate_link("href", "/img.jpg');color:red").is_err());
        assert!(validate_link("href", "/img.jpg)").is_err());
        assert!(validate_link("href", "https://cdn.example/a\\b.jpg").is_err());
        assert!(validate_link("href", "/a\"b").is_err());
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(99).is_ok());

        assert!(validate_quantity(0).is_err());
        assert!(validate_quantity(-1).is_err());
        assert!(validate_quantity(100).is_err());
    }

    #[test]
    fn test_validate_price_cents() {
        assert!(validate_price_cents(0).is_ok());
        assert!(validate_price_cents(1099).is_ok());
        assert!(validate_price_cents(MAX_PRICE_CENTS).is_ok());
        assert!(validate_price_cents(-100).is_err());
        assert!(validate_price_cents(MAX_PRICE_CENTS + 1).is_err());
        assert!(validate_price_cents(i64::MAX / 2).is_err());
    }
}
