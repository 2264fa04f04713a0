//! # Domain Types
//!
//! The catalog and cart shapes shared by every storefront section.
//!
//! ## Type Relationships
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  ┌─────────────────┐        ┌─────────────────┐                        │
//! │  │    CartItem     │        │    Product      │                        │
//! │  │  ─────────────  │        │  ─────────────  │                        │
//! │  │  id             │        │  id             │                        │
//! │  │  product_id ────┼──────► │  name           │                        │
//! │  │  quantity       │        │  price_cents    │                        │
//! │  └────────┬────────┘        └────────┬────────┘                        │
//! │           │      resolve()           │                                  │
//! │           └────────────┬─────────────┘                                  │
//! │                        ▼                                                │
//! │           ┌──────────────────────────┐                                  │
//! │           │   CartItemWithProduct    │                                  │
//! │           │  ──────────────────────  │                                  │
//! │           │  id                      │  product_id is gone: the         │
//! │           │  quantity                │  resolved record replaces it     │
//! │           │  product: Product        │                                  │
//! │           └──────────────────────────┘                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::validation::{validate_link, validate_price_cents, validate_product_name, validate_quantity};

// =============================================================================
// Product
// =============================================================================

/// A catalog product as the storefront displays it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Product {
    /// Catalog identifier.
    #[ts(type = "number")]
    pub id: i64,

    /// Display name.
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub description: Option<String>,

    /// Price in cents.
    #[serde(default)]
    #[ts(type = "number")]
    pub price_cents: i64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub image_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub category: Option<String>,
}

impl Product {
    /// Creates a product with only the fields the cart needs.
    pub fn new(id: i64, name: impl Into<String>, price_cents: i64) -> Self {
        Product {
            id,
            name: name.into(),
            description: None,
            price_cents,
            image_url: None,
            category: None,
        }
    }

    /// Returns the price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }

    /// Checks the fields the storefront renders.
    pub fn validate(&self) -> CoreResult<()> {
        validate_product_name(&self.name)?;
        validate_price_cents(self.price_cents)?;
        if let Some(url) = &self.image_url {
            validate_link("image_url", url)?;
        }
        Ok(())
    }
}

// =============================================================================
// Cart Item
// =============================================================================

/// A cart line before resolution against the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartItem {
    #[ts(type = "number")]
    pub id: i64,
    #[ts(type = "number")]
    pub product_id: i64,
    #[ts(type = "number")]
    pub quantity: i64,
}

// =============================================================================
// Cart Item With Product
// =============================================================================

/// A cart line whose product reference has been replaced by the product itself.
///
/// Serializes as `{ id, quantity, product }`; there is no `productId` field,
/// the embedded product carries the identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartItemWithProduct {
    #[ts(type = "number")]
    pub id: i64,
    #[ts(type = "number")]
    pub quantity: i64,
    pub product: Product,
}

impl CartItemWithProduct {
    /// Pairs a cart line with its product.
    ///
    /// Fails with [`CoreError::ProductMismatch`] if `product` is not the one
    /// the line references, and with a validation error if the line's
    /// quantity or the product's price is out of range.
    ///
    /// ```rust
    /// use storefront_core::{CartItem, CartItemWithProduct, Product};
    ///
    /// let item = CartItem { id: 1, product_id: 5, quantity: 2 };
    /// let line = CartItemWithProduct::resolve(item, Product::new(5, "Pack", 0)).unwrap();
    /// assert_eq!(line.product.name, "Pack");
    /// ```
    pub fn resolve(item: CartItem, product: Product) -> CoreResult<Self> {
        if item.product_id != product.id {
            return Err(CoreError::ProductMismatch {
                item_id: item.id,
                expected: item.product_id,
                actual: product.id,
            });
        }
        validate_quantity(item.quantity)?;
        validate_price_cents(product.price_cents)?;

        Ok(CartItemWithProduct {
            id: item.id,
            quantity: item.quantity,
            product,
        })
    }

    /// Returns the id of the embedded product.
    #[inline]
    pub fn product_id(&self) -> i64 {
        self.product.id
    }

    /// Calculates the line total (unit price × quantity).
    pub fn line_total(&self) -> Money {
        self.product.price().multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Product Catalog
// =============================================================================

/// Read access to the product catalog.
///
/// The catalog itself lives outside the storefront sections; this is the
/// only capability the cart needs from it.
pub trait ProductCatalog {
    /// Looks up a product by id.
    fn product(&self, id: i64) -> Option<Product>;
}

impl ProductCatalog for HashMap<i64, Product> {
    fn product(&self, id: i64) -> Option<Product> {
        self.get(&id).cloned()
    }
}

impl ProductCatalog for [Product] {
    fn product(&self, id: i64) -> Option<Product> {
        self.iter().find(|p| p.id == id).cloned()
    }
}

/// Resolves every line against the catalog, preserving order.
///
/// Fails on the first line whose product the catalog does not know.
pub fn resolve_lines<C>(items: &[CartItem], catalog: &C) -> CoreResult<Vec<CartItemWithProduct>>
where
    C: ProductCatalog + ?Sized,
{
    items
        .iter()
        .map(|item| {
            let product = catalog
                .product(item.product_id)
                .ok_or(CoreError::ProductNotFound(item.product_id))?;
            CartItemWithProduct::resolve(*item, product)
        })
        .collect()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolved_line_has_no_product_id_field() {
        let item = CartItem {
            id: 1,
            product_id: 5,
            quantity: 2,
        };
        let product = Product::new(5, "Pack", 0);

        let line = CartItemWithProduct::resolve(item, product).unwrap();
        let json = serde_json::to_value(&line).unwrap();

        assert_eq!(json["id"], 1);
        assert_eq!(json["quantity"], 2);
        assert_eq!(json["product"]["id"], 5);
        assert_eq!(json["product"]["name"], "Pack");
        assert!(json.get("productId").is_none());
        assert_eq!(json.as_object().unwrap().len(), 3);
    }

    #[test]
    fn test_resolve_rejects_wrong_product() {
        let item = CartItem {
            id: 1,
            product_id: 5,
            quantity: 2,
        };
        let err = CartItemWithProduct::resolve(item, Product::new(6, "Other", 0)).unwrap_err();
        assert!(matches!(
            err,
            CoreError::ProductMismatch {
                item_id: 1,
                expected: 5,
                actual: 6
            }
        ));
    }

    #[test]
    fn test_resolve_rejects_empty_line() {
        let item = CartItem {
            id: 1,
            product_id: 5,
            quantity: 0,
        };
        let err = CartItemWithProduct::resolve(item, Product::new(5, "Pack", 0)).unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
    }

    #[test]
    fn test_resolve_rejects_overpriced_product() {
        let item = CartItem {
            id: 1,
            product_id: 5,
            quantity: 3,
        };
        let err = CartItemWithProduct::resolve(item, Product::new(5, "Costly", i64::MAX / 2))
            .unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
    }

    #[test]
    fn test_product_validate() {
        assert!(Product::new(1, "Cap", 1999).validate().is_ok());
        assert!(Product::new(1, "", 1999).validate().is_err());
        assert!(Product::new(1, "Cap", -1).validate().is_err());

        let mut with_image = Product::new(1, "Cap", 1999);
        with_image.image_url = Some("ftp://cdn/cap.jpg".to_string());
        assert!(with_image.validate().is_err());
    }

    #[test]
    fn test_resolve_lines_preserves_order() {
        let mut catalog = HashMap::new();
        catalog.insert(5, Product::new(5, "Pack", 4000));
        catalog.insert(9, Product::new(9, "Bottle", 1500));

        let items = [
            CartItem { id: 1, product_id: 9, quantity: 1 },
            CartItem { id: 2, product_id: 5, quantity: 3 },
        ];

        let lines = resolve_lines(&items, &catalog).unwrap();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].product.name, "Bottle");
        assert_eq!(lines[1].line_total().cents(), 12000);
        assert_eq!(lines[1].id, items[1].id);
    }

    #[test]
    fn test_resolve_lines_unknown_product() {
        let catalog = vec![Product::new(5, "Pack", 4000)];
        let items = [CartItem { id: 1, product_id: 42, quantity: 1 }];

        let err = resolve_lines(&items, catalog.as_slice()).unwrap_err();
        assert!(matches!(err, CoreError::ProductNotFound(42)));
    }

    #[test]
    fn test_product_optional_fields_skipped() {
        let json = serde_json::to_value(Product::new(1, "Cap", 1999)).unwrap();
        assert_eq!(json["priceCents"], 1999);
        assert!(json.get("imageUrl").is_none());

        let parsed: Product = serde_json::from_str(r#"{"id":3,"name":"Mug"}"#).unwrap();
        assert_eq!(parsed.price_cents, 0);
        assert!(parsed.description.is_none());
    }
}
