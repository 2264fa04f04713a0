//! # Cart Commands
//!
//! Commands for the cart drawer and its lines.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Lifecycle                                       │
//! │                                                                         │
//! │  ┌──────────┐  add_to_cart   ┌──────────┐  open_cart   ┌──────────┐    │
//! │  │  Empty   │───────────────►│ In Cart  │─────────────►│  Drawer  │    │
//! │  │  Cart    │                │          │◄─────────────│   Open   │    │
//! │  └──────────┘                └──────────┘  close_cart  └──────────┘    │
//! │       ▲                        │    ▲                                   │
//! │       │   remove_from_cart /   │    │ increase_quantity                 │
//! │       └── decrease at qty 1 ───┘    └── decrease_quantity               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use storefront_core::{CartContext, CartItemWithProduct, CartState, CartSummary, ProductCatalog};
use tracing::debug;

use crate::error::ApiError;

/// Cart response including lines and totals.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub is_open: bool,
    pub items: Vec<CartItemWithProduct>,
    pub summary: CartSummary,
}

impl CartResponse {
    fn of<C: CartContext + ?Sized>(cart: &C) -> Self {
        CartResponse {
            is_open: cart.is_open(),
            items: cart.items(),
            summary: CartSummary::of(cart),
        }
    }
}

/// Gets the current cart contents.
pub fn get_cart(cart: &CartState) -> CartResponse {
    debug!("get_cart command");
    CartResponse::of(cart)
}

/// Shows or hides the cart drawer.
pub fn set_cart_open(cart: &mut CartState, open: bool) -> CartResponse {
    debug!(open, "set_cart_open command");
    if open {
        cart.open_cart();
    } else {
        cart.close_cart();
    }
    CartResponse::of(&*cart)
}

/// Looks `product_id` up in `catalog` and adds one unit of it.
///
/// ## Behavior
/// - Product already in cart: its line's quantity increases
/// - Product not in cart: a new line is appended
pub fn add_to_cart<C>(
    cart: &mut CartState,
    catalog: &C,
    product_id: i64,
) -> Result<CartResponse, ApiError>
where
    C: ProductCatalog + ?Sized,
{
    debug!(product_id, "add_to_cart command");

    let product = catalog
        .product(product_id)
        .ok_or_else(|| ApiError::not_found("Product", product_id))?;

    cart.add_to_cart(&product)?;
    Ok(CartResponse::of(&*cart))
}

/// Adds one unit to the line holding `product_id`.
pub fn increase_quantity(cart: &mut CartState, product_id: i64) -> Result<CartResponse, ApiError> {
    debug!(product_id, "increase_quantity command");
    cart.increase_quantity(product_id)?;
    Ok(CartResponse::of(&*cart))
}

/// Removes one unit from the line holding `product_id`.
pub fn decrease_quantity(cart: &mut CartState, product_id: i64) -> Result<CartResponse, ApiError> {
    debug!(product_id, "decrease_quantity command");
    cart.decrease_quantity(product_id)?;
    Ok(CartResponse::of(&*cart))
}

/// Removes the line holding `product_id`.
pub fn remove_from_cart(cart: &mut CartState, product_id: i64) -> Result<CartResponse, ApiError> {
    debug!(product_id, "remove_from_cart command");
    cart.remove_from_cart(product_id)?;
    Ok(CartResponse::of(&*cart))
}
