//! # storefront-core: Cart & Product Types for the Storefront
//!
//! Shared types for the storefront home page: products, cart lines, the
//! cart capability contract and an in-memory provider that satisfies it.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Storefront Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │              storefront-sections / storefront-preview           │   │
//! │  │   Announcement bar ── Promo banner ── Gallery ── Cart drawer    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ CartContext (trait)                    │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ storefront-core (THIS CRATE) ★                  │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │   cart    │  │ validation│  │   │
//! │  │   │  Product  │  │   Money   │  │   Cart    │  │   rules   │  │   │
//! │  │   │  CartItem │  │           │  │ CartState │  │           │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • NO TIMERS                               │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Product, CartItem and the resolved CartItemWithProduct
//! - [`money`] - Money type with integer arithmetic
//! - [`cart`] - The `CartContext` contract and the in-memory `Cart`
//! - [`error`] - Domain error types
//! - [`validation`] - Quantity, price and name checks
//!
//! ## Example Usage
//!
//! ```rust
//! use storefront_core::{Cart, CartContext, Product};
//!
//! let tee = Product::new(5, "Pack", 2500);
//!
//! let mut cart = Cart::new();
//! cart.add_to_cart(&tee).unwrap();
//! cart.increase_quantity(5).unwrap();
//!
//! assert_eq!(cart.item_count(), 2);
//! assert_eq!(cart.cart_total().cents(), 5000);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod error;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{Cart, CartContext, CartState, CartSummary};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum distinct lines allowed in a single cart.
pub const MAX_CART_ITEMS: usize = 100;

/// Maximum quantity of a single line.
///
/// Increasing past this value is rejected rather than clamped, so the
/// storefront can surface the limit to the shopper.
pub const MAX_ITEM_QUANTITY: i64 = 99;

/// Highest accepted unit price, in cents ($100,000,000.00).
///
/// A full cart at this price (`MAX_CART_ITEMS` lines of `MAX_ITEM_QUANTITY`)
/// still fits in an `i64` total.
pub const MAX_PRICE_CENTS: i64 = 10_000_000_000;
