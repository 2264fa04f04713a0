//! # Cart Contract
//!
//! The capability contract every cart-state provider satisfies, plus the
//! in-memory [`Cart`] the storefront uses when no other provider is wired in.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  Shopper Action           CartContext              Cart Change          │
//! │  ──────────────           ───────────              ───────────          │
//! │                                                                         │
//! │  Click bag icon ─────────► open_cart() ──────────► is_open = true       │
//! │                                                                         │
//! │  "Add to cart" ──────────► add_to_cart(p) ───────► push or qty += 1     │
//! │                                                                         │
//! │  Click "+" ──────────────► increase_quantity(id) ► qty += 1             │
//! │                                                                         │
//! │  Click "−" ──────────────► decrease_quantity(id) ► qty -= 1 (1 → gone)  │
//! │                                                                         │
//! │  Click trash ────────────► remove_from_cart(id) ─► line removed         │
//! │                                                                         │
//! │  Drawer header ──────────► item_count() / cart_total() (read only)      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Line operations address lines by **product id**: a product appears on at
//! most one line.

use std::sync::{Arc, Mutex, PoisonError};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{CartItemWithProduct, Product};
use crate::{MAX_CART_ITEMS, MAX_ITEM_QUANTITY};

// =============================================================================
// Cart Context
// =============================================================================

/// Capabilities a cart-state provider exposes to the storefront.
///
/// Sections depend on this trait only; whoever owns cart state (this crate's
/// [`Cart`], a server-backed cart, a test double) implements it.
pub trait CartContext {
    /// Shows the cart drawer.
    fn open_cart(&mut self);

    /// Hides the cart drawer.
    fn close_cart(&mut self);

    /// Whether the cart drawer is visible.
    fn is_open(&self) -> bool;

    /// Adds one unit of `product`, merging with an existing line.
    fn add_to_cart(&mut self, product: &Product) -> CoreResult<()>;

    /// Removes the line holding `product_id`.
    fn remove_from_cart(&mut self, product_id: i64) -> CoreResult<()>;

    /// Adds one unit to the line holding `product_id`.
    fn increase_quantity(&mut self, product_id: i64) -> CoreResult<()>;

    /// Removes one unit from the line holding `product_id`; a line at
    /// quantity one is removed entirely.
    fn decrease_quantity(&mut self, product_id: i64) -> CoreResult<()>;

    /// Current lines, in the order they were first added.
    fn items(&self) -> Vec<CartItemWithProduct>;

    /// Sum of `price × quantity` over all lines.
    fn cart_total(&self) -> Money;

    /// Sum of quantities over all lines.
    fn item_count(&self) -> i64;
}

// =============================================================================
// In-Memory Cart
// =============================================================================

/// The shopping cart.
///
/// ## Invariants
/// - Lines are unique by product id (adding the same product increases quantity)
/// - Quantity is always in `1..=MAX_ITEM_QUANTITY`
/// - At most `MAX_CART_ITEMS` lines
/// - Line ids are assigned sequentially from 1 and never reused
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    items: Vec<CartItemWithProduct>,
    is_open: bool,
    next_line_id: i64,
    /// When the cart was created/last cleared
    created_at: DateTime<Utc>,
}

impl Cart {
    /// Creates a new empty, closed cart.
    pub fn new() -> Self {
        Cart {
            items: Vec::new(),
            is_open: false,
            next_line_id: 1,
            created_at: Utc::now(),
        }
    }

    /// Clears all lines. The drawer keeps its visibility.
    pub fn clear(&mut self) {
        self.items.clear();
        self.created_at = Utc::now();
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of distinct lines.
    pub fn line_count(&self) -> usize {
        self.items.len()
    }

    /// When the cart was created or last cleared.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn line_mut(&mut self, product_id: i64) -> CoreResult<&mut CartItemWithProduct> {
        self.items
            .iter_mut()
            .find(|line| line.product.id == product_id)
            .ok_or(CoreError::ItemNotInCart(product_id))
    }

    fn bump(line: &mut CartItemWithProduct) -> CoreResult<()> {
        let new_qty = line.quantity + 1;
        if new_qty > MAX_ITEM_QUANTITY {
            return Err(CoreError::QuantityTooLarge {
                requested: new_qty,
                max: MAX_ITEM_QUANTITY,
            });
        }
        line.quantity = new_qty;
        Ok(())
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::new()
    }
}

impl CartContext for Cart {
    fn open_cart(&mut self) {
        self.is_open = true;
    }

    fn close_cart(&mut self) {
        self.is_open = false;
    }

    fn is_open(&self) -> bool {
        self.is_open
    }

    fn add_to_cart(&mut self, product: &Product) -> CoreResult<()> {
        debug!(product_id = product.id, "add_to_cart");

        if let Some(line) = self.items.iter_mut().find(|l| l.product.id == product.id) {
            return Self::bump(line);
        }
        product.validate()?;

        if self.items.len() >= MAX_CART_ITEMS {
            return Err(CoreError::CartTooLarge {
                max: MAX_CART_ITEMS,
            });
        }

        let id = self.next_line_id;
        self.next_line_id += 1;
        self.items.push(CartItemWithProduct {
            id,
            quantity: 1,
            product: product.clone(),
        });
        Ok(())
    }

    fn remove_from_cart(&mut self, product_id: i64) -> CoreResult<()> {
        debug!(product_id, "remove_from_cart");

        let initial_len = self.items.len();
        self.items.retain(|line| line.product.id != product_id);

        if self.items.len() == initial_len {
            Err(CoreError::ItemNotInCart(product_id))
        } else {
            Ok(())
        }
    }

    fn increase_quantity(&mut self, product_id: i64) -> CoreResult<()> {
        debug!(product_id, "increase_quantity");
        let line = self.line_mut(product_id)?;
        Self::bump(line)
    }

    fn decrease_quantity(&mut self, product_id: i64) -> CoreResult<()> {
        debug!(product_id, "decrease_quantity");
        let line = self.line_mut(product_id)?;
        if line.quantity > 1 {
            line.quantity -= 1;
            return Ok(());
        }
        self.remove_from_cart(product_id)
    }

    fn items(&self) -> Vec<CartItemWithProduct> {
        self.items.clone()
    }

    fn cart_total(&self) -> Money {
        self.items.iter().map(CartItemWithProduct::line_total).sum()
    }

    fn item_count(&self) -> i64 {
        self.items.iter().map(|line| line.quantity).sum()
    }
}

// =============================================================================
// Cart Summary
// =============================================================================

/// Totals shown in the cart drawer header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartSummary {
    pub line_count: usize,
    pub item_count: i64,
    pub total_cents: i64,
}

impl CartSummary {
    /// Summarises any provider.
    pub fn of<C: CartContext + ?Sized>(cart: &C) -> Self {
        let items = cart.items();
        CartSummary {
            line_count: items.len(),
            item_count: cart.item_count(),
            total_cents: cart.cart_total().cents(),
        }
    }
}

// =============================================================================
// Shared Cart State
// =============================================================================

/// A cart shared between the sections that read it and the handlers that
/// mutate it.
///
/// Uses `Arc<Mutex<Cart>>`: cart operations are short and mostly writes, so a
/// plain mutex is enough. A poisoned lock is recovered, since every cart
/// operation leaves the cart consistent before it can panic.
#[derive(Debug, Clone, Default)]
pub struct CartState {
    cart: Arc<Mutex<Cart>>,
}

impl CartState {
    /// Creates a new empty cart state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Executes a function with read access to the cart.
    ///
    /// ```rust
    /// use storefront_core::{CartContext, CartState};
    ///
    /// let state = CartState::new();
    /// let count = state.with_cart(|cart| cart.item_count());
    /// assert_eq!(count, 0);
    /// ```
    pub fn with_cart<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Cart) -> R,
    {
        let cart = self.cart.lock().unwrap_or_else(PoisonError::into_inner);
        f(&cart)
    }

    /// Executes a function with write access to the cart.
    pub fn with_cart_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Cart) -> R,
    {
        let mut cart = self.cart.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut cart)
    }
}

impl CartContext for CartState {
    fn open_cart(&mut self) {
        self.with_cart_mut(Cart::open_cart);
    }

    fn close_cart(&mut self) {
        self.with_cart_mut(Cart::close_cart);
    }

    fn is_open(&self) -> bool {
        self.with_cart(Cart::is_open)
    }

    fn add_to_cart(&mut self, product: &Product) -> CoreResult<()> {
        self.with_cart_mut(|c| c.add_to_cart(product))
    }

    fn remove_from_cart(&mut self, product_id: i64) -> CoreResult<()> {
        self.with_cart_mut(|c| c.remove_from_cart(product_id))
    }

    fn increase_quantity(&mut self, product_id: i64) -> CoreResult<()> {
        self.with_cart_mut(|c| c.increase_quantity(product_id))
    }

    fn decrease_quantity(&mut self, product_id: i64) -> CoreResult<()> {
        self.with_cart_mut(|c| c.decrease_quantity(product_id))
    }

    fn items(&self) -> Vec<CartItemWithProduct> {
        self.with_cart(Cart::items)
    }

    fn cart_total(&self) -> Money {
        self.with_cart(Cart::cart_total)
    }

    fn item_count(&self) -> i64 {
        self.with_cart(Cart::item_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MAX_PRICE_CENTS;

    fn tee() -> Product {
        Product::new(1, "Logo Tee", 2500)
    }

    fn bottle() -> Product {
        Product::new(2, "Steel Bottle", 1999)
    }

    #[test]
    fn test_add_item() {
        let mut cart = Cart::new();
        cart.add_to_cart(&tee()).unwrap();

        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.cart_total().cents(), 2500);
        assert_eq!(cart.items()[0].id, 1);
    }

    #[test]
    fn test_add_same_product_increases_quantity() {
        let mut cart = Cart::new();
        cart.add_to_cart(&tee()).unwrap();
        cart.add_to_cart(&tee()).unwrap();

        assert_eq!(cart.line_count(), 1); // Still one line
        assert_eq!(cart.item_count(), 2);
    }

    #[test]
    fn test_totals_are_sums() {
        let mut cart = Cart::new();
        cart.add_to_cart(&tee()).unwrap();
        cart.add_to_cart(&bottle()).unwrap();
        cart.increase_quantity(2).unwrap();
        cart.increase_quantity(2).unwrap();

        assert_eq!(cart.item_count(), 4);
        assert_eq!(cart.cart_total().cents(), 2500 + 3 * 1999);

        let ids: Vec<i64> = cart.items().iter().map(|l| l.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_decrease_at_one_removes_line() {
        let mut cart = Cart::new();
        cart.add_to_cart(&tee()).unwrap();
        cart.increase_quantity(1).unwrap();

        cart.decrease_quantity(1).unwrap();
        assert_eq!(cart.item_count(), 1);

        cart.decrease_quantity(1).unwrap();
        assert!(cart.is_empty());
        assert!(matches!(
            cart.decrease_quantity(1),
            Err(CoreError::ItemNotInCart(1))
        ));
    }

    #[test]
    fn test_unknown_product_rejected() {
        let mut cart = Cart::new();
        assert!(matches!(
            cart.remove_from_cart(9),
            Err(CoreError::ItemNotInCart(9))
        ));
        assert!(matches!(
            cart.increase_quantity(9),
            Err(CoreError::ItemNotInCart(9))
        ));
    }

    #[test]
    fn test_quantity_cap() {
        let mut cart = Cart::new();
        cart.add_to_cart(&tee()).unwrap();
        for _ in 1..MAX_ITEM_QUANTITY {
            cart.increase_quantity(1).unwrap();
        }
        assert_eq!(cart.item_count(), MAX_ITEM_QUANTITY);

        let err = cart.add_to_cart(&tee()).unwrap_err();
        assert!(matches!(err, CoreError::QuantityTooLarge { requested: 100, max: 99 }));
        assert_eq!(cart.item_count(), MAX_ITEM_QUANTITY);
    }

    #[test]
    fn test_line_cap() {
        let mut cart = Cart::new();
        for id in 0..MAX_CART_ITEMS as i64 {
            cart.add_to_cart(&Product::new(id, "Sticker", 100)).unwrap();
        }
        let err = cart
            .add_to_cart(&Product::new(1000, "One too many", 100))
            .unwrap_err();
        assert!(matches!(err, CoreError::CartTooLarge { max: 100 }));
    }

    #[test]
    fn test_overpriced_product_rejected() {
        let mut cart = Cart::new();
        let err = cart
            .add_to_cart(&Product::new(1, "Costly", i64::MAX / 2))
            .unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_full_cart_at_max_price_totals_without_overflow() {
        let mut cart = Cart::new();
        for id in 0..MAX_CART_ITEMS as i64 {
            cart.add_to_cart(&Product::new(id, "Costly", MAX_PRICE_CENTS))
                .unwrap();
            for _ in 1..MAX_ITEM_QUANTITY {
                cart.increase_quantity(id).unwrap();
            }
        }

        let expected = MAX_PRICE_CENTS * MAX_ITEM_QUANTITY * MAX_CART_ITEMS as i64;
        assert_eq!(cart.cart_total().cents(), expected);
        assert_eq!(cart.item_count(), MAX_ITEM_QUANTITY * MAX_CART_ITEMS as i64);
    }

    #[test]
    fn test_invalid_product_rejected() {
        let mut cart = Cart::new();
        let err = cart.add_to_cart(&Product::new(3, "  ", 100)).unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_line_ids_not_reused() {
        let mut cart = Cart::new();
        cart.add_to_cart(&tee()).unwrap();
        cart.remove_from_cart(1).unwrap();
        cart.add_to_cart(&tee()).unwrap();
        assert_eq!(cart.items()[0].id, 2);
    }

    #[test]
    fn test_open_close() {
        let mut cart = Cart::new();
        assert!(!cart.is_open());
        cart.open_cart();
        assert!(cart.is_open());
        cart.close_cart();
        assert!(!cart.is_open());
    }

    #[test]
    fn test_clear_keeps_visibility() {
        let mut cart = Cart::new();
        cart.open_cart();
        cart.add_to_cart(&tee()).unwrap();
        cart.clear();
        assert!(cart.is_empty());
        assert!(cart.is_open());
    }

    #[test]
    fn test_summary() {
        let mut cart = Cart::new();
        cart.add_to_cart(&tee()).unwrap();
        cart.add_to_cart(&tee()).unwrap();
        cart.add_to_cart(&bottle()).unwrap();

        let summary = CartSummary::of(&cart);
        assert_eq!(
            summary,
            CartSummary {
                line_count: 2,
                item_count: 3,
                total_cents: 6999,
            }
        );
    }

    #[test]
    fn test_shared_state_clones_see_same_cart() {
        let mut state = CartState::new();
        let reader = state.clone();

        state.add_to_cart(&bottle()).unwrap();
        state.open_cart();

        assert_eq!(reader.item_count(), 1);
        assert!(reader.is_open());
        assert_eq!(reader.items()[0].product.name, "Steel Bottle");
    }
}
