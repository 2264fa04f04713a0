//! Sample products the preview cart is filled from.

use std::collections::HashMap;

use storefront_core::Product;

/// A small fixed catalog keyed by product id.
pub fn sample_catalog() -> HashMap<i64, Product> {
    let mut tote = Product::new(1, "Canvas Tote", 2400);
    tote.category = Some("Bags".into());
    tote.image_url = Some("/images/products/tote.jpg".into());

    let mut bottle = Product::new(2, "Steel Water Bottle", 1850);
    bottle.category = Some("Outdoor".into());
    bottle.image_url = Some("/images/products/bottle.jpg".into());

    let mut cap = Product::new(3, "Logo Cap", 1599);
    cap.category = Some("Apparel".into());
    cap.description = Some("Six-panel cotton cap".into());

    [tote, bottle, cap]
        .into_iter()
        .map(|product| (product.id, product))
        .collect()
}
