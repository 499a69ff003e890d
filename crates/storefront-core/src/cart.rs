use std::rc::Rc;

use serde::Serialize;

use crate::price::Price;
use crate::product::Product;

/// The products a shopper has added, in the order they were added.
///
/// The same product may appear more than once. Products are shared with
/// the catalog, so the cart only holds references to them.
#[derive(Debug, Clone, Default)]
pub struct Cart {
    items: Vec<Rc<Product>>,
}

/// What gets reported when the shopper places an order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderReport {
    pub items: Vec<Rc<Product>>,
    pub total: Price,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a product to the end of the cart.
    pub fn add_item(&mut self, product: Rc<Product>) {
        tracing::debug!(title = %product.title, price = %product.price, "Adding product to cart");
        self.items.push(product);
    }

    /// Sum of the prices of everything currently in the cart.
    pub fn total(&self) -> Price {
        self.items.iter().map(|p| p.price).sum()
    }

    pub fn items(&self) -> &[Rc<Product>] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Report the current contents. The cart is left untouched.
    pub fn order(&self) -> OrderReport {
        let report = OrderReport {
            items: self.items.clone(),
            total: self.total(),
        };

        tracing::info!("Ordering...");
        match serde_json::to_string(&report.items) {
            Ok(json) => tracing::info!(total = %report.total, items = %json, "Order contents"),
            Err(e) => tracing::warn!("Failed to serialize order items: {}", e),
        }

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pillow() -> Rc<Product> {
        Rc::new(Product::new("A Pillow", "pillow.jpg", "Soft.", Price::from_cents(1999)))
    }

    fn carpet() -> Rc<Product> {
        Rc::new(Product::new("A Carpet", "carpet.jpg", "Woven.", Price::from_cents(8999)))
    }

    #[test]
    fn test_empty_cart_total_is_zero() {
        let cart = Cart::new();
        assert!(cart.is_empty());
        assert_eq!(cart.total(), Price::ZERO);
    }

    #[test]
    fn test_add_item_preserves_insertion_order() {
        let mut cart = Cart::new();
        cart.add_item(carpet());
        cart.add_item(pillow());

        let titles: Vec<&str> = cart.items().iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["A Carpet", "A Pillow"]);
    }

    #[test]
    fn test_adding_same_product_twice_counts_twice() {
        let product = pillow();
        let mut cart = Cart::new();
        cart.add_item(product.clone());
        cart.add_item(product.clone());

        assert_eq!(cart.len(), 2);
        assert_eq!(cart.total(), Price::from_cents(3998));
        assert!(Rc::ptr_eq(&cart.items()[0], &cart.items()[1]));
    }

    #[test]
    fn test_total_independent_of_order() {
        let mut forward = Cart::new();
        forward.add_item(pillow());
        forward.add_item(carpet());
        forward.add_item(pillow());

        let mut backward = Cart::new();
        backward.add_item(pillow());
        backward.add_item(carpet());
        backward.add_item(pillow());
        backward.items.reverse();

        assert_eq!(forward.total(), backward.total());
        assert_eq!(forward.total(), Price::from_cents(1999 + 8999 + 1999));
    }

    #[test]
    fn test_total_matches_sum_for_many_items() {
        let mut cart = Cart::new();
        let mut expected = 0;
        for cents in [1, 99, 100, 1999, 8999, 12345] {
            cart.add_item(Rc::new(Product::new("x", "x.png", "x", Price::from_cents(cents))));
            expected += cents;
            assert_eq!(cart.total().cents(), expected);
        }
    }

    #[test]
    fn test_order_reports_items_without_changing_cart() {
        let mut cart = Cart::new();
        cart.add_item(pillow());
        cart.add_item(carpet());

        let report = cart.order();

        assert_eq!(report.items.len(), 2);
        assert_eq!(report.items[0].title, "A Pillow");
        assert_eq!(report.items[1].title, "A Carpet");
        assert_eq!(report.total.to_string(), "$109.98");
        assert_eq!(cart.len(), 2);
    }

    #[test]
    fn test_order_report_serializes() {
        let mut cart = Cart::new();
        cart.add_item(pillow());

        let json = serde_json::to_value(cart.order()).unwrap();
        assert_eq!(json["total"], 1999);
        assert_eq!(json["items"][0]["title"], "A Pillow");
    }
}
