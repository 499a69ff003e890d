use std::rc::Rc;

use storefront_core::{Catalog, OrderReport, Product};
use storefront_dom::Document;

use crate::components::{Render, ShoppingCart};
use crate::error::AppError;
use crate::shop::Shop;

/// Entry point for the running storefront.
///
/// Starts empty; [`App::init`] mounts the shop exactly once. Everything
/// that touches the cart before that fails with [`AppError::NotInitialized`].
#[derive(Default)]
pub struct App {
    shop: Option<Shop>,
}

impl App {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mount the shop with the fixed catalog into the element with id `mount_id`.
    pub fn init(&mut self, doc: &mut Document, mount_id: &str) -> Result<(), AppError> {
        self.init_with_catalog(doc, mount_id, Catalog::fixed())
    }

    pub fn init_with_catalog(
        &mut self,
        doc: &mut Document,
        mount_id: &str,
        catalog: Catalog,
    ) -> Result<(), AppError> {
        if self.shop.is_some() {
            return Err(AppError::AlreadyInitialized);
        }

        let hook = doc
            .get_element_by_id(mount_id)
            .ok_or_else(|| AppError::MountNotFound(mount_id.to_string()))?;

        let shop = Shop::new(catalog);
        shop.render(doc, hook)?;
        tracing::info!(mount_id, products = shop.catalog().len(), "Shop mounted");

        self.shop = Some(shop);
        Ok(())
    }

    pub fn is_initialized(&self) -> bool {
        self.shop.is_some()
    }

    pub fn shop(&self) -> Result<&Shop, AppError> {
        self.shop.as_ref().ok_or(AppError::NotInitialized)
    }

    pub fn cart(&self) -> Result<&ShoppingCart, AppError> {
        Ok(self.shop()?.cart())
    }

    /// Forward to the shop's cart.
    pub fn add_product_to_cart(
        &self,
        doc: &mut Document,
        product: Rc<Product>,
    ) -> Result<(), AppError> {
        self.cart()?.add_item(doc, product)?;
        Ok(())
    }

    pub fn order(&self) -> Result<OrderReport, AppError> {
        Ok(self.cart()?.order())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_core::Price;

    fn host() -> Document {
        let mut doc = Document::new();
        let container = doc.create_element("div");
        doc.set_attribute(container, "id", "app").unwrap();
        let body = doc.body();
        doc.append(body, container).unwrap();
        doc
    }

    fn pillow() -> Rc<Product> {
        Catalog::fixed().products()[0].clone()
    }

    #[test]
    fn test_add_before_init_fails() {
        let mut doc = host();
        let app = App::new();

        let result = app.add_product_to_cart(&mut doc, pillow());

        assert_eq!(result, Err(AppError::NotInitialized));
        assert!(!app.is_initialized());
        assert!(app.cart().is_err());
    }

    #[test]
    fn test_order_before_init_fails() {
        assert!(matches!(App::new().order(), Err(AppError::NotInitialized)));
    }

    #[test]
    fn test_init_twice_fails() {
        let mut doc = host();
        let mut app = App::new();
        app.init(&mut doc, "app").unwrap();

        assert_eq!(app.init(&mut doc, "app"), Err(AppError::AlreadyInitialized));
        assert_eq!(doc.elements_by_class("cart").len(), 1);
    }

    #[test]
    fn test_init_missing_mount() {
        let mut doc = Document::new();
        let mut app = App::new();

        assert_eq!(
            app.init(&mut doc, "app"),
            Err(AppError::MountNotFound("app".to_string()))
        );
        assert!(!app.is_initialized());
    }

    #[test]
    fn test_add_forwards_to_cart() {
        let mut doc = host();
        let mut app = App::new();
        app.init(&mut doc, "app").unwrap();

        app.add_product_to_cart(&mut doc, pillow()).unwrap();

        let cart = app.cart().unwrap();
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.total(), Price::from_cents(1999));
        assert_eq!(
            cart.displayed_total(&doc).unwrap().as_deref(),
            Some("Total: $19.99")
        );
    }

    #[test]
    fn test_init_with_custom_catalog() {
        let mut doc = host();
        let mut app = App::new();
        let catalog = Catalog::new(vec![Product::new(
            "A Lamp",
            "lamp.png",
            "Bright.",
            Price::from_cents(500),
        )]);

        app.init_with_catalog(&mut doc, "app", catalog).unwrap();

        assert_eq!(doc.elements_by_class("product-item").len(), 1);
        assert_eq!(app.shop().unwrap().catalog().len(), 1);
    }
}
