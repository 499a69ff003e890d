use std::rc::Rc;

use storefront_core::{Catalog, Product};
use storefront_dom::{Document, DomError, ElementAttribute, NodeId};

use super::{Render, ShoppingCart};

/// One catalog entry with its "Add to Cart" button.
pub struct ProductItem {
    product: Rc<Product>,
    cart: ShoppingCart,
}

impl ProductItem {
    pub fn new(product: Rc<Product>, cart: ShoppingCart) -> Self {
        Self { product, cart }
    }
}

impl Render for ProductItem {
    fn render(&self, doc: &mut Document, hook: NodeId) -> Result<NodeId, DomError> {
        let product = &self.product;
        let item = doc.create_root_element(hook, "li", Some("product-item"), &[])?;
        let wrapper = doc.create_root_element(item, "div", None, &[])?;
        doc.create_root_element(
            wrapper,
            "img",
            None,
            &[
                ElementAttribute::new("src", &product.image_url),
                ElementAttribute::new("alt", &product.title),
            ],
        )?;

        let content = doc.create_root_element(wrapper, "div", Some("product-item__content"), &[])?;
        doc.append_text_element(content, "h2", &product.title)?;
        doc.append_text_element(content, "h3", &product.price.to_string())?;
        doc.append_text_element(content, "p", &product.description)?;
        let add_button = doc.append_text_element(content, "button", "Add to Cart")?;

        let cart = self.cart.clone();
        let product = product.clone();
        doc.add_click_listener(
            add_button,
            Rc::new(move |doc: &mut Document| cart.add_item(doc, product.clone())),
        )?;

        Ok(item)
    }
}

/// The `<ul>` of every product in the catalog.
pub struct ProductList {
    catalog: Catalog,
    cart: ShoppingCart,
}

impl ProductList {
    pub fn new(catalog: Catalog, cart: ShoppingCart) -> Self {
        Self { catalog, cart }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}

impl Render for ProductList {
    fn render(&self, doc: &mut Document, hook: NodeId) -> Result<NodeId, DomError> {
        let list = doc.create_root_element(
            hook,
            "ul",
            Some("product-list"),
            &[ElementAttribute::new("id", "prod-list")],
        )?;

        for product in self.catalog.products() {
            ProductItem::new(product.clone(), self.cart.clone()).render(doc, list)?;
        }

        tracing::debug!(products = self.catalog.len(), "Rendered product list");
        Ok(list)
    }
}
