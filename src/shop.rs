use storefront_core::Catalog;
use storefront_dom::{Document, DomError, NodeId};

use crate::components::{ProductList, Render, ShoppingCart};

/// Owns the one cart and the product list wired to it.
pub struct Shop {
    cart: ShoppingCart,
    product_list: ProductList,
}

impl Shop {
    pub fn new(catalog: Catalog) -> Self {
        let cart = ShoppingCart::new();
        let product_list = ProductList::new(catalog, cart.clone());
        Self { cart, product_list }
    }

    pub fn cart(&self) -> &ShoppingCart {
        &self.cart
    }

    pub fn catalog(&self) -> &Catalog {
        self.product_list.catalog()
    }
}

impl Render for Shop {
    /// Mounts the cart, then the product list, into `hook`.
    fn render(&self, doc: &mut Document, hook: NodeId) -> Result<NodeId, DomError> {
        self.cart.render(doc, hook)?;
        self.product_list.render(doc, hook)?;
        Ok(hook)
    }
}
