use std::cell::RefCell;
use std::rc::Rc;

use storefront_core::{Cart, OrderReport, Price, Product};
use storefront_dom::{Document, DomError, NodeId};

use super::Render;

struct CartState {
    cart: Cart,
    /// Every `<h2>` showing the total, one per render.
    total_outputs: Vec<NodeId>,
}

/// The cart and its on-page total.
///
/// Clones share one cart, which is how product entries get a handle to it.
#[derive(Clone)]
pub struct ShoppingCart {
    state: Rc<RefCell<CartState>>,
}

impl Default for ShoppingCart {
    fn default() -> Self {
        Self::new()
    }
}

impl ShoppingCart {
    pub fn new() -> Self {
        Self {
            state: Rc::new(RefCell::new(CartState {
                cart: Cart::new(),
                total_outputs: Vec::new(),
            })),
        }
    }

    /// Append `product` and rewrite the displayed total.
    pub fn add_item(&self, doc: &mut Document, product: Rc<Product>) -> Result<(), DomError> {
        let mut state = self.state.borrow_mut();
        state.cart.add_item(product);
        let total = state.cart.total();
        let label = total_label(total);
        for node in &state.total_outputs {
            doc.set_text(*node, &label)?;
        }
        tracing::debug!(items = state.cart.len(), total = %total, "Cart updated");
        Ok(())
    }

    pub fn total(&self) -> Price {
        self.state.borrow().cart.total()
    }

    pub fn len(&self) -> usize {
        self.state.borrow().cart.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.borrow().cart.is_empty()
    }

    pub fn items(&self) -> Vec<Rc<Product>> {
        self.state.borrow().cart.items().to_vec()
    }

    pub fn order(&self) -> OrderReport {
        self.state.borrow().cart.order()
    }

    /// The most recently rendered total element, if any.
    pub fn total_output(&self) -> Option<NodeId> {
        self.state.borrow().total_outputs.last().copied()
    }

    /// Text currently shown in the total element.
    pub fn displayed_total(&self, doc: &Document) -> Result<Option<String>, DomError> {
        self.total_output()
            .map(|node| doc.text_content(node))
            .transpose()
    }
}

impl Render for ShoppingCart {
    fn render(&self, doc: &mut Document, hook: NodeId) -> Result<NodeId, DomError> {
        let section = doc.create_root_element(hook, "section", Some("cart"), &[])?;
        let total_output = doc.append_text_element(section, "h2", &total_label(self.total()))?;
        let order_button = doc.append_text_element(section, "button", "Order Now!")?;

        let cart = self.clone();
        doc.add_click_listener(
            order_button,
            Rc::new(move |_: &mut Document| {
                cart.order();
                Ok(())
            }),
        )?;

        self.state.borrow_mut().total_outputs.push(total_output);
        Ok(section)
    }
}

fn total_label(total: Price) -> String {
    format!("Total: {}", total)
}
