//! UI units. Each one renders itself into a parent element.

pub mod cart;
pub mod product_list;

use storefront_dom::{Document, DomError, NodeId};

pub use cart::ShoppingCart;
pub use product_list::{ProductItem, ProductList};

/// Something that can produce its elements under `hook`.
pub trait Render {
    /// Build the elements and attach them to `hook`. Returns the root element.
    fn render(&self, doc: &mut Document, hook: NodeId) -> Result<NodeId, DomError>;
}
