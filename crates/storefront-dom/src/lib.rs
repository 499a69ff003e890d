//! Storefront DOM - An in-memory host document.
//!
//! Supplies what the shop needs from a page: element creation, attributes,
//! text, attachment, lookup, click listeners with synchronous dispatch,
//! and HTML serialization.

pub mod document;
pub mod error;
pub mod html;

pub use document::{Document, ElementAttribute, Listener, NodeId};
pub use error::DomError;
