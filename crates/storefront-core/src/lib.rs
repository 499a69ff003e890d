//! Storefront Core - Products, prices, the cart and the fixed catalog.
//!
//! This crate holds the shop's state and arithmetic. It knows nothing
//! about the host document; rendering lives in the `storefront` crate.

pub mod cart;
pub mod catalog;
pub mod price;
pub mod product;

pub use cart::{Cart, OrderReport};
pub use catalog::Catalog;
pub use price::Price;
pub use product::Product;
