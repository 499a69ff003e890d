//! Storefront - A product catalog with an "Add to Cart" button and a
//! running total, rendered into a host document.

pub mod app;
pub mod command;
pub mod components;
pub mod config;
pub mod error;
pub mod shop;

pub use app::App;
pub use command::{execute, Command, CommandError, Outcome};
pub use components::{ProductItem, ProductList, Render, ShoppingCart};
pub use config::Config;
pub use error::AppError;
pub use shop::Shop;

pub use storefront_core::{Cart, Catalog, OrderReport, Price, Product};
pub use storefront_dom::{html, Document, DomError, ElementAttribute, NodeId};
