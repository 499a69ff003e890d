use serde::{Deserialize, Serialize};

use crate::price::Price;

/// An item offered by the shop. Never mutated once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub title: String,
    /// URL of the product picture.
    pub image_url: String,
    pub description: String,
    pub price: Price,
}

impl Product {
    pub fn new(
        title: impl Into<String>,
        image_url: impl Into<String>,
        description: impl Into<String>,
        price: Price,
    ) -> Self {
        Self {
            title: title.into(),
            image_url: image_url.into(),
            description: description.into(),
            price,
        }
    }
}
