use std::rc::Rc;

use crate::price::Price;
use crate::product::Product;

const PILLOW_IMAGE: &str = "https://rukminim2.flixcart.com/image/850/1000/xif0q/poster/x/t/q/medium-anime-poster-frame-yuji-itadori-jujutsu-kaisen-black-original-imagmgdx4gyhvxfs.jpeg?q=90&crop=false";
const CARPET_IMAGE: &str =
    "https://upload.wikimedia.org/wikipedia/commons/thumb/7/71/Ardabil_Carpet.jpg/397px-Ardabil_Carpet.jpg";

/// The fixed list of products on sale.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Rc<Product>>,
}

impl Catalog {
    /// The two products the shop ships with.
    pub fn fixed() -> Self {
        Self::new(vec![
            Product::new(
                "A Pillow",
                PILLOW_IMAGE,
                "A soft pillow!",
                Price::from_cents(1999),
            ),
            Product::new(
                "A Carpet",
                CARPET_IMAGE,
                "A carpet which you might like - or not.",
                Price::from_cents(8999),
            ),
        ])
    }

    pub fn new(products: Vec<Product>) -> Self {
        Self {
            products: products.into_iter().map(Rc::new).collect(),
        }
    }

    pub fn products(&self) -> &[Rc<Product>] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_catalog() {
        let catalog = Catalog::fixed();

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.products()[0].title, "A Pillow");
        assert_eq!(catalog.products()[0].price, Price::from_cents(1999));
        assert_eq!(catalog.products()[1].title, "A Carpet");
        assert_eq!(catalog.products()[1].price, Price::from_cents(8999));
    }
}
