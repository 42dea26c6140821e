//! Product catalog.
//!
//! The catalog is supplied by the host application at startup and is
//! read-only afterwards: a fixed, ordered list of products with an id index
//! for lookups from the cart and checkout paths.

mod product;

pub use product::Product;

use crate::ids::ProductId;
use crate::money::Currency;
use std::collections::HashMap;

/// The read-only product catalog.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
    index: HashMap<ProductId, usize>,
}

impl Catalog {
    /// Build a catalog from an ordered product list.
    ///
    /// Products keep their supplied order. Duplicate ids keep the first
    /// occurrence.
    pub fn from_products(products: Vec<Product>) -> Self {
        let mut deduped: Vec<Product> = Vec::with_capacity(products.len());
        let mut index = HashMap::with_capacity(products.len());
        for product in products {
            if index.contains_key(&product.id) {
                continue;
            }
            index.insert(product.id.clone(), deduped.len());
            deduped.push(product);
        }
        Self {
            products: deduped,
            index,
        }
    }

    /// Look up a product by id.
    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.index.get(id).map(|&i| &self.products[i])
    }

    /// Check whether an id resolves in this catalog.
    pub fn contains(&self, id: &ProductId) -> bool {
        self.index.contains_key(id)
    }

    /// Iterate products in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    /// Number of products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// The currency the catalog prices in.
    ///
    /// Taken from the first product; an empty catalog prices in the default
    /// currency.
    pub fn currency(&self) -> Currency {
        self.products
            .first()
            .map(|p| p.price.currency)
            .unwrap_or_default()
    }
}

impl From<Vec<Product>> for Catalog {
    fn from(products: Vec<Product>) -> Self {
        Self::from_products(products)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    fn sample() -> Catalog {
        Catalog::from_products(vec![
            Product::new("greek-salad", "Greek Salad", Money::new(1200, Currency::USD)),
            Product::new("veg-roll", "Veg Roll", Money::new(1800, Currency::USD)),
        ])
    }

    #[test]
    fn test_catalog_lookup() {
        let catalog = sample();
        let product = catalog.get(&ProductId::new("greek-salad")).unwrap();
        assert_eq!(product.name, "Greek Salad");
        assert!(catalog.get(&ProductId::new("missing")).is_none());
    }

    #[test]
    fn test_catalog_preserves_order() {
        let catalog = sample();
        let names: Vec<_> = catalog.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Greek Salad", "Veg Roll"]);
    }

    #[test]
    fn test_catalog_duplicate_ids_keep_first() {
        let catalog = Catalog::from_products(vec![
            Product::new("dish", "First", Money::new(100, Currency::USD)),
            Product::new("dish", "Second", Money::new(200, Currency::USD)),
        ]);
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get(&ProductId::new("dish")).unwrap().name, "First");
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::default();
        assert!(catalog.is_empty());
        assert_eq!(catalog.currency(), Currency::USD);
    }
}
