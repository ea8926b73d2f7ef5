//! The fixed product catalog.
//!
//! The store sells a small hand-authored list of parts. The list is built once
//! at startup and never changes while the process runs.

use serde::{Deserialize, Serialize};

use crate::filter::CatalogFilter;
use crate::types::{Price, ProductId};

/// A part offered by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: Price,
    /// Manufacturer article code, e.g. `BRK-2024-01`.
    pub article: String,
    /// Human-readable category name.
    pub category: String,
    /// Image URL.
    pub image: String,
    pub in_stock: bool,
}

impl Product {
    fn new(
        id: i32,
        name: &str,
        rubles: u32,
        article: &str,
        category: &str,
        image: &str,
        in_stock: bool,
    ) -> Self {
        Self {
            id: ProductId::new(id),
            name: name.to_owned(),
            price: Price::from_rubles(rubles),
            article: article.to_owned(),
            category: category.to_owned(),
            image: image.to_owned(),
            in_stock,
        }
    }
}

/// Read-only product list in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog from an explicit product list.
    #[must_use]
    pub const fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// All products in display order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by id.
    #[must_use]
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Products matching `filter`, in display order.
    pub fn filter<'a>(&'a self, filter: &'a CatalogFilter) -> impl Iterator<Item = &'a Product> {
        self.products.iter().filter(move |p| filter.matches(p))
    }

    /// Number of products.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Returns `true` if the catalog has no products.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl Default for Catalog {
    /// The store's product range.
    fn default() -> Self {
        Self::new(vec![
            Product::new(
                1,
                "Тормозные колодки",
                2500,
                "BRK-2024-01",
                "Тормозная система",
                "https://images.unsplash.com/photo-1486262715619-67b85e0b08d3?w=400",
                true,
            ),
            Product::new(
                2,
                "Масляный фильтр",
                450,
                "FLT-2024-02",
                "Фильтры",
                "https://images.unsplash.com/photo-1625047509168-a7026f36de04?w=400",
                true,
            ),
            Product::new(
                3,
                "Свечи зажигания (комплект)",
                1200,
                "IGN-2024-03",
                "Система зажигания",
                "https://images.unsplash.com/photo-1492144534655-ae79c964c9d7?w=400",
                true,
            ),
            Product::new(
                4,
                "Амортизатор передний",
                4500,
                "SUS-2024-04",
                "Подвеска",
                "https://images.unsplash.com/photo-1619642751034-765dfdf7c58e?w=400",
                false,
            ),
            Product::new(
                5,
                "Аккумулятор 60Ah",
                5500,
                "BAT-2024-05",
                "Электрика",
                "https://images.unsplash.com/photo-1609348810024-5e6de6eab0c7?w=400",
                true,
            ),
            Product::new(
                6,
                "Ремень ГРМ",
                1800,
                "BLT-2024-06",
                "Двигатель",
                "https://images.unsplash.com/photo-1502877338535-766e1452684a?w=400",
                true,
            ),
        ])
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_default_catalog_ids_are_unique() {
        let catalog = Catalog::default();
        let ids: HashSet<_> = catalog.products().iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), catalog.len());
        assert_eq!(catalog.len(), 6);
    }

    #[test]
    fn test_get_by_id() {
        let catalog = Catalog::default();
        let filter = catalog.get(ProductId::new(2)).unwrap();
        assert_eq!(filter.article, "FLT-2024-02");
        assert_eq!(filter.price, Price::from_rubles(450));
        assert!(catalog.get(ProductId::new(99)).is_none());
    }

    #[test]
    fn test_shock_absorber_is_out_of_stock() {
        let catalog = Catalog::default();
        let out_of_stock: Vec<_> = catalog
            .products()
            .iter()
            .filter(|p| !p.in_stock)
            .map(|p| p.id)
            .collect();
        assert_eq!(out_of_stock, vec![ProductId::new(4)]);
    }

    #[test]
    fn test_default_filter_returns_full_list_in_order() {
        let catalog = Catalog::default();
        let filter = CatalogFilter::default();
        let ids: Vec<_> = catalog.filter(&filter).map(|p| p.id.as_i32()).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
    }
}
