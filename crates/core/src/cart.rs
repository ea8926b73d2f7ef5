//! Per-visitor shopping cart.
//!
//! A [`Cart`] is an ordered list of line items, at most one per product. It is
//! owned by a single visitor session and changed only through [`Cart::add`],
//! [`Cart::remove`] and [`Cart::update_quantity`].
//!
//! # Invariants
//!
//! - Every entry has `quantity >= 1`; lowering a quantity to zero removes it.
//! - No two entries share a product id.
//! - Entries keep the order in which products were first added.

use serde::{Deserialize, Serialize};

use crate::catalog::Product;
use crate::types::{Price, ProductId};

/// Errors returned by cart operations.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CartError {
    /// The product is not available for purchase.
    #[error("product {0} is out of stock")]
    OutOfStock(ProductId),
}

/// One line item in the cart.
///
/// Display fields are copied from the product when it is first added, so the
/// cart can be rendered and totalled without the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartEntry {
    pub product_id: ProductId,
    pub name: String,
    pub price: Price,
    pub image: String,
    quantity: u32,
}

impl CartEntry {
    fn new(product: &Product) -> Self {
        Self {
            product_id: product.id,
            name: product.name.clone(),
            price: product.price,
            image: product.image.clone(),
            quantity: 1,
        }
    }

    /// Number of units, always at least one.
    #[must_use]
    pub const fn quantity(&self) -> u32 {
        self.quantity
    }

    /// `price × quantity` for this line.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.price * self.quantity
    }
}

/// Ordered collection of [`CartEntry`] values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    entries: Vec<CartEntry>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Add one unit of `product`.
    ///
    /// Increments the existing entry or appends a new one with quantity 1.
    /// Returns the quantity of the product after the operation.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::OutOfStock`] if the product is not in stock; the
    /// cart is left unchanged.
    pub fn add(&mut self, product: &Product) -> Result<u32, CartError> {
        if !product.in_stock {
            return Err(CartError::OutOfStock(product.id));
        }

        if let Some(entry) = self.entry_mut(product.id) {
            entry.quantity = entry.quantity.saturating_add(1);
            return Ok(entry.quantity);
        }

        self.entries.push(CartEntry::new(product));
        Ok(1)
    }

    /// Remove the entry for `product_id`. Unknown ids are ignored.
    pub fn remove(&mut self, product_id: ProductId) {
        self.entries.retain(|e| e.product_id != product_id);
    }

    /// Set the quantity for `product_id`.
    ///
    /// A quantity of zero or less removes the entry. Quantities above
    /// `u32::MAX` are clamped. Unknown ids are ignored.
    pub fn update_quantity(&mut self, product_id: ProductId, new_quantity: i64) {
        if new_quantity <= 0 {
            self.remove(product_id);
            return;
        }

        if let Some(entry) = self.entry_mut(product_id) {
            entry.quantity = u32::try_from(new_quantity).unwrap_or(u32::MAX);
        }
    }

    /// Sum of `price × quantity` over all entries.
    #[must_use]
    pub fn total_price(&self) -> Price {
        self.entries.iter().map(CartEntry::line_total).sum()
    }

    /// Sum of quantities over all entries.
    ///
    /// Widened to `u64` so the sum of any number of `u32` lines is exact.
    #[must_use]
    pub fn total_item_count(&self) -> u64 {
        self.entries.iter().map(|e| u64::from(e.quantity)).sum()
    }

    /// Entries in insertion order.
    #[must_use]
    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }

    /// The entry for `product_id`, if present.
    #[must_use]
    pub fn get(&self, product_id: ProductId) -> Option<&CartEntry> {
        self.entries.iter().find(|e| e.product_id == product_id)
    }

    /// Number of distinct products.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the cart has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn entry_mut(&mut self, product_id: ProductId) -> Option<&mut CartEntry> {
        self.entries.iter_mut().find(|e| e.product_id == product_id)
    }
}
