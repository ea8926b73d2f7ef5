//! AutoParts Core - Domain types for the storefront.
//!
//! This crate holds everything the storefront knows about parts and carts:
//! - [`types`] - Newtype wrappers for ids, prices, VIN codes and page sections
//! - [`catalog`] - The fixed product list offered by the store
//! - [`filter`] - Article search and category tabs over the catalog
//! - [`cart`] - The per-visitor shopping cart
//!
//! # Architecture
//!
//! The core crate contains only types and pure state transitions - no I/O, no
//! HTTP, no sessions. The storefront crate owns one [`Cart`] per visitor
//! session and drives it through the operations defined here.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod filter;
pub mod types;

pub use cart::{Cart, CartEntry, CartError};
pub use catalog::{Catalog, Product};
pub use filter::{CatalogFilter, CatalogTab, CatalogTabParseError};
pub use types::*;
