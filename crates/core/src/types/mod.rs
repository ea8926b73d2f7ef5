//! Core types for AutoParts.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod price;
pub mod section;
pub mod vin;

pub use id::*;
pub use price::{Price, PriceError};
pub use section::{Section, SectionParseError};
pub use vin::{VIN_LENGTH, Vin, VinError, validate, vin_progress};
