//! Session-related types.
//!
//! The session holds the id of the visitor's cart under [`keys::CART_ID`];
//! the cart itself lives in [`crate::cart_store::CartStore`].

/// Session keys.
pub mod keys {
    /// Key for storing the id of the visitor's cart.
    pub const CART_ID: &str = "cart_id";
}
