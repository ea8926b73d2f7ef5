//! HTTP route handlers for the storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Home page (hero, VIN decoder, features)
//! GET  /health                 - Health check
//!
//! # Catalog
//! GET  /catalog                - Catalog page (?q=article&tab=engine)
//! GET  /catalog/grid           - Product grid fragment (HTMX live search)
//!
//! # Information panels
//! GET  /delivery               - Delivery
//! GET  /payment                - Payment
//! GET  /warranty               - Warranty
//! GET  /contacts               - Contacts page
//! POST /contacts/message       - Contact form (returns result fragment)
//!
//! # VIN (HTMX fragments)
//! POST /vin                    - Look up a VIN
//! POST /vin/hint               - Typing progress hint
//!
//! # Cart (HTMX fragments)
//! GET  /cart                   - Cart sheet
//! POST /cart/add               - Add to cart (returns count badge, triggers cart-updated)
//! POST /cart/update            - Update quantity (returns cart sheet)
//! POST /cart/remove            - Remove item (returns cart sheet)
//! GET  /cart/count             - Cart count badge
//! ```

pub mod cart;
pub mod catalog;
pub mod contact;
pub mod home;
pub mod layout;
pub mod sections;
pub mod vin;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the catalog routes router.
pub fn catalog_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(catalog::index))
        .route("/grid", get(catalog::grid))
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/add", post(cart::add))
        .route("/update", post(cart::update))
        .route("/remove", post(cart::remove))
        .route("/count", get(cart::count))
}

/// Create the VIN routes router.
pub fn vin_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(vin::lookup))
        .route("/hint", post(vin::hint))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::home))
        .nest("/catalog", catalog_routes())
        // Information panels
        .route("/delivery", get(sections::delivery))
        .route("/payment", get(sections::payment))
        .route("/warranty", get(sections::warranty))
        .route("/contacts", get(contact::contacts))
        .route("/contacts/message", post(contact::message))
        .nest("/vin", vin_routes())
        .nest("/cart", cart_routes())
}
