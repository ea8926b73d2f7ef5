//! Cart route handlers.
//!
//! Cart operations use HTMX for dynamic updates without full page reloads.
//! The session carries the cart id; the cart itself lives in the
//! [`CartStore`](crate::cart_store::CartStore), locked per cart while it is
//! changed.
//!
//! Two HTMX events keep the header in sync:
//! - `cart-updated` reloads the cart sheet (sent after adding from the catalog)
//! - `cart-count-changed` reloads the count badge (sent after editing in the sheet)

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{AppendHeaders, IntoResponse, Response},
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;
use uuid::Uuid;

use autoparts_core::{Cart, CartEntry, CartError, ProductId};

use crate::error::{AppError, Result, add_breadcrumb};
use crate::filters;
use crate::models::session_keys;
use crate::state::AppState;

/// HTMX event that refreshes the cart sheet.
pub const CART_UPDATED_EVENT: &str = "cart-updated";

/// HTMX event that refreshes the cart count badge.
pub const CART_COUNT_CHANGED_EVENT: &str = "cart-count-changed";

/// Cart line display data for templates.
#[derive(Clone)]
pub struct CartItemView {
    pub product_id: ProductId,
    pub name: String,
    pub image: String,
    pub quantity: u32,
    pub quantity_less: i64,
    pub quantity_more: i64,
    pub price: String,
    pub line_total: String,
}

impl From<&CartEntry> for CartItemView {
    fn from(entry: &CartEntry) -> Self {
        let quantity = entry.quantity();
        Self {
            product_id: entry.product_id,
            name: entry.name.clone(),
            image: entry.image.clone(),
            quantity,
            quantity_less: i64::from(quantity) - 1,
            quantity_more: i64::from(quantity) + 1,
            price: entry.price.to_string(),
            line_total: entry.line_total().to_string(),
        }
    }
}

/// Cart display data for templates.
#[derive(Clone)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub total: String,
    pub item_count: u64,
    /// "Ваша корзина пуста" or "Товаров в корзине: N".
    pub summary: String,
}

impl From<&Cart> for CartView {
    fn from(cart: &Cart) -> Self {
        let item_count = cart.total_item_count();
        let summary = if item_count == 0 {
            "Ваша корзина пуста".to_string()
        } else {
            format!("Товаров в корзине: {item_count}")
        };

        Self {
            items: cart.entries().iter().map(CartItemView::from).collect(),
            total: cart.total_price().to_string(),
            item_count,
            summary,
        }
    }
}

// =============================================================================
// Session Helpers
// =============================================================================

/// The id of the visitor's cart, if the session has one.
///
/// # Errors
///
/// Returns an error if the session store cannot be read.
pub async fn cart_id(session: &Session) -> Result<Option<Uuid>> {
    Ok(session.get::<Uuid>(session_keys::CART_ID).await?)
}

/// The id of the visitor's cart, assigning a new one to the session if needed.
///
/// # Errors
///
/// Returns an error if the session store cannot be read or written.
pub async fn cart_id_or_create(session: &Session) -> Result<Uuid> {
    if let Some(id) = cart_id(session).await? {
        return Ok(id);
    }
    let id = Uuid::new_v4();
    session.insert(session_keys::CART_ID, id).await?;
    Ok(id)
}

/// A copy of the visitor's cart, or an empty cart for a new session.
///
/// # Errors
///
/// Returns an error if the session store cannot be read.
pub async fn load_cart(state: &AppState, session: &Session) -> Result<Cart> {
    Ok(match cart_id(session).await? {
        Some(id) => state.carts().snapshot(id).await,
        None => Cart::new(),
    })
}

// =============================================================================
// Forms
// =============================================================================

/// Add to cart form data.
#[derive(Debug, Deserialize)]
pub struct AddToCartForm {
    pub product_id: ProductId,
}

/// Update quantity form data. The quantity may be zero or negative, which
/// removes the line.
#[derive(Debug, Deserialize)]
pub struct UpdateCartForm {
    pub product_id: ProductId,
    pub quantity: i64,
}

/// Remove from cart form data.
#[derive(Debug, Deserialize)]
pub struct RemoveFromCartForm {
    pub product_id: ProductId,
}

// =============================================================================
// Templates
// =============================================================================

/// Cart sheet fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_sheet.html")]
pub struct CartSheetTemplate {
    pub cart: CartView,
}

/// Cart count badge fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_count.html")]
pub struct CartCountTemplate {
    pub count: u64,
}

// =============================================================================
// Handlers
// =============================================================================

/// Render the cart sheet (HTMX).
///
/// # Errors
///
/// Returns an error if the session cannot be read.
#[instrument(skip(state, session))]
pub async fn show(State(state): State<AppState>, session: Session) -> Result<CartSheetTemplate> {
    let cart = load_cart(&state, &session).await?;
    Ok(CartSheetTemplate {
        cart: CartView::from(&cart),
    })
}

/// Add one unit of a product to the cart (HTMX).
///
/// Returns the updated count badge and triggers a cart sheet refresh.
///
/// # Errors
///
/// Returns 404 for an unknown product, 409 if it is out of stock.
#[instrument(skip(state, session))]
pub async fn add(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<AddToCartForm>,
) -> Result<Response> {
    let product = state
        .catalog()
        .get(form.product_id)
        .ok_or_else(|| AppError::NotFound(format!("product {}", form.product_id)))?;

    let id = cart_id_or_create(&session).await?;
    let (quantity, count) = state
        .carts()
        .update(id, |cart| {
            let quantity = cart.add(product)?;
            Ok::<_, CartError>((quantity, cart.total_item_count()))
        })
        .await
        .inspect_err(|e| {
            tracing::warn!(product_id = %product.id, error = %e, "Rejected add to cart");
        })?;

    let product_id = product.id.to_string();
    add_breadcrumb("cart", "Added to cart", Some(&[("product_id", product_id.as_str())]));
    tracing::info!(product_id = %product.id, quantity, "Added to cart");

    Ok((
        AppendHeaders([("HX-Trigger", CART_UPDATED_EVENT)]),
        CartCountTemplate { count },
    )
        .into_response())
}

/// Set the quantity of a cart line (HTMX).
///
/// # Errors
///
/// Returns an error if the session cannot be read.
#[instrument(skip(state, session))]
pub async fn update(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<UpdateCartForm>,
) -> Result<Response> {
    let Some(id) = cart_id(&session).await? else {
        return Ok(sheet_response(&Cart::new()));
    };
    let cart = state
        .carts()
        .update(id, |cart| {
            cart.update_quantity(form.product_id, form.quantity);
            cart.clone()
        })
        .await;

    Ok(sheet_response(&cart))
}

/// Remove a line from the cart (HTMX).
///
/// # Errors
///
/// Returns an error if the session cannot be read.
#[instrument(skip(state, session))]
pub async fn remove(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<RemoveFromCartForm>,
) -> Result<Response> {
    let Some(id) = cart_id(&session).await? else {
        return Ok(sheet_response(&Cart::new()));
    };
    let cart = state
        .carts()
        .update(id, |cart| {
            cart.remove(form.product_id);
            cart.clone()
        })
        .await;

    Ok(sheet_response(&cart))
}

/// Get the cart count badge (HTMX).
///
/// # Errors
///
/// Returns an error if the session cannot be read.
#[instrument(skip(state, session))]
pub async fn count(State(state): State<AppState>, session: Session) -> Result<CartCountTemplate> {
    let cart = load_cart(&state, &session).await?;
    Ok(CartCountTemplate {
        count: cart.total_item_count(),
    })
}

/// The cart sheet plus a trigger to refresh the count badge.
fn sheet_response(cart: &Cart) -> Response {
    (
        AppendHeaders([("HX-Trigger", CART_COUNT_CHANGED_EVENT)]),
        CartSheetTemplate {
            cart: CartView::from(cart),
        },
    )
        .into_response()
}
