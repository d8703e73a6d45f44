//! REST API handlers for shopping cart operations

use super::models::{BookRefInput, CartView, QuantityInput};
use super::state::Cart;
use crate::state::SharedState;
use axum::{
    extract::State,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};

/// Creates routes for cart-related operations
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/cart", get(view_cart))
        .route("/cart/add", post(add_to_cart))
        .route("/cart/remove", post(remove_from_cart))
        .route("/cart/quantity", post(change_quantity))
}

fn view(cart: &Cart, status: &str, notice: Option<String>) -> CartView {
    CartView {
        status: status.to_string(),
        items: cart.lines().to_vec(),
        count: cart.count(),
        total: cart.total(),
        notice,
    }
}

/// Endpoint: GET /cart
/// Returns the current cart for rendering.
async fn view_cart(State(state): State<SharedState>) -> impl IntoResponse {
    let cart = state.cart.lock().unwrap();
    Json(view(&cart, "ok", None))
}

/// Endpoint: POST /cart/add
/// Adds one copy of the referenced book. An id not in the catalog is a
/// no-op, not an error.
async fn add_to_cart(
    State(state): State<SharedState>,
    Json(payload): Json<BookRefInput>,
) -> impl IntoResponse {
    let mut cart = state.cart.lock().unwrap();

    match state.catalog.iter().find(|b| b.id == payload.book_id) {
        Some(book) => {
            cart.add(book);
            tracing::info!(book_id = book.id, "added to cart");
            Json(view(&cart, "added", Some("Added to cart!".to_string())))
        }
        None => Json(view(&cart, "ignored", None)),
    }
}

/// Endpoint: POST /cart/remove
async fn remove_from_cart(
    State(state): State<SharedState>,
    Json(payload): Json<BookRefInput>,
) -> impl IntoResponse {
    let mut cart = state.cart.lock().unwrap();
    cart.remove(payload.book_id);
    Json(view(&cart, "removed", None))
}

/// Endpoint: POST /cart/quantity
async fn change_quantity(
    State(state): State<SharedState>,
    Json(payload): Json<QuantityInput>,
) -> impl IntoResponse {
    let mut cart = state.cart.lock().unwrap();
    cart.change_quantity(payload.book_id, payload.delta);
    Json(view(&cart, "updated", None))
}
