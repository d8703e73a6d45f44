//! REST API handlers for wishlist operations

use super::models::{BookRefInput, WishlistView};
use super::state::{ToggleOutcome, Wishlist};
use crate::state::SharedState;
use axum::{
    extract::State,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};

/// Creates routes for wishlist-related operations
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/wishlist", get(view_wishlist))
        .route("/wishlist/add", post(add_to_wishlist))
        .route("/wishlist/remove", post(remove_from_wishlist))
        .route("/wishlist/toggle", post(toggle_wishlist))
}

fn view(wishlist: &Wishlist, status: &str, notice: Option<String>) -> WishlistView {
    WishlistView {
        status: status.to_string(),
        items: wishlist.entries().to_vec(),
        count: wishlist.count(),
        notice,
    }
}

/// Endpoint: GET /wishlist
async fn view_wishlist(State(state): State<SharedState>) -> impl IntoResponse {
    let wishlist = state.wishlist.lock().unwrap();
    Json(view(&wishlist, "ok", None))
}

/// Endpoint: POST /wishlist/add
/// Already-present and unknown ids are no-ops, not errors.
async fn add_to_wishlist(
    State(state): State<SharedState>,
    Json(payload): Json<BookRefInput>,
) -> impl IntoResponse {
    let mut wishlist = state.wishlist.lock().unwrap();

    let response = match state.catalog.iter().find(|b| b.id == payload.book_id) {
        Some(book) if !wishlist.contains(book.id) => {
            wishlist.add(book);
            view(&wishlist, "added", Some("Added to wishlist!".to_string()))
        }
        _ => view(&wishlist, "ignored", None),
    };

    Json(response)
}

/// Endpoint: POST /wishlist/remove
async fn remove_from_wishlist(
    State(state): State<SharedState>,
    Json(payload): Json<BookRefInput>,
) -> impl IntoResponse {
    let mut wishlist = state.wishlist.lock().unwrap();
    wishlist.remove(payload.book_id);
    Json(view(&wishlist, "removed", None))
}

/// Endpoint: POST /wishlist/toggle
async fn toggle_wishlist(
    State(state): State<SharedState>,
    Json(payload): Json<BookRefInput>,
) -> impl IntoResponse {
    let mut wishlist = state.wishlist.lock().unwrap();

    let response = match wishlist.toggle(payload.book_id, &state.catalog) {
        ToggleOutcome::Added => view(
            &wishlist,
            "added",
            Some("Added to wishlist!".to_string()),
        ),
        ToggleOutcome::Removed => view(&wishlist, "removed", None),
        ToggleOutcome::NotInCatalog => view(&wishlist, "ignored", None),
    };

    Json(response)
}
