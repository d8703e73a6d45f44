//! REST API handlers for catalog browsing, filtering and search.

use super::filter::{filter_and_sort, FilterCriteria};
use super::search::{search, SearchCriteria};
use crate::state::SharedState;
use axum::{
    extract::State,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};

/// Creates routes for catalog-related operations
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/books", get(list_books))
        .route("/books/filter", post(filter_books))
        .route("/search", post(search_books))
}

/// Endpoint: GET /books
/// Returns the full catalog in load order.
async fn list_books(State(state): State<SharedState>) -> impl IntoResponse {
    Json(state.catalog.clone())
}

/// Endpoint: POST /books/filter
/// Runs the filter/sort engine over the catalog. Missing criteria fields
/// take their cleared-filters defaults.
async fn filter_books(
    State(state): State<SharedState>,
    Json(criteria): Json<FilterCriteria>,
) -> impl IntoResponse {
    Json(filter_and_sort(&state.catalog, &criteria))
}

/// Endpoint: POST /search
/// Capped substring search. No matches is a 200 with an empty array.
async fn search_books(
    State(state): State<SharedState>,
    Json(criteria): Json<SearchCriteria>,
) -> impl IntoResponse {
    Json(search(&state.catalog, &criteria))
}
