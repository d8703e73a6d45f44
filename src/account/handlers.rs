//! REST API handlers for login, registration, checkout and tracking

use super::models::{
    CheckoutResponse, LoginInput, RegisterInput, SessionResponse, TrackInput, TrackResponse,
};
use super::orders::{self, CheckoutOutcome};
use crate::state::SharedState;
use axum::{extract::State, response::IntoResponse, routing::post, Json, Router};

/// Creates routes for account-related operations
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/login", post(login))
        .route("/register", post(register))
        .route("/checkout", post(checkout))
        .route("/track", post(track))
}

/// Endpoint: POST /login
/// Mock authentication: succeeds unconditionally, never validates the
/// password.
async fn login(
    State(state): State<SharedState>,
    Json(payload): Json<LoginInput>,
) -> impl IntoResponse {
    let user = state
        .session
        .lock()
        .unwrap()
        .login(&payload.email, &payload.password);

    tracing::info!(email = %user.email, "mock login");

    Json(SessionResponse {
        status: "signed_in".to_string(),
        user,
        notice: "Logged in successfully!".to_string(),
    })
}

/// Endpoint: POST /register
/// Mock registration: stores the identity as given, succeeds unconditionally.
async fn register(
    State(state): State<SharedState>,
    Json(payload): Json<RegisterInput>,
) -> impl IntoResponse {
    let user = state
        .session
        .lock()
        .unwrap()
        .register(&payload.name, &payload.email, &payload.password);

    tracing::info!(email = %user.email, "mock registration");

    Json(SessionResponse {
        status: "signed_in".to_string(),
        user,
        notice: "Registered successfully!".to_string(),
    })
}

/// Endpoint: POST /checkout
/// Blocked outcomes are domain payloads on HTTP 200, with distinct reasons
/// so the caller can surface the right prompt.
async fn checkout(State(state): State<SharedState>) -> impl IntoResponse {
    // Fixed lock order: session before cart.
    let session = state.session.lock().unwrap();
    let mut cart = state.cart.lock().unwrap();

    let response = match orders::checkout(&mut cart, &session, state.order_ids.as_ref()) {
        CheckoutOutcome::Completed { order_number } => {
            tracing::info!(%order_number, "checkout completed");
            CheckoutResponse {
                status: "completed".to_string(),
                reason: None,
                notice: format!("Order placed successfully! Order #{}", order_number),
                order_number: Some(order_number),
            }
        }
        CheckoutOutcome::EmptyCart => CheckoutResponse {
            status: "blocked".to_string(),
            reason: Some("empty_cart".to_string()),
            order_number: None,
            notice: "Your cart is empty!".to_string(),
        },
        CheckoutOutcome::NotSignedIn => CheckoutResponse {
            status: "blocked".to_string(),
            reason: Some("no_session".to_string()),
            order_number: None,
            notice: "Please login to checkout".to_string(),
        },
    };

    Json(response)
}

/// Endpoint: POST /track
/// Mock tracking: any non-blank order number gets the fixed payload; blank
/// input is rejected with a prompt, not an error status.
async fn track(Json(payload): Json<TrackInput>) -> impl IntoResponse {
    let response = match orders::track(&payload.order_number) {
        Some(tracking) => TrackResponse {
            status: "ok".to_string(),
            tracking: Some(tracking),
            notice: None,
        },
        None => TrackResponse {
            status: "rejected".to_string(),
            tracking: None,
            notice: Some("Please enter an order number".to_string()),
        },
    };

    Json(response)
}
