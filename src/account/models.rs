//! Account Domain Models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The mock authenticated identity. Passwords are never stored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub email: String,

    /// Display name; derived from the email's local part on login
    pub name: String,
}

/// Input for the login form
#[derive(Debug, Deserialize)]
pub struct LoginInput {
    pub email: String,

    /// Accepted but never validated or stored
    pub password: String,
}

/// Input for the registration form
#[derive(Debug, Deserialize)]
pub struct RegisterInput {
    pub name: String,
    pub email: String,

    /// Accepted but never validated or stored
    pub password: String,
}

/// Response to a successful login or registration (there is no failure path)
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub status: String,
    pub user: User,
    pub notice: String,
}

/// Response to a checkout attempt
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutResponse {
    /// "completed" or "blocked"
    pub status: String,

    /// Why the checkout was blocked ("empty_cart" or "no_session")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,

    /// The generated order number, on completion. Transient: it is not
    /// stored anywhere and cannot be retrieved again.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_number: Option<String>,

    pub notice: String,
}

/// Input for the tracking lookup
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackInput {
    pub order_number: String,
}

/// The fixed mock tracking payload, returned for any non-empty order number.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TrackingStatus {
    pub order_number: String,
    pub status: String,
    pub estimated_delivery: NaiveDate,
    pub updates: Vec<String>,
}

/// Response to a tracking lookup
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackResponse {
    /// "ok" or "rejected" (empty input)
    pub status: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking: Option<TrackingStatus>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
}
