//! Checkout and mock order tracking.
//!
//! Order numbers are generated behind the [`OrderIdGenerator`] trait so
//! tests can substitute a deterministic generator. No order record is kept:
//! the number exists only in the checkout response, and tracking is an
//! independent mock keyed on whatever text the user supplies.

use super::models::TrackingStatus;
use super::state::Session;
use crate::cart::Cart;
use chrono::{Duration, Utc};
use rand::Rng;

/// Fixed prefix of every generated order number.
pub const ORDER_PREFIX: &str = "ORD";
/// Length of the random token following the prefix.
pub const ORDER_TOKEN_LEN: usize = 9;

const BASE36: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Source of order numbers.
pub trait OrderIdGenerator: Send + Sync {
    fn next_order_number(&self) -> String;
}

/// Production generator: `ORD` followed by 9 uppercase base-36 characters.
pub struct RandomOrderIds;

impl OrderIdGenerator for RandomOrderIds {
    fn next_order_number(&self) -> String {
        let mut rng = rand::thread_rng();
        let token: String = (0..ORDER_TOKEN_LEN)
            .map(|_| BASE36[rng.gen_range(0..BASE36.len())] as char)
            .collect();
        format!("{}{}", ORDER_PREFIX, token)
    }
}

/// Outcome of a checkout attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckoutOutcome {
    /// The cart was emptied and an order number issued.
    Completed { order_number: String },
    /// Blocked: there is nothing to check out. Cart unchanged.
    EmptyCart,
    /// Blocked: no session; the caller should prompt a login. Cart unchanged.
    NotSignedIn,
}

/// Attempts a checkout. Both preconditions are checked before anything
/// mutates, so a blocked outcome leaves the cart exactly as it was.
pub fn checkout(
    cart: &mut Cart,
    session: &Session,
    ids: &dyn OrderIdGenerator,
) -> CheckoutOutcome {
    if cart.is_empty() {
        return CheckoutOutcome::EmptyCart;
    }
    if !session.is_signed_in() {
        return CheckoutOutcome::NotSignedIn;
    }

    let order_number = ids.next_order_number();
    cart.clear();
    CheckoutOutcome::Completed { order_number }
}

/// The three milestone strings every tracking lookup reports.
pub const TRACKING_MILESTONES: [&str; 3] = [
    "Package picked up from warehouse",
    "In transit to your city",
    "Out for delivery (upcoming)",
];

/// Mock tracking lookup: any non-blank order number gets the fixed payload,
/// whether or not it was ever issued. Blank input returns `None` and the
/// caller prompts for a number.
pub fn track(order_number: &str) -> Option<TrackingStatus> {
    let order_number = order_number.trim();
    if order_number.is_empty() {
        return None;
    }

    Some(TrackingStatus {
        order_number: order_number.to_string(),
        status: "In Transit".to_string(),
        estimated_delivery: (Utc::now() + Duration::days(3)).date_naive(),
        updates: TRACKING_MILESTONES.iter().map(|s| s.to_string()).collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::data::seed_catalog;
    use crate::storage::MemoryStorage;
    use std::sync::Arc;

    struct FixedIds(&'static str);

    impl OrderIdGenerator for FixedIds {
        fn next_order_number(&self) -> String {
            self.0.to_string()
        }
    }

    fn fixtures() -> (Cart, Session) {
        let storage: crate::storage::SharedStorage = Arc::new(MemoryStorage::new());
        (
            Cart::load(Arc::clone(&storage)),
            Session::load(storage),
        )
    }

    #[test]
    fn checkout_blocked_on_empty_cart_leaves_everything_unchanged() {
        let (mut cart, mut session) = fixtures();
        session.login("ada@example.com", "pw");

        assert_eq!(
            checkout(&mut cart, &session, &FixedIds("ORD000000000")),
            CheckoutOutcome::EmptyCart
        );
        assert!(cart.is_empty());
    }

    #[test]
    fn checkout_blocked_without_session_leaves_cart_unchanged() {
        let (mut cart, session) = fixtures();
        cart.add(&seed_catalog()[0]);

        assert_eq!(
            checkout(&mut cart, &session, &FixedIds("ORD000000000")),
            CheckoutOutcome::NotSignedIn
        );
        assert_eq!(cart.count(), 1);
    }

    #[test]
    fn checkout_with_session_and_items_empties_the_cart() {
        let (mut cart, mut session) = fixtures();
        session.login("ada@example.com", "pw");
        cart.add(&seed_catalog()[0]);

        let outcome = checkout(&mut cart, &session, &FixedIds("ORDTESTTOKEN"));
        assert_eq!(
            outcome,
            CheckoutOutcome::Completed {
                order_number: "ORDTESTTOKEN".to_string()
            }
        );
        assert!(cart.is_empty());
    }

    #[test]
    fn random_order_numbers_match_the_fixed_format() {
        let ids = RandomOrderIds;
        for _ in 0..100 {
            let number = ids.next_order_number();
            assert_eq!(number.len(), ORDER_PREFIX.len() + ORDER_TOKEN_LEN);
            assert!(number.starts_with(ORDER_PREFIX));
            assert!(number[ORDER_PREFIX.len()..]
                .bytes()
                .all(|c| c.is_ascii_digit() || c.is_ascii_uppercase()));
        }
    }

    #[test]
    fn tracking_rejects_blank_input_and_accepts_anything_else() {
        assert!(track("").is_none());
        assert!(track("   ").is_none());

        let status = track("NEVER-ISSUED-123").unwrap();
        assert_eq!(status.order_number, "NEVER-ISSUED-123");
        assert_eq!(status.status, "In Transit");
        assert_eq!(status.updates.len(), 3);
        assert_eq!(
            status.estimated_delivery,
            (Utc::now() + Duration::days(3)).date_naive()
        );
    }
}
