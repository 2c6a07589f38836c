//! Stripe payment provider client.
//!
//! Implements the PaymentIntents API for payment initiation. The only
//! operation this service needs is "create a payment intent"; confirmation
//! and cancellation happen entirely on the provider side.

pub mod stripe;

pub use stripe::{GatewayError, StripeClient};
