use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Provider-side lifecycle status of a payment intent. Serialized the way
/// the gateway reports it on the wire; statuses this service does not know
/// about collapse into `Unknown` rather than failing the whole response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PaymentIntentStatus {
    RequiresPaymentMethod,
    RequiresConfirmation,
    RequiresAction,
    Processing,
    RequiresCapture,
    Canceled,
    Succeeded,
    #[serde(other)]
    Unknown,
}

/// A payment intent as reported by the gateway. Never persisted locally;
/// the gateway owns the intent's lifecycle after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentIntent {
    /// Provider's ID (e.g. pi_123).
    pub id: String,
    /// Amount in minor currency units.
    pub amount: i64,
    pub currency: String,
    pub status: PaymentIntentStatus,
    /// Secret the client uses to complete the charge. Must be relayed
    /// exactly as the gateway returned it, never fabricated or cached.
    pub client_secret: Option<String>,
}

#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Create a payment intent with the provider.
    ///
    /// Each call creates a real intent on the gateway side; there is no
    /// cancellation path and no idempotency, so calling twice with the
    /// same amount yields two distinct intents.
    async fn create_intent(
        &self,
        amount: i64,
        currency: &str,
    ) -> Result<PaymentIntent, Box<dyn std::error::Error + Send + Sync>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_parses_provider_wire_values() {
        let status: PaymentIntentStatus =
            serde_json::from_str("\"requires_payment_method\"").unwrap();
        assert_eq!(status, PaymentIntentStatus::RequiresPaymentMethod);

        let status: PaymentIntentStatus = serde_json::from_str("\"succeeded\"").unwrap();
        assert_eq!(status, PaymentIntentStatus::Succeeded);
    }

    #[test]
    fn unrecognized_status_becomes_unknown() {
        let status: PaymentIntentStatus =
            serde_json::from_str("\"some_future_status\"").unwrap();
        assert_eq!(status, PaymentIntentStatus::Unknown);
    }
}
