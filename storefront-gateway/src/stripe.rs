use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use std::time::Duration;

use storefront_core::payment::{PaymentGateway, PaymentIntent, PaymentIntentStatus};

/// Client for the Stripe REST API.
#[derive(Clone)]
pub struct StripeClient {
    client: Client,
    api_base_url: String,
    secret_key: Secret<String>,
}

/// Response from payment intent creation.
#[derive(Debug, Deserialize)]
pub struct StripePaymentIntent {
    /// Provider ID (e.g. pi_123).
    pub id: String,
    /// Amount in smallest currency unit.
    pub amount: i64,
    pub currency: String,
    pub status: PaymentIntentStatus,
    /// Secret the client-side code uses to complete the charge.
    pub client_secret: Option<String>,
}

/// Stripe API error response envelope.
#[derive(Debug, Deserialize)]
struct StripeErrorEnvelope {
    error: StripeErrorDetail,
}

#[derive(Debug, Deserialize)]
struct StripeErrorDetail {
    #[serde(rename = "type")]
    error_type: Option<String>,
    code: Option<String>,
    message: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("gateway request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("gateway response could not be decoded: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("gateway rejected the request: {code}: {message}")]
    Api { code: String, message: String },
}

impl StripeClient {
    /// Create a new Stripe client with a bounded per-request timeout.
    pub fn new(
        api_base_url: &str,
        secret_key: Secret<String>,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            api_base_url: api_base_url.trim_end_matches('/').to_string(),
            secret_key,
        })
    }

    /// Create a new payment intent with Stripe.
    ///
    /// # Arguments
    /// * `amount` - Amount in smallest currency unit (cents for USD)
    /// * `currency` - Currency code (e.g., "usd")
    ///
    /// Accepted payment method types are fixed to card. The amount is
    /// forwarded as-is; zero or negative values surface whatever rejection
    /// the provider returns.
    pub async fn create_payment_intent(
        &self,
        amount: i64,
        currency: &str,
    ) -> Result<StripePaymentIntent, GatewayError> {
        let url = format!("{}/payment_intents", self.api_base_url);
        let params = [
            ("amount", amount.to_string()),
            ("currency", currency.to_string()),
            ("payment_method_types[]", "card".to_string()),
        ];

        let response = self
            .client
            .post(&url)
            .bearer_auth(self.secret_key.expose_secret())
            .form(&params)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        tracing::debug!(status = %status, "stripe create_payment_intent response");

        if status.is_success() {
            let intent: StripePaymentIntent = serde_json::from_str(&body)?;
            tracing::info!(
                intent_id = %intent.id,
                amount = intent.amount,
                currency = %intent.currency,
                "payment intent created"
            );
            Ok(intent)
        } else {
            let envelope: StripeErrorEnvelope =
                serde_json::from_str(&body).unwrap_or_else(|_| StripeErrorEnvelope {
                    error: StripeErrorDetail {
                        error_type: None,
                        code: None,
                        message: Some(body.clone()),
                    },
                });
            let code = envelope
                .error
                .code
                .or(envelope.error.error_type)
                .unwrap_or_else(|| "unknown".to_string());
            let message = envelope
                .error
                .message
                .unwrap_or_else(|| "no error detail".to_string());
            tracing::error!(
                code = %code,
                message = %message,
                "stripe payment intent creation failed"
            );
            Err(GatewayError::Api { code, message })
        }
    }
}

#[async_trait]
impl PaymentGateway for StripeClient {
    async fn create_intent(
        &self,
        amount: i64,
        currency: &str,
    ) -> Result<PaymentIntent, Box<dyn std::error::Error + Send + Sync>> {
        let intent = self.create_payment_intent(amount, currency).await?;

        Ok(PaymentIntent {
            id: intent.id,
            amount: intent.amount,
            currency: intent.currency,
            status: intent.status,
            client_secret: intent.client_secret,
        })
    }
}
