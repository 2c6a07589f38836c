use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::state::AppState;

/// The one currency this storefront charges in. The caller never picks a
/// currency; it is supplied here, not taken from the request.
const CURRENCY: &str = "usd";

#[derive(Debug, Deserialize)]
pub struct CreatePaymentRequest {
    /// Amount in minor currency units. Forwarded to the gateway as-is;
    /// zero or negative amounts surface the gateway's own rejection.
    pub amount: i64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePaymentResponse {
    pub client_secret: String,
}

/// POST /payments
/// Create a payment intent with the gateway and relay the client secret.
pub async fn create_payment_intent(
    State(state): State<AppState>,
    Json(req): Json<CreatePaymentRequest>,
) -> Result<Json<CreatePaymentResponse>, AppError> {
    let intent = state
        .gateway
        .create_intent(req.amount, CURRENCY)
        .await
        .map_err(|e| AppError::infrastructure("Error creating payment intent", e))?;

    let client_secret = intent.client_secret.ok_or_else(|| {
        AppError::infrastructure(
            "Error creating payment intent",
            "gateway returned an intent without a client secret",
        )
    })?;

    Ok(Json(CreatePaymentResponse { client_secret }))
}
