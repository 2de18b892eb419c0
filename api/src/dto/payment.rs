use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Body for POST /payments, charged through the external gateway
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ChargeRequest {
    /// Amount in minor currency units
    pub amount_cents: i64,

    #[validate(length(min = 3, max = 3, message = "must be a 3-letter ISO 4217 code"))]
    pub currency: String,

    /// Opaque card token issued by the gateway's client SDK
    #[validate(length(min = 1, message = "must not be empty"))]
    pub source_token: String,
}

/// Body for POST /dummy-payments, settled without any gateway
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DummyPaymentRequest {
    pub amount_cents: i64,
    pub currency: String,
    pub user_id: Option<Uuid>,
}
