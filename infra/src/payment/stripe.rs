//! Stripe charge client
//!
//! Implements the core `PaymentGateway` trait against the Stripe charges
//! endpoint. The secret key never appears in logs; gateway failures are
//! logged with detail and surfaced to the domain as an opaque gateway
//! error.

use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use tracing::{error, info};

use ws_core::errors::{DomainError, DomainResult};
use ws_core::services::payment::{Charge, PaymentGateway};

use crate::InfrastructureError;

const DEFAULT_CHARGES_URL: &str = "https://api.stripe.com/v1/charges";

/// Stripe gateway configuration
#[derive(Debug, Clone)]
pub struct StripeConfig {
    /// Secret API key
    pub secret_key: String,
    /// Charges endpoint; overridable for tests
    pub charges_url: String,
    /// Timeout for API requests in seconds
    pub request_timeout_secs: u64,
}

impl StripeConfig {
    /// Create configuration from environment variables
    pub fn from_env() -> Result<Self, InfrastructureError> {
        let secret_key = std::env::var("STRIPE_SECRET_KEY")
            .map_err(|_| InfrastructureError::Config("STRIPE_SECRET_KEY not set".to_string()))?;

        Ok(Self {
            secret_key,
            charges_url: std::env::var("STRIPE_CHARGES_URL")
                .unwrap_or_else(|_| DEFAULT_CHARGES_URL.to_string()),
            request_timeout_secs: std::env::var("STRIPE_REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
        })
    }
}

#[derive(Debug, Deserialize)]
struct ChargeResponse {
    id: String,
    amount: i64,
    currency: String,
}

/// reqwest-based Stripe charge client
pub struct StripeGateway {
    client: reqwest::Client,
    config: StripeConfig,
}

impl StripeGateway {
    /// Create a new gateway from configuration
    pub fn new(config: StripeConfig) -> Result<Self, InfrastructureError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| InfrastructureError::Config(format!("HTTP client build: {}", e)))?;

        Ok(Self { client, config })
    }

    /// Create from environment variables
    pub fn from_env() -> Result<Self, InfrastructureError> {
        Self::new(StripeConfig::from_env()?)
    }
}

#[async_trait]
impl PaymentGateway for StripeGateway {
    async fn charge(
        &self,
        amount_cents: i64,
        currency: &str,
        source_token: &str,
        description: &str,
    ) -> DomainResult<Charge> {
        let params = [
            ("amount", amount_cents.to_string()),
            ("currency", currency.to_string()),
            ("source", source_token.to_string()),
            ("description", description.to_string()),
        ];

        let response = self
            .client
            .post(&self.config.charges_url)
            .bearer_auth(&self.config.secret_key)
            .form(&params)
            .send()
            .await
            .map_err(|e| {
                error!("stripe request failed: {}", e);
                DomainError::Gateway("Payment failed".to_string())
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            error!(%status, %body, "stripe charge rejected");
            return Err(DomainError::Gateway("Payment failed".to_string()));
        }

        let charge: ChargeResponse = response.json().await.map_err(|e| {
            error!("stripe response decode failed: {}", e);
            DomainError::Gateway("Payment failed".to_string())
        })?;

        info!(charge_id = %charge.id, "stripe charge settled");
        Ok(Charge {
            id: charge.id,
            amount_cents: charge.amount,
            currency: charge.currency,
        })
    }
}
