//! Charge orchestration through an external payment gateway

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

use crate::errors::{DomainResult, ValidationError};

/// A settled charge as reported by the gateway
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Charge {
    /// Gateway-assigned charge identifier
    pub id: String,

    /// Charged amount in minor currency units
    pub amount_cents: i64,

    /// ISO 4217 currency code
    pub currency: String,
}

/// Opaque external charge API.
///
/// The domain never sees gateway internals; failures surface as
/// `DomainError::Gateway` with detail kept in the logs.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Charge the given source token
    async fn charge(
        &self,
        amount_cents: i64,
        currency: &str,
        source_token: &str,
        description: &str,
    ) -> DomainResult<Charge>;
}

/// Service wrapping the gateway with input validation
pub struct PaymentService<G>
where
    G: PaymentGateway,
{
    gateway: Arc<G>,
}

impl<G> PaymentService<G>
where
    G: PaymentGateway,
{
    /// Create a new payment service
    pub fn new(gateway: Arc<G>) -> Self {
        Self { gateway }
    }

    /// Charge a source token for a booking payment
    pub async fn charge(
        &self,
        amount_cents: i64,
        currency: &str,
        source_token: &str,
    ) -> DomainResult<Charge> {
        if amount_cents <= 0 {
            return Err(ValidationError::InvalidAmount.into());
        }
        if currency.trim().is_empty() {
            return Err(ValidationError::RequiredField {
                field: "currency".to_string(),
            }
            .into());
        }

        let charge = self
            .gateway
            .charge(
                amount_cents,
                currency,
                source_token,
                "WheelShare Car Booking Payment",
            )
            .await?;
        info!(charge_id = %charge.id, amount_cents, "payment charged");
        Ok(charge)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::DomainError;

    struct RecordingGateway;

    #[async_trait]
    impl PaymentGateway for RecordingGateway {
        async fn charge(
            &self,
            amount_cents: i64,
            currency: &str,
            _source_token: &str,
            description: &str,
        ) -> DomainResult<Charge> {
            assert_eq!(description, "WheelShare Car Booking Payment");
            Ok(Charge {
                id: "ch_test".to_string(),
                amount_cents,
                currency: currency.to_string(),
            })
        }
    }

    struct FailingGateway;

    #[async_trait]
    impl PaymentGateway for FailingGateway {
        async fn charge(
            &self,
            _amount_cents: i64,
            _currency: &str,
            _source_token: &str,
            _description: &str,
        ) -> DomainResult<Charge> {
            Err(DomainError::Gateway("connection refused".to_string()))
        }
    }

    #[tokio::test]
    async fn valid_charge_goes_through_the_gateway() {
        let service = PaymentService::new(Arc::new(RecordingGateway));
        let charge = service.charge(2500, "usd", "tok_visa").await.unwrap();
        assert_eq!(charge.id, "ch_test");
        assert_eq!(charge.amount_cents, 2500);
    }

    #[tokio::test]
    async fn non_positive_amount_never_reaches_the_gateway() {
        let service = PaymentService::new(Arc::new(FailingGateway));
        for amount in [0, -100] {
            let result = service.charge(amount, "usd", "tok_visa").await;
            assert!(matches!(
                result,
                Err(DomainError::ValidationErr(ValidationError::InvalidAmount))
            ));
        }
    }

    #[tokio::test]
    async fn gateway_failure_is_surfaced_as_gateway_error() {
        let service = PaymentService::new(Arc::new(FailingGateway));
        let result = service.charge(2500, "usd", "tok_visa").await;
        assert!(matches!(result, Err(DomainError::Gateway(_))));
    }
}
