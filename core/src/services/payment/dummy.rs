//! Dummy payment processor simulating a successful charge

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{DomainResult, ValidationError};

/// Receipt returned by the dummy payment path
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DummyReceipt {
    /// Synthetic transaction identifier (`DUMMY_TXN_{unix_millis}`)
    pub transaction_id: String,

    /// Paying user, when supplied
    pub user_id: Option<Uuid>,

    /// Amount in minor currency units
    pub amount_cents: i64,

    /// ISO 4217 currency code
    pub currency: String,
}

/// Simulates a payment without contacting any gateway
#[derive(Debug, Default, Clone, Copy)]
pub struct DummyPaymentProcessor;

impl DummyPaymentProcessor {
    /// Create a new dummy processor
    pub fn new() -> Self {
        Self
    }

    /// Simulate a successful payment
    ///
    /// The amount must be positive; everything else is accepted verbatim.
    pub fn process(
        &self,
        user_id: Option<Uuid>,
        amount_cents: i64,
        currency: &str,
    ) -> DomainResult<DummyReceipt> {
        if amount_cents <= 0 {
            return Err(ValidationError::InvalidAmount.into());
        }

        Ok(DummyReceipt {
            transaction_id: format!("DUMMY_TXN_{}", Utc::now().timestamp_millis()),
            user_id,
            amount_cents,
            currency: currency.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::DomainError;

    #[test]
    fn receipt_carries_a_dummy_transaction_id() {
        let receipt = DummyPaymentProcessor::new()
            .process(Some(Uuid::new_v4()), 1500, "inr")
            .unwrap();
        assert!(receipt.transaction_id.starts_with("DUMMY_TXN_"));
        assert_eq!(receipt.amount_cents, 1500);
        assert_eq!(receipt.currency, "inr");
    }

    #[test]
    fn zero_and_negative_amounts_are_rejected() {
        let processor = DummyPaymentProcessor::new();
        for amount in [0, -50] {
            let result = processor.process(None, amount, "inr");
            assert!(matches!(
                result,
                Err(DomainError::ValidationErr(ValidationError::InvalidAmount))
            ));
        }
    }
}
