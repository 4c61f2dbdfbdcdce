use crate::domain::payment::{PaymentRequest, ProviderOutcome, round_fee};
use crate::domain::ports::PaymentProvider;
use crate::domain::selection::SECURE_PAY;
use crate::error::Result;
use async_trait::async_trait;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;
use std::time::Duration;

/// SecurePay charges 2.99% of the amount plus a flat 0.40.
pub const SECURE_PAY_RATE: Decimal = dec!(0.0299);
pub const SECURE_PAY_FLAT_FEE: Decimal = dec!(0.40);

/// Body of a SecurePay charge request. Amounts travel as whole cents,
/// truncated toward zero.
#[derive(Debug, Serialize, PartialEq)]
pub struct SecurePayPayload {
    pub amount_cents: u128,
    pub currency_code: String,
    pub client_reference: String,
}

impl From<&PaymentRequest> for SecurePayPayload {
    fn from(request: &PaymentRequest) -> Self {
        // Mantissa × 100 fits in u128 for every `Decimal`.
        let amount = request.amount();
        let amount_cents = amount.mantissa().unsigned_abs() * 100 / 10u128.pow(amount.scale());

        Self {
            amount_cents,
            currency_code: request.currency().code().to_string(),
            client_reference: "ORD-20251022".to_string(),
        }
    }
}

/// Simulated SecurePay integration.
#[derive(Debug, Clone, Default)]
pub struct SecurePayProvider {
    latency: Duration,
}

impl SecurePayProvider {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }
}

#[async_trait]
impl PaymentProvider for SecurePayProvider {
    fn name(&self) -> &str {
        SECURE_PAY
    }

    fn calculate_fee(&self, amount: Decimal) -> Decimal {
        round_fee(amount * SECURE_PAY_RATE + SECURE_PAY_FLAT_FEE)
    }

    async fn process(&self, request: &PaymentRequest) -> Result<ProviderOutcome> {
        // A network client would post this body; the simulation only builds it.
        let _payload = SecurePayPayload::from(request);
        tokio::time::sleep(self.latency).await;
        Ok(ProviderOutcome::new("SP-19283", "success"))
    }
}
