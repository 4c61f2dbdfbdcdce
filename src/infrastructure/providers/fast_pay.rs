use crate::domain::payment::{PaymentRequest, ProviderOutcome, round_fee};
use crate::domain::ports::PaymentProvider;
use crate::domain::selection::FAST_PAY;
use crate::error::Result;
use async_trait::async_trait;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;
use std::time::Duration;

/// FastPay charges 3.49% of the amount.
pub const FAST_PAY_RATE: Decimal = dec!(0.0349);

#[derive(Debug, Serialize, PartialEq)]
pub struct Payer {
    pub email: String,
}

/// Body of a FastPay charge request.
#[derive(Debug, Serialize, PartialEq)]
pub struct FastPayPayload {
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub transaction_amount: Decimal,
    pub currency: String,
    pub payer: Payer,
    pub installments: u32,
    pub description: String,
}

impl From<&PaymentRequest> for FastPayPayload {
    fn from(request: &PaymentRequest) -> Self {
        Self {
            transaction_amount: request.amount(),
            currency: request.currency().code().to_string(),
            payer: Payer {
                email: "cliente@teste.com".to_string(),
            },
            installments: 1,
            description: "Compra via FastPay".to_string(),
        }
    }
}

/// Simulated FastPay integration.
///
/// Builds the payload a real client would post, waits `latency` and answers
/// with a fixed approval.
#[derive(Debug, Clone, Default)]
pub struct FastPayProvider {
    latency: Duration,
}

impl FastPayProvider {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }
}

#[async_trait]
impl PaymentProvider for FastPayProvider {
    fn name(&self) -> &str {
        FAST_PAY
    }

    fn calculate_fee(&self, amount: Decimal) -> Decimal {
        round_fee(amount * FAST_PAY_RATE)
    }

    async fn process(&self, request: &PaymentRequest) -> Result<ProviderOutcome> {
        // A network client would post this body; the simulation only builds it.
        let _payload = FastPayPayload::from(request);
        tokio::time::sleep(self.latency).await;
        Ok(ProviderOutcome::new("FP-884512", "approved"))
    }
}
