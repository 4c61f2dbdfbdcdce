use crate::error::{PaymentError, Result};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Currency used when a caller does not name one.
pub const DEFAULT_CURRENCY: &str = "BRL";

/// Rounds a raw fee to cents, half-up.
pub fn round_fee(raw: Decimal) -> Decimal {
    raw.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// A three-letter ISO-4217-like currency code, stored upper case.
///
/// The code is carried through to providers but plays no part in selection
/// or fee calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Currency(String);

impl Currency {
    pub fn new(code: &str) -> Result<Self> {
        let code = code.trim();
        if code.len() == 3 && code.chars().all(|c| c.is_ascii_alphabetic()) {
            Ok(Self(code.to_ascii_uppercase()))
        } else {
            Err(PaymentError::InvalidRequest(format!(
                "Currency must be a three-letter code, got '{code}'"
            )))
        }
    }

    pub fn code(&self) -> &str {
        &self.0
    }
}

impl Default for Currency {
    fn default() -> Self {
        Self(DEFAULT_CURRENCY.to_string())
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A validated request to charge `amount` in `currency`.
///
/// Construction rejects negative amounts and malformed currencies, so every
/// value of this type is safe to hand to the selection policy.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentRequest {
    amount: Decimal,
    currency: Currency,
}

impl PaymentRequest {
    pub fn new(amount: Decimal, currency: &str) -> Result<Self> {
        if amount < Decimal::ZERO {
            return Err(PaymentError::InvalidRequest(format!(
                "Amount must not be negative, got {amount}"
            )));
        }
        Ok(Self {
            amount,
            currency: Currency::new(currency)?,
        })
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn currency(&self) -> &Currency {
        &self.currency
    }
}

/// What a provider reports back after processing a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderOutcome {
    pub external_id: String,
    pub status: String,
}

impl ProviderOutcome {
    pub fn new(external_id: impl Into<String>, status: impl Into<String>) -> Self {
        Self {
            external_id: external_id.into(),
            status: status.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self.status.as_str(), "approved" | "success")
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Approved,
    Failed,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Approved => "approved",
            PaymentStatus::Failed => "failed",
        }
    }
}

impl From<&ProviderOutcome> for PaymentStatus {
    fn from(outcome: &ProviderOutcome) -> Self {
        if outcome.is_success() {
            PaymentStatus::Approved
        } else {
            PaymentStatus::Failed
        }
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The normalized result of one orchestrated payment.
///
/// Built once by the orchestrator; `net_amount` is always `gross_amount - fee`.
#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct PaymentResult {
    id: u64,
    external_id: String,
    status: PaymentStatus,
    provider: String,
    gross_amount: Decimal,
    fee: Decimal,
    net_amount: Decimal,
}

impl PaymentResult {
    pub fn new(
        id: u64,
        outcome: &ProviderOutcome,
        provider: impl Into<String>,
        gross_amount: Decimal,
        fee: Decimal,
    ) -> Self {
        Self {
            id,
            external_id: outcome.external_id.clone(),
            status: PaymentStatus::from(outcome),
            provider: provider.into(),
            gross_amount,
            fee,
            net_amount: gross_amount - fee,
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn external_id(&self) -> &str {
        &self.external_id
    }

    pub fn status(&self) -> PaymentStatus {
        self.status
    }

    pub fn provider(&self) -> &str {
        &self.provider
    }

    pub fn gross_amount(&self) -> Decimal {
        self.gross_amount
    }

    pub fn fee(&self) -> Decimal {
        self.fee
    }

    pub fn net_amount(&self) -> Decimal {
        self.net_amount
    }
}
