use super::payment::{PaymentRequest, ProviderOutcome};
use crate::error::Result;
use async_trait::async_trait;
use rust_decimal::Decimal;
use std::sync::Arc;

/// An external payment service the orchestrator can delegate to.
///
/// Implementations hold no per-request state, so one instance may serve many
/// concurrent requests. A network-backed provider replaces `process` and
/// reports `ProviderUnavailable` or `ProviderTimeout` on failure.
#[async_trait]
pub trait PaymentProvider: Send + Sync {
    /// Stable, non-empty identifier used for lookup and shown to callers.
    fn name(&self) -> &str;

    /// Fee retained by the provider for `amount`, rounded to cents.
    fn calculate_fee(&self, amount: Decimal) -> Decimal;

    /// Submits the request to the provider.
    async fn process(&self, request: &PaymentRequest) -> Result<ProviderOutcome>;
}

pub type PaymentProviderRef = Arc<dyn PaymentProvider>;
