use super::id::InternalIdGenerator;
use super::registry::ProviderRegistry;
use crate::domain::payment::{PaymentRequest, PaymentResult};
use crate::domain::selection::select_provider_name;
use crate::error::{PaymentError, Result};
use rust_decimal::Decimal;
use std::sync::Arc;
use std::time::Duration;

/// Routes a payment request to the right provider and normalizes the answer.
///
/// The orchestrator owns no per-request state besides the id counter, so a
/// single instance can be shared (behind an `Arc`) by any number of in-flight
/// requests. A provider failure aborts the request: there is no retry and no
/// fallback to another provider.
pub struct PaymentOrchestrator {
    registry: Arc<ProviderRegistry>,
    ids: InternalIdGenerator,
    provider_timeout: Option<Duration>,
}

impl PaymentOrchestrator {
    /// Creates an orchestrator over `registry` with no provider timeout.
    pub fn new(registry: Arc<ProviderRegistry>) -> Self {
        Self {
            registry,
            ids: InternalIdGenerator::new(),
            provider_timeout: None,
        }
    }

    pub fn with_provider_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.provider_timeout = timeout;
        self
    }

    pub fn with_id_generator(mut self, ids: InternalIdGenerator) -> Self {
        self.ids = ids;
        self
    }

    /// Validates raw input and executes it.
    ///
    /// Invalid input is rejected before any provider is selected or invoked.
    pub async fn submit(&self, amount: Decimal, currency: &str) -> Result<PaymentResult> {
        let request = PaymentRequest::new(amount, currency)?;
        self.execute(&request).await
    }

    /// Processes one validated request end to end.
    pub async fn execute(&self, request: &PaymentRequest) -> Result<PaymentResult> {
        let provider_name = select_provider_name(request.amount());
        let provider = self.registry.get(provider_name)?;

        let outcome = match self.provider_timeout {
            Some(limit) => tokio::time::timeout(limit, provider.process(request))
                .await
                .map_err(|_| PaymentError::ProviderTimeout {
                    provider: provider.name().to_string(),
                    after: limit,
                })??,
            None => provider.process(request).await?,
        };

        let fee = provider.calculate_fee(request.amount());

        Ok(PaymentResult::new(
            self.ids.next_id(),
            &outcome,
            provider.name(),
            request.amount(),
            fee,
        ))
    }
}
