#![allow(dead_code)]

use async_trait::async_trait;
use payflow::application::id::InternalIdGenerator;
use payflow::application::orchestrator::PaymentOrchestrator;
use payflow::application::registry::ProviderRegistry;
use payflow::config::PaymentConfig;
use payflow::domain::payment::{PaymentRequest, ProviderOutcome};
use payflow::domain::ports::{PaymentProvider, PaymentProviderRef};
use payflow::error::{PaymentError, Result};
use payflow::infrastructure::providers::default_registry;
use rust_decimal::Decimal;
use std::io::Write;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// Orchestrator over the simulated providers with no artificial latency.
pub fn orchestrator() -> PaymentOrchestrator {
    orchestrator_with_latency(Duration::ZERO)
}

pub fn orchestrator_with_latency(latency: Duration) -> PaymentOrchestrator {
    let config = PaymentConfig {
        simulated_latency: latency,
        provider_timeout: None,
    };
    let registry = default_registry(&config).unwrap();
    PaymentOrchestrator::new(Arc::new(registry)).with_id_generator(InternalIdGenerator::starting_at(1))
}

pub fn orchestrator_over(providers: Vec<PaymentProviderRef>) -> PaymentOrchestrator {
    let registry = ProviderRegistry::from_providers(providers).unwrap();
    PaymentOrchestrator::new(Arc::new(registry))
}

/// How a `ScriptedProvider` answers `process`.
#[derive(Clone, Copy)]
pub enum Script {
    Approve,
    Unavailable,
    Hang,
}

/// Test provider that counts calls and answers according to its script.
pub struct ScriptedProvider {
    name: &'static str,
    script: Script,
    calls: AtomicUsize,
}

impl ScriptedProvider {
    pub fn new(name: &'static str, script: Script) -> Arc<Self> {
        Arc::new(Self {
            name,
            script,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PaymentProvider for ScriptedProvider {
    fn name(&self) -> &str {
        self.name
    }

    fn calculate_fee(&self, _amount: Decimal) -> Decimal {
        Decimal::ONE
    }

    async fn process(&self, _request: &PaymentRequest) -> Result<ProviderOutcome> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.script {
            Script::Approve => Ok(ProviderOutcome::new(format!("{}-1", self.name), "approved")),
            Script::Unavailable => Err(PaymentError::ProviderUnavailable {
                provider: self.name.to_string(),
                reason: "connection refused".to_string(),
            }),
            Script::Hang => {
                tokio::time::sleep(Duration::from_secs(60)).await;
                Ok(ProviderOutcome::new(format!("{}-late", self.name), "approved"))
            }
        }
    }
}

/// Writes a payments CSV with an `amount,currency` header to a temp file.
pub fn payments_csv(rows: &[&str]) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "amount,currency").unwrap();
    for row in rows {
        writeln!(file, "{row}").unwrap();
    }
    file.flush().unwrap();
    file
}
