pub mod fast_pay;
pub mod secure_pay;

use crate::application::registry::ProviderRegistry;
use crate::config::PaymentConfig;
use crate::domain::ports::PaymentProviderRef;
use crate::error::Result;
use fast_pay::FastPayProvider;
use secure_pay::SecurePayProvider;
use std::sync::Arc;

/// Registry holding the simulated FastPay and SecurePay integrations.
pub fn default_registry(config: &PaymentConfig) -> Result<ProviderRegistry> {
    let providers: Vec<PaymentProviderRef> = vec![
        Arc::new(FastPayProvider::new(config.simulated_latency)) as PaymentProviderRef,
        Arc::new(SecurePayProvider::new(config.simulated_latency)),
    ];
    ProviderRegistry::from_providers(providers)
}
