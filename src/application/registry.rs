use crate::domain::ports::PaymentProviderRef;
use crate::domain::selection::POLICY_PROVIDERS;
use crate::error::{PaymentError, Result};
use std::collections::HashMap;
use std::collections::hash_map::Entry;

/// The set of providers available to the orchestrator, keyed by name.
///
/// Built once at startup and read-only afterwards, so it can be shared across
/// tasks behind an `Arc` without locking.
#[derive(Clone, Default)]
pub struct ProviderRegistry {
    providers: HashMap<String, PaymentProviderRef>,
}

impl ProviderRegistry {
    /// Builds a registry, rejecting empty or repeated provider names.
    pub fn from_providers(providers: impl IntoIterator<Item = PaymentProviderRef>) -> Result<Self> {
        let mut map = HashMap::new();
        for provider in providers {
            let name = provider.name().to_string();
            if name.trim().is_empty() {
                return Err(PaymentError::InvalidRequest(
                    "Provider name must not be empty".to_string(),
                ));
            }
            match map.entry(name) {
                Entry::Occupied(entry) => {
                    return Err(PaymentError::DuplicateProvider(entry.key().clone()));
                }
                Entry::Vacant(entry) => {
                    entry.insert(provider);
                }
            }
        }
        Ok(Self { providers: map })
    }

    pub fn get(&self, name: &str) -> Result<PaymentProviderRef> {
        self.providers
            .get(name)
            .cloned()
            .ok_or_else(|| PaymentError::ProviderNotFound(name.to_string()))
    }

    /// Fails with `ProviderNotFound` for the first policy name not registered.
    pub fn ensure_covers_policy(&self) -> Result<()> {
        POLICY_PROVIDERS
            .iter()
            .try_for_each(|name| self.get(name).map(|_| ()))
    }

    /// Registered provider names in sorted order.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.providers.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}
