//! Application layer containing the payment orchestration.
//!
//! `PaymentOrchestrator` is the single entry point the boundaries call. It
//! resolves a provider through the selection policy and the `ProviderRegistry`,
//! delegates processing, and assembles the normalized `PaymentResult`.

pub mod id;
pub mod orchestrator;
pub mod registry;
