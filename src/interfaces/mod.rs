//! Boundaries that feed requests into the orchestrator: CSV batches and HTTP.

pub mod csv;
pub mod http;
