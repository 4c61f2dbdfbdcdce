//! Concrete provider integrations.

pub mod providers;
