//! Domain layer: payment values, the provider port and the selection policy.

pub mod payment;
pub mod ports;
pub mod selection;
