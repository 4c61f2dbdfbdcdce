use std::time::Duration;

/// Runtime knobs for the provider layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentConfig {
    /// Delay the simulated providers wait before answering.
    pub simulated_latency: Duration,
    /// Upper bound on a single provider call; `None` waits indefinitely.
    pub provider_timeout: Option<Duration>,
}

impl PaymentConfig {
    /// Builds a config from millisecond values as given on the command line.
    ///
    /// A timeout of `0` disables the provider timeout.
    pub fn from_millis(latency_ms: u64, timeout_ms: u64) -> Self {
        Self {
            simulated_latency: Duration::from_millis(latency_ms),
            provider_timeout: (timeout_ms > 0).then(|| Duration::from_millis(timeout_ms)),
        }
    }
}

impl Default for PaymentConfig {
    fn default() -> Self {
        Self {
            simulated_latency: Duration::from_millis(50),
            provider_timeout: Some(Duration::from_secs(5)),
        }
    }
}
