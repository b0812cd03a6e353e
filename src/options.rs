/// Configures attempt count, inter-attempt delay, and request timeout.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProbeOptions {
    /// Upper bound on attempts, including the first one.
    pub max_attempts: usize,
    /// Wait between failed attempts in milliseconds.
    pub delay_ms: u64,
    /// Per-request timeout in milliseconds.
    pub timeout_ms: u64,
}

impl Default for ProbeOptions {
    fn default() -> Self {
        Self {
            max_attempts: 10,
            delay_ms: 5_000,
            timeout_ms: 10_000,
        }
    }
}
