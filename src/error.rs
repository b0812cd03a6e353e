/// Error type returned by this crate.
#[derive(Debug, thiserror::Error)]
pub enum ProbeError {
    /// Connection-level failure from `reqwest` — host unreachable,
    /// connection refused, or request timeout.
    #[error("connection error: {0}")]
    Connection(#[from] reqwest::Error),
    /// Endpoint reachable but responded with a status other than 200.
    #[error("unexpected status {status}")]
    UnexpectedStatus { status: u16 },
}
