//! `waitready` is a bounded-retry HTTP availability probe.
//!
//! It answers one question: has a service endpoint come up yet? The crate
//! wraps an HTTP GET in a retry loop with ergonomic entry points:
//! - [`Prober::check`] — one classified attempt
//! - [`Prober::probe`] — the full bounded-retry loop

mod error;
mod options;
mod prober;

pub use error::ProbeError;
pub use options::ProbeOptions;
pub use prober::Prober;

pub type Result<T> = std::result::Result<T, ProbeError>;
