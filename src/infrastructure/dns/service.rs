//! Host resolver trait and error types.

use async_trait::async_trait;

/// Errors that can occur while resolving a hostname.
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    #[error("DNS lookup failed for {host}: {reason}")]
    LookupFailed { host: String, reason: String },

    #[error("DNS lookup returned no addresses for {0}")]
    NoAddresses(String),
}

/// Result type for resolver operations.
pub type ResolveResult<T> = Result<T, ResolveError>;

/// Trait for checking that a hostname currently resolves.
///
/// A single lookup decides the outcome; implementations must not retry.
///
/// # Implementations
///
/// - [`crate::infrastructure::dns::SystemResolver`] - system resolver via `tokio::net::lookup_host`
/// - [`crate::infrastructure::dns::StaticResolver`] - fixed allow-list for tests and offline runs
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HostResolver: Send + Sync {
    /// Resolves `host` and succeeds if at least one address is returned.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError`] on NXDOMAIN, timeout, or any other lookup error.
    async fn resolve(&self, host: &str) -> ResolveResult<()>;
}
