//! Resolver backed by the operating system's name service.

use super::service::{HostResolver, ResolveError, ResolveResult};
use async_trait::async_trait;
use tracing::debug;

/// Resolves hostnames with `tokio::net::lookup_host`.
///
/// The lookup runs on tokio's blocking pool, so the calling task yields
/// until the system resolver answers.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemResolver;

impl SystemResolver {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl HostResolver for SystemResolver {
    async fn resolve(&self, host: &str) -> ResolveResult<()> {
        // Port is irrelevant for name resolution but required by lookup_host.
        let mut addrs = tokio::net::lookup_host((host, 0))
            .await
            .map_err(|e| ResolveError::LookupFailed {
                host: host.to_string(),
                reason: e.to_string(),
            })?;

        match addrs.next() {
            Some(addr) => {
                debug!("Resolved {} to {}", host, addr.ip());
                Ok(())
            }
            None => Err(ResolveError::NoAddresses(host.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_resolves_localhost() {
        let resolver = SystemResolver::new();
        assert!(resolver.resolve("localhost").await.is_ok());
    }

    #[tokio::test]
    async fn test_rejects_invalid_tld() {
        let resolver = SystemResolver::new();
        let result = resolver.resolve("thisdomaindoesnotexist.invalid").await;
        assert!(result.is_err());
    }
}
