//! Allow-list resolver for tests and offline development.

use super::service::{HostResolver, ResolveError, ResolveResult};
use async_trait::async_trait;
use std::collections::HashSet;

/// A resolver that answers from a fixed set of hostnames.
///
/// Matching is case-insensitive. Any host not in the set fails as if the
/// name did not exist.
#[derive(Debug, Clone, Default)]
pub struct StaticResolver {
    known_hosts: HashSet<String>,
}

impl StaticResolver {
    pub fn new<I, S>(hosts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            known_hosts: hosts
                .into_iter()
                .map(|h| h.as_ref().to_ascii_lowercase())
                .collect(),
        }
    }
}

#[async_trait]
impl HostResolver for StaticResolver {
    async fn resolve(&self, host: &str) -> ResolveResult<()> {
        if self.known_hosts.contains(&host.to_ascii_lowercase()) {
            Ok(())
        } else {
            Err(ResolveError::LookupFailed {
                host: host.to_string(),
                reason: "unknown host".to_string(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_known_host_resolves() {
        let resolver = StaticResolver::new(["www.freecodecamp.org"]);
        assert!(resolver.resolve("www.freecodecamp.org").await.is_ok());
        assert!(resolver.resolve("WWW.FreeCodeCamp.org").await.is_ok());
    }

    #[tokio::test]
    async fn test_unknown_host_fails() {
        let resolver = StaticResolver::new(["example.org"]);
        let result = resolver.resolve("example.com").await;
        assert!(matches!(result, Err(ResolveError::LookupFailed { .. })));
    }
}
