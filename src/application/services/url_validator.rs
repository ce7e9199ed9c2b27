//! URL well-formedness and resolvability checks.

use std::fmt;
use std::sync::Arc;

use tracing::debug;
use url::{Host, Url};

use crate::error::AppError;
use crate::infrastructure::dns::HostResolver;

/// Hostname extracted from a validated URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hostname(String);

impl Hostname {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Hostname {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Gate applied to every submitted URL before the registry is touched.
///
/// # Rules
///
/// 1. **Syntax**: must parse as an absolute URL free of control characters
/// 2. **Host**: must be present
/// 3. **Resolution**: domain hosts must resolve; IP literals are accepted as-is
///
/// A single lookup decides the outcome, there are no retries.
#[derive(Clone)]
pub struct UrlValidator {
    resolver: Arc<dyn HostResolver>,
}

impl UrlValidator {
    pub fn new(resolver: Arc<dyn HostResolver>) -> Self {
        Self { resolver }
    }

    /// Validates `candidate` and returns its hostname.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidUrl`] if any rule above is violated.
    pub async fn validate(&self, candidate: &str) -> Result<Hostname, AppError> {
        let host = extract_host(candidate)?;

        match host {
            Host::Domain(domain) => {
                self.resolver
                    .resolve(&domain)
                    .await
                    .map_err(|e| AppError::invalid_url(e.to_string()))?;
                debug!("Validated host {}", domain);
                Ok(Hostname(domain))
            }
            Host::Ipv4(ip) => Ok(Hostname(ip.to_string())),
            Host::Ipv6(ip) => Ok(Hostname(ip.to_string())),
        }
    }
}

/// Parses `candidate` and extracts its host without any network access.
///
/// Any scheme is accepted as long as the URL carries a host. Candidates
/// with ASCII control characters are rejected before parsing, since the
/// parser would drop them while the stored string keeps them.
///
/// # Errors
///
/// Returns [`AppError::InvalidUrl`] for control characters, unparsable
/// input, and URLs without a host.
pub fn extract_host(candidate: &str) -> Result<Host<String>, AppError> {
    if candidate.bytes().any(|b| b.is_ascii_control()) {
        return Err(AppError::invalid_url("control character in url"));
    }

    let url = Url::parse(candidate).map_err(|e| AppError::invalid_url(e.to_string()))?;

    match url.host() {
        Some(Host::Domain(d)) if d.is_empty() => Err(AppError::invalid_url("empty host")),
        Some(host) => Ok(host.to_owned()),
        None => Err(AppError::invalid_url("missing host")),
    }
}
