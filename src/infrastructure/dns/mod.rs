//! Hostname resolution used to gate URL submissions.
//!
//! Provides a [`HostResolver`] trait with two implementations:
//! - [`SystemResolver`] - Production lookup through the system resolver
//! - [`StaticResolver`] - Fixed allow-list for tests and offline runs

mod service;
mod static_resolver;
mod system_resolver;

pub use service::{HostResolver, ResolveError, ResolveResult};
pub use static_resolver::StaticResolver;
pub use system_resolver::SystemResolver;

#[cfg(test)]
pub use service::MockHostResolver;
