//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer, providing
//! concrete implementations for data persistence and name resolution.
//!
//! # Modules
//!
//! - [`dns`] - Hostname resolution (system and allow-list resolvers)
//! - [`persistence`] - PostgreSQL and in-memory registry implementations

pub mod dns;
pub mod persistence;
