//! Registry implementations.
//!
//! # Repositories
//!
//! - [`PgUrlRepository`] - PostgreSQL storage via SQLx
//! - [`MemoryUrlRepository`] - Process-local storage for development and tests

pub mod memory_url_repository;
pub mod pg_url_repository;

pub use memory_url_repository::MemoryUrlRepository;
pub use pg_url_repository::PgUrlRepository;
