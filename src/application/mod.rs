//! Application layer services implementing business logic.
//!
//! This layer orchestrates domain operations by coordinating repository calls,
//! validation, and business rules. Services consume repository traits and provide
//! a clean API for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::link_service::LinkService`] - Short URL creation and retrieval
//! - [`services::url_validator::UrlValidator`] - URL syntax and DNS checks

pub mod services;
