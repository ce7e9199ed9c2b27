//! Core domain entities representing the business data model.
//!
//! Entities follow the "New Type" pattern with a separate struct for creation:
//! [`NewUrlEntry`] carries what the caller supplies, [`UrlEntry`] what the
//! registry stored.

pub mod url_entry;

pub use url_entry::{NewUrlEntry, UrlEntry};
