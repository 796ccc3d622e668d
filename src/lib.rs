//! Rolodex - An in-memory contact directory with validated records.
//!
//! This library validates structured contact records at construction time,
//! stores them in an insertion-ordered collection, and supports lookup,
//! grouping, mutation, and deletion by name. All data lives in memory for
//! the lifetime of the directory instance.
//!
//! # Architecture
//!
//! - **domain**: Type-safe value objects for contact fields, validated at construction
//! - **models**: The contact record, raw field input, and the edit patch
//! - **directory**: The ordered collection and its CRUD/query operations
//! - **error**: Custom error types for precise error handling
//! - **config**: Directory behavior options (duplicate policy)

// Re-export commonly used types
pub mod config;
pub mod directory;
pub mod domain;
pub mod error;
pub mod models;

pub use config::DirectoryOptions;
pub use directory::{ContactDirectory, GroupedContacts};
pub use domain::ValidationError;
pub use error::{DirectoryError, DirectoryResult};
pub use models::{Contact, ContactFields, ContactPatch};
