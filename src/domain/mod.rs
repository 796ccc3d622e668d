//! Domain value objects and types.
//!
//! This module contains type-safe wrappers for contact fields like
//! names, postal codes, phone numbers, and email addresses. These value
//! objects provide validation at construction time and prevent invalid
//! data from being represented in the system.

pub mod email;
pub mod errors;
pub mod free_text;
pub mod name;
pub mod phone;
pub mod zip;

pub use email::EmailAddress;
pub use errors::ValidationError;
pub use free_text::FreeText;
pub use name::PersonName;
pub use phone::PhoneNumber;
pub use zip::ZipCode;
