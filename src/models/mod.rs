//! Data models for contact directory entries.

pub mod contact;

pub use contact::{Contact, ContactFields, ContactPatch};
