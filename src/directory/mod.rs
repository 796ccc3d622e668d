//! The contact directory: an ordered, in-memory collection of contacts.
//!
//! All operations are synchronous and single-threaded. Mutations report
//! their outcome through [`DirectoryResult`] and log it via `tracing`;
//! a failed operation never leaves the directory partially mutated.

use crate::config::DirectoryOptions;
use crate::error::{DirectoryError, DirectoryResult};
use crate::models::{Contact, ContactFields, ContactPatch};
use serde::Serialize;
use std::collections::HashMap;

/// Contacts partitioned by city and, independently, by state.
///
/// Values are display lines in the contacts' insertion order. A contact
/// whose city equals its state appears in both maps.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct GroupedContacts {
    pub by_city: HashMap<String, Vec<String>>,
    pub by_state: HashMap<String, Vec<String>>,
}

/// An insertion-ordered collection of validated contacts.
///
/// # Example
///
/// ```
/// use rolodex::{ContactDirectory, ContactFields};
///
/// let mut directory = ContactDirectory::new();
/// directory.add(ContactFields {
///     first_name: "Ayush".to_string(),
///     last_name: "Agarwal".to_string(),
///     address: "Civil Lines".to_string(),
///     city: "Agra".to_string(),
///     state: "Uttar Pradesh".to_string(),
///     zip: "282001".to_string(),
///     phone: "9876543210".to_string(),
///     email: "ayush@example.com".to_string(),
/// }).unwrap();
/// assert_eq!(directory.count(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ContactDirectory {
    contacts: Vec<Contact>,
    options: DirectoryOptions,
}

impl ContactDirectory {
    /// Create an empty directory with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty directory with explicit options.
    pub fn with_options(options: DirectoryOptions) -> Self {
        Self {
            contacts: Vec::new(),
            options,
        }
    }

    /// Validate and append a new contact.
    ///
    /// With the default duplicate policy, the candidate's first and
    /// last name are checked against existing entries before any
    /// construction happens; a match reports
    /// [`DirectoryError::DuplicateEntry`] and discards the candidate.
    /// A validation failure reports the first violated rule and leaves
    /// the directory unchanged.
    pub fn add(&mut self, fields: ContactFields) -> DirectoryResult<&Contact> {
        if !self.options.allow_duplicate_names {
            let duplicate = self.contacts.iter().any(|c| {
                c.first_name() == fields.first_name && c.last_name() == fields.last_name
            });
            if duplicate {
                tracing::warn!(
                    first_name = %fields.first_name,
                    last_name = %fields.last_name,
                    "Duplicate contact entry detected, not added"
                );
                return Err(DirectoryError::DuplicateEntry {
                    first_name: fields.first_name,
                    last_name: fields.last_name,
                });
            }
        }

        let contact = Contact::new(fields).inspect_err(|e| {
            tracing::warn!(error = %e, "Error adding contact");
        })?;

        tracing::info!(contact = %contact, "Contact added successfully");
        self.contacts.push(contact);
        Ok(self.contacts.last().expect("contact was just pushed"))
    }

    /// Display lines for every contact, in insertion order.
    ///
    /// Non-destructive and repeatable.
    pub fn list(&self) -> Vec<String> {
        self.contacts.iter().map(Contact::display_line).collect()
    }

    /// Snapshot of the stored records, in insertion order.
    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    /// Find the first contact whose first or last name equals `name`.
    pub fn find_by_name(&self, name: &str) -> Option<&Contact> {
        self.contacts.iter().find(|c| c.matches_name(name))
    }

    /// Edit the first contact matching `name` by applying `patch`.
    ///
    /// Every field present in the patch is re-validated with the same
    /// rule used at construction; the patch applies atomically, so a
    /// failed edit leaves the record untouched.
    pub fn edit(&mut self, name: &str, patch: ContactPatch) -> DirectoryResult<&Contact> {
        let index = self
            .contacts
            .iter()
            .position(|c| c.matches_name(name))
            .ok_or_else(|| {
                tracing::warn!(name = %name, "Contact not found for edit");
                DirectoryError::NotFound(name.to_string())
            })?;

        self.contacts[index].apply_patch(patch).inspect_err(|e| {
            tracing::warn!(name = %name, error = %e, "Error editing contact");
        })?;

        let contact = &self.contacts[index];
        tracing::info!(contact = %contact, "Contact updated successfully");
        Ok(contact)
    }

    /// Delete the first contact matching `name`, preserving the
    /// relative order of the remaining records.
    ///
    /// Returns the removed contact.
    pub fn delete(&mut self, name: &str) -> DirectoryResult<Contact> {
        let index = self
            .contacts
            .iter()
            .position(|c| c.matches_name(name))
            .ok_or_else(|| {
                tracing::warn!(name = %name, "Contact not found for delete");
                DirectoryError::NotFound(name.to_string())
            })?;

        let removed = self.contacts.remove(index);
        tracing::info!(name = %name, "Contact deleted successfully");
        Ok(removed)
    }

    /// Number of stored contacts.
    pub fn count(&self) -> usize {
        self.contacts.len()
    }

    /// Whether the directory holds no contacts.
    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// All contacts whose city or state equals `value`, in insertion order.
    pub fn search_by_location(&self, value: &str) -> Vec<&Contact> {
        self.contacts
            .iter()
            .filter(|c| c.matches_location(value))
            .collect()
    }

    /// Partition contacts by city and, independently, by state.
    pub fn group_by_city_and_state(&self) -> GroupedContacts {
        let mut grouped = GroupedContacts::default();

        for contact in &self.contacts {
            grouped
                .by_city
                .entry(contact.city().to_string())
                .or_default()
                .push(contact.display_line());
            grouped
                .by_state
                .entry(contact.state().to_string())
                .or_default()
                .push(contact.display_line());
        }

        grouped
    }
}
