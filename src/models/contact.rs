//! Contact model representing one person's entry in the directory.

use crate::domain::{
    EmailAddress, FreeText, PersonName, PhoneNumber, ValidationError, ZipCode,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Raw field values for constructing a contact.
///
/// All fields are plain strings; validation happens when the struct is
/// handed to [`Contact::new`]. This keeps callers decoupled from the
/// individual value object types.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactFields {
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub phone: String,
    pub email: String,
}

/// A partial set of field overwrites applied during edit.
///
/// Only fields set to `Some` are overwritten. Each provided value is
/// re-validated with the same rule used at construction before any
/// overwrite happens, so a failed patch leaves the contact untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactPatch {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}

impl ContactPatch {
    /// Whether the patch carries no field overwrites at all.
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none()
            && self.last_name.is_none()
            && self.address.is_none()
            && self.city.is_none()
            && self.state.is_none()
            && self.zip.is_none()
            && self.phone.is_none()
            && self.email.is_none()
    }
}

/// A validated contact in the directory.
///
/// Instances can only be obtained through [`Contact::new`], which
/// validates every field. There are no setters; mutation happens only
/// through the directory's edit operation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Contact {
    first_name: PersonName,
    last_name: PersonName,
    address: FreeText,
    city: FreeText,
    state: FreeText,
    zip: ZipCode,
    phone: PhoneNumber,
    email: EmailAddress,
}

impl Contact {
    /// Create a new contact from raw field values.
    ///
    /// Fields are validated in order: first name, last name, address,
    /// city, state, ZIP, phone, email. The first failing rule is the
    /// one reported; no partially-valid contact is ever produced.
    ///
    /// # Errors
    ///
    /// Returns the [`ValidationError`] for the first field that fails
    /// its rule.
    pub fn new(fields: ContactFields) -> Result<Self, ValidationError> {
        Ok(Self {
            first_name: PersonName::new(fields.first_name)?,
            last_name: PersonName::new(fields.last_name)?,
            address: FreeText::new(fields.address)?,
            city: FreeText::new(fields.city)?,
            state: FreeText::new(fields.state)?,
            zip: ZipCode::new(fields.zip)?,
            phone: PhoneNumber::new(fields.phone)?,
            email: EmailAddress::new(fields.email)?,
        })
    }

    pub fn first_name(&self) -> &str {
        self.first_name.as_str()
    }

    pub fn last_name(&self) -> &str {
        self.last_name.as_str()
    }

    pub fn address(&self) -> &str {
        self.address.as_str()
    }

    pub fn city(&self) -> &str {
        self.city.as_str()
    }

    pub fn state(&self) -> &str {
        self.state.as_str()
    }

    pub fn zip(&self) -> &str {
        self.zip.as_str()
    }

    pub fn phone(&self) -> &str {
        self.phone.as_str()
    }

    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Whether this contact's first or last name equals `name`.
    pub fn matches_name(&self, name: &str) -> bool {
        self.first_name.as_str() == name || self.last_name.as_str() == name
    }

    /// Whether this contact's city or state equals `value`.
    pub fn matches_location(&self, value: &str) -> bool {
        self.city.as_str() == value || self.state.as_str() == value
    }

    /// Render the contact as a single human-readable line.
    pub fn display_line(&self) -> String {
        format!(
            "{} {}, {}, {}, {}, {}, Phone: {}, Email: {}",
            self.first_name,
            self.last_name,
            self.address,
            self.city,
            self.state,
            self.zip,
            self.phone,
            self.email
        )
    }

    /// Apply a patch, re-validating every provided field.
    ///
    /// All provided fields are validated before any overwrite, so the
    /// contact is never left partially updated.
    pub(crate) fn apply_patch(&mut self, patch: ContactPatch) -> Result<(), ValidationError> {
        let first_name = patch.first_name.map(PersonName::new).transpose()?;
        let last_name = patch.last_name.map(PersonName::new).transpose()?;
        let address = patch.address.map(FreeText::new).transpose()?;
        let city = patch.city.map(FreeText::new).transpose()?;
        let state = patch.state.map(FreeText::new).transpose()?;
        let zip = patch.zip.map(ZipCode::new).transpose()?;
        let phone = patch.phone.map(PhoneNumber::new).transpose()?;
        let email = patch.email.map(EmailAddress::new).transpose()?;

        if let Some(v) = first_name {
            self.first_name = v;
        }
        if let Some(v) = last_name {
            self.last_name = v;
        }
        if let Some(v) = address {
            self.address = v;
        }
        if let Some(v) = city {
            self.city = v;
        }
        if let Some(v) = state {
            self.state = v;
        }
        if let Some(v) = zip {
            self.zip = v;
        }
        if let Some(v) = phone {
            self.phone = v;
        }
        if let Some(v) = email {
            self.email = v;
        }

        Ok(())
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_line())
    }
}
