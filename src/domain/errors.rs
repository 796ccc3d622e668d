//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
///
/// Each variant carries the offending input. Only the first rule a
/// contact violates is reported per construction attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The name does not start with an uppercase letter, is shorter than
    /// three characters, or contains non-alphabetic characters.
    NameFormat(String),

    /// The address, city, or state is shorter than four characters.
    AddressFormat(String),

    /// The ZIP code is not exactly six decimal digits.
    ZipFormat(String),

    /// The phone number is not exactly ten decimal digits.
    PhoneFormat(String),

    /// The email address does not match the expected format.
    EmailFormat(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NameFormat(name) => write!(
                f,
                "Invalid name '{}': must start with a capital letter and be at least 3 letters",
                name
            ),
            Self::AddressFormat(value) => write!(
                f,
                "Invalid address, city, or state '{}': must be at least 4 characters long",
                value
            ),
            Self::ZipFormat(zip) => {
                write!(f, "Invalid ZIP code '{}': must be a 6-digit number", zip)
            }
            Self::PhoneFormat(phone) => write!(
                f,
                "Invalid phone number '{}': must be a 10-digit number",
                phone
            ),
            Self::EmailFormat(email) => write!(f, "Invalid email address: {}", email),
        }
    }
}

impl std::error::Error for ValidationError {}
