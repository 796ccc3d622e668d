//! Shared fixtures for integration tests.

// Not every test binary uses every fixture.
#![allow(dead_code)]

use rolodex::{ContactDirectory, ContactFields};
use std::sync::Once;

static INIT: Once = Once::new();

/// Initialize tracing output for tests (stderr, respects RUST_LOG).
pub fn init_logging() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .with_writer(std::io::stderr)
            .try_init();
    });
}

/// Raw fields for one sample contact.
pub fn contact_fields(
    first_name: &str,
    last_name: &str,
    address: &str,
    city: &str,
    state: &str,
    zip: &str,
    phone: &str,
    email: &str,
) -> ContactFields {
    ContactFields {
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        address: address.to_string(),
        city: city.to_string(),
        state: state.to_string(),
        zip: zip.to_string(),
        phone: phone.to_string(),
        email: email.to_string(),
    }
}

/// A directory pre-populated with four valid, non-duplicate contacts.
pub fn sample_directory() -> ContactDirectory {
    let mut directory = ContactDirectory::new();
    directory
        .add(contact_fields(
            "Ayush",
            "Agarwal",
            "Civil Lines",
            "Agra",
            "Uttar Pradesh",
            "282001",
            "9876543210",
            "ayushofficial4208@gmail.com",
        ))
        .expect("valid fixture contact");
    directory
        .add(contact_fields(
            "Mukul",
            "Singh",
            "Sector 62",
            "Noida",
            "Uttar Pradesh",
            "201301",
            "9123456789",
            "mukul@gmail.com",
        ))
        .expect("valid fixture contact");
    directory
        .add(contact_fields(
            "Ajay",
            "Tyagi",
            "Indirapuram",
            "Ghaziabad",
            "Uttar Pradesh",
            "201002",
            "9234567890",
            "ajay@gmail.com",
        ))
        .expect("valid fixture contact");
    directory
        .add(contact_fields(
            "Aditya",
            "Chauhan",
            "Connaught Place",
            "Delhi",
            "Delhi",
            "110001",
            "9345678901",
            "aditya@gmail.com",
        ))
        .expect("valid fixture contact");
    directory
}
