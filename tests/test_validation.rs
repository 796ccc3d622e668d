//! Tests for contact field validation at the crate boundary.
//!
//! Construction is the only way to obtain a contact, so every case here
//! goes through `Contact::new` or `ContactDirectory::add`.

mod common;
use common::{contact_fields, init_logging};

use rolodex::{Contact, ContactFields, ValidationError};

fn valid_fields() -> ContactFields {
    contact_fields(
        "Ayush",
        "Agarwal",
        "Civil Lines",
        "Agra",
        "Uttar Pradesh",
        "282001",
        "9876543210",
        "ayushofficial4208@gmail.com",
    )
}

#[test]
fn test_valid_fields_produce_matching_accessors() {
    init_logging();
    let contact = Contact::new(valid_fields()).unwrap();
    assert_eq!(contact.first_name(), "Ayush");
    assert_eq!(contact.last_name(), "Agarwal");
    assert_eq!(contact.address(), "Civil Lines");
    assert_eq!(contact.city(), "Agra");
    assert_eq!(contact.state(), "Uttar Pradesh");
    assert_eq!(contact.zip(), "282001");
    assert_eq!(contact.phone(), "9876543210");
    assert_eq!(contact.email(), "ayushofficial4208@gmail.com");
}

#[test]
fn test_invalid_first_names_fail_with_name_format() {
    init_logging();
    for bad in ["al", "alice", "123", "Ab", ""] {
        let fields = ContactFields {
            first_name: bad.to_string(),
            ..valid_fields()
        };
        assert_eq!(
            Contact::new(fields),
            Err(ValidationError::NameFormat(bad.to_string())),
            "expected NameFormat for {:?}",
            bad
        );
    }
}

#[test]
fn test_zip_digit_count_boundaries() {
    init_logging();
    for (zip, ok) in [("28200", false), ("282001", true), ("2820011", false)] {
        let fields = ContactFields {
            zip: zip.to_string(),
            ..valid_fields()
        };
        assert_eq!(Contact::new(fields).is_ok(), ok, "zip {:?}", zip);
    }
}

#[test]
fn test_phone_digit_count_boundaries() {
    init_logging();
    for (phone, ok) in [("987654321", false), ("9876543210", true)] {
        let fields = ContactFields {
            phone: phone.to_string(),
            ..valid_fields()
        };
        assert_eq!(Contact::new(fields).is_ok(), ok, "phone {:?}", phone);
    }
}

#[test]
fn test_email_format_boundaries() {
    init_logging();
    for (email, ok) in [("bad@", false), ("a@b.co", true), ("a@b.c", false)] {
        let fields = ContactFields {
            email: email.to_string(),
            ..valid_fields()
        };
        assert_eq!(Contact::new(fields).is_ok(), ok, "email {:?}", email);
    }
}

#[test]
fn test_short_free_text_fails_with_address_format() {
    init_logging();
    let fields = ContactFields {
        city: "Ab".to_string(),
        ..valid_fields()
    };
    assert_eq!(
        Contact::new(fields),
        Err(ValidationError::AddressFormat("Ab".to_string()))
    );
}

#[test]
fn test_validation_order_reports_first_failure_only() {
    init_logging();
    // Every field is invalid; the name rule is checked first.
    let fields = contact_fields("x", "y", "a", "b", "c", "1", "2", "nope");
    assert_eq!(
        Contact::new(fields),
        Err(ValidationError::NameFormat("x".to_string()))
    );
}

#[test]
fn test_contact_json_round_trip() -> anyhow::Result<()> {
    init_logging();
    let contact = Contact::new(valid_fields()).unwrap();
    let json = serde_json::to_string(&contact)?;
    let back: Contact = serde_json::from_str(&json)?;
    assert_eq!(back, contact);
    Ok(())
}
