// SPDX-FileCopyrightText: 2026 Rolodex Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Contact Module
//!
//! A validated, immutable contact record and its serialized form.

mod patch;
mod validation;

pub use patch::ContactPatch;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{FieldError, InvalidContactData};

/// One person's contact details.
///
/// Every `Contact` in existence has passed validation: fields are private and
/// the only constructors are [`Contact::new`] and [`Contact::from_record`],
/// both of which validate. Names are title-cased on construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Contact {
    first_name: String,
    last_name: String,
    email: String,
    phone: String,
    address: Option<String>,
}

/// The serialized form of a [`Contact`]: one JSON object in the store file.
///
/// Carries no validation guarantee of its own; turn it back into a `Contact`
/// with [`Contact::from_record`], which re-runs the full checks so a
/// hand-edited file with bad data cannot silently load.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ContactRecord {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub address: Option<String>,
}

impl Contact {
    /// Creates a validated contact.
    ///
    /// Collects every failing field into one [`InvalidContactData`] rather
    /// than stopping at the first. Name fields are trimmed and title-cased;
    /// an all-whitespace address is treated as absent.
    pub fn new(
        first_name: &str,
        last_name: &str,
        email: &str,
        phone: &str,
        address: Option<&str>,
    ) -> Result<Self, InvalidContactData> {
        let first_name = first_name.trim();
        let last_name = last_name.trim();
        let email = email.trim();
        let phone = phone.trim();

        let mut errors = Vec::new();
        if first_name.is_empty() {
            errors.push(FieldError::Empty("first_name"));
        }
        if last_name.is_empty() {
            errors.push(FieldError::Empty("last_name"));
        }
        if let Err(e) = validation::validate_email(email) {
            errors.push(e);
        }
        if let Err(e) = validation::validate_phone(phone) {
            errors.push(e);
        }
        if !errors.is_empty() {
            return Err(InvalidContactData { errors });
        }

        Ok(Contact {
            first_name: validation::title_case(first_name),
            last_name: validation::title_case(last_name),
            email: email.to_string(),
            phone: phone.to_string(),
            address: address
                .map(str::trim)
                .filter(|a| !a.is_empty())
                .map(str::to_string),
        })
    }

    /// Rebuilds a contact from its serialized form, re-running validation.
    pub fn from_record(record: ContactRecord) -> Result<Self, InvalidContactData> {
        Contact::new(
            &record.first_name,
            &record.last_name,
            &record.email,
            &record.phone,
            record.address.as_deref(),
        )
    }

    /// Returns the serialized form of this contact.
    pub fn to_record(&self) -> ContactRecord {
        ContactRecord {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            address: self.address.clone(),
        }
    }

    /// Returns the first name (title-cased).
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    /// Returns the last name (title-cased).
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// Returns `"first last"`.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Returns the email address.
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns the phone number.
    pub fn phone(&self) -> &str {
        &self.phone
    }

    /// Returns the postal address, if set.
    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }

    /// Case-insensitive email comparison.
    pub fn matches_email(&self, email: &str) -> bool {
        self.email.eq_ignore_ascii_case(email)
    }

    /// Exact phone comparison.
    pub fn matches_phone(&self, phone: &str) -> bool {
        self.phone == phone
    }

    /// Case-insensitive `"first last"` comparison.
    pub fn matches_name(&self, name: &str) -> bool {
        self.full_name().eq_ignore_ascii_case(name.trim())
    }
}

impl fmt::Display for Contact {
    /// Single-line rendering for listings and search results, e.g.
    /// `Alice Brown <alice.brown@example.com>, +1555123456`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} <{}>, {}",
            self.first_name, self.last_name, self.email, self.phone
        )?;
        if let Some(address) = &self.address {
            write!(f, ", {}", address)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construction_normalizes_names() {
        let c = Contact::new("  alice ", "BROWN", "alice@example.com", "+1555123456", None)
            .unwrap();
        assert_eq!(c.first_name(), "Alice");
        assert_eq!(c.last_name(), "Brown");
        assert_eq!(c.full_name(), "Alice Brown");
    }

    #[test]
    fn construction_collects_all_field_errors() {
        let err = Contact::new("", "", "not-an-email", "abc", None).unwrap_err();
        assert_eq!(err.errors.len(), 4);
        assert!(err.errors.contains(&FieldError::Empty("first_name")));
        assert!(err.errors.contains(&FieldError::Empty("last_name")));
    }

    #[test]
    fn blank_address_is_absent() {
        let c = Contact::new("A", "B", "a@b.com", "1234567", Some("   ")).unwrap();
        assert_eq!(c.address(), None);
    }

    #[test]
    fn display_is_single_line() {
        let c = Contact::new(
            "alice",
            "brown",
            "alice.brown@example.com",
            "+1555123456",
            None,
        )
        .unwrap();
        assert_eq!(
            c.to_string(),
            "Alice Brown <alice.brown@example.com>, +1555123456"
        );
    }

    #[test]
    fn email_match_is_case_insensitive() {
        let c = Contact::new("A", "B", "Alice@Example.com", "1234567", None).unwrap();
        assert!(c.matches_email("alice@example.com"));
        assert!(c.matches_name("a b"));
        assert!(!c.matches_phone("7654321"));
    }
}
