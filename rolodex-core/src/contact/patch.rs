// SPDX-FileCopyrightText: 2026 Rolodex Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Partial contact updates.

use crate::error::{FieldError, InvalidContactData};

use super::Contact;

/// A set of pending field updates for one contact.
///
/// The recognized field names form a closed set; [`ContactPatch::set`]
/// rejects anything else. Applying a patch builds a fully re-validated
/// replacement contact, so a patch can never produce an invalid record.
#[derive(Debug, Clone, Default)]
pub struct ContactPatch {
    first_name: Option<String>,
    last_name: Option<String>,
    email: Option<String>,
    phone: Option<String>,
    // Outer None = leave as is, inner None = clear the address.
    address: Option<Option<String>>,
}

impl ContactPatch {
    /// Creates an empty patch.
    pub fn new() -> Self {
        ContactPatch::default()
    }

    /// Returns true if no field update has been recorded.
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none()
            && self.last_name.is_none()
            && self.email.is_none()
            && self.phone.is_none()
            && self.address.is_none()
    }

    /// Records an update by field name.
    ///
    /// Unknown names fail with [`InvalidContactData`]. An empty value for
    /// `address` clears the address; for every other field the value is
    /// validated when the patch is applied.
    pub fn set(&mut self, field: &str, value: &str) -> Result<(), InvalidContactData> {
        match field {
            "first_name" => self.first_name = Some(value.to_string()),
            "last_name" => self.last_name = Some(value.to_string()),
            "email" => self.email = Some(value.to_string()),
            "phone" => self.phone = Some(value.to_string()),
            "address" => {
                let value = value.trim();
                self.address = Some((!value.is_empty()).then(|| value.to_string()));
            }
            other => {
                return Err(InvalidContactData::single(FieldError::UnknownField(
                    other.to_string(),
                )))
            }
        }
        Ok(())
    }

    /// Sets the first name.
    pub fn first_name(mut self, value: &str) -> Self {
        self.first_name = Some(value.to_string());
        self
    }

    /// Sets the last name.
    pub fn last_name(mut self, value: &str) -> Self {
        self.last_name = Some(value.to_string());
        self
    }

    /// Sets the email.
    pub fn email(mut self, value: &str) -> Self {
        self.email = Some(value.to_string());
        self
    }

    /// Sets the phone.
    pub fn phone(mut self, value: &str) -> Self {
        self.phone = Some(value.to_string());
        self
    }

    /// Sets the address.
    pub fn address(mut self, value: &str) -> Self {
        self.address = Some(Some(value.to_string()));
        self
    }

    /// Clears the address.
    pub fn clear_address(mut self) -> Self {
        self.address = Some(None);
        self
    }

    /// Builds the replacement contact: patched fields overwritten, the rest
    /// preserved, everything re-validated.
    pub fn apply(&self, contact: &Contact) -> Result<Contact, InvalidContactData> {
        let address = match &self.address {
            Some(update) => update.as_deref(),
            None => contact.address(),
        };

        Contact::new(
            self.first_name.as_deref().unwrap_or(contact.first_name()),
            self.last_name.as_deref().unwrap_or(contact.last_name()),
            self.email.as_deref().unwrap_or(contact.email()),
            self.phone.as_deref().unwrap_or(contact.phone()),
            address,
        )
    }
}
