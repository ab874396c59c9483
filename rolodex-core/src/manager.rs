//! Contact Manager
//!
//! Owns the ordered in-memory contact collection and its storage path, and
//! enforces the uniqueness constraint: no two contacts share an email
//! (case-insensitive) or a phone.

use std::path::{Path, PathBuf};

use crate::contact::{Contact, ContactPatch, ContactRecord};
use crate::error::{ContactError, StoreError, UniqueField};
use crate::store;

/// Manages an ordered collection of contacts bound to one store file.
///
/// Insertion order is preserved and is the display order. Every mutating
/// operation is all-or-nothing: a failed add or edit leaves the collection
/// exactly as it was. Nothing saves implicitly; call
/// [`ContactManager::save_to_file`].
pub struct ContactManager {
    contacts: Vec<Contact>,
    storage_path: PathBuf,
}

impl ContactManager {
    /// Creates an empty manager bound to a storage path.
    pub fn new(storage_path: impl Into<PathBuf>) -> Self {
        ContactManager {
            contacts: Vec::new(),
            storage_path: storage_path.into(),
        }
    }

    /// Returns the storage path.
    pub fn storage_path(&self) -> &Path {
        &self.storage_path
    }

    /// Returns the number of contacts.
    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    /// Returns true if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// Appends a contact to the collection.
    ///
    /// Fails with [`ContactError::Duplicate`] if an existing contact already
    /// uses the same email (case-insensitive) or phone.
    pub fn add_contact(&mut self, contact: Contact) -> Result<(), ContactError> {
        if let Some(err) = self
            .contacts
            .iter()
            .find_map(|existing| duplicate_of(existing, &contact))
        {
            return Err(err);
        }

        self.contacts.push(contact);
        Ok(())
    }

    /// Removes the first contact whose email (case-insensitive) or phone
    /// matches `identifier`, and returns it.
    ///
    /// All emails are checked before any phone. Names do not identify a
    /// contact for removal.
    pub fn remove_contact(&mut self, identifier: &str) -> Result<Contact, ContactError> {
        let index = self
            .contacts
            .iter()
            .position(|c| c.matches_email(identifier))
            .or_else(|| self.contacts.iter().position(|c| c.matches_phone(identifier)))
            .ok_or_else(|| ContactError::NotFound(identifier.to_string()))?;

        Ok(self.contacts.remove(index))
    }

    /// Finds a contact by identifier: exact email (case-insensitive), then
    /// exact phone, then case-insensitive full name (`"first last"`).
    ///
    /// Each pass runs over the whole collection before the next begins, so an
    /// email match always wins over a name match regardless of insertion
    /// order.
    pub fn find_contact(&self, identifier: &str) -> Result<&Contact, ContactError> {
        self.position_of(identifier)
            .map(|index| &self.contacts[index])
            .ok_or_else(|| ContactError::NotFound(identifier.to_string()))
    }

    /// Replaces a contact with a patched, re-validated version, preserving
    /// its position.
    ///
    /// The contact is located by the [`ContactManager::find_contact`] rule.
    /// The candidate is validated first, then checked for email/phone
    /// collisions against the other contacts. Uniqueness is re-checked even
    /// when only name or address changed.
    pub fn edit_contact(
        &mut self,
        identifier: &str,
        patch: &ContactPatch,
    ) -> Result<&Contact, ContactError> {
        let index = self
            .position_of(identifier)
            .ok_or_else(|| ContactError::NotFound(identifier.to_string()))?;

        let candidate = patch.apply(&self.contacts[index])?;

        if let Some(err) = self
            .contacts
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != index)
            .find_map(|(_, existing)| duplicate_of(existing, &candidate))
        {
            return Err(err);
        }

        self.contacts[index] = candidate;
        Ok(&self.contacts[index])
    }

    /// Returns all contacts, in insertion order or, when `sorted`, ordered by
    /// last name then first name (case-insensitive).
    pub fn list_contacts(&self, sorted: bool) -> Vec<&Contact> {
        let mut contacts: Vec<&Contact> = self.contacts.iter().collect();
        if sorted {
            contacts.sort_by_key(|c| {
                (
                    c.last_name().to_lowercase(),
                    c.first_name().to_lowercase(),
                )
            });
        }
        contacts
    }

    /// Serializes the full collection to the storage path as one JSON array.
    ///
    /// The write is atomic (temp file + rename); a failed save leaves both
    /// the previous file content and the in-memory collection intact.
    pub fn save_to_file(&self) -> Result<(), StoreError> {
        let records: Vec<ContactRecord> = self.contacts.iter().map(Contact::to_record).collect();
        store::write_records(&self.storage_path, &records)
    }

    /// Replaces the in-memory collection with the file's content.
    ///
    /// A missing file is the first-run case and loads as an empty collection.
    /// Malformed JSON fails with [`StoreError::Parse`]; a record that fails
    /// validation or duplicates an earlier one fails the whole load with
    /// [`StoreError::InvalidRecord`] naming its position. On any failure the
    /// in-memory collection is left unchanged.
    pub fn load_from_file(&mut self) -> Result<(), StoreError> {
        let Some(records) = store::read_records(&self.storage_path)? else {
            self.contacts.clear();
            return Ok(());
        };

        let mut loaded: Vec<Contact> = Vec::with_capacity(records.len());
        for (index, record) in records.into_iter().enumerate() {
            let contact = Contact::from_record(record).map_err(|source| {
                StoreError::InvalidRecord {
                    index,
                    source: ContactError::InvalidData(source),
                }
            })?;

            if let Some(source) = loaded
                .iter()
                .find_map(|existing| duplicate_of(existing, &contact))
            {
                return Err(StoreError::InvalidRecord { index, source });
            }

            loaded.push(contact);
        }

        self.contacts = loaded;
        Ok(())
    }

    fn position_of(&self, identifier: &str) -> Option<usize> {
        self.contacts
            .iter()
            .position(|c| c.matches_email(identifier))
            .or_else(|| self.contacts.iter().position(|c| c.matches_phone(identifier)))
            .or_else(|| self.contacts.iter().position(|c| c.matches_name(identifier)))
    }
}

/// Returns the duplicate error `candidate` would cause next to `existing`.
fn duplicate_of(existing: &Contact, candidate: &Contact) -> Option<ContactError> {
    if existing.matches_email(candidate.email()) {
        return Some(ContactError::Duplicate {
            field: UniqueField::Email,
            value: candidate.email().to_string(),
        });
    }
    if existing.matches_phone(candidate.phone()) {
        return Some(ContactError::Duplicate {
            field: UniqueField::Phone,
            value: candidate.phone().to_string(),
        });
    }
    None
}
