//! Error types.
//!
//! Domain errors (`ContactError`) are kept separate from storage errors
//! (`StoreError`) so callers can tell "your data was wrong" from "the file
//! was wrong".

use std::fmt;

use thiserror::Error;

/// A single field-level validation failure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    #[error("{0} must not be empty")]
    Empty(&'static str),
    #[error("email '{0}' is not a valid address")]
    InvalidEmail(String),
    #[error("phone '{0}' is not a valid number")]
    InvalidPhone(String),
    #[error("'{0}' is not a contact field")]
    UnknownField(String),
    /// The serialized record did not match the contact shape
    /// (missing or unknown keys, wrong value types).
    #[error("{0}")]
    Malformed(String),
}

/// Contact validation failure, listing every offending field.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid contact data: {}", format_field_errors(.errors))]
pub struct InvalidContactData {
    pub errors: Vec<FieldError>,
}

impl InvalidContactData {
    pub(crate) fn single(error: FieldError) -> Self {
        InvalidContactData {
            errors: vec![error],
        }
    }
}

fn format_field_errors(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Which uniqueness constraint a duplicate violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UniqueField {
    Email,
    Phone,
}

impl fmt::Display for UniqueField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UniqueField::Email => write!(f, "email"),
            UniqueField::Phone => write!(f, "phone"),
        }
    }
}

/// Domain errors for contact operations.
#[derive(Error, Debug)]
pub enum ContactError {
    /// Add or edit would leave two contacts sharing an email or phone.
    #[error("a contact with {field} '{value}' already exists")]
    Duplicate { field: UniqueField, value: String },

    /// No contact matched the given identifier.
    #[error("no contact matches '{0}'")]
    NotFound(String),

    /// Field validation failed, or an unknown field name was patched.
    #[error(transparent)]
    InvalidData(#[from] InvalidContactData),
}

/// Storage errors for the flat-file store.
///
/// A missing file on load is not an error (first-run case); it is reported
/// as an empty collection instead.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The file exists but is not a valid JSON array of records.
    /// Recoverable: the caller may start fresh or abort.
    #[error("malformed contact file: {0}")]
    Parse(#[from] serde_json::Error),

    /// A record in the file failed validation or duplicates an earlier one.
    #[error("record {index} in contact file: {source}")]
    InvalidRecord { index: usize, source: ContactError },
}
