//! Rolodex Core Library
//!
//! A personal-contact record keeper: validated contact records, an ordered
//! in-memory collection with duplicate detection, and persistence to a single
//! flat JSON file.

pub mod contact;
pub mod error;
pub mod manager;
mod store;

pub use contact::{Contact, ContactPatch, ContactRecord};
pub use error::{ContactError, FieldError, InvalidContactData, StoreError, UniqueField};
pub use manager::ContactManager;
