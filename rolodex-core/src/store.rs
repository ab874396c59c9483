// SPDX-FileCopyrightText: 2026 Rolodex Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Flat-file JSON store.
//!
//! The store is one UTF-8 JSON document whose top level is an array of
//! contact records, in collection order. Writes are atomic (temp file +
//! rename) to prevent partial files on crash/interruption.

use std::fs;
use std::io;
use std::path::Path;

use crate::contact::ContactRecord;
use crate::error::{ContactError, FieldError, InvalidContactData, StoreError};

/// Reads all records from `path`.
///
/// Returns `None` when the file does not exist (first run). A document that
/// is not a JSON array fails with [`StoreError::Parse`]; an element that does
/// not match the record shape (missing or unknown keys, wrong types) fails
/// with [`StoreError::InvalidRecord`] naming its position, so one bad record
/// is never reported as a corrupt file.
pub(crate) fn read_records(path: &Path) -> Result<Option<Vec<ContactRecord>>, StoreError> {
    let data = match fs::read_to_string(path) {
        Ok(data) => data,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(err) => return Err(StoreError::Io(err)),
    };

    let values: Vec<serde_json::Value> = serde_json::from_str(&data)?;

    let mut records = Vec::with_capacity(values.len());
    for (index, value) in values.into_iter().enumerate() {
        let record = serde_json::from_value(value).map_err(|err| StoreError::InvalidRecord {
            index,
            source: ContactError::InvalidData(InvalidContactData::single(FieldError::Malformed(
                err.to_string(),
            ))),
        })?;
        records.push(record);
    }

    Ok(Some(records))
}

/// Writes all records to `path` as a pretty-printed JSON array, creating
/// parent directories as needed.
pub(crate) fn write_records(path: &Path, records: &[ContactRecord]) -> Result<(), StoreError> {
    let data = serde_json::to_string_pretty(records)?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    atomic_write(path, data.as_bytes())?;
    Ok(())
}

/// Atomic file write (write to temp, then rename).
///
/// Either the old content remains or the new content is fully written.
fn atomic_write(path: &Path, data: &[u8]) -> io::Result<()> {
    let temp_path = path.with_extension("tmp");

    fs::write(&temp_path, data)?;
    fs::rename(&temp_path, path)?;

    Ok(())
}
