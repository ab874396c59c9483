// SPDX-FileCopyrightText: 2026 Rolodex Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Field validation and name normalization.

use crate::error::FieldError;

/// Minimum digits in a phone number.
const MIN_PHONE_DIGITS: usize = 7;

/// Validates email format: exactly one `@`, non-empty local and domain parts.
pub(super) fn validate_email(value: &str) -> Result<(), FieldError> {
    if value.is_empty() {
        return Err(FieldError::Empty("email"));
    }

    let mut parts = value.split('@');
    let (local, domain) = (parts.next(), parts.next());
    if parts.next().is_some() {
        return Err(FieldError::InvalidEmail(value.to_string()));
    }

    match (local, domain) {
        (Some(local), Some(domain)) if !local.is_empty() && !domain.is_empty() => Ok(()),
        _ => Err(FieldError::InvalidEmail(value.to_string())),
    }
}

/// Validates phone format: an optional leading `+` followed by digits only.
pub(super) fn validate_phone(value: &str) -> Result<(), FieldError> {
    if value.is_empty() {
        return Err(FieldError::Empty("phone"));
    }

    let digits = value.strip_prefix('+').unwrap_or(value);
    let all_digits = !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit());
    if !all_digits || digits.len() < MIN_PHONE_DIGITS {
        return Err(FieldError::InvalidPhone(value.to_string()));
    }

    Ok(())
}

/// Title-cases a name: each whitespace-separated word gets an uppercase
/// first letter, the rest lowercased.
pub(super) fn title_case(value: &str) -> String {
    value
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_requires_exactly_one_at() {
        assert!(validate_email("a@b.com").is_ok());
        assert!(validate_email("alice.brown@example.com").is_ok());
        assert!(validate_email("not-an-email").is_err());
        assert!(validate_email("a@@b").is_err());
        assert!(validate_email("@b.com").is_err());
        assert!(validate_email("a@").is_err());
    }

    #[test]
    fn phone_is_digits_with_optional_plus() {
        assert!(validate_phone("+1555123456").is_ok());
        assert!(validate_phone("999999999").is_ok());
        assert!(validate_phone("555-1234").is_err());
        assert!(validate_phone("+").is_err());
        assert!(validate_phone("12345").is_err());
        // No upper bound on digit count
        assert!(validate_phone("1234567890123456").is_ok());
    }

    #[test]
    fn title_case_handles_multi_word_names() {
        assert_eq!(title_case("alice"), "Alice");
        assert_eq!(title_case("VAN  der berg"), "Van Der Berg");
        assert_eq!(title_case("łukasz"), "Łukasz");
    }
}
