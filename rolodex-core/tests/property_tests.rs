// SPDX-FileCopyrightText: 2026 Rolodex Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Property-based tests for the record round-trip and normalization.

use proptest::prelude::*;
use rolodex_core::*;

/// Strategy for generating name fields (already normalized form not required).
fn name_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z]{1,12}( [a-zA-Z]{1,12}){0,2}"
}

/// Strategy for generating email addresses.
fn email_strategy() -> impl Strategy<Value = String> {
    ("[a-z0-9.]{1,10}", "[a-z]{2,8}", "[a-z]{2,4}")
        .prop_map(|(user, domain, tld)| format!("{}@{}.{}", user, domain, tld))
}

/// Strategy for generating phone numbers.
fn phone_strategy() -> impl Strategy<Value = String> {
    "[0-9]{7,14}".prop_map(|n| format!("+{}", n))
}

/// Strategy for generating optional addresses.
fn address_strategy() -> impl Strategy<Value = Option<String>> {
    proptest::option::of("[a-zA-Z0-9][a-zA-Z0-9 .,-]{0,40}")
}

proptest! {
    #[test]
    fn record_round_trip_is_identity(
        first in name_strategy(),
        last in name_strategy(),
        email in email_strategy(),
        phone in phone_strategy(),
        address in address_strategy(),
    ) {
        let contact = Contact::new(&first, &last, &email, &phone, address.as_deref()).unwrap();
        let restored = Contact::from_record(contact.to_record()).unwrap();
        prop_assert_eq!(restored, contact);
    }

    #[test]
    fn json_round_trip_is_identity(
        first in name_strategy(),
        last in name_strategy(),
        email in email_strategy(),
        phone in phone_strategy(),
        address in address_strategy(),
    ) {
        let contact = Contact::new(&first, &last, &email, &phone, address.as_deref()).unwrap();
        let json = serde_json::to_string(&contact.to_record()).unwrap();
        let record: ContactRecord = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(Contact::from_record(record).unwrap(), contact);
    }

    #[test]
    fn normalization_is_idempotent(
        first in name_strategy(),
        last in name_strategy(),
    ) {
        let contact = Contact::new(&first, &last, "a@b.com", "9999999", None).unwrap();
        let again = Contact::new(
            contact.first_name(),
            contact.last_name(),
            "a@b.com",
            "9999999",
            None,
        )
        .unwrap();
        prop_assert_eq!(again.first_name(), contact.first_name());
        prop_assert_eq!(again.last_name(), contact.last_name());
    }
}
