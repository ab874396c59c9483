//! Interactive menu loop.
//!
//! Each menu action gathers input, calls one manager operation, and prints
//! the result or the error. No domain or storage error terminates the loop.

use anyhow::{Context, Result};
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input, Select};
use rolodex_core::{Contact, ContactManager, ContactPatch};

use crate::display;

const MENU_ITEMS: &[&str] = &[
    "Add contact",
    "View all contacts",
    "Search",
    "Edit contact",
    "Delete contact",
    "Save and exit",
];

/// Runs the menu loop until a successful save-and-exit.
pub fn run(manager: &mut ContactManager) -> Result<()> {
    let theme = ColorfulTheme::default();

    loop {
        println!();
        let choice = Select::with_theme(&theme)
            .with_prompt("Rolodex")
            .items(MENU_ITEMS)
            .default(0)
            .interact()?;

        let outcome = match choice {
            0 => add(manager, &theme),
            1 => view_all(manager, &theme),
            2 => search(manager, &theme),
            3 => edit(manager, &theme),
            4 => delete(manager, &theme),
            _ => match save_and_exit(manager) {
                Ok(()) => return Ok(()),
                Err(err) => Err(err),
            },
        };

        if let Err(err) = outcome {
            display::error(&format!("{err:#}"));
        }
    }
}

/// Asks whether to continue with an empty collection after a corrupt load.
pub fn confirm_start_fresh(theme: &ColorfulTheme) -> Result<bool> {
    Ok(Confirm::with_theme(theme)
        .with_prompt("Start with an empty contact list? (the file is rewritten on save)")
        .default(false)
        .interact()?)
}

fn add(manager: &mut ContactManager, theme: &ColorfulTheme) -> Result<()> {
    let first: String = Input::with_theme(theme)
        .with_prompt("First name")
        .interact_text()?;
    let last: String = Input::with_theme(theme)
        .with_prompt("Last name")
        .interact_text()?;
    let email: String = Input::with_theme(theme)
        .with_prompt("Email")
        .interact_text()?;
    let phone: String = Input::with_theme(theme)
        .with_prompt("Phone")
        .interact_text()?;
    let address: String = Input::with_theme(theme)
        .with_prompt("Address (optional)")
        .allow_empty(true)
        .interact_text()?;

    let address = (!address.trim().is_empty()).then_some(address.as_str());
    let contact = Contact::new(&first, &last, &email, &phone, address)?;
    let line = contact.to_string();
    manager.add_contact(contact)?;

    display::success(&format!("Added {}", line));
    Ok(())
}

fn view_all(manager: &ContactManager, theme: &ColorfulTheme) -> Result<()> {
    if manager.is_empty() {
        display::info("No contacts yet.");
        return Ok(());
    }

    let sorted = Confirm::with_theme(theme)
        .with_prompt("Sort by last name?")
        .default(false)
        .interact()?;

    println!();
    println!("Contacts ({}):", manager.len());
    println!("{}", display::contacts_table(&manager.list_contacts(sorted)));
    Ok(())
}

fn search(manager: &ContactManager, theme: &ColorfulTheme) -> Result<()> {
    let identifier: String = Input::with_theme(theme)
        .with_prompt("Email, phone, or full name")
        .interact_text()?;

    let contact = manager.find_contact(&identifier)?;
    println!("{}", contact);
    Ok(())
}

fn edit(manager: &mut ContactManager, theme: &ColorfulTheme) -> Result<()> {
    let identifier: String = Input::with_theme(theme)
        .with_prompt("Email, phone, or full name of the contact to edit")
        .interact_text()?;

    // Show what is being edited before gathering updates
    println!("{}", manager.find_contact(&identifier)?);

    let mut patch = ContactPatch::new();
    loop {
        let field: String = Input::with_theme(theme)
            .with_prompt("Field to change (first_name/last_name/email/phone/address, empty to finish)")
            .allow_empty(true)
            .interact_text()?;
        if field.trim().is_empty() {
            break;
        }

        let value: String = Input::with_theme(theme)
            .with_prompt(format!("New value for {}", field.trim()))
            .allow_empty(true)
            .interact_text()?;

        if let Err(err) = patch.set(field.trim(), &value) {
            display::error(&err.to_string());
        }
    }

    if patch.is_empty() {
        display::info("Nothing to change.");
        return Ok(());
    }

    let updated = manager.edit_contact(&identifier, &patch)?;
    display::success(&format!("Updated {}", updated));
    Ok(())
}

fn delete(manager: &mut ContactManager, theme: &ColorfulTheme) -> Result<()> {
    let identifier: String = Input::with_theme(theme)
        .with_prompt("Email or phone of the contact to delete")
        .interact_text()?;

    let removed = manager.remove_contact(&identifier)?;
    display::success(&format!("Removed {}", removed));
    Ok(())
}

fn save_and_exit(manager: &ContactManager) -> Result<()> {
    manager
        .save_to_file()
        .with_context(|| format!("failed to save {}", manager.storage_path().display()))?;

    display::success(&format!(
        "Saved {} contact(s) to {}",
        manager.len(),
        manager.storage_path().display()
    ));
    Ok(())
}
