//! Styled terminal output helpers.

use console::style;
use rolodex_core::Contact;
use tabled::settings::Style;
use tabled::{Table, Tabled};

/// Prints a success message.
pub fn success(msg: &str) {
    println!("{} {}", style("✓").green(), msg);
}

/// Prints an error message without terminating.
pub fn error(msg: &str) {
    eprintln!("{} {}", style("✗").red(), msg);
}

/// Prints a warning message.
pub fn warning(msg: &str) {
    println!("{} {}", style("!").yellow(), msg);
}

/// Prints dimmed informational text.
pub fn info(msg: &str) {
    println!("{}", style(msg).dim());
}

#[derive(Tabled)]
struct ContactRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Email")]
    email: String,
    #[tabled(rename = "Phone")]
    phone: String,
    #[tabled(rename = "Address")]
    address: String,
}

/// Renders the contact collection as a table.
pub fn contacts_table(contacts: &[&Contact]) -> String {
    let rows: Vec<ContactRow> = contacts
        .iter()
        .map(|c| ContactRow {
            name: c.full_name(),
            email: c.email().to_string(),
            phone: c.phone().to_string(),
            address: c.address().unwrap_or("-").to_string(),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    table.to_string()
}
