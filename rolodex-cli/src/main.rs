//! Rolodex CLI
//!
//! Interactive menu loop over the rolodex-core contact manager.

mod display;
mod menu;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use dialoguer::theme::ColorfulTheme;
use rolodex_core::{ContactManager, StoreError};

#[derive(Parser)]
#[command(name = "rolodex")]
#[command(version, about = "Flat-file personal contact keeper")]
struct Cli {
    /// Contact file (default: ~/.rolodex/contacts.json)
    #[arg(long, env = "ROLODEX_FILE")]
    file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let path = match cli.file {
        Some(path) => path,
        None => default_store_path()?,
    };

    let mut manager = ContactManager::new(&path);
    match manager.load_from_file() {
        Ok(()) => {}
        // Recoverable: the caller may start fresh or abort
        Err(StoreError::Parse(err)) => {
            display::warning(&format!("Contact file is not valid JSON: {}", err));
            if !menu::confirm_start_fresh(&ColorfulTheme::default())? {
                anyhow::bail!("aborted: {} is unreadable", path.display());
            }
        }
        Err(err) => {
            return Err(err).with_context(|| format!("failed to load {}", path.display()));
        }
    }

    menu::run(&mut manager)
}

fn default_store_path() -> Result<PathBuf> {
    let home = dirs::home_dir().context("could not determine home directory")?;
    Ok(home.join(".rolodex").join("contacts.json"))
}
