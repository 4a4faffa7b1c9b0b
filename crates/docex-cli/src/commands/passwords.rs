//! Folder PIN reference listing.
//!
//! Prints the configured table so an administrator can look up a
//! sector's PIN. The table is client-side configuration, not a secret
//! store.

use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use docex_core::error::AppError;
use docex_explorer::AccessGate;

use crate::output::{self, OutputFormat};

/// Arguments for the passwords command
#[derive(Debug, Args)]
pub struct PasswordArgs {}

/// PIN display row
#[derive(Debug, Serialize, Tabled)]
struct PasswordRow {
    /// Folder display name
    #[tabled(rename = "Pasta")]
    pasta: String,
    /// Six-digit PIN
    #[tabled(rename = "Senha")]
    senha: String,
}

/// Execute the passwords command
pub fn execute(_args: &PasswordArgs, env: &str, format: OutputFormat) -> Result<(), AppError> {
    let config = super::load_config(env)?;
    let default_pin = config.passwords.default_pin.clone();
    let gate = AccessGate::new(config.passwords);

    let rows: Vec<PasswordRow> = gate
        .all_passwords()
        .into_iter()
        .map(|(pasta, senha)| PasswordRow { pasta, senha })
        .collect();
    output::print_list(&rows, format);
    output::print_warning(&format!("Senha padrão para pastas não listadas: {default_pin}"));

    Ok(())
}
