//! Per-folder PIN gate.
//!
//! The PIN check is a client-side lookup by folder display name:
//! plaintext table, default PIN for unlisted folders, unlimited
//! attempts. It is deliberately not a security boundary.

use docex_core::config::passwords::PasswordConfig;
use docex_entity::collate::compare_names;

/// Required PIN length.
pub const PIN_LENGTH: usize = 6;

/// Resolves and checks folder PINs against the configured table.
#[derive(Debug, Clone)]
pub struct AccessGate {
    config: PasswordConfig,
}

impl AccessGate {
    /// Create a gate over a PIN table.
    pub fn new(config: PasswordConfig) -> Self {
        Self { config }
    }

    /// Whether the candidate matches the folder's PIN (exact string
    /// equality against the resolved table entry or the default).
    pub fn check_password(&self, folder_name: &str, candidate: &str) -> bool {
        self.config.pin_for(folder_name) == candidate
    }

    /// The PIN a folder resolves to. Reference use only.
    pub fn password_for(&self, folder_name: &str) -> &str {
        self.config.pin_for(folder_name)
    }

    /// All configured table entries, in the same collated order the
    /// folder tree uses.
    pub fn all_passwords(&self) -> Vec<(String, String)> {
        let mut entries: Vec<(String, String)> = self
            .config
            .by_folder_name
            .iter()
            .map(|(name, pin)| (name.clone(), pin.clone()))
            .collect();
        entries.sort_by(|a, b| compare_names(&a.0, &b.0));
        entries
    }

    /// Every folder requires a PIN; unlisted ones use the default.
    pub fn requires_password(&self, _folder_name: &str) -> bool {
        true
    }
}

/// Strip non-numeric characters from PIN input as typed, keeping at most
/// [`PIN_LENGTH`] digits.
pub fn sanitize_pin(input: &str) -> String {
    input
        .chars()
        .filter(char::is_ascii_digit)
        .take(PIN_LENGTH)
        .collect()
}

/// Whether a sanitized PIN is ready for submission (exactly six digits).
pub fn is_complete_pin(pin: &str) -> bool {
    pin.len() == PIN_LENGTH && pin.chars().all(|c| c.is_ascii_digit())
}
