//! Folder PIN table configuration.
//!
//! Each protected folder is keyed by its exact display name (the sector
//! names are upper-case and diacritics-sensitive). Folders not listed
//! here fall back to [`PasswordConfig::default_pin`].
//!
//! This is a plaintext client-side lookup, not a security boundary. A
//! real deployment would replace it with server-side authorization.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// The hospital's sector PIN table, shipped as the configuration default.
const DEFAULT_TABLE: &[(&str, &str)] = &[
    ("ALMOXARIFADO", "914275"),
    ("CCIH", "582634"),
    ("CENTRO DE ESTUDOS", "739148"),
    ("CGA", "463729"),
    ("CHEFIA DE ANESTESIA", "825196"),
    ("CHEFIA DE CLÍNICA MÉDICA", "637482"),
    ("CHEFIA DE ENFERMAGEM NEONATAL", "491837"),
    ("CHEFIA DE GINECOLOGIA", "758294"),
    ("CHEFIA DE NEONATOLOGIA", "384659"),
    ("CHEFIA DE OBSTETRÍCIA", "926571"),
    ("CHEFIA DE PACIENTES EXTERNOS", "571938"),
    ("CHEFIA DE PACIENTES INTERNOS", "648273"),
    ("CHEFIAS DE ENFERMAGEM", "395827"),
    ("CMA", "817462"),
    ("COMITÊ DE ÉTICA DE ENFERMAGEM", "264951"),
    ("COMITÊ DE ÉTICA MÉDICA", "751839"),
    ("COMITÊ DE ÓBITO MATERNO", "438697"),
    ("COMPRAS", "621875"),
    ("DIREÇÃO GERAL", "983456"),
    ("DOCUMENTAÇÃO MÉDICA", "526948"),
    ("DSADT", "749183"),
    ("FARMÁCIA", "762149"),
    ("FATURAMENTO", "314826"),
    ("LABORATÓRIOS", "894536"),
    ("MANUTENÇÃO", "681359"),
    ("NATS", "927543"),
    ("NSP", "453719"),
    ("NUTRIÇÃO", "598274"),
    ("RADIOLOGIA", "316478"),
    ("RH", "485932"),
    ("SERVIÇO SOCIAL", "729465"),
];

/// PIN assigned to folders that do not appear in the table.
const DEFAULT_PIN: &str = "111111";

/// Folder-name → 6-digit-PIN table with a fallback for unlisted folders.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PasswordConfig {
    /// Exact folder display name → 6-digit numeric PIN.
    #[serde(default = "default_table")]
    pub by_folder_name: HashMap<String, String>,
    /// PIN used for folders absent from the table.
    #[serde(default = "default_pin")]
    pub default_pin: String,
}

impl Default for PasswordConfig {
    fn default() -> Self {
        Self {
            by_folder_name: default_table(),
            default_pin: default_pin(),
        }
    }
}

impl PasswordConfig {
    /// Resolve the PIN for a folder name, falling back to the default.
    pub fn pin_for(&self, folder_name: &str) -> &str {
        self.by_folder_name
            .get(folder_name)
            .map(String::as_str)
            .unwrap_or(&self.default_pin)
    }
}

fn default_table() -> HashMap<String, String> {
    DEFAULT_TABLE
        .iter()
        .map(|(name, pin)| (name.to_string(), pin.to_string()))
        .collect()
}

fn default_pin() -> String {
    DEFAULT_PIN.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listed_folder_resolves_its_pin() {
        let config = PasswordConfig::default();
        assert_eq!(config.pin_for("RH"), "485932");
        assert_eq!(config.pin_for("SERVIÇO SOCIAL"), "729465");
    }

    #[test]
    fn test_unlisted_folder_falls_back_to_default() {
        let config = PasswordConfig::default();
        assert_eq!(config.pin_for("UNKNOWN_FOLDER"), "111111");
    }

    #[test]
    fn test_lookup_is_diacritics_sensitive() {
        let config = PasswordConfig::default();
        // "FARMACIA" without the accent is not the listed "FARMÁCIA".
        assert_eq!(config.pin_for("FARMACIA"), "111111");
    }
}
