//! Locale-aware name comparison for folder and file listings.
//!
//! Sibling folders are displayed in the order a Portuguese speaker expects:
//! diacritics sort with their base letter (`Ábaco` before `Zebra`) and case
//! differences do not split the alphabet. The primary key folds case and
//! strips combining marks after NFD decomposition; ties fall back to the
//! raw string so the ordering stays total and deterministic.

use std::cmp::Ordering;

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Build the folded primary sort key for a display name.
fn collation_key(name: &str) -> String {
    name.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Compare two display names with diacritic-folding, case-insensitive
/// primary ordering and a raw-string tiebreak.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    collation_key(a)
        .cmp(&collation_key(b))
        .then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diacritics_sort_with_base_letter() {
        assert_eq!(compare_names("Ábaco", "Zebra"), Ordering::Less);
        assert_eq!(compare_names("FARMÁCIA", "FATURAMENTO"), Ordering::Less);
        assert_eq!(compare_names("ÓBITO", "OBSTETRÍCIA"), Ordering::Less);
    }

    #[test]
    fn test_case_insensitive_primary() {
        assert_eq!(compare_names("almoxarifado", "CCIH"), Ordering::Less);
    }

    #[test]
    fn test_tiebreak_is_deterministic() {
        assert_eq!(compare_names("rh", "RH"), compare_names("rh", "RH"));
        assert_ne!(compare_names("rh", "RH"), Ordering::Equal);
    }
}
