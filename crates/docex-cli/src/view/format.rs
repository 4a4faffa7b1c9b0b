//! Size, date, and file-kind formatting for the file grid.

use chrono::DateTime;

use docex_entity::file::FileKind;

/// Format a byte count in base-1024 units with one decimal, trailing
/// zero trimmed (`2048` → `"2 KB"`, `1536` → `"1.5 KB"`).
pub fn format_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 B".to_string();
    }

    const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];
    let exponent = ((bytes as f64).ln() / 1024f64.ln()).floor() as usize;
    let exponent = exponent.min(UNITS.len() - 1);
    let value = bytes as f64 / 1024f64.powi(exponent as i32);

    let mut formatted = format!("{value:.1}");
    if formatted.ends_with(".0") {
        formatted.truncate(formatted.len() - 2);
    }
    format!("{formatted} {}", UNITS[exponent])
}

/// Format a server timestamp as `dd/mm/yyyy` (pt-BR). Unparseable input
/// renders as an empty string rather than failing the whole grid.
pub fn format_date(timestamp: &str) -> String {
    match DateTime::parse_from_rfc3339(timestamp) {
        Ok(parsed) => parsed.format("%d/%m/%Y").to_string(),
        Err(_) => String::new(),
    }
}

/// Display label for a file kind.
pub fn kind_label(kind: FileKind) -> &'static str {
    match kind {
        FileKind::Document => "Documento",
        FileKind::Spreadsheet => "Planilha",
        FileKind::Image => "Imagem",
        FileKind::Other => "Arquivo",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_size_zero_and_small() {
        assert_eq!(format_size(0), "0 B");
        assert_eq!(format_size(512), "512 B");
    }

    #[test]
    fn test_format_size_trims_trailing_zero() {
        assert_eq!(format_size(2048), "2 KB");
        assert_eq!(format_size(1536), "1.5 KB");
    }

    #[test]
    fn test_format_size_larger_units() {
        assert_eq!(format_size(5 * 1024 * 1024), "5 MB");
        assert_eq!(format_size(3 * 1024 * 1024 * 1024), "3 GB");
    }

    #[test]
    fn test_format_date_pt_br() {
        assert_eq!(format_date("2026-01-15T12:00:00Z"), "15/01/2026");
        assert_eq!(format_date("not a date"), "");
    }
}
