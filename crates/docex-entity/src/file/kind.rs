//! File classification for display.
//!
//! Mirrors the grid's icon-selection rules: MIME type first, file
//! extension as the fallback.

use serde::{Deserialize, Serialize};

/// Coarse display category of a stored file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FileKind {
    /// PDF and word-processing documents.
    Document,
    /// Spreadsheets and CSV.
    Spreadsheet,
    /// Any `image/*` MIME type.
    Image,
    /// Everything else.
    Other,
}

impl FileKind {
    /// Classify a file by MIME type and name.
    pub fn classify(mime_type: &str, name: &str) -> Self {
        let ext = name
            .rsplit_once('.')
            .map(|(_, e)| e.to_lowercase())
            .unwrap_or_default();

        if mime_type.contains("pdf")
            || ext == "pdf"
            || mime_type.contains("word")
            || ext == "doc"
            || ext == "docx"
        {
            return Self::Document;
        }
        if mime_type.contains("spreadsheet")
            || mime_type.contains("excel")
            || ext == "xls"
            || ext == "xlsx"
            || ext == "csv"
        {
            return Self::Spreadsheet;
        }
        if mime_type.starts_with("image/") {
            return Self::Image;
        }
        Self::Other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_by_mime() {
        assert_eq!(FileKind::classify("application/pdf", "x"), FileKind::Document);
        assert_eq!(
            FileKind::classify(
                "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
                "x"
            ),
            FileKind::Spreadsheet
        );
        assert_eq!(FileKind::classify("image/png", "x"), FileKind::Image);
        assert_eq!(FileKind::classify("application/zip", "x"), FileKind::Other);
    }

    #[test]
    fn test_classify_falls_back_to_extension() {
        assert_eq!(
            FileKind::classify("application/octet-stream", "relatorio.docx"),
            FileKind::Document
        );
        assert_eq!(
            FileKind::classify("application/octet-stream", "planilha.CSV"),
            FileKind::Spreadsheet
        );
    }
}
