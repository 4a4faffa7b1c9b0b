//! File grid rendering.

use serde::Serialize;
use tabled::Tabled;

use docex_entity::file::FileEntry;

use crate::view::format::{format_date, format_size, kind_label};

/// One row of the file grid.
#[derive(Debug, Serialize, Tabled)]
pub struct FileRow {
    /// File ID
    #[tabled(rename = "ID")]
    pub id: i64,
    /// File name
    #[tabled(rename = "Nome")]
    pub nome: String,
    /// Display kind
    #[tabled(rename = "Tipo")]
    pub tipo: &'static str,
    /// Formatted size
    #[tabled(rename = "Tamanho")]
    pub tamanho: String,
    /// Formatted creation date
    #[tabled(rename = "Enviado em")]
    pub enviado_em: String,
}

impl From<&FileEntry> for FileRow {
    fn from(file: &FileEntry) -> Self {
        Self {
            id: file.id,
            nome: file.name.clone(),
            tipo: kind_label(file.kind()),
            tamanho: format_size(file.size),
            enviado_em: format_date(&file.created_at),
        }
    }
}

/// Build grid rows for a folder's files.
pub fn file_rows(files: &[FileEntry]) -> Vec<FileRow> {
    files.iter().map(FileRow::from).collect()
}

/// Header line above the grid: folder name and file count, pluralized.
pub fn grid_header(folder_name: &str, file_count: usize) -> String {
    let plural = if file_count == 1 { "" } else { "s" };
    format!("{folder_name} — {file_count} arquivo{plural}")
}
