//! File entity model.

use serde::{Deserialize, Serialize};

use crate::file::kind::FileKind;

/// A stored document record as served by `GET /api/files`.
///
/// Owned by the API; the client never mutates one directly, only triggers
/// upload/delete on the server and re-fetches the listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileEntry {
    /// Unique file identifier.
    pub id: i64,
    /// File name, used as the suggested download name.
    pub name: String,
    /// The folder this file belongs to.
    pub folder_id: i64,
    /// Opaque storage locator; opened/downloaded as-is.
    pub blob_url: String,
    /// Size in bytes.
    pub size: u64,
    /// MIME type reported by the server.
    pub mime_type: String,
    /// Creation timestamp as sent by the server.
    pub created_at: String,
}

impl FileEntry {
    /// Classify the file for display purposes.
    pub fn kind(&self) -> FileKind {
        FileKind::classify(&self.mime_type, &self.name)
    }

    /// Lower-case extension of the file name, if any.
    pub fn extension(&self) -> Option<String> {
        self.name.rsplit_once('.').map(|(_, ext)| ext.to_lowercase())
    }
}
