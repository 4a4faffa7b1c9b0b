//! Folder entity model.

use serde::{Deserialize, Serialize};

/// A folder record as served by `GET /api/folders`.
///
/// The display name doubles as the key into the PIN table, so it is kept
/// exactly as the server sends it (diacritics and case included).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Folder {
    /// Unique folder identifier, server-assigned.
    pub id: i64,
    /// Folder display name.
    pub name: String,
    /// Parent folder ID (null for root folders).
    pub parent_id: Option<i64>,
}

impl Folder {
    /// Check if this is a root folder (no parent).
    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }
}

/// Body of `POST /api/folders`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateFolder {
    /// Folder name.
    pub name: String,
    /// Parent folder (None for root).
    pub parent_id: Option<i64>,
}

/// Body of `PATCH /api/folders/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenameFolder {
    /// New folder name.
    pub name: String,
}
