//! The document API trait consumed by the explorer controller.

use async_trait::async_trait;
use bytes::Bytes;

use docex_core::result::AppResult;
use docex_entity::file::FileEntry;
use docex_entity::folder::{CreateFolder, Folder};

/// One file staged for upload.
#[derive(Debug, Clone)]
pub struct UploadFile {
    /// File name, sent as the multipart part's file name.
    pub name: String,
    /// File contents.
    pub bytes: Bytes,
}

impl UploadFile {
    /// Stage a file for upload.
    pub fn new(name: impl Into<String>, bytes: impl Into<Bytes>) -> Self {
        Self {
            name: name.into(),
            bytes: bytes.into(),
        }
    }

    /// Lower-case extension of the staged file's name, if any.
    pub fn extension(&self) -> Option<String> {
        self.name.rsplit_once('.').map(|(_, ext)| ext.to_lowercase())
    }
}

/// Operations the explorer issues against the document API.
///
/// Mutations report success solely via HTTP ok status, so they return
/// `()` here; the controller re-fetches listings instead of inspecting
/// response bodies.
#[async_trait]
pub trait DocumentApi: Send + Sync + std::fmt::Debug + 'static {
    /// `GET /api/folders` — the flat folder listing.
    async fn list_folders(&self) -> AppResult<Vec<Folder>>;

    /// `GET /api/files?folder_id={id}` — files of one folder.
    async fn list_files(&self, folder_id: i64) -> AppResult<Vec<FileEntry>>;

    /// `POST /api/folders` — create a folder.
    async fn create_folder(&self, req: &CreateFolder) -> AppResult<()>;

    /// `PATCH /api/folders/{id}` — rename a folder.
    async fn rename_folder(&self, folder_id: i64, name: &str) -> AppResult<()>;

    /// `DELETE /api/folders/{id}` — delete a folder. The server cascades
    /// to files and subfolders; this client does not verify that.
    async fn delete_folder(&self, folder_id: i64) -> AppResult<()>;

    /// `POST /api/upload` — multipart upload of one or more files.
    async fn upload(&self, folder_id: i64, files: Vec<UploadFile>) -> AppResult<()>;

    /// `DELETE /api/files/{id}` — delete one file.
    async fn delete_file(&self, file_id: i64) -> AppResult<()>;

    /// Plain GET of an opaque `blob_url` for download.
    async fn fetch_blob(&self, url: &str) -> AppResult<Bytes>;
}
