//! Dialog states owned by the explorer controller.
//!
//! At most one dialog is open at a time; opening a new one replaces the
//! previous. Each dialog resets its working fields when opened and when
//! it closes.

use docex_client::UploadFile;

/// The PIN prompt for a locked folder.
#[derive(Debug, Clone)]
pub struct PasswordDialog {
    /// The folder awaiting unlock. Selection only moves here after the
    /// correct PIN.
    pub pending_folder_id: i64,
    /// Sanitized PIN input so far.
    pub input: String,
    /// Inline error from the last rejected attempt.
    pub error: Option<String>,
}

/// Whether the folder dialog creates or renames.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FolderDialogMode {
    /// Creating a folder, optionally under a parent.
    Create {
        /// Parent folder, None for a root folder.
        parent_id: Option<i64>,
    },
    /// Renaming an existing folder.
    Rename {
        /// The folder being renamed.
        folder_id: i64,
    },
}

/// The create/rename folder dialog.
#[derive(Debug, Clone)]
pub struct FolderDialog {
    /// Create or rename.
    pub mode: FolderDialogMode,
    /// Name draft.
    pub name: String,
    /// Submit in flight; disables and relabels the submit control.
    pub saving: bool,
}

/// The delete-folder confirmation dialog.
#[derive(Debug, Clone)]
pub struct DeleteFolderDialog {
    /// The folder to delete.
    pub folder_id: i64,
    /// Delete in flight.
    pub loading: bool,
}

/// The upload dialog.
#[derive(Debug, Clone)]
pub struct UploadDialog {
    /// Files staged for upload (already extension-filtered).
    pub files: Vec<UploadFile>,
    /// Upload in flight.
    pub uploading: bool,
}

/// The currently open dialog, if any.
#[derive(Debug, Clone)]
pub enum Dialog {
    /// PIN prompt.
    Password(PasswordDialog),
    /// Create/rename folder.
    Folder(FolderDialog),
    /// Delete-folder confirmation.
    DeleteFolder(DeleteFolderDialog),
    /// File upload.
    Upload(UploadDialog),
}
