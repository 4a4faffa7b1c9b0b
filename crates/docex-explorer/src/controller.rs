//! The explorer controller state machine.
//!
//! Owns selection, the unlock set, dialog orchestration, and the
//! optimistic-invalidation flow: every mutation marks the affected query
//! stale and the next read re-fetches from the API. Listings are never
//! patched in place.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{mpsc, watch};
use tracing::{debug, warn};

use docex_cache::{QueryCache, keys};
use docex_client::{DocumentApi, UploadFile};
use docex_core::config::upload::UploadConfig;
use docex_core::result::AppResult;
use docex_entity::file::FileEntry;
use docex_entity::folder::{CreateFolder, Folder, FolderNode, build_forest};
use docex_entity::session::UnlockSet;

use crate::dialog::{
    DeleteFolderDialog, Dialog, FolderDialog, FolderDialogMode, PasswordDialog, UploadDialog,
};
use crate::feedback::{Toast, ToastSender};
use crate::gate::{AccessGate, is_complete_pin, sanitize_pin};
use crate::progress::ProgressTicker;

/// The explorer controller.
///
/// Single-threaded in spirit: one instance drives one interactive
/// session. The only background activity it ever schedules is the
/// simulated upload-progress ticker, torn down when the upload settles.
pub struct Explorer<A: DocumentApi> {
    api: Arc<A>,
    cache: QueryCache,
    gate: AccessGate,
    upload_config: UploadConfig,
    unlocked: UnlockSet,
    active_folder_id: Option<i64>,
    dialog: Option<Dialog>,
    progress: watch::Sender<u8>,
    toasts: ToastSender,
}

impl<A: DocumentApi> Explorer<A> {
    /// Create a controller and the receiving end of its feedback channel.
    pub fn new(
        api: Arc<A>,
        gate: AccessGate,
        upload_config: UploadConfig,
    ) -> (Self, mpsc::UnboundedReceiver<Toast>) {
        let (toasts, toast_rx) = ToastSender::channel();
        let (progress, _) = watch::channel(0u8);
        let explorer = Self {
            api,
            cache: QueryCache::new(),
            gate,
            upload_config,
            unlocked: UnlockSet::new(),
            active_folder_id: None,
            dialog: None,
            progress,
            toasts,
        };
        (explorer, toast_rx)
    }

    // ── Observable state ───────────────────────────────────────

    /// The currently selected folder, if any.
    pub fn active_folder_id(&self) -> Option<i64> {
        self.active_folder_id
    }

    /// The currently open dialog, if any.
    pub fn dialog(&self) -> Option<&Dialog> {
        self.dialog.as_ref()
    }

    /// Folders unlocked this session.
    pub fn unlocked(&self) -> &UnlockSet {
        &self.unlocked
    }

    /// Current simulated upload progress (0–100).
    pub fn upload_progress(&self) -> u8 {
        *self.progress.borrow()
    }

    /// Subscribe to upload progress updates.
    pub fn progress_receiver(&self) -> watch::Receiver<u8> {
        self.progress.subscribe()
    }

    // ── Queries (read-through cache) ───────────────────────────

    /// The flat folder listing, cached until a folder mutation.
    pub async fn folders(&self) -> AppResult<Vec<Folder>> {
        self.cache
            .get_or_fetch(&keys::folders(), || self.api.list_folders())
            .await
    }

    /// The derived, sorted folder forest.
    pub async fn forest(&self) -> AppResult<Vec<FolderNode>> {
        Ok(build_forest(&self.folders().await?))
    }

    /// Files of the active folder; empty when nothing is selected.
    pub async fn files(&self) -> AppResult<Vec<FileEntry>> {
        let Some(folder_id) = self.active_folder_id else {
            return Ok(Vec::new());
        };
        self.cache
            .get_or_fetch(&keys::files(folder_id), || self.api.list_files(folder_id))
            .await
    }

    /// Display name of the active folder, if it still exists.
    pub async fn active_folder_name(&self) -> AppResult<Option<String>> {
        let Some(folder_id) = self.active_folder_id else {
            return Ok(None);
        };
        Ok(self
            .folders()
            .await?
            .into_iter()
            .find(|f| f.id == folder_id)
            .map(|f| f.name))
    }

    // ── Folder selection and the PIN gate ──────────────────────

    /// Select a folder. Already-unlocked folders activate immediately;
    /// otherwise the PIN prompt opens and selection waits for the PIN.
    pub fn select_folder(&mut self, folder_id: i64) {
        if self.unlocked.contains(folder_id) {
            self.active_folder_id = Some(folder_id);
            return;
        }

        self.dialog = Some(Dialog::Password(PasswordDialog {
            pending_folder_id: folder_id,
            input: String::new(),
            error: None,
        }));
    }

    /// Feed PIN input, stripping non-numeric characters as typed.
    pub fn type_pin(&mut self, input: &str) {
        if let Some(Dialog::Password(dialog)) = &mut self.dialog {
            dialog.input = sanitize_pin(input);
        }
    }

    /// Submit the typed PIN. A non-6-digit input is a no-op; an incorrect
    /// PIN shows an inline error and keeps the dialog open for unlimited
    /// retries; the correct PIN unlocks and activates the folder.
    pub async fn submit_password(&mut self) {
        let Some(Dialog::Password(dialog)) = &self.dialog else {
            return;
        };
        if !is_complete_pin(&dialog.input) {
            return;
        }
        let pending_folder_id = dialog.pending_folder_id;
        let candidate = dialog.input.clone();

        let folders = self.folders().await.unwrap_or_default();
        let Some(folder) = folders.into_iter().find(|f| f.id == pending_folder_id) else {
            return;
        };

        if self.gate.check_password(&folder.name, &candidate) {
            debug!(folder_id = pending_folder_id, "folder unlocked");
            self.unlocked.insert(pending_folder_id);
            self.active_folder_id = Some(pending_folder_id);
            self.dialog = None;
            self.toasts.success("Pasta desbloqueada com sucesso");
        } else if let Some(Dialog::Password(dialog)) = &mut self.dialog {
            dialog.error = Some("Senha incorreta. Tente novamente.".to_string());
            dialog.input.clear();
            self.toasts.error("Senha incorreta");
        }
    }

    /// Dismiss the PIN prompt without touching the unlock set or the
    /// active folder.
    pub fn cancel_password(&mut self) {
        if matches!(self.dialog, Some(Dialog::Password(_))) {
            self.dialog = None;
        }
    }

    /// Dismiss whichever dialog is open without side effects.
    pub fn close_dialog(&mut self) {
        self.dialog = None;
    }

    // ── Folder CRUD dialogs ────────────────────────────────────

    /// Open the create-folder dialog, optionally scoped to a parent.
    pub fn open_create_dialog(&mut self, parent_id: Option<i64>) {
        self.dialog = Some(Dialog::Folder(FolderDialog {
            mode: FolderDialogMode::Create { parent_id },
            name: String::new(),
            saving: false,
        }));
    }

    /// Open the rename dialog, pre-filled with the current name.
    pub fn open_rename_dialog(&mut self, folder_id: i64, current_name: &str) {
        self.dialog = Some(Dialog::Folder(FolderDialog {
            mode: FolderDialogMode::Rename { folder_id },
            name: current_name.to_string(),
            saving: false,
        }));
    }

    /// Open the delete-folder confirmation dialog.
    pub fn open_delete_dialog(&mut self, folder_id: i64) {
        self.dialog = Some(Dialog::DeleteFolder(DeleteFolderDialog {
            folder_id,
            loading: false,
        }));
    }

    /// Update the folder-name draft.
    pub fn set_folder_name(&mut self, name: &str) {
        if let Some(Dialog::Folder(dialog)) = &mut self.dialog {
            dialog.name = name.to_string();
        }
    }

    /// Submit the create/rename dialog. Blank names are a no-op. On
    /// success the folder listing is invalidated and the dialog closes;
    /// on failure it stays open with the draft intact.
    pub async fn submit_folder(&mut self) {
        let Some(Dialog::Folder(dialog)) = &self.dialog else {
            return;
        };
        let name = dialog.name.trim().to_string();
        if name.is_empty() {
            return;
        }
        let mode = dialog.mode.clone();

        if let Some(Dialog::Folder(dialog)) = &mut self.dialog {
            dialog.saving = true;
        }

        let result = match &mode {
            FolderDialogMode::Create { parent_id } => {
                self.api
                    .create_folder(&CreateFolder {
                        name: name.clone(),
                        parent_id: *parent_id,
                    })
                    .await
            }
            FolderDialogMode::Rename { folder_id } => {
                self.api.rename_folder(*folder_id, &name).await
            }
        };

        // Always cleared, success or failure.
        if let Some(Dialog::Folder(dialog)) = &mut self.dialog {
            dialog.saving = false;
        }

        match result {
            Ok(()) => {
                self.toasts.success(match mode {
                    FolderDialogMode::Create { .. } => "Pasta criada com sucesso",
                    FolderDialogMode::Rename { .. } => "Pasta renomeada com sucesso",
                });
                self.cache.invalidate(&keys::folders()).await;
                self.dialog = None;
            }
            Err(e) => {
                warn!(error = %e, "folder mutation failed");
                self.toasts.error(match mode {
                    FolderDialogMode::Create { .. } => "Erro ao criar pasta",
                    FolderDialogMode::Rename { .. } => "Erro ao renomear pasta",
                });
            }
        }
    }

    /// Confirm the delete-folder dialog. On success the folder listing is
    /// invalidated, a deleted active folder clears the selection, and the
    /// dialog closes; on failure it stays open.
    pub async fn confirm_delete_folder(&mut self) {
        let Some(Dialog::DeleteFolder(dialog)) = &self.dialog else {
            return;
        };
        let folder_id = dialog.folder_id;

        if let Some(Dialog::DeleteFolder(dialog)) = &mut self.dialog {
            dialog.loading = true;
        }

        let result = self.api.delete_folder(folder_id).await;

        if let Some(Dialog::DeleteFolder(dialog)) = &mut self.dialog {
            dialog.loading = false;
        }

        match result {
            Ok(()) => {
                self.toasts.success("Pasta excluída com sucesso");
                self.cache.invalidate(&keys::folders()).await;

                // A stale file pane for a deleted folder would lie.
                if self.active_folder_id == Some(folder_id) {
                    self.active_folder_id = None;
                }

                self.dialog = None;
            }
            Err(e) => {
                warn!(error = %e, folder_id, "folder delete failed");
                self.toasts.error("Erro ao excluir pasta");
            }
        }
    }

    // ── Upload ─────────────────────────────────────────────────

    /// Open the upload dialog with an empty selection.
    pub fn open_upload_dialog(&mut self) {
        let _ = self.progress.send(0);
        self.dialog = Some(Dialog::Upload(UploadDialog {
            files: Vec::new(),
            uploading: false,
        }));
    }

    /// Stage files for upload, dropping any with an unaccepted extension.
    pub fn set_upload_files(&mut self, files: Vec<UploadFile>) {
        let accepted = &self.upload_config.accepted_extensions;
        if let Some(Dialog::Upload(dialog)) = &mut self.dialog {
            dialog.files = files
                .into_iter()
                .filter(|f| {
                    f.extension()
                        .map(|ext| accepted.contains(&ext))
                        .unwrap_or(false)
                })
                .collect();
        }
    }

    /// Submit the staged upload. Requires at least one file and an active
    /// folder, otherwise a no-op. Progress is display-only simulation:
    /// it ticks toward the cap while the request is in flight, jumps to
    /// 100 on success for a visible moment before the dialog auto-closes,
    /// and the ticker is always torn down when the request settles.
    pub async fn submit_upload(&mut self) {
        let Some(Dialog::Upload(dialog)) = &self.dialog else {
            return;
        };
        if dialog.files.is_empty() {
            return;
        }
        let Some(folder_id) = self.active_folder_id else {
            return;
        };
        let files = dialog.files.clone();
        let count = files.len();

        if let Some(Dialog::Upload(dialog)) = &mut self.dialog {
            dialog.uploading = true;
        }

        let ticker = ProgressTicker::start(self.progress.clone(), &self.upload_config);
        let result = self.api.upload(folder_id, files).await;
        ticker.stop();

        if let Some(Dialog::Upload(dialog)) = &mut self.dialog {
            dialog.uploading = false;
        }

        match result {
            Ok(()) => {
                let _ = self.progress.send(100);
                let plural = if count > 1 { "s" } else { "" };
                self.toasts.success(format!(
                    "{count} arquivo{plural} enviado{plural} com sucesso"
                ));
                self.cache.invalidate(&keys::files(folder_id)).await;

                // Let the user see 100% before the dialog disappears.
                tokio::time::sleep(Duration::from_millis(self.upload_config.close_delay_ms))
                    .await;
                self.dialog = None;
                let _ = self.progress.send(0);
            }
            Err(e) => {
                warn!(error = %e, folder_id, "upload failed");
                // Selection stays so the user can retry without
                // reselecting.
                self.toasts.error("Erro no upload de arquivos");
            }
        }
    }

    /// Dismiss the upload dialog and drop the staged selection.
    pub fn cancel_upload(&mut self) {
        if matches!(self.dialog, Some(Dialog::Upload(_))) {
            self.dialog = None;
            let _ = self.progress.send(0);
        }
    }

    // ── File operations ────────────────────────────────────────

    /// Delete one file, then invalidate the active folder's file listing.
    pub async fn delete_file(&mut self, file_id: i64) {
        match self.api.delete_file(file_id).await {
            Ok(()) => {
                self.toasts.success("Arquivo excluído");
                if let Some(folder_id) = self.active_folder_id {
                    self.cache.invalidate(&keys::files(folder_id)).await;
                }
            }
            Err(e) => {
                warn!(error = %e, file_id, "file delete failed");
                self.toasts.error("Erro ao excluir arquivo");
            }
        }
    }

    /// Download a file's blob to `dest_dir`, using the file's name as the
    /// suggested name. Client-only: no API round-trip beyond the blob
    /// fetch itself.
    pub async fn download_file(&self, file: &FileEntry, dest_dir: &Path) -> AppResult<PathBuf> {
        let bytes = self.api.fetch_blob(&file.blob_url).await?;
        let path = dest_dir.join(&file.name);
        tokio::fs::write(&path, &bytes).await?;
        self.toasts.success(format!("Baixando {}", file.name));
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::collections::HashMap;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};

    use docex_core::config::passwords::PasswordConfig;
    use docex_core::error::AppError;
    use tokio::sync::mpsc::UnboundedReceiver;

    use crate::feedback::ToastLevel;

    #[derive(Debug, Default)]
    struct MockApi {
        folders: Mutex<Vec<Folder>>,
        files: Mutex<HashMap<i64, Vec<FileEntry>>>,
        folder_list_calls: AtomicU32,
        file_list_calls: AtomicU32,
        create_calls: AtomicU32,
        fail_mutations: AtomicBool,
        upload_delay_ms: AtomicU32,
    }

    impl MockApi {
        fn with_folders(folders: Vec<Folder>) -> Arc<Self> {
            let api = Self::default();
            *api.folders.lock().unwrap() = folders;
            Arc::new(api)
        }

        fn fail_next_mutations(&self, fail: bool) {
            self.fail_mutations.store(fail, Ordering::SeqCst);
        }

        fn mutation_result(&self) -> AppResult<()> {
            if self.fail_mutations.load(Ordering::SeqCst) {
                Err(AppError::external_service("server returned 500"))
            } else {
                Ok(())
            }
        }
    }

    #[async_trait::async_trait]
    impl DocumentApi for MockApi {
        async fn list_folders(&self) -> AppResult<Vec<Folder>> {
            self.folder_list_calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.folders.lock().unwrap().clone())
        }

        async fn list_files(&self, folder_id: i64) -> AppResult<Vec<FileEntry>> {
            self.file_list_calls.fetch_add(1, Ordering::SeqCst);
            Ok(self
                .files
                .lock()
                .unwrap()
                .get(&folder_id)
                .cloned()
                .unwrap_or_default())
        }

        async fn create_folder(&self, _req: &CreateFolder) -> AppResult<()> {
            self.create_calls.fetch_add(1, Ordering::SeqCst);
            self.mutation_result()
        }

        async fn rename_folder(&self, _folder_id: i64, _name: &str) -> AppResult<()> {
            self.mutation_result()
        }

        async fn delete_folder(&self, _folder_id: i64) -> AppResult<()> {
            self.mutation_result()
        }

        async fn upload(&self, _folder_id: i64, _files: Vec<UploadFile>) -> AppResult<()> {
            let delay = self.upload_delay_ms.load(Ordering::SeqCst);
            if delay > 0 {
                tokio::time::sleep(Duration::from_millis(delay as u64)).await;
            }
            self.mutation_result()
        }

        async fn delete_file(&self, _file_id: i64) -> AppResult<()> {
            self.mutation_result()
        }

        async fn fetch_blob(&self, _url: &str) -> AppResult<bytes::Bytes> {
            Ok(bytes::Bytes::from_static(b"conteudo"))
        }
    }

    fn rh_folders() -> Vec<Folder> {
        vec![
            Folder {
                id: 1,
                name: "RH".to_string(),
                parent_id: None,
            },
            Folder {
                id: 2,
                name: "PASTA NOVA".to_string(),
                parent_id: None,
            },
        ]
    }

    fn explorer(
        api: Arc<MockApi>,
    ) -> (Explorer<MockApi>, UnboundedReceiver<Toast>) {
        Explorer::new(
            api,
            AccessGate::new(PasswordConfig::default()),
            UploadConfig::default(),
        )
    }

    fn drain(rx: &mut UnboundedReceiver<Toast>) -> Vec<Toast> {
        let mut toasts = Vec::new();
        while let Ok(toast) = rx.try_recv() {
            toasts.push(toast);
        }
        toasts
    }

    async fn unlock(explorer: &mut Explorer<MockApi>, folder_id: i64, pin: &str) {
        explorer.select_folder(folder_id);
        explorer.type_pin(pin);
        explorer.submit_password().await;
    }

    #[tokio::test]
    async fn test_locked_folder_opens_password_dialog_without_activating() {
        let (mut explorer, _rx) = explorer(MockApi::with_folders(rh_folders()));

        explorer.select_folder(1);

        assert!(matches!(explorer.dialog(), Some(Dialog::Password(_))));
        assert_eq!(explorer.active_folder_id(), None);
    }

    #[tokio::test]
    async fn test_correct_pin_unlocks_activates_and_closes() {
        let (mut explorer, mut rx) = explorer(MockApi::with_folders(rh_folders()));

        unlock(&mut explorer, 1, "485932").await;

        assert!(explorer.unlocked().contains(1));
        assert_eq!(explorer.active_folder_id(), Some(1));
        assert!(explorer.dialog().is_none());
        let toasts = drain(&mut rx);
        assert_eq!(toasts[0].level, ToastLevel::Success);
    }

    #[tokio::test]
    async fn test_incorrect_pin_keeps_dialog_with_inline_error() {
        let (mut explorer, mut rx) = explorer(MockApi::with_folders(rh_folders()));

        unlock(&mut explorer, 1, "000000").await;

        let Some(Dialog::Password(dialog)) = explorer.dialog() else {
            panic!("password dialog should stay open");
        };
        assert_eq!(
            dialog.error.as_deref(),
            Some("Senha incorreta. Tente novamente.")
        );
        assert!(dialog.input.is_empty());
        assert!(explorer.unlocked().is_empty());
        assert_eq!(explorer.active_folder_id(), None);
        assert_eq!(drain(&mut rx)[0].level, ToastLevel::Error);
    }

    #[tokio::test]
    async fn test_incomplete_pin_submission_is_a_no_op() {
        let (mut explorer, mut rx) = explorer(MockApi::with_folders(rh_folders()));

        explorer.select_folder(1);
        explorer.type_pin("4859");
        explorer.submit_password().await;

        let Some(Dialog::Password(dialog)) = explorer.dialog() else {
            panic!("password dialog should stay open");
        };
        assert!(dialog.error.is_none());
        assert!(drain(&mut rx).is_empty());
    }

    #[tokio::test]
    async fn test_pin_input_is_stripped_as_typed() {
        let (mut explorer, _rx) = explorer(MockApi::with_folders(rh_folders()));

        explorer.select_folder(1);
        explorer.type_pin("48-59.32x");
        explorer.submit_password().await;

        // The sanitized input "485932" is complete and correct.
        assert_eq!(explorer.active_folder_id(), Some(1));
    }

    #[tokio::test]
    async fn test_unlocked_folder_selects_without_dialog() {
        let (mut explorer, _rx) = explorer(MockApi::with_folders(rh_folders()));
        unlock(&mut explorer, 1, "485932").await;
        unlock(&mut explorer, 2, "111111").await;

        explorer.select_folder(1);

        assert!(explorer.dialog().is_none());
        assert_eq!(explorer.active_folder_id(), Some(1));
    }

    #[tokio::test]
    async fn test_cancel_password_keeps_unlock_set_and_selection() {
        let (mut explorer, _rx) = explorer(MockApi::with_folders(rh_folders()));
        unlock(&mut explorer, 1, "485932").await;

        explorer.select_folder(2);
        explorer.cancel_password();

        assert!(explorer.dialog().is_none());
        assert_eq!(explorer.active_folder_id(), Some(1));
        assert!(!explorer.unlocked().contains(2));
    }

    #[tokio::test]
    async fn test_blank_folder_name_submits_nothing() {
        let api = MockApi::with_folders(rh_folders());
        let (mut explorer, _rx) = explorer(api.clone());

        explorer.open_create_dialog(None);
        explorer.set_folder_name("   ");
        explorer.submit_folder().await;

        assert!(matches!(explorer.dialog(), Some(Dialog::Folder(_))));
        assert_eq!(api.create_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_create_folder_invalidates_folder_listing() {
        let api = MockApi::with_folders(rh_folders());
        let (mut explorer, _rx) = explorer(api.clone());

        let _ = explorer.folders().await.unwrap();
        let _ = explorer.folders().await.unwrap();
        assert_eq!(api.folder_list_calls.load(Ordering::SeqCst), 1);

        explorer.open_create_dialog(Some(1));
        explorer.set_folder_name("  Escalas  ");
        explorer.submit_folder().await;

        assert!(explorer.dialog().is_none());
        let _ = explorer.folders().await.unwrap();
        assert_eq!(api.folder_list_calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_failed_create_keeps_dialog_open_with_draft() {
        let api = MockApi::with_folders(rh_folders());
        api.fail_next_mutations(true);
        let (mut explorer, mut rx) = explorer(api.clone());

        explorer.open_create_dialog(None);
        explorer.set_folder_name("Compras");
        explorer.submit_folder().await;

        let Some(Dialog::Folder(dialog)) = explorer.dialog() else {
            panic!("folder dialog should stay open");
        };
        assert_eq!(dialog.name, "Compras");
        assert!(!dialog.saving);
        assert_eq!(drain(&mut rx)[0].message, "Erro ao criar pasta");
    }

    #[tokio::test]
    async fn test_deleting_active_folder_clears_selection() {
        let (mut explorer, _rx) = explorer(MockApi::with_folders(rh_folders()));
        unlock(&mut explorer, 1, "485932").await;

        explorer.open_delete_dialog(1);
        explorer.confirm_delete_folder().await;

        assert_eq!(explorer.active_folder_id(), None);
        assert!(explorer.dialog().is_none());
    }

    #[tokio::test]
    async fn test_deleting_another_folder_keeps_selection() {
        let (mut explorer, _rx) = explorer(MockApi::with_folders(rh_folders()));
        unlock(&mut explorer, 1, "485932").await;

        explorer.open_delete_dialog(2);
        explorer.confirm_delete_folder().await;

        assert_eq!(explorer.active_folder_id(), Some(1));
    }

    #[tokio::test]
    async fn test_failed_delete_keeps_dialog_open() {
        let api = MockApi::with_folders(rh_folders());
        api.fail_next_mutations(true);
        let (mut explorer, mut rx) = explorer(api.clone());

        explorer.open_delete_dialog(2);
        explorer.confirm_delete_folder().await;

        let Some(Dialog::DeleteFolder(dialog)) = explorer.dialog() else {
            panic!("delete dialog should stay open");
        };
        assert!(!dialog.loading);
        assert_eq!(drain(&mut rx)[0].message, "Erro ao excluir pasta");
    }

    #[tokio::test]
    async fn test_upload_file_filter_drops_unaccepted_extensions() {
        let (mut explorer, _rx) = explorer(MockApi::with_folders(rh_folders()));

        explorer.open_upload_dialog();
        explorer.set_upload_files(vec![
            UploadFile::new("escala.pdf", &b"x"[..]),
            UploadFile::new("virus.exe", &b"x"[..]),
            UploadFile::new("sem_extensao", &b"x"[..]),
            UploadFile::new("Foto.JPG", &b"x"[..]),
        ]);

        let Some(Dialog::Upload(dialog)) = explorer.dialog() else {
            panic!("upload dialog should be open");
        };
        let names: Vec<&str> = dialog.files.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["escala.pdf", "Foto.JPG"]);
    }

    #[tokio::test]
    async fn test_upload_without_active_folder_is_a_no_op() {
        let api = MockApi::with_folders(rh_folders());
        let (mut explorer, mut rx) = explorer(api.clone());

        explorer.open_upload_dialog();
        explorer.set_upload_files(vec![UploadFile::new("escala.pdf", &b"x"[..])]);
        explorer.submit_upload().await;

        assert!(matches!(explorer.dialog(), Some(Dialog::Upload(_))));
        assert!(drain(&mut rx).is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_upload_progress_is_simulated_capped_then_completes() {
        let api = MockApi::with_folders(rh_folders());
        api.upload_delay_ms.store(2500, Ordering::SeqCst);
        let (mut explorer, mut rx) = explorer(api.clone());
        unlock(&mut explorer, 1, "485932").await;

        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut progress_rx = explorer.progress_receiver();
        let recorder_seen = seen.clone();
        let recorder = tokio::spawn(async move {
            loop {
                if progress_rx.changed().await.is_err() {
                    break;
                }
                let value = *progress_rx.borrow();
                recorder_seen.lock().unwrap().push(value);
            }
        });

        explorer.open_upload_dialog();
        explorer.set_upload_files(vec![UploadFile::new("escala.pdf", &b"x"[..])]);
        explorer.submit_upload().await;

        // Let the recorder observe the final values.
        tokio::time::sleep(Duration::from_millis(10)).await;
        recorder.abort();

        let seen = seen.lock().unwrap().clone();
        let hundred_at = seen.iter().position(|&p| p == 100).expect("reaches 100");
        let in_flight = &seen[..hundred_at];
        assert!(in_flight.windows(2).all(|w| w[0] <= w[1]), "monotone: {seen:?}");
        assert!(in_flight.iter().all(|&p| p <= 90), "capped: {seen:?}");
        assert!(in_flight.contains(&90));

        // Dialog auto-closed after the visible 100% moment.
        assert!(explorer.dialog().is_none());
        assert_eq!(explorer.upload_progress(), 0);
        let toasts = drain(&mut rx);
        assert!(
            toasts
                .iter()
                .any(|t| t.message == "1 arquivo enviado com sucesso")
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_upload_success_invalidates_file_listing() {
        let api = MockApi::with_folders(rh_folders());
        let (mut explorer, _rx) = explorer(api.clone());
        unlock(&mut explorer, 1, "485932").await;

        let _ = explorer.files().await.unwrap();
        let _ = explorer.files().await.unwrap();
        assert_eq!(api.file_list_calls.load(Ordering::SeqCst), 1);

        explorer.open_upload_dialog();
        explorer.set_upload_files(vec![
            UploadFile::new("a.pdf", &b"x"[..]),
            UploadFile::new("b.pdf", &b"x"[..]),
        ]);
        explorer.submit_upload().await;

        let _ = explorer.files().await.unwrap();
        assert_eq!(api.file_list_calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_failed_upload_keeps_selection_for_retry() {
        let api = MockApi::with_folders(rh_folders());
        api.fail_next_mutations(true);
        let (mut explorer, mut rx) = explorer(api.clone());
        unlock(&mut explorer, 1, "485932").await;
        drain(&mut rx);

        explorer.open_upload_dialog();
        explorer.set_upload_files(vec![UploadFile::new("escala.pdf", &b"x"[..])]);
        explorer.submit_upload().await;

        let Some(Dialog::Upload(dialog)) = explorer.dialog() else {
            panic!("upload dialog should stay open");
        };
        assert_eq!(dialog.files.len(), 1);
        assert!(!dialog.uploading);
        assert!(explorer.upload_progress() < 100);
        assert_eq!(drain(&mut rx)[0].message, "Erro no upload de arquivos");

        // Retry without reselecting succeeds.
        api.fail_next_mutations(false);
        explorer.submit_upload().await;
        assert!(explorer.dialog().is_none());
    }

    #[tokio::test]
    async fn test_delete_file_invalidates_active_file_listing() {
        let api = MockApi::with_folders(rh_folders());
        let (mut explorer, mut rx) = explorer(api.clone());
        unlock(&mut explorer, 1, "485932").await;
        drain(&mut rx);

        let _ = explorer.files().await.unwrap();
        explorer.delete_file(10).await;
        let _ = explorer.files().await.unwrap();

        assert_eq!(api.file_list_calls.load(Ordering::SeqCst), 2);
        assert_eq!(drain(&mut rx)[0].message, "Arquivo excluído");
    }

    #[tokio::test]
    async fn test_files_without_selection_is_empty_and_fetch_free() {
        let api = MockApi::with_folders(rh_folders());
        let (explorer, _rx) = explorer(api.clone());

        let files = explorer.files().await.unwrap();

        assert!(files.is_empty());
        assert_eq!(api.file_list_calls.load(Ordering::SeqCst), 0);
    }
}
