//! HMFM Document Explorer — interactive session.
//!
//! Two-pane terminal explorer over the hospital's document API: folder
//! tree on one side, file grid on the other, with the per-folder PIN
//! gate in front of every sector.

use std::io::Write as _;
use std::path::PathBuf;
use std::sync::Arc;

use dialoguer::{Confirm, Input, Select};
use tabled::Table;
use tokio::sync::mpsc::UnboundedReceiver;
use tracing_subscriber::{EnvFilter, fmt};

use docex_cli::output::{print_error, print_success};
use docex_cli::view::grid::{file_rows, grid_header};
use docex_cli::view::tree::{TreeLine, render_tree};
use docex_client::{RestClient, UploadFile};
use docex_core::config::AppConfig;
use docex_core::error::AppError;
use docex_entity::session::ExpandedSet;
use docex_explorer::feedback::{Toast, ToastLevel};
use docex_explorer::{AccessGate, Dialog, Explorer};

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Explorer error: {}", e);
        std::process::exit(1);
    }
}

/// Load configuration for the selected environment
fn load_configuration() -> Result<AppConfig, AppError> {
    let env = std::env::var("DOCEX_ENV").unwrap_or_else(|_| "development".to_string());
    AppConfig::load(&env)
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt().json().with_env_filter(filter).with_target(true).init();
        }
        _ => {
            fmt().compact().with_env_filter(filter).with_target(false).init();
        }
    }
}

/// Top-level menu actions.
const ACTIONS: &[&str] = &[
    "Selecionar pasta",
    "Expandir/recolher pasta",
    "Nova pasta",
    "Nova subpasta",
    "Renomear pasta",
    "Excluir pasta",
    "Enviar arquivos",
    "Baixar arquivo",
    "Excluir arquivo",
    "Atualizar",
    "Sair",
];

/// Main interactive loop
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting docex v{}", env!("CARGO_PKG_VERSION"));

    let api = Arc::new(RestClient::new(&config.api)?);
    let gate = AccessGate::new(config.passwords.clone());
    let (mut explorer, mut toasts) = Explorer::new(api, gate, config.upload.clone());
    let mut expanded = ExpandedSet::new();

    println!("HMFM — Hospital Maternidade Fernando Magalhães");
    println!("Explorer de Documentos\n");

    loop {
        render_panes(&explorer, &expanded).await?;
        drain_toasts(&mut toasts);

        let choice = Select::new()
            .with_prompt("Ação")
            .items(ACTIONS)
            .default(0)
            .interact()
            .map_err(|e| AppError::internal(format!("Prompt failed: {e}")))?;

        match ACTIONS[choice] {
            "Selecionar pasta" => {
                if let Some(folder_id) = pick_folder(&explorer, &expanded).await? {
                    explorer.select_folder(folder_id);
                    resolve_password_dialog(&mut explorer).await?;
                    if explorer.active_folder_id() == Some(folder_id) {
                        expanded.expand(folder_id);
                    }
                }
            }
            "Expandir/recolher pasta" => {
                if let Some(folder_id) = pick_folder(&explorer, &expanded).await? {
                    expanded.toggle(folder_id);
                }
            }
            "Nova pasta" => {
                explorer.open_create_dialog(None);
                resolve_folder_dialog(&mut explorer).await?;
            }
            "Nova subpasta" => {
                if let Some(parent_id) = pick_folder(&explorer, &expanded).await? {
                    explorer.open_create_dialog(Some(parent_id));
                    resolve_folder_dialog(&mut explorer).await?;
                }
            }
            "Renomear pasta" => {
                if let Some(folder_id) = pick_folder(&explorer, &expanded).await? {
                    let current = explorer
                        .folders()
                        .await?
                        .into_iter()
                        .find(|f| f.id == folder_id)
                        .map(|f| f.name)
                        .unwrap_or_default();
                    explorer.open_rename_dialog(folder_id, &current);
                    resolve_folder_dialog(&mut explorer).await?;
                }
            }
            "Excluir pasta" => {
                if let Some(folder_id) = pick_folder(&explorer, &expanded).await? {
                    explorer.open_delete_dialog(folder_id);
                    resolve_delete_dialog(&mut explorer).await?;
                }
            }
            "Enviar arquivos" => {
                if explorer.active_folder_id().is_none() {
                    print_error("Selecione um setor antes de enviar arquivos");
                    continue;
                }
                explorer.open_upload_dialog();
                resolve_upload_dialog(&mut explorer).await?;
            }
            "Baixar arquivo" => {
                if let Some(file_id) = pick_file(&explorer).await? {
                    let files = explorer.files().await?;
                    if let Some(file) = files.iter().find(|f| f.id == file_id) {
                        let dest: String = Input::new()
                            .with_prompt("Diretório de destino")
                            .default(".".to_string())
                            .interact_text()
                            .map_err(|e| AppError::internal(format!("Prompt failed: {e}")))?;
                        match explorer.download_file(file, &PathBuf::from(dest)).await {
                            Ok(path) => tracing::debug!(path = %path.display(), "file saved"),
                            Err(e) => print_error(&format!("Erro ao baixar arquivo: {e}")),
                        }
                    }
                }
            }
            "Excluir arquivo" => {
                if let Some(file_id) = pick_file(&explorer).await? {
                    explorer.delete_file(file_id).await;
                }
            }
            "Atualizar" => {
                // Listings re-fetch lazily after invalidation; nothing to
                // do beyond redrawing.
            }
            "Sair" => break,
            _ => unreachable!(),
        }

        drain_toasts(&mut toasts);
        println!();
    }

    Ok(())
}

/// Draw the folder tree and the active folder's file grid
async fn render_panes(
    explorer: &Explorer<RestClient>,
    expanded: &ExpandedSet,
) -> Result<(), AppError> {
    println!("── Setores & Departamentos ──");
    let forest = explorer.forest().await?;
    let lines = render_tree(
        &forest,
        expanded,
        explorer.unlocked(),
        explorer.active_folder_id(),
    );
    if lines.is_empty() {
        println!("  (nenhuma pasta)");
    }
    for line in &lines {
        println!("{}", line.text);
    }
    println!();

    match explorer.active_folder_name().await? {
        Some(folder_name) => {
            let files = explorer.files().await?;
            println!("{}", grid_header(&folder_name, files.len()));
            if files.is_empty() {
                println!("Nenhum arquivo encontrado");
            } else {
                println!("{}", Table::new(file_rows(&files)));
            }
        }
        None => {
            println!("Selecione um setor");
            println!("Escolha uma pasta no painel lateral para ver os arquivos");
        }
    }
    println!();
    Ok(())
}

/// Pick a visible folder from the tree
async fn pick_folder(
    explorer: &Explorer<RestClient>,
    expanded: &ExpandedSet,
) -> Result<Option<i64>, AppError> {
    let forest = explorer.forest().await?;
    let lines: Vec<TreeLine> = render_tree(
        &forest,
        expanded,
        explorer.unlocked(),
        explorer.active_folder_id(),
    );
    if lines.is_empty() {
        print_error("Nenhuma pasta disponível");
        return Ok(None);
    }

    let mut items: Vec<&str> = lines.iter().map(|l| l.text.as_str()).collect();
    items.push("(cancelar)");
    let choice = Select::new()
        .with_prompt("Pasta")
        .items(&items)
        .default(0)
        .interact()
        .map_err(|e| AppError::internal(format!("Prompt failed: {e}")))?;

    Ok(lines.get(choice).map(|l| l.folder_id))
}

/// Pick a file from the active folder
async fn pick_file(explorer: &Explorer<RestClient>) -> Result<Option<i64>, AppError> {
    let files = explorer.files().await?;
    if files.is_empty() {
        print_error("Nenhum arquivo encontrado");
        return Ok(None);
    }

    let mut items: Vec<String> = files.iter().map(|f| f.name.clone()).collect();
    items.push("(cancelar)".to_string());
    let choice = Select::new()
        .with_prompt("Arquivo")
        .items(&items)
        .default(0)
        .interact()
        .map_err(|e| AppError::internal(format!("Prompt failed: {e}")))?;

    Ok(files.get(choice).map(|f| f.id))
}

/// Drive the PIN prompt until unlock or cancel
async fn resolve_password_dialog(explorer: &mut Explorer<RestClient>) -> Result<(), AppError> {
    loop {
        let Some(Dialog::Password(dialog)) = explorer.dialog() else {
            return Ok(());
        };
        if let Some(error) = &dialog.error {
            print_error(error);
        }

        let input: String = Input::new()
            .with_prompt("Senha da pasta (6 dígitos, vazio para cancelar)")
            .allow_empty(true)
            .interact_text()
            .map_err(|e| AppError::internal(format!("Prompt failed: {e}")))?;
        if input.is_empty() {
            explorer.cancel_password();
            return Ok(());
        }

        explorer.type_pin(&input);
        explorer.submit_password().await;
    }
}

/// Drive the create/rename dialog
async fn resolve_folder_dialog(explorer: &mut Explorer<RestClient>) -> Result<(), AppError> {
    let Some(Dialog::Folder(dialog)) = explorer.dialog() else {
        return Ok(());
    };

    let name: String = Input::new()
        .with_prompt("Nome da pasta (vazio para cancelar)")
        .with_initial_text(dialog.name.clone())
        .allow_empty(true)
        .interact_text()
        .map_err(|e| AppError::internal(format!("Prompt failed: {e}")))?;
    if name.trim().is_empty() {
        explorer.close_dialog();
        return Ok(());
    }

    explorer.set_folder_name(&name);
    explorer.submit_folder().await;
    // On failure the toast already explains; discard the draft and
    // return to the menu.
    explorer.close_dialog();
    Ok(())
}

/// Drive the delete confirmation dialog
async fn resolve_delete_dialog(explorer: &mut Explorer<RestClient>) -> Result<(), AppError> {
    let confirmed = Confirm::new()
        .with_prompt(
            "Tem certeza que deseja excluir esta pasta? Todos os arquivos e \
             subpastas serão removidos permanentemente.",
        )
        .default(false)
        .interact()
        .map_err(|e| AppError::internal(format!("Prompt failed: {e}")))?;

    if confirmed {
        explorer.confirm_delete_folder().await;
    }
    explorer.close_dialog();
    Ok(())
}

/// Drive the upload dialog: stage files, show simulated progress
async fn resolve_upload_dialog(explorer: &mut Explorer<RestClient>) -> Result<(), AppError> {
    let input: String = Input::new()
        .with_prompt("Arquivos para enviar (caminhos separados por vírgula)")
        .allow_empty(true)
        .interact_text()
        .map_err(|e| AppError::internal(format!("Prompt failed: {e}")))?;
    if input.trim().is_empty() {
        explorer.cancel_upload();
        return Ok(());
    }

    let mut staged = Vec::new();
    for raw in input.split(',') {
        let path = PathBuf::from(raw.trim());
        let Some(name) = path.file_name().and_then(|n| n.to_str()).map(String::from) else {
            print_error(&format!("Caminho inválido: {}", path.display()));
            continue;
        };
        match tokio::fs::read(&path).await {
            Ok(bytes) => staged.push(UploadFile::new(name, bytes)),
            Err(e) => print_error(&format!("Erro ao ler {}: {e}", path.display())),
        }
    }

    explorer.set_upload_files(staged);
    let staged_count = match explorer.dialog() {
        Some(Dialog::Upload(dialog)) => dialog.files.len(),
        _ => 0,
    };
    if staged_count == 0 {
        print_error("Nenhum arquivo aceito para envio");
        explorer.cancel_upload();
        return Ok(());
    }

    // Live progress display while the request is in flight.
    let mut progress_rx = explorer.progress_receiver();
    let printer = tokio::spawn(async move {
        while progress_rx.changed().await.is_ok() {
            let progress = *progress_rx.borrow();
            print!("\rEnviando... {progress}%   ");
            let _ = std::io::stdout().flush();
        }
    });

    explorer.submit_upload().await;
    printer.abort();
    println!();
    Ok(())
}

/// Print queued feedback messages
fn drain_toasts(toasts: &mut UnboundedReceiver<Toast>) {
    while let Ok(toast) = toasts.try_recv() {
        match toast.level {
            ToastLevel::Success => print_success(&toast.message),
            ToastLevel::Error => print_error(&toast.message),
        }
    }
}
