//! File management CLI commands.

use std::path::PathBuf;

use clap::{Args, Subcommand};

use docex_client::{DocumentApi, UploadFile};
use docex_core::error::AppError;

use crate::output::{self, OutputFormat};
use crate::view::grid::file_rows;

/// Arguments for file commands
#[derive(Debug, Args)]
pub struct FileArgs {
    /// File subcommand
    #[command(subcommand)]
    pub command: FileCommand,
}

/// File subcommands
#[derive(Debug, Subcommand)]
pub enum FileCommand {
    /// List files of a folder
    List {
        /// Folder ID
        #[arg(short, long)]
        folder_id: i64,
    },
    /// Upload files to a folder
    Upload {
        /// Folder ID
        #[arg(short, long)]
        folder_id: i64,
        /// Paths of the files to upload
        #[arg(required = true)]
        paths: Vec<PathBuf>,
    },
    /// Download a file to a local directory
    Download {
        /// Folder ID the file belongs to
        #[arg(short, long)]
        folder_id: i64,
        /// File ID
        #[arg(short = 'i', long)]
        file_id: i64,
        /// Destination directory
        #[arg(short, long, default_value = ".")]
        dest: PathBuf,
    },
    /// Delete a file
    Delete {
        /// File ID
        #[arg(short, long)]
        id: i64,
    },
}

/// Execute file commands
pub async fn execute(args: &FileArgs, env: &str, format: OutputFormat) -> Result<(), AppError> {
    let config = super::load_config(env)?;
    let client = super::build_client(&config)?;

    match &args.command {
        FileCommand::List { folder_id } => {
            let files = client.list_files(*folder_id).await?;
            output::print_list(&file_rows(&files), format);
        }
        FileCommand::Upload { folder_id, paths } => {
            let accepted = &config.upload.accepted_extensions;
            let mut staged = Vec::new();
            for path in paths {
                let name = path
                    .file_name()
                    .and_then(|n| n.to_str())
                    .ok_or_else(|| {
                        AppError::validation(format!("Caminho inválido: {}", path.display()))
                    })?
                    .to_string();
                let bytes = tokio::fs::read(path).await?;
                let file = UploadFile::new(name, bytes);
                match file.extension() {
                    Some(ext) if accepted.contains(&ext) => staged.push(file),
                    _ => output::print_warning(&format!(
                        "Ignorando {} (tipo de arquivo não aceito)",
                        file.name
                    )),
                }
            }
            if staged.is_empty() {
                return Err(AppError::validation("Nenhum arquivo aceito para envio"));
            }

            let count = staged.len();
            client.upload(*folder_id, staged).await?;
            let plural = if count > 1 { "s" } else { "" };
            output::print_success(&format!(
                "{count} arquivo{plural} enviado{plural} com sucesso"
            ));
        }
        FileCommand::Download {
            folder_id,
            file_id,
            dest,
        } => {
            let files = client.list_files(*folder_id).await?;
            let file = files
                .iter()
                .find(|f| f.id == *file_id)
                .ok_or_else(|| AppError::not_found("Arquivo não encontrado"))?;

            let bytes = client.fetch_blob(&file.blob_url).await?;
            let path = dest.join(&file.name);
            tokio::fs::write(&path, &bytes).await?;
            output::print_success(&format!("Baixando {}", file.name));
        }
        FileCommand::Delete { id } => {
            client.delete_file(*id).await?;
            output::print_success("Arquivo excluído");
        }
    }

    Ok(())
}
