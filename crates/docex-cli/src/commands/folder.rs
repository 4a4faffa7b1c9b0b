//! Folder management CLI commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use docex_client::DocumentApi;
use docex_core::error::AppError;
use docex_entity::folder::{CreateFolder, FolderNode, build_forest};

use crate::output::{self, OutputFormat};

/// Arguments for folder commands
#[derive(Debug, Args)]
pub struct FolderArgs {
    /// Folder subcommand
    #[command(subcommand)]
    pub command: FolderCommand,
}

/// Folder subcommands
#[derive(Debug, Subcommand)]
pub enum FolderCommand {
    /// List all folders (flat)
    List,
    /// Show the folder tree, fully expanded
    Tree,
    /// Create a new folder
    Create {
        /// Folder name
        #[arg(short, long)]
        name: String,
        /// Parent folder ID (omit for a root folder)
        #[arg(short, long)]
        parent_id: Option<i64>,
    },
    /// Rename a folder
    Rename {
        /// Folder ID
        #[arg(short, long)]
        id: i64,
        /// New name
        #[arg(short, long)]
        name: String,
    },
    /// Delete a folder (files and subfolders are removed by the server)
    Delete {
        /// Folder ID
        #[arg(short, long)]
        id: i64,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

/// Folder display row
#[derive(Debug, Serialize, Tabled)]
struct FolderRow {
    /// Folder ID
    #[tabled(rename = "ID")]
    id: i64,
    /// Name
    #[tabled(rename = "Nome")]
    nome: String,
    /// Parent folder ID
    #[tabled(rename = "Pasta pai")]
    pasta_pai: String,
}

/// Execute folder commands
pub async fn execute(args: &FolderArgs, env: &str, format: OutputFormat) -> Result<(), AppError> {
    let config = super::load_config(env)?;
    let client = super::build_client(&config)?;

    match &args.command {
        FolderCommand::List => {
            let folders = client.list_folders().await?;
            let rows: Vec<FolderRow> = folders
                .iter()
                .map(|f| FolderRow {
                    id: f.id,
                    nome: f.name.clone(),
                    pasta_pai: f
                        .parent_id
                        .map(|p| p.to_string())
                        .unwrap_or_else(|| "—".to_string()),
                })
                .collect();
            output::print_list(&rows, format);
        }
        FolderCommand::Tree => {
            let folders = client.list_folders().await?;
            let forest = build_forest(&folders);
            for node in &forest {
                print_node(node, 0);
            }
        }
        FolderCommand::Create { name, parent_id } => {
            let name = name.trim();
            if name.is_empty() {
                return Err(AppError::validation("O nome da pasta não pode ser vazio"));
            }
            client
                .create_folder(&CreateFolder {
                    name: name.to_string(),
                    parent_id: *parent_id,
                })
                .await?;
            output::print_success("Pasta criada com sucesso");
        }
        FolderCommand::Rename { id, name } => {
            let name = name.trim();
            if name.is_empty() {
                return Err(AppError::validation("O nome da pasta não pode ser vazio"));
            }
            client.rename_folder(*id, name).await?;
            output::print_success("Pasta renomeada com sucesso");
        }
        FolderCommand::Delete { id, yes } => {
            if !*yes {
                let confirmed = dialoguer::Confirm::new()
                    .with_prompt(
                        "Tem certeza que deseja excluir esta pasta? Todos os arquivos e \
                         subpastas serão removidos permanentemente.",
                    )
                    .default(false)
                    .interact()
                    .map_err(|e| AppError::internal(format!("Prompt failed: {e}")))?;
                if !confirmed {
                    return Ok(());
                }
            }
            client.delete_folder(*id).await?;
            output::print_success("Pasta excluída com sucesso");
        }
    }

    Ok(())
}

fn print_node(node: &FolderNode, level: usize) {
    println!("{}{} ({})", "  ".repeat(level), node.name, node.id);
    for child in &node.children {
        print_node(child, level + 1);
    }
}
