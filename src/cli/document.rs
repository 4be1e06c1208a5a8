//! Document CLI commands

use std::path::Path;

use clap::Subcommand;

use crate::display::{format_document_details, format_document_list};
use crate::error::{FinbuddyError, FinbuddyResult};
use crate::services::DocumentService;

/// Document subcommands
#[derive(Subcommand)]
pub enum DocumentCommands {
    /// List uploaded documents
    List,
    /// Show a document and its extracted data
    Show {
        /// Document ID (e.g. doc-1a2b3c4d)
        document: String,
    },
    /// Upload a statement, bill or receipt
    Upload {
        /// File to upload; only its name and size are used
        file: String,
        /// Size in bytes, for files that are not on disk
        #[arg(short, long)]
        size: Option<u64>,
        /// Return without waiting for processing to finish
        #[arg(long)]
        no_wait: bool,
    },
    /// Remove a document
    Remove {
        /// Document ID (e.g. doc-1a2b3c4d)
        document: String,
    },
}

/// Name and size of the file to upload
fn file_details(file: &str, size: Option<u64>) -> FinbuddyResult<(String, u64)> {
    let path = Path::new(file);
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| file.to_string());

    let size = match size {
        Some(size) => size,
        None => std::fs::metadata(path)
            .map_err(|e| FinbuddyError::Io(format!("Cannot read {}: {}", file, e)))?
            .len(),
    };
    Ok((name, size))
}

/// Handle a document command
pub async fn handle_document_command(
    documents: &DocumentService,
    symbol: &str,
    cmd: DocumentCommands,
) -> FinbuddyResult<()> {
    match cmd {
        DocumentCommands::List => {
            println!("{}", format_document_list(&documents.list()?));
        }

        DocumentCommands::Show { document } => {
            let doc = documents
                .find(&document)?
                .ok_or_else(|| FinbuddyError::document_not_found(&document))?;
            print!("{}", format_document_details(&doc, symbol));
        }

        DocumentCommands::Upload {
            file,
            size,
            no_wait,
        } => {
            let (name, size) = file_details(&file, size)?;
            let Some(doc) = documents.upload(&name, size)? else {
                println!("Nothing uploaded: the file needs a name.");
                return Ok(());
            };

            println!("Uploaded {} as {}", doc.name, doc.id);
            if !no_wait {
                println!("Processing...");
                documents.settle().await?;
            }

            let doc = documents.get(doc.id)?.unwrap_or(doc);
            println!();
            print!("{}", format_document_details(&doc, symbol));
        }

        DocumentCommands::Remove { document } => {
            let doc = documents
                .find(&document)?
                .ok_or_else(|| FinbuddyError::document_not_found(&document))?;
            documents.remove(doc.id)?;
            println!("Removed {} ({})\n", doc.name, doc.id);
            println!("{}", format_document_list(&documents.list()?));
        }
    }
    Ok(())
}
