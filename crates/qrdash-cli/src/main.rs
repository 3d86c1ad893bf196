//! qrdash CLI: upload assets to the configured backing store.
//!
//! Storage is selected with STORAGE_BACKEND (local, s3, rest) plus the
//! backend's settings; see `.env.example`.

use anyhow::Context;
use bytes::Bytes;
use clap::{Parser, Subcommand};
use qrdash_cli::{init_tracing, original_name};
use qrdash_core::StorageConfig;
use qrdash_services::AssetUploadService;
use qrdash_storage::create_storage;
use serde::Serialize;

#[derive(Parser)]
#[command(name = "qrdash", about = "qrdash asset storage CLI")]
struct Cli {
    /// Emit logs as JSON
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Upload a file and print its storage path and public URL
    Upload {
        /// Path to the file to upload
        file: std::path::PathBuf,
        /// Storage prefix (defaults to UPLOAD_NAMESPACE)
        #[arg(long)]
        namespace: Option<String>,
    },
    /// Print the public URL of a storage key
    Url {
        /// Storage key, e.g. uploads/1700000000000.png
        key: String,
    },
    /// Check whether a storage key exists
    Exists {
        /// Storage key
        key: String,
    },
    /// Delete a storage key
    Delete {
        /// Storage key
        key: String,
    },
}

fn print_json(value: &impl Serialize) -> anyhow::Result<()> {
    let out = serde_json::to_string_pretty(value).context("Serialize response")?;
    println!("{}", out);
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.json_logs);

    let config = StorageConfig::from_env().context("Failed to load storage configuration")?;
    config.validate()?;

    let storage = create_storage(&config)
        .await
        .with_context(|| format!("Failed to create {} storage", config.storage_backend()))?;

    match cli.command {
        Commands::Upload { file, namespace } => {
            let payload = tokio::fs::read(&file)
                .await
                .with_context(|| format!("Failed to read {}", file.display()))?;
            let namespace = namespace.unwrap_or_else(|| config.upload_namespace().to_string());

            let service = AssetUploadService::from_config(storage, &config);
            let asset = service
                .upload(Bytes::from(payload), &original_name(&file), &namespace)
                .await
                .context("Upload failed")?;
            print_json(&asset)?;
        }
        Commands::Url { key } => {
            print_json(&serde_json::json!({ "key": key, "public_url": storage.public_url(&key) }))?;
        }
        Commands::Exists { key } => {
            let exists = storage.exists(&key).await?;
            print_json(&serde_json::json!({ "key": key, "exists": exists }))?;
        }
        Commands::Delete { key } => {
            storage.delete(&key).await?;
            print_json(
                &serde_json::json!({ "success": true, "message": format!("{} deleted", key) }),
            )?;
        }
    }

    Ok(())
}
