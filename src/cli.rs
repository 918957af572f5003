// src/cli.rs
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::{error, info};

use crate::config::{ConfigManager, DEFAULT_CONFIG_PATH};
use crate::convert::{convert_str, CompanyLimit, Conversion, ConversionOptions};
use crate::detector::detect_document_type;
use crate::error::ConvertError;
use crate::store::TableStoreClient;
use crate::types::DocumentType;
use crate::utils::{normalize_input, read_input, write_file_content};

#[derive(Parser)]
#[command(name = "candidate-docs")]
#[command(about = "Convert generated recruiting documents into table-store records")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// Write JSON logs to this file instead of stderr
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show the detected document type
    Detect { file: PathBuf },
    /// Print the flat record as JSON
    Convert {
        file: PathBuf,
        /// Company groups to inline, or "unbounded"
        #[arg(long, value_parser = parse_company_limit)]
        max_inline_companies: Option<CompanyLimit>,
        #[arg(long)]
        pretty: bool,
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Show what an import would send
    Preview {
        file: PathBuf,
        #[arg(long, value_parser = parse_company_limit)]
        max_inline_companies: Option<CompanyLimit>,
    },
    /// Convert and create a record in the configured table
    Import {
        file: PathBuf,
        #[arg(long, value_parser = parse_company_limit)]
        max_inline_companies: Option<CompanyLimit>,
    },
    /// List the configured table for each document type
    Tables,
}

fn parse_company_limit(value: &str) -> Result<CompanyLimit, String> {
    CompanyLimit::from_setting(value)
        .ok_or_else(|| format!("expected a number or \"unbounded\", got \"{}\"", value))
}

/// Configuration is loaded per command, so `detect` never depends on it and a
/// `--max-inline-companies` value is applied before the environment is read.
pub async fn handle_command(cli: Cli) -> Result<()> {
    let config_path = cli.config;

    match cli.command {
        Command::Detect { file } => {
            let content = read_input(&file).await?;
            let value: serde_json::Value =
                serde_json::from_str(normalize_input(&content)).map_err(|e| user_error(e.into()))?;
            let document_type = detect_document_type(&value).ok_or_else(|| {
                user_error(ConvertError::UnrecognizedType {
                    found: value
                        .get("document_type")
                        .map(|tag| tag.as_str().map_or_else(|| tag.to_string(), String::from)),
                })
            })?;
            println!("{}", document_type);
        }

        Command::Convert {
            file,
            max_inline_companies,
            pretty,
            output,
        } => {
            let config = ConfigManager::load(&config_path, max_inline_companies)?;
            let conversion = convert_file(&file, &config.conversion_options()).await?;
            let fields = conversion.record.to_fields();
            let json = if pretty {
                serde_json::to_string_pretty(&fields)
            } else {
                serde_json::to_string(&fields)
            }
            .context("Failed to serialize record")?;

            match output {
                Some(path) => {
                    write_file_content(&path, &json).await?;
                    info!("Wrote {} fields to {}", fields.len(), path.display());
                }
                None => println!("{}", json),
            }
        }

        Command::Preview {
            file,
            max_inline_companies,
        } => {
            let config = ConfigManager::load(&config_path, max_inline_companies)?;
            let conversion = convert_file(&file, &config.conversion_options()).await?;
            println!("{}", conversion.preview());
            match config.table_id(conversion.document_type) {
                Some(table_id) => println!("送信先テーブル: {}", table_id),
                None => println!("送信先テーブルが未設定です"),
            }
        }

        Command::Import {
            file,
            max_inline_companies,
        } => {
            let config = ConfigManager::load(&config_path, max_inline_companies)?;
            let conversion = convert_file(&file, &config.conversion_options()).await?;
            let document_type = conversion.document_type;
            if !config.is_configured(document_type) {
                anyhow::bail!("No table store configured for {}", document_type);
            }
            let table_id = config
                .table_id(document_type)
                .with_context(|| format!("No table id for {}", document_type))?;

            println!("{}", conversion.preview());
            let client = TableStoreClient::new(&config.store)?;
            match client.import(table_id, &conversion).await {
                Ok(outcome) => {
                    info!(
                        "Imported record {} into {} at {}",
                        outcome.record_id, outcome.table_id, outcome.imported_at
                    );
                    println!("{}", outcome);
                }
                Err(e) => {
                    error!("Import failed: {:#}", e);
                    return Err(e);
                }
            }
        }

        Command::Tables => {
            let config = ConfigManager::load(&config_path, None)?;
            println!("Environment: {}", config.environment);
            println!("{:<16} {:<28} {}", "Document", "Table", "Ready");
            println!("{}", "-".repeat(52));
            for document_type in DocumentType::ALL {
                println!(
                    "{:<16} {:<28} {}",
                    document_type.as_str(),
                    config.table_id(document_type).unwrap_or("-"),
                    if config.is_configured(document_type) { "yes" } else { "no" }
                );
            }
        }
    }

    Ok(())
}

async fn convert_file(path: &Path, options: &ConversionOptions) -> Result<Conversion> {
    let content = read_input(path).await?;
    convert_str(normalize_input(&content), options).map_err(user_error)
}

/// Keeps the conversion error as the source and shows the Japanese message.
fn user_error(e: ConvertError) -> anyhow::Error {
    let message = e.user_message();
    anyhow::Error::new(e).context(message)
}
