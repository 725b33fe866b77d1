//! CLI for the docsum document checksummer.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use docsum_core::config;
use std::path::Path;

use commands::{run_checksum, run_config};

/// Top-level CLI for the docsum document checksummer.
#[derive(Debug, Parser)]
#[command(name = "docsum")]
#[command(
    about = "docsum: content-change fingerprints for ingested documents",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Compute the checksum of a document.
    Checksum {
        /// Path to the document body.
        path: String,

        /// Metadata fields used instead of the body. Comma-separated and
        /// repeatable; overrides the config file.
        #[arg(long = "field", value_delimiter = ',', value_name = "NAME")]
        fields: Vec<String>,

        /// JSON sidecar holding the document's metadata, shaped as
        /// {"field": ["value", ...], ...}.
        #[arg(long, value_name = "FILE")]
        metadata: Option<String>,

        /// Digest algorithm: md5 (default) or sha256. Overrides the
        /// config file.
        #[arg(long, value_name = "ALGO")]
        algorithm: Option<String>,
    },

    /// Show the config file path and effective settings.
    Config,
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Checksum {
                path,
                fields,
                metadata,
                algorithm,
            } => run_checksum(
                &cfg,
                Path::new(&path),
                &fields,
                metadata.as_deref().map(Path::new),
                algorithm.as_deref(),
            )?,
            CliCommand::Config => run_config(&cfg)?,
        }

        Ok(())
    }
}
