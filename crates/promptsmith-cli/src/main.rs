//! promptsmith CLI - Refine requirement text into a structured document
//!
//! Reads typed text plus already-extracted image and document text from
//! disk, runs the refinement engine and prints JSON or a summary report.

mod config;
mod decoder;
mod render;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use promptsmith::{RawInput, RefineService, Refiner};

use config::{Config, OutputFormat};
use decoder::FsDecoder;

#[derive(Parser)]
#[command(name = "promptsmith")]
#[command(about = "promptsmith - Refine requirement text into a structured document", long_about = None)]
#[command(version)]
struct Cli {
    /// Config file (defaults to ~/.config/promptsmith/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Refine text, images and documents into one document
    Refine {
        /// Requirement text (or use -f for file)
        text: Option<String>,
        /// Read requirement text from file
        #[arg(short, long)]
        file: Option<PathBuf>,
        /// Image OCR output: JSON sidecar or plain text (repeatable)
        #[arg(long)]
        image: Vec<PathBuf>,
        /// Extracted text of a .pdf, .doc or .docx document (repeatable)
        #[arg(long)]
        doc: Vec<PathBuf>,
        /// Output format (overrides config)
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
        /// Write the result to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Inspect or create the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the effective configuration as TOML
    Show,
    /// Print the configuration file location
    Path,
    /// Write the default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();

    let cli = Cli::parse();
    let config_path = cli.config.as_deref();

    match cli.command {
        Commands::Refine { text, file, image, doc, format, output } => {
            cmd_refine(config_path, text, file, image, doc, format, output).await
        }
        Commands::Config { action } => cmd_config(config_path, action),
    }
}

/// Log to stderr so stdout stays clean for piping
fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

// ============================================
// Command Implementations
// ============================================

async fn cmd_refine(
    config_path: Option<&Path>,
    text: Option<String>,
    file: Option<PathBuf>,
    images: Vec<PathBuf>,
    docs: Vec<PathBuf>,
    format: Option<OutputFormat>,
    output: Option<PathBuf>,
) -> Result<()> {
    let config = Config::load(config_path)?;
    let format = format.unwrap_or(config.output);

    let refiner = Refiner::new(config.engine).context("Invalid engine configuration")?;
    let service = RefineService::new(Arc::new(FsDecoder::new()), Arc::new(refiner));

    let inputs = collect_inputs(text, file, images, docs).await?;
    let prompt = service.refine(&inputs).await?;

    let rendered = match format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(&prompt).context("Failed to serialize result")?
        }
        OutputFormat::Summary => render::Summary(&prompt).to_string(),
    };

    match output {
        Some(path) => {
            tokio::fs::write(&path, rendered)
                .await
                .with_context(|| format!("Failed to write result to {:?}", path))?;
            eprintln!("{} Wrote {:?}", "✓".green(), path);
        }
        None => println!("{}", rendered),
    }

    Ok(())
}

/// Gather inputs in upload order: text, images, documents
async fn collect_inputs(
    text: Option<String>,
    file: Option<PathBuf>,
    images: Vec<PathBuf>,
    docs: Vec<PathBuf>,
) -> Result<Vec<RawInput>> {
    let typed = match (text, file) {
        (Some(t), None) => Some(t),
        (None, Some(f)) => Some(
            tokio::fs::read_to_string(&f)
                .await
                .with_context(|| format!("Failed to read file: {:?}", f))?,
        ),
        (Some(_), Some(_)) => bail!("Cannot specify both text and --file"),
        (None, None) => None,
    };

    let mut inputs = Vec::with_capacity(1 + images.len() + docs.len());
    inputs.extend(typed.map(RawInput::Text));
    inputs.extend(images.into_iter().map(RawInput::Image));

    for path in docs {
        match RawInput::from_document_path(&path) {
            Some(input) => inputs.push(input),
            None => {
                eprintln!(
                    "{} Skipping {:?}: not a .pdf, .doc or .docx file",
                    "!".yellow(),
                    path
                );
            }
        }
    }

    Ok(inputs)
}

fn cmd_config(config_path: Option<&Path>, action: ConfigAction) -> Result<()> {
    let path = Config::config_path(config_path)?;

    match action {
        ConfigAction::Show => {
            let config = Config::load_from(&path)?;
            println!("{}", format!("# {}", path.display()).dimmed());
            println!("{}", config.to_toml()?);
        }

        ConfigAction::Path => {
            println!("{}", path.display());
        }

        ConfigAction::Init { force } => {
            if path.exists() && !force {
                bail!("Config already exists at {:?} (use --force to overwrite)", path);
            }
            Config::default().save_to(&path)?;
            println!("{} Config written to {:?}", "✓".green(), path);
        }
    }

    Ok(())
}
