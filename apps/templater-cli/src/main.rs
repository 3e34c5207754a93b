//! FedRAMP Templater Binary
//!
//! Fills a FedRAMP SSP from an OpenControl workspace, or reports where the
//! two disagree.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use opencontrols::{LoadOptions, OpenControlData};
use shared_types::DocumentDiff;
use std::io::Write;
use std::path::{Path, PathBuf};
use templater_core::{diff_ssp, templatize_ssp, Ssp, TemplaterOptions};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "fedramp-templater")]
#[command(
    version,
    about = "Fill or check a FedRAMP SSP against OpenControl data"
)]
struct Args {
    /// Only use OpenControl entries for this standard key
    #[arg(long, global = true)]
    standard: Option<String>,

    /// Skip tables that fail instead of aborting
    #[arg(long, global = true)]
    keep_going: bool,

    /// Debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write OpenControl data into the SSP's control tables
    Fill {
        opencontrol_dir: PathBuf,
        input_docx: PathBuf,
        output_docx: PathBuf,
    },
    /// Print differences between the SSP and OpenControl data
    Diff {
        opencontrol_dir: PathBuf,
        input_docx: PathBuf,
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Format {
    Text,
    Json,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Reports go to stdout, so logs must stay on stderr
    let level = if args.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive(level.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let load_options = LoadOptions {
        standard_key: args.standard.clone(),
    };
    let options = TemplaterOptions {
        keep_going: args.keep_going,
    };

    match &args.command {
        Command::Fill {
            opencontrol_dir,
            input_docx,
            output_docx,
        } => fill(
            opencontrol_dir,
            input_docx,
            output_docx,
            load_options,
            &options,
        ),
        Command::Diff {
            opencontrol_dir,
            input_docx,
            format,
        } => diff(opencontrol_dir, input_docx, *format, load_options, &options),
    }
}

fn load(
    opencontrol_dir: &Path,
    input_docx: &Path,
    load_options: LoadOptions,
) -> Result<(OpenControlData, Ssp)> {
    let data = OpenControlData::load_with(opencontrol_dir, load_options)
        .with_context(|| {
            format!(
                "Failed to load OpenControl data from {}",
                opencontrol_dir.display()
            )
        })?;
    let ssp = Ssp::load(input_docx)
        .with_context(|| format!("Failed to open SSP {}", input_docx.display()))?;
    Ok((data, ssp))
}

fn fill(
    opencontrol_dir: &Path,
    input_docx: &Path,
    output_docx: &Path,
    load_options: LoadOptions,
    options: &TemplaterOptions,
) -> Result<()> {
    if input_docx == output_docx {
        bail!(
            "Refusing to overwrite the input document {}",
            input_docx.display()
        );
    }
    let (data, mut ssp) = load(opencontrol_dir, input_docx, load_options)?;

    let outcome = templatize_ssp(&mut ssp, &data, options).context("Failed to fill SSP")?;
    ssp.save(output_docx)
        .with_context(|| format!("Failed to write {}", output_docx.display()))?;

    tracing::info!(
        output = %output_docx.display(),
        filled = outcome.filled.len(),
        skipped = outcome.failures.len(),
        "Wrote filled SSP"
    );
    Ok(())
}

fn diff(
    opencontrol_dir: &Path,
    input_docx: &Path,
    format: Format,
    load_options: LoadOptions,
    options: &TemplaterOptions,
) -> Result<()> {
    let (data, ssp) = load(opencontrol_dir, input_docx, load_options)?;
    let outcome = diff_ssp(&ssp, &data, options).context("Failed to diff SSP")?;

    let document_diff = DocumentDiff {
        document: input_docx.display().to_string(),
        reports: outcome.reports,
        checked_at: chrono::Utc::now().timestamp().max(0) as u64,
    };
    if document_diff.is_clean() {
        tracing::info!(document = %document_diff.document, "SSP matches OpenControl data");
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match format {
        Format::Text => {
            for report in &document_diff.reports {
                report.write_text_to(&mut out)?;
            }
        }
        Format::Json => writeln!(out, "{}", document_diff.to_json()?)?,
    }
    Ok(())
}
