//! CLI Application logic
//!
//! Contains the command-line interface implementation. The shell owns
//! everything impure: file reading, the wall clock (default dates), and
//! output naming. Composition itself stays a pure library call.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Local;
use clap::{Parser, Subcommand, ValueEnum};

use courtdoc_compose::{
    compose, compose_exhibit, parse_request, ComposeContext, ExportRequest,
};
use courtdoc_model::ExhibitDescriptor;
use courtdoc_pdf::{ExportOptions, Exporter, Margins, Orientation, Paper};

use crate::intake;

/// Output format for the plan command
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output for tool consumption
    Json,
}

/// Paper size choice on the command line
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum PaperChoice {
    #[default]
    A4,
    Letter,
    Legal,
}

impl From<PaperChoice> for Paper {
    fn from(choice: PaperChoice) -> Self {
        match choice {
            PaperChoice::A4 => Paper::A4,
            PaperChoice::Letter => Paper::Letter,
            PaperChoice::Legal => Paper::Legal,
        }
    }
}

#[derive(Parser)]
#[command(name = "courtdoc")]
#[command(author, version, about = "Court-filing composer and PDF exporter", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compose a case file into the combined filing PDF
    Export {
        /// Input case file (JSON or TOML)
        input: PathBuf,

        /// Output PDF file
        #[arg(short, long, default_value = "refund-application.pdf")]
        output: PathBuf,

        /// Override today's date (YYYY-MM-DD) for filing and verification
        #[arg(long)]
        date: Option<String>,

        /// Paper size
        #[arg(long, value_enum, default_value = "a4")]
        paper: PaperChoice,

        /// Landscape orientation instead of portrait
        #[arg(long)]
        landscape: bool,

        /// Uniform page margin in inches
        #[arg(long, default_value_t = 0.5)]
        margin: f64,
    },

    /// Export a single exhibit section on its own
    Exhibit {
        /// Input case file (JSON or TOML)
        input: PathBuf,

        /// Label of the exhibit to export
        #[arg(short, long)]
        label: String,

        /// Output PDF file (defaults to exhibit-<LABEL>.pdf)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the composed fragment sequence without rendering
    Plan {
        /// Input case file (JSON or TOML)
        input: PathBuf,

        /// Output format (text or json)
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,

        /// Override today's date (YYYY-MM-DD) for filing and verification
        #[arg(long)]
        date: Option<String>,
    },
}

/// Run the CLI application
///
/// This is the main entry point for the command-line interface.
/// It parses arguments and dispatches to the appropriate command.
pub fn run_cli() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Export {
            input,
            output,
            date,
            paper,
            landscape,
            margin,
        } => {
            let options = ExportOptions {
                paper: paper.into(),
                orientation: if landscape {
                    Orientation::Landscape
                } else {
                    Orientation::Portrait
                },
                margins: Margins::uniform(margin),
                ..Default::default()
            };
            export_command(&input, &output, date.as_deref(), options)?;
        }
        Commands::Exhibit {
            input,
            label,
            output,
        } => {
            exhibit_command(&input, &label, output.as_deref())?;
        }
        Commands::Plan {
            input,
            format,
            date,
        } => {
            plan_command(&input, format, date.as_deref())?;
        }
    }

    Ok(())
}

/// Execute the export command
pub fn export_command(
    input: &Path,
    output: &Path,
    date: Option<&str>,
    options: ExportOptions,
) -> Result<()> {
    println!("courtdoc v{}", courtdoc_compose::VERSION);
    println!("Composing: {}", input.display());

    let (request, exhibits) = load_case(input)?;
    let ctx = context_with_dates(request.context.clone(), date);

    let fragments = compose(&request.case, &request.payment, &exhibits, &ctx);
    println!("  {} fragments composed", fragments.len());

    let exporter = Exporter::new(options);
    exporter
        .export_to_file(&fragments, output)
        .with_context(|| format!("Failed to export PDF: {}", output.display()))?;

    println!();
    println!("Export complete!");
    println!("  Output: {}", output.display());
    Ok(())
}

/// Execute the exhibit command (single-section export)
pub fn exhibit_command(input: &Path, label: &str, output: Option<&Path>) -> Result<()> {
    println!("courtdoc v{}", courtdoc_compose::VERSION);

    let (_, exhibits) = load_case(input)?;
    let exhibit = exhibits
        .iter()
        .find(|e| e.label == label)
        .with_context(|| format!("No exhibit labeled '{}' in {}", label, input.display()))?;

    let output_path = match output {
        Some(p) => p.to_path_buf(),
        None => PathBuf::from(format!("exhibit-{}.pdf", label)),
    };

    let fragments = compose_exhibit(exhibit);
    Exporter::default()
        .export_to_file(&fragments, &output_path)
        .with_context(|| format!("Failed to export PDF: {}", output_path.display()))?;

    println!("Export complete!");
    println!("  Output: {}", output_path.display());
    Ok(())
}

/// Execute the plan command
pub fn plan_command(input: &Path, format: OutputFormat, date: Option<&str>) -> Result<()> {
    let (request, exhibits) = load_case(input)?;
    let ctx = context_with_dates(request.context.clone(), date);
    let fragments = compose(&request.case, &request.payment, &exhibits, &ctx);

    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&fragments)
                .context("Failed to serialize fragment plan to JSON")?;
            println!("{}", json);
        }
        OutputFormat::Text => {
            for (i, fragment) in fragments.iter().enumerate() {
                let break_marker = if fragment.break_before { "| " } else { "  " };
                println!(
                    "{}{:2}. {:?} ({} blocks)",
                    break_marker,
                    i + 1,
                    fragment.kind,
                    fragment.blocks.len()
                );
            }
            println!();
            println!("{} fragments", fragments.len());
        }
    }

    Ok(())
}

/// Load a case file and resolve its exhibits through file intake.
fn load_case(input: &Path) -> Result<(ExportRequest, Vec<ExhibitDescriptor>)> {
    if !input.exists() {
        anyhow::bail!("Input file not found: {}", input.display());
    }

    let content = fs::read_to_string(input)
        .with_context(|| format!("Failed to read case file: {}", input.display()))?;

    let request = if input.extension().and_then(|e| e.to_str()) == Some("toml") {
        toml::from_str::<ExportRequest>(&content)
            .with_context(|| format!("Failed to parse case file: {}", input.display()))?
    } else {
        parse_request(&content)
            .with_context(|| format!("Failed to parse case file: {}", input.display()))?
    };

    let base_dir = input.parent().unwrap_or(Path::new("."));
    let exhibits = intake::resolve_exhibits(&request.exhibits, base_dir)?;
    Ok((request, exhibits))
}

/// Fill absent date fields from the override, or from today's date.
fn context_with_dates(mut ctx: ComposeContext, date: Option<&str>) -> ComposeContext {
    let today = date
        .map(str::to_string)
        .unwrap_or_else(|| Local::now().format("%Y-%m-%d").to_string());

    ctx.filing_date.get_or_insert_with(|| today.clone());
    ctx.verification_date.get_or_insert_with(|| today.clone());
    ctx
}
