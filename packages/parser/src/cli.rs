//! Command-line interface for the parser.

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use console::style;

use crate::error::{ParserError, Result};

/// Flowmap parser - Extract a structural model from BPMN 2.0 XML.
#[derive(Parser)]
#[command(name = "flowmap-parser")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse a BPMN file and print the structural model as JSON.
    Parse {
        /// Path to the BPMN XML file
        file: PathBuf,

        /// Write the JSON model to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Pretty-print the JSON output
        #[arg(short, long)]
        pretty: bool,
    },
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Parse {
            file,
            output,
            pretty,
        } => parse_command(&file, output.as_deref(), pretty),
    }
}

/// Execute the parse command.
fn parse_command(file: &Path, output: Option<&Path>, pretty: bool) -> Result<()> {
    if !file.is_file() {
        return Err(ParserError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("Input file does not exist: {}", file.display()),
        )));
    }

    let text = fs::read_to_string(file)?;
    let model = crate::parser::parse(&text)?;

    eprintln!(
        "{} {}",
        style("Parsed").bold(),
        style(&model.title).cyan()
    );
    eprintln!("  Processes: {}", model.processes.len());
    eprintln!("  Elements: {}", model.elements.len());
    eprintln!("  Flows: {}", model.flows.len());
    eprintln!("  Reachable from start: {}", model.flow_order.len());
    if !model.warnings.is_empty() {
        eprintln!(
            "  Warnings: {}",
            style(model.warnings.len()).yellow().bold()
        );
        for warning in &model.warnings {
            eprintln!("    - {}", warning.message);
        }
    }

    let json = if pretty {
        serde_json::to_string_pretty(&model)?
    } else {
        serde_json::to_string(&model)?
    };

    match output {
        Some(path) => {
            fs::write(path, json)?;
            eprintln!(
                "{} {}",
                style("Saved to:").green().bold(),
                path.display()
            );
        }
        None => println!("{json}"),
    }

    Ok(())
}
