mod cli;

use cli::Args;
use releng_sbom::config::{self, ConfigFile};
use releng_sbom::prelude::*;
use releng_sbom::shared::error::ExitCode;
use std::path::{Path, PathBuf};
use std::process;

/// Inventory read when neither the CLI nor the config names one
const DEFAULT_INVENTORY: &str = "packages.toml";

fn main() {
    let code = match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            let mut source = e.source();
            while let Some(err) = source {
                eprintln!("\nCaused by: {}", err);
                source = err.source();
            }

            eprintln!();
            ExitCode::ApplicationError
        }
    };

    process::exit(code.as_i32());
}

fn run() -> Result<ExitCode> {
    // Parse command-line arguments; clap exits with code 2 on bad input
    let args = Args::parse_args();
    let progress_reporter = StderrProgressReporter::new();

    let config = match &args.config {
        Some(path) => config::load_config_from_path(path)?,
        None => config::discover_config(Path::new("."))?.unwrap_or_default(),
    };
    for key in config.unknown_field_names() {
        progress_reporter.report_warning(&format!(
            "Unknown config field '{}' will be ignored.",
            key
        ));
    }

    let selectors = resolve_selectors(&args, &config)?;
    let inventory_path = args
        .inventory
        .clone()
        .or_else(|| config.inventory.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_INVENTORY));
    let output_dir = args
        .output_dir
        .clone()
        .or_else(|| config.output_dir.clone())
        .unwrap_or_else(|| PathBuf::from("."));

    progress_reporter.report(&format!(
        "📖 Loading package inventory from: {}",
        inventory_path.display()
    ));
    let packages = FileSystemReader::new().read_inventory(&inventory_path)?;

    // Create use case with injected dependencies
    let use_case = GenerateSbomUseCase::new(
        FileSystemReader::new(),
        FileSystemWriter::new(),
        progress_reporter,
    );

    let request = SbomRequest::new(
        packages,
        output_dir,
        FormatSelection::from_selectors(&selectors),
    );

    if use_case.generate(request) {
        Ok(ExitCode::Success)
    } else {
        Ok(ExitCode::GenerationFailed)
    }
}

/// CLI formats win over the config file
fn resolve_selectors(args: &Args, config: &ConfigFile) -> Result<Vec<FormatSelector>> {
    if !args.formats.is_empty() {
        return Ok(args.formats.clone());
    }
    Ok(config.format_selectors()?.unwrap_or_default())
}
