use clap::Parser;
use releng_sbom::application::dto::FormatSelector;
use std::path::PathBuf;

/// Generate software bill of materials reports for a releng-tool build
#[derive(Parser, Debug)]
#[command(name = "releng-sbom")]
#[command(version)]
#[command(
    about = "Generate software bill of materials reports for a releng-tool build",
    long_about = None
)]
pub struct Args {
    /// Package inventory (TOML) listing the processed packages
    /// [default: packages.toml]
    #[arg(short, long, value_name = "PATH")]
    pub inventory: Option<PathBuf>,

    /// Report format: csv, html, json, json-spdx, rdf-spdx, text, xml or all.
    /// Can be specified multiple times: -f json -f rdf-spdx
    #[arg(short, long = "format", value_name = "FORMAT")]
    pub formats: Vec<FormatSelector>,

    /// Directory receiving the reports; created if missing [default: .]
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Configuration file (defaults to releng-sbom.config.yml in the
    /// current directory, when present)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
