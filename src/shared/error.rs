use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems to distinguish between a report that
/// could not be written and a run that never got that far.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - every requested report was written
    Success = 0,
    /// The generate step failed (output directory or emitter I/O error)
    GenerationFailed = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (unreadable inventory, bad config, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::GenerationFailed => write!(f, "Generation Failed (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for SBOM generation.
#[derive(Debug, Error)]
pub enum SbomError {
    #[error("Package inventory not found: {path}\n\n💡 Hint: {suggestion}")]
    InventoryNotFound { path: PathBuf, suggestion: String },

    #[error("Failed to parse package inventory: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the inventory is valid TOML with [[package]] tables")]
    InventoryParseError { path: PathBuf, details: String },

    #[error("Unable to prepare output directory: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the location is writable")]
    OutputDirectoryUnavailable { path: PathBuf, details: String },

    #[error("Failed to write SBOM file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    EmitterWrite { path: PathBuf, details: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },
}

/// Errors raised while loading a hash manifest.
///
/// The two kinds are kept apart so a verifier can tell a missing manifest
/// from a damaged one. The BOM assembler treats both the same way.
#[derive(Debug, Error)]
pub enum HashManifestError {
    #[error("unable to read hash file: {path}\nDetails: {details}")]
    Unreadable { path: PathBuf, details: String },

    #[error("hash file is malformed: {path}\nDetails: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: HashFormatError,
    },
}

/// Format violations detected by the hash-manifest parser.
///
/// `entry` is the 1-based index among the lines that carry data
/// (blank and comment-only lines are not counted).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HashFormatError {
    #[error("too many values for entry {entry}")]
    TooManyValues { entry: usize },

    #[error("too few values for entry {entry}")]
    TooFewValues { entry: usize },

    #[error("invalid key length '{value}' for entry {entry}")]
    InvalidKeyLength { entry: usize, value: String },
}

/// Failures reported while verifying files against a hash manifest.
#[derive(Debug, Error)]
pub enum VerifyError {
    #[error(transparent)]
    Manifest(#[from] HashManifestError),

    #[error("no hash entry for file: {asset}")]
    MissingEntry { asset: String },

    #[error("unable to read file for hashing: {path}\nDetails: {details}")]
    AssetUnreadable { path: PathBuf, details: String },

    #[error("unsupported hash algorithm '{algorithm}' for file: {asset}")]
    UnsupportedAlgorithm { algorithm: String, asset: String },

    #[error("hash mismatch for {asset} ({algorithm})\n  expected: {expected}\n  computed: {computed}")]
    Mismatch {
        asset: String,
        algorithm: String,
        expected: String,
        computed: String,
    },
}
