//! releng-sbom - software bill of materials reports for releng-tool builds
//!
//! This library assembles a build-of-materials document from the packages a
//! build processed and renders it as text, CSV, HTML, JSON, XML, SPDX 2.3
//! JSON and SPDX 2.3 RDF/XML, following hexagonal architecture and
//! Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`sbom_generation`): License expressions, hash manifests,
//!   package records and the services that build them
//! - **Application Layer** (`application`): Use cases and application services
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use releng_sbom::prelude::*;
//! use std::path::{Path, PathBuf};
//!
//! # fn main() -> Result<()> {
//! let packages = FileSystemReader::new().read_inventory(Path::new("packages.toml"))?;
//!
//! // Create use case
//! let use_case = GenerateSbomUseCase::new(
//!     FileSystemReader::new(),
//!     FileSystemWriter::new(),
//!     StderrProgressReporter::new(),
//! );
//!
//! // Emit every format into build/sbom
//! let request = SbomRequest::new(packages, PathBuf::from("build/sbom"), FormatSelection::all());
//! let response = use_case.execute(request)?;
//! println!("{} report(s) written", response.written_files.len());
//! # Ok(())
//! # }
//! ```
//!
//! License expressions can be parsed on their own:
//!
//! ```
//! use releng_sbom::prelude::*;
//!
//! let tree = LicenseParser::parse_expression("MIT AND (Apache-2.0 OR GPL-2.0+)").unwrap();
//! assert_eq!(tree.to_string(), "MIT AND (Apache-2.0 OR GPL-2.0+)");
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod ports;
pub mod sbom_generation;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{FileSystemReader, FileSystemWriter};
    pub use crate::adapters::outbound::formatters::{
        CsvFormatter, HtmlFormatter, JsonFormatter, SpdxJsonFormatter, SpdxRdfFormatter,
        TextFormatter, XmlFormatter,
    };
    pub use crate::application::dto::{
        FormatSelection, FormatSelector, OutputFormat, SbomRequest, SbomResponse,
    };
    pub use crate::application::use_cases::{GenerateSbomUseCase, VerifyHashesUseCase};
    pub use crate::ports::outbound::{
        AssetReader, HashManifestReader, PackageInventoryReader, ProgressReporter, ReportWriter,
        SbomFormatter,
    };
    pub use crate::sbom_generation::domain::{
        BomDocument, BuiltPackage, HashAlgorithm, HashEntry, HashManifest, InstallKind, License,
        LicenseInput, PackageBucket, PackageRecord, SbomMetadata, VcsKind,
    };
    pub use crate::sbom_generation::services::{
        HashManifestParser, LicenseExtraction, LicenseExtractor, LicenseParser, SbomGenerator,
    };
    pub use crate::shared::Result;
}
