mod digester;
mod hash_manifest_parser;
mod license_extractor;
mod license_parser;
mod sbom_generator;

pub use digester::{DigestKind, Digester};
pub use hash_manifest_parser::HashManifestParser;
pub use license_extractor::{LicenseExtraction, LicenseExtractor};
pub use license_parser::LicenseParser;
pub use sbom_generator::{SbomGenerator, TOOL_PREFIX};
