pub mod bom_document;
pub mod hash_manifest;
pub mod license;
pub mod package;
pub mod sbom_metadata;

pub use bom_document::{BomDocument, PackageBucket, PackageRecord};
pub use hash_manifest::{HashAlgorithm, HashEntry, HashManifest};
pub use license::{LeafParts, License, LicenseInput, Polarity};
pub use package::{BuiltPackage, InstallKind, PackageName, VcsKind};
pub use sbom_metadata::SbomMetadata;
