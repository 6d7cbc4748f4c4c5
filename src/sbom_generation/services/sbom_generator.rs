use crate::sbom_generation::domain::SbomMetadata;
use chrono::{DateTime, Utc};
use sha1::{Digest, Sha1};
use uuid::Uuid;

/// Prefix shared by package fingerprints and project identifiers
pub const TOOL_PREFIX: &str = "releng-tool";

/// Timestamp layout used in every report
const DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// SbomGenerator service for generating SBOM identity information
///
/// This service contains pure business logic: fingerprints, the project
/// identifier and the per-report metadata.
pub struct SbomGenerator;

impl SbomGenerator {
    /// Generates SBOM metadata with the current UTC time and a fresh report id
    ///
    /// # Arguments
    /// * `package_names` - Names of the reported packages, in visit order
    /// * `tool_version` - Version of the tool
    pub fn generate_metadata<'a, I>(package_names: I, tool_version: &str) -> SbomMetadata
    where
        I: IntoIterator<Item = &'a str>,
    {
        SbomMetadata::new(
            Uuid::new_v4().to_string(),
            tool_version.to_string(),
            Self::project_id(package_names),
            Self::format_datetime(Utc::now()),
        )
    }

    /// Generates SBOM metadata stamped with this crate's version
    pub fn generate_default_metadata<'a, I>(package_names: I) -> SbomMetadata
    where
        I: IntoIterator<Item = &'a str>,
    {
        Self::generate_metadata(package_names, env!("CARGO_PKG_VERSION"))
    }

    /// Fingerprint of a package: SHA-1 of `releng-tool-<name>`, hex encoded
    pub fn package_uid(name: &str) -> String {
        let digest = Sha1::digest(format!("{}-{}", TOOL_PREFIX, name).as_bytes());
        hex::encode(digest)
    }

    /// Project identifier: `releng-tool-` plus the first eight hex digits
    /// of SHA-1 over `releng-tool;<name1>;<name2>...`
    pub fn project_id<'a, I>(package_names: I) -> String
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut hasher = Sha1::new();
        hasher.update(TOOL_PREFIX.as_bytes());
        for name in package_names {
            hasher.update(b";");
            hasher.update(name.as_bytes());
        }

        let digest = hex::encode(hasher.finalize());
        format!("{}-{}", TOOL_PREFIX, &digest[..8])
    }

    pub fn format_datetime(moment: DateTime<Utc>) -> String {
        moment.format(DATETIME_FORMAT).to_string()
    }
}
