//! Pieces shared by the SPDX JSON and SPDX RDF/XML formatters

use crate::sbom_generation::domain::{License, LicenseInput, PackageRecord, SbomMetadata};
use crate::sbom_generation::services::{LicenseParser, TOOL_PREFIX};

pub const SPDX_VERSION: &str = "SPDX-2.3";
pub const LICENSE_LIST_VERSION: &str = "3.25";
pub const DATA_LICENSE: &str = "CC0-1.0";
pub const DOCUMENT_ID: &str = "SPDXRef-DOCUMENT";
pub const PACKAGE_ID_PREFIX: &str = "SPDXRef-pkg";

const NAMESPACE_BASE: &str = "https://spdx.org/spdxdocs/";

/// `https://spdx.org/spdxdocs/<projectId>-<reportId>`
pub fn document_namespace(metadata: &SbomMetadata) -> String {
    format!(
        "{}{}-{}",
        NAMESPACE_BASE,
        metadata.project_id(),
        metadata.report_id()
    )
}

pub fn creator(metadata: &SbomMetadata) -> String {
    format!("Tool: {}-{}", TOOL_PREFIX, metadata.tool_version())
}

/// SPDX element id for a package; characters outside `[A-Za-z0-9.-]`
/// become `-`
pub fn package_id(name: &str) -> String {
    let sanitized: String = name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '.' || c == '-' {
                c
            } else {
                '-'
            }
        })
        .collect();
    format!("{}-{}", PACKAGE_ID_PREFIX, sanitized)
}

/// Declared license of a package as seen by the SPDX formatters
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeclaredLicense {
    /// The package lists no licenses
    None,
    /// Licenses are listed but do not form a valid expression
    NoAssertion,
    Expression(License),
}

impl DeclaredLicense {
    pub fn of(record: &PackageRecord) -> Self {
        if record.licenses().is_empty() {
            return DeclaredLicense::None;
        }

        let input = LicenseInput::any_of(record.licenses().iter().cloned());
        match LicenseParser::parse(&input) {
            Some(tree) => DeclaredLicense::Expression(tree),
            None => DeclaredLicense::NoAssertion,
        }
    }
}
