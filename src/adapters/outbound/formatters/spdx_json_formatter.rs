use super::spdx::{self, DeclaredLicense};
use crate::ports::outbound::SbomFormatter;
use crate::sbom_generation::domain::{BomDocument, PackageRecord};
use crate::shared::Result;
use serde::Serialize;

const NONE: &str = "NONE";
const NOASSERTION: &str = "NOASSERTION";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Document {
    #[serde(rename = "SPDXID")]
    spdx_id: String,
    spdx_version: String,
    data_license: String,
    name: String,
    document_namespace: String,
    creation_info: CreationInfo,
    packages: Vec<Package>,
    relationships: Vec<Relationship>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CreationInfo {
    created: String,
    creators: Vec<String>,
    license_list_version: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Package {
    #[serde(rename = "SPDXID")]
    spdx_id: String,
    name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    version_info: String,
    download_location: String,
    files_analyzed: bool,
    license_concluded: String,
    license_declared: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Relationship {
    spdx_element_id: String,
    relationship_type: String,
    related_spdx_element: String,
}

/// SpdxJsonFormatter adapter for generating SPDX 2.3 JSON
///
/// Each package's license list is parsed into an expression; a list that
/// does not parse is declared as `NOASSERTION`.
pub struct SpdxJsonFormatter;

impl SpdxJsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SpdxJsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl SbomFormatter for SpdxJsonFormatter {
    fn format(&self, document: &BomDocument) -> Result<String> {
        let metadata = document.metadata();
        let packages: Vec<Package> = document
            .all_packages()
            .map(|record| self.build_package(record))
            .collect();
        let relationships = packages
            .iter()
            .map(|package| Relationship {
                spdx_element_id: spdx::DOCUMENT_ID.to_string(),
                relationship_type: "DESCRIBES".to_string(),
                related_spdx_element: package.spdx_id.clone(),
            })
            .collect();

        let spdx_document = Document {
            spdx_id: spdx::DOCUMENT_ID.to_string(),
            spdx_version: spdx::SPDX_VERSION.to_string(),
            data_license: spdx::DATA_LICENSE.to_string(),
            name: metadata.project_id().to_string(),
            document_namespace: spdx::document_namespace(metadata),
            creation_info: CreationInfo {
                created: metadata.datetime().to_string(),
                creators: vec![spdx::creator(metadata)],
                license_list_version: spdx::LICENSE_LIST_VERSION.to_string(),
            },
            packages,
            relationships,
        };

        serde_json::to_string_pretty(&spdx_document).map_err(Into::into)
    }
}

impl SpdxJsonFormatter {
    fn build_package(&self, record: &PackageRecord) -> Package {
        let (declared, concluded) = match DeclaredLicense::of(record) {
            DeclaredLicense::None => (NONE.to_string(), NONE.to_string()),
            DeclaredLicense::NoAssertion => (NOASSERTION.to_string(), NOASSERTION.to_string()),
            DeclaredLicense::Expression(tree) => (tree.to_string(), NOASSERTION.to_string()),
        };

        Package {
            spdx_id: spdx::package_id(record.name()),
            name: record.name().to_string(),
            version_info: record.version().to_string(),
            download_location: record
                .site()
                .filter(|site| !site.is_empty())
                .unwrap_or(NONE)
                .to_string(),
            files_analyzed: false,
            license_concluded: concluded,
            license_declared: declared,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::outbound::formatters::test_support::{document_with, record, record_at};
    use crate::sbom_generation::domain::{InstallKind, License};
    use crate::sbom_generation::services::LicenseParser;
    use serde_json::Value;

    fn render(document: &BomDocument) -> Value {
        let json = SpdxJsonFormatter::new().format(document).unwrap();
        serde_json::from_str(&json).unwrap()
    }

    #[test]
    fn test_format_header() {
        let doc = document_with(vec![record("test-a", &["MIT"], InstallKind::Target)]);
        let json = render(&doc);

        assert_eq!(json["SPDXID"], "SPDXRef-DOCUMENT");
        assert_eq!(json["spdxVersion"], "SPDX-2.3");
        assert_eq!(json["dataLicense"], "CC0-1.0");
        assert_eq!(
            json["documentNamespace"],
            format!(
                "https://spdx.org/spdxdocs/{}-{}",
                doc.metadata().project_id(),
                doc.metadata().report_id()
            )
        );
        assert_eq!(json["creationInfo"]["licenseListVersion"], "3.25");
        assert_eq!(json["creationInfo"]["created"], doc.metadata().datetime());
        assert_eq!(
            json["creationInfo"]["creators"][0],
            format!("Tool: releng-tool-{}", doc.metadata().tool_version())
        );
    }

    #[test]
    fn test_format_package_fields() {
        let doc = document_with(vec![record("test-a", &["MIT"], InstallKind::Target)]);
        let json = render(&doc);
        let package = &json["packages"][0];

        assert_eq!(package["SPDXID"], "SPDXRef-pkg-test-a");
        assert_eq!(package["name"], "test-a");
        assert_eq!(package["versionInfo"], "1.0");
        assert_eq!(package["downloadLocation"], "https://example.com/test-a.tgz");
        assert_eq!(package["filesAnalyzed"], false);
        assert_eq!(package["licenseDeclared"], "MIT");
        assert_eq!(package["licenseConcluded"], "NOASSERTION");
    }

    #[test]
    fn test_format_without_licenses() {
        let doc = document_with(vec![record("test-a", &[], InstallKind::Target)]);
        let json = render(&doc);
        let package = &json["packages"][0];

        assert_eq!(package["licenseDeclared"], "NONE");
        assert_eq!(package["licenseConcluded"], "NONE");
    }

    #[test]
    fn test_format_unparseable_license() {
        let doc = document_with(vec![record("test-a", &["(MIT"], InstallKind::Target)]);
        let json = render(&doc);
        let package = &json["packages"][0];

        assert_eq!(package["licenseDeclared"], "NOASSERTION");
        assert_eq!(package["licenseConcluded"], "NOASSERTION");
    }

    #[test]
    fn test_format_declared_license_parses_back() {
        let doc = document_with(vec![record(
            "test-a",
            &["Apache-2.0 OR GPL-2.0-or-later OR BSD-2-Clause OR (MPL-2.0 AND snprintf)"],
            InstallKind::Target,
        )]);
        let json = render(&doc);
        let declared = json["packages"][0]["licenseDeclared"].as_str().unwrap();

        let tree = LicenseParser::parse_expression(declared).unwrap();
        let children = match &tree {
            License::Any(children) => children,
            other => panic!("expected a disjunctive set, got {:?}", other),
        };
        assert_eq!(children.len(), 4);
        assert_eq!(
            children[3],
            License::All(vec![License::leaf("MPL-2.0"), License::leaf("snprintf")])
        );
    }

    #[test]
    fn test_format_missing_site_is_none() {
        let doc_record = record_at("test-a", &["MIT"], InstallKind::Target, None);
        let json = render(&document_with(vec![doc_record]));
        assert_eq!(json["packages"][0]["downloadLocation"], "NONE");
    }

    #[test]
    fn test_format_describes_every_package() {
        let doc = document_with(vec![
            record("a", &["MIT"], InstallKind::Target),
            record("b", &["MIT"], InstallKind::Host),
        ]);
        let json = render(&doc);

        let relationships = json["relationships"].as_array().unwrap();
        assert_eq!(relationships.len(), 2);
        assert_eq!(relationships[0]["relationshipType"], "DESCRIBES");
        assert_eq!(relationships[0]["spdxElementId"], "SPDXRef-DOCUMENT");
        assert_eq!(relationships[1]["relatedSpdxElement"], "SPDXRef-pkg-b");
    }
}
