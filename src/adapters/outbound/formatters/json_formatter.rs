use crate::ports::outbound::SbomFormatter;
use crate::sbom_generation::domain::{
    BomDocument, HashManifest, InstallKind, PackageBucket, VcsKind,
};
use crate::shared::Result;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

#[derive(Debug, Serialize)]
#[serde(rename_all = "kebab-case")]
struct Document<'a> {
    #[serde(rename = "type")]
    doc_type: &'a str,
    report_id: &'a str,
    schema_version: &'a str,
    tool_version: &'a str,
    project_id: &'a str,
    datetime: &'a str,
    packages: Packages<'a>,
    #[serde(skip_serializing_if = "Packages::is_empty")]
    host_packages: Packages<'a>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "kebab-case")]
struct Package<'a> {
    version: &'a str,
    site: Option<&'a str>,
    install_type: InstallKind,
    vcs_type: VcsKind,
    licenses: &'a [String],
    hashes: &'a HashManifest,
    uid: &'a str,
}

/// A bucket serialized as a JSON object keyed by package name, in
/// insertion order
#[derive(Debug)]
struct Packages<'a>(&'a PackageBucket);

impl Packages<'_> {
    fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for Packages<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for record in self.0 {
            map.serialize_entry(
                record.name(),
                &Package {
                    version: record.version(),
                    site: record.site(),
                    install_type: record.install_kind(),
                    vcs_type: record.vcs_kind(),
                    licenses: record.licenses(),
                    hashes: record.hashes(),
                    uid: record.uid(),
                },
            )?;
        }
        map.end()
    }
}

/// JsonFormatter adapter for the native JSON report
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl SbomFormatter for JsonFormatter {
    fn format(&self, document: &BomDocument) -> Result<String> {
        let metadata = document.metadata();
        let json_document = Document {
            doc_type: document.doc_type(),
            report_id: metadata.report_id(),
            schema_version: document.schema_version(),
            tool_version: metadata.tool_version(),
            project_id: metadata.project_id(),
            datetime: metadata.datetime(),
            packages: Packages(document.packages()),
            host_packages: Packages(document.host_packages()),
        };

        serde_json::to_string_pretty(&json_document).map_err(Into::into)
    }
}
