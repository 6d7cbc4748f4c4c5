use crate::ports::outbound::SbomFormatter;
use crate::sbom_generation::domain::{BomDocument, PackageBucket, PackageRecord};
use crate::shared::markup::{escape, MarkupWriter};
use crate::shared::Result;

/// XmlFormatter adapter for the native XML report
///
/// Document identity is carried as attributes on the `<sbom>` root; the
/// `<host-packages>` element is left out when no host packages exist.
pub struct XmlFormatter;

impl XmlFormatter {
    pub fn new() -> Self {
        Self
    }

    fn write_bucket(&self, out: &mut MarkupWriter, element: &str, bucket: &PackageBucket) {
        out.line(1, &format!("<{}>", element));
        for record in bucket {
            self.write_package(out, record);
        }
        out.line(1, &format!("</{}>", element));
    }

    fn write_package(&self, out: &mut MarkupWriter, record: &PackageRecord) {
        out.line(2, &format!(r#"<package name="{}">"#, escape(record.name())));
        out.text_element(3, "version", record.version());
        if let Some(site) = record.site() {
            out.text_element(3, "site", site);
        }
        out.text_element(3, "install-type", record.install_kind().as_str());
        out.text_element(3, "vcs-type", record.vcs_kind().as_str());

        out.line(3, "<licenses>");
        for license in record.licenses() {
            out.text_element(4, "license", license);
        }
        out.line(3, "</licenses>");

        out.line(3, "<hashes>");
        for entry in record.hashes().entries() {
            out.line(
                4,
                &format!(
                    r#"<hash algorithm="{}" asset="{}">{}</hash>"#,
                    escape(&entry.algorithm().to_string()),
                    escape(entry.asset()),
                    escape(entry.digest())
                ),
            );
        }
        out.line(3, "</hashes>");

        out.text_element(3, "uid", record.uid());
        out.line(2, "</package>");
    }
}

impl Default for XmlFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl SbomFormatter for XmlFormatter {
    fn format(&self, document: &BomDocument) -> Result<String> {
        let metadata = document.metadata();
        let mut out = MarkupWriter::new();

        out.line(0, r#"<?xml version="1.0" encoding="utf-8"?>"#);
        out.line(
            0,
            &format!(
                r#"<sbom type="{}" report-id="{}" schema-version="{}" tool-version="{}" project-id="{}" datetime="{}">"#,
                escape(document.doc_type()),
                escape(metadata.report_id()),
                escape(document.schema_version()),
                escape(metadata.tool_version()),
                escape(metadata.project_id()),
                escape(metadata.datetime())
            ),
        );

        self.write_bucket(&mut out, "packages", document.packages());
        if !document.host_packages().is_empty() {
            self.write_bucket(&mut out, "host-packages", document.host_packages());
        }

        out.line(0, "</sbom>");
        Ok(out.finish())
    }
}
