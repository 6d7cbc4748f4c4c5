use super::spdx::{self, DeclaredLicense};
use crate::ports::outbound::SbomFormatter;
use crate::sbom_generation::domain::{BomDocument, LeafParts, License, PackageRecord};
use crate::shared::markup::{escape, MarkupWriter};
use crate::shared::Result;

const RDF_NS: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
const SPDX_NS: &str = "http://spdx.org/rdf/terms#";
const RDFS_NS: &str = "http://www.w3.org/2000/01/rdf-schema#";

const LICENSES_BASE: &str = "http://spdx.org/licenses/";

const TERM_NOASSERTION: &str = "http://spdx.org/rdf/terms#noassertion";
const TERM_NONE: &str = "http://spdx.org/rdf/terms#none";
const TERM_DESCRIBES: &str = "http://spdx.org/rdf/terms#relationshipType_describes";

/// SpdxRdfFormatter adapter for generating SPDX 2.3 RDF/XML
///
/// License expressions are written as nested license-set resources rather
/// than as a single expression string.
pub struct SpdxRdfFormatter;

impl SpdxRdfFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SpdxRdfFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl SbomFormatter for SpdxRdfFormatter {
    fn format(&self, document: &BomDocument) -> Result<String> {
        let metadata = document.metadata();
        let base = spdx::document_namespace(metadata);
        let mut out = MarkupWriter::new();

        out.line(0, r#"<?xml version="1.0" encoding="utf-8"?>"#);
        out.line(
            0,
            &format!(
                r#"<rdf:RDF xmlns:rdf="{}" xmlns:spdx="{}" xmlns:rdfs="{}">"#,
                RDF_NS, SPDX_NS, RDFS_NS
            ),
        );
        out.line(
            1,
            &format!(
                r#"<spdx:SpdxDocument rdf:about="{}#{}">"#,
                escape(&base),
                spdx::DOCUMENT_ID
            ),
        );
        out.text_element(2, "spdx:specVersion", spdx::SPDX_VERSION);
        out.resource(
            2,
            "spdx:dataLicense",
            &format!("{}{}", LICENSES_BASE, spdx::DATA_LICENSE),
        );
        out.text_element(2, "spdx:name", metadata.project_id());

        out.line(2, "<spdx:creationInfo>");
        out.line(3, "<spdx:CreationInfo>");
        out.text_element(4, "spdx:created", metadata.datetime());
        out.text_element(4, "spdx:creator", &spdx::creator(metadata));
        out.text_element(4, "spdx:licenseListVersion", spdx::LICENSE_LIST_VERSION);
        out.line(3, "</spdx:CreationInfo>");
        out.line(2, "</spdx:creationInfo>");

        for record in document.all_packages() {
            out.line(2, "<spdx:relationship>");
            out.line(3, "<spdx:Relationship>");
            out.resource(4, "spdx:relationshipType", TERM_DESCRIBES);
            out.line(4, "<spdx:relatedSpdxElement>");
            self.write_package(&mut out, 5, &base, record);
            out.line(4, "</spdx:relatedSpdxElement>");
            out.line(3, "</spdx:Relationship>");
            out.line(2, "</spdx:relationship>");
        }

        out.line(1, "</spdx:SpdxDocument>");
        out.line(0, "</rdf:RDF>");

        Ok(out.finish())
    }
}

impl SpdxRdfFormatter {
    fn write_package(&self, out: &mut MarkupWriter, depth: usize, base: &str, record: &PackageRecord) {
        out.line(
            depth,
            &format!(
                r#"<spdx:Package rdf:about="{}#{}">"#,
                escape(base),
                spdx::package_id(record.name())
            ),
        );

        let inner = depth + 1;
        out.text_element(inner, "spdx:specVersion", spdx::SPDX_VERSION);
        out.text_element(inner, "spdx:name", record.name());
        out.text_element(inner, "spdx:versionInfo", record.version());
        match record.site().filter(|site| !site.is_empty()) {
            Some(site) => out.text_element(inner, "spdx:downloadLocation", site),
            None => out.resource(inner, "spdx:downloadLocation", TERM_NONE),
        }
        out.text_element(inner, "spdx:filesAnalyzed", "false");

        match DeclaredLicense::of(record) {
            DeclaredLicense::Expression(tree) => {
                self.write_license_property(out, inner, "spdx:licenseDeclared", &tree);
                out.resource(inner, "spdx:licenseConcluded", TERM_NOASSERTION);
            }
            DeclaredLicense::NoAssertion => {
                out.resource(inner, "spdx:licenseDeclared", TERM_NOASSERTION);
                out.resource(inner, "spdx:licenseConcluded", TERM_NOASSERTION);
            }
            DeclaredLicense::None => {
                out.resource(inner, "spdx:licenseDeclared", TERM_NONE);
                out.resource(inner, "spdx:licenseConcluded", TERM_NONE);
            }
        }

        out.line(depth, "</spdx:Package>");
    }

    /// Writes `<property>` holding the license; plain identifiers become
    /// an `rdf:resource` attribute on the property itself
    fn write_license_property(
        &self,
        out: &mut MarkupWriter,
        depth: usize,
        property: &str,
        license: &License,
    ) {
        match license {
            License::Leaf(text) => {
                let parts = LeafParts::split(text);
                if parts.exception.is_none() && !parts.or_later {
                    out.resource(depth, property, &license_uri(parts.id));
                } else {
                    out.line(depth, &format!("<{}>", property));
                    self.write_leaf(out, depth + 1, parts);
                    out.line(depth, &format!("</{}>", property));
                }
            }
            License::All(children) | License::Any(children) => {
                let element = if matches!(license, License::All(_)) {
                    "spdx:ConjunctiveLicenseSet"
                } else {
                    "spdx:DisjunctiveLicenseSet"
                };

                out.line(depth, &format!("<{}>", property));
                out.line(depth + 1, &format!("<{}>", element));
                for child in children {
                    self.write_license_property(out, depth + 2, "spdx:member", child);
                }
                out.line(depth + 1, &format!("</{}>", element));
                out.line(depth, &format!("</{}>", property));
            }
        }
    }

    /// Writes the operator node for an or-later and/or exception leaf
    fn write_leaf(&self, out: &mut MarkupWriter, depth: usize, parts: LeafParts<'_>) {
        match parts.exception {
            Some(exception) => {
                out.line(depth, "<spdx:WithExceptionOperator>");
                if parts.or_later {
                    out.line(depth + 1, "<spdx:member>");
                    self.write_or_later(out, depth + 2, parts.id);
                    out.line(depth + 1, "</spdx:member>");
                } else {
                    out.resource(depth + 1, "spdx:member", &license_uri(parts.id));
                }
                out.resource(
                    depth + 1,
                    "spdx:licenseException",
                    &format!("{}{}.html", LICENSES_BASE, exception),
                );
                out.line(depth, "</spdx:WithExceptionOperator>");
            }
            None => self.write_or_later(out, depth, parts.id),
        }
    }

    fn write_or_later(&self, out: &mut MarkupWriter, depth: usize, id: &str) {
        out.line(depth, "<spdx:OrLaterOperator>");
        out.resource(depth + 1, "spdx:member", &license_uri(id));
        out.line(depth, "</spdx:OrLaterOperator>");
    }
}

fn license_uri(id: &str) -> String {
    format!("{}{}", LICENSES_BASE, id)
}
