use crate::ports::outbound::SbomFormatter;
use crate::sbom_generation::domain::{BomDocument, PackageBucket, PackageRecord};
use crate::shared::markup::{escape, MarkupWriter};
use crate::shared::Result;

const TABLE_COLUMNS: [&str; 8] = [
    "Name",
    "Version",
    "Install type",
    "VCS type",
    "Site",
    "Licenses",
    "Hashes",
    "UID",
];

const STYLE: &str = "body{font-family:sans-serif}table{border-collapse:collapse}th,td{border:1px solid #ccc;padding:4px 8px;text-align:left;vertical-align:top}";

/// HtmlFormatter adapter for a standalone HTML report
///
/// Each package bucket is rendered as its own table.
pub struct HtmlFormatter;

impl HtmlFormatter {
    pub fn new() -> Self {
        Self
    }

    fn write_table(&self, out: &mut MarkupWriter, title: &str, bucket: &PackageBucket) {
        out.text_element(2, "h2", title);
        out.line(2, "<table>");
        out.line(3, "<tr>");
        for column in TABLE_COLUMNS {
            out.text_element(4, "th", column);
        }
        out.line(3, "</tr>");
        for record in bucket {
            self.write_row(out, record);
        }
        out.line(2, "</table>");
    }

    fn write_row(&self, out: &mut MarkupWriter, record: &PackageRecord) {
        out.line(3, "<tr>");
        out.text_element(4, "td", record.name());
        out.text_element(4, "td", record.version());
        out.text_element(4, "td", record.install_kind().as_str());
        out.text_element(4, "td", record.vcs_kind().as_str());
        match record.site() {
            Some(site) if !site.is_empty() => {
                let site = escape(site);
                out.line(4, &format!(r#"<td><a href="{0}">{0}</a></td>"#, site));
            }
            _ => out.line(4, "<td></td>"),
        }
        out.line(4, &format!("<td>{}</td>", Self::join_lines(record.licenses())));

        let hashes: Vec<String> = record
            .hashes()
            .entries()
            .iter()
            .map(|entry| format!("{} {} {}", entry.algorithm(), entry.digest(), entry.asset()))
            .collect();
        out.line(4, &format!("<td><code>{}</code></td>", Self::join_lines(&hashes)));

        out.text_element(4, "td", record.uid());
        out.line(3, "</tr>");
    }

    /// Escapes each value and separates them with line breaks
    fn join_lines(values: &[String]) -> String {
        values
            .iter()
            .map(|value| escape(value))
            .collect::<Vec<_>>()
            .join("<br/>")
    }
}

impl Default for HtmlFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl SbomFormatter for HtmlFormatter {
    fn format(&self, document: &BomDocument) -> Result<String> {
        let metadata = document.metadata();
        let mut out = MarkupWriter::new();

        out.line(0, "<!DOCTYPE html>");
        out.line(0, r#"<html lang="en">"#);
        out.line(1, "<head>");
        out.line(2, r#"<meta charset="utf-8">"#);
        out.text_element(2, "title", &format!("SBOM {}", metadata.project_id()));
        out.line(2, &format!("<style>{}</style>", STYLE));
        out.line(1, "</head>");
        out.line(1, "<body>");
        out.text_element(2, "h1", "releng-tool SBOM");
        out.line(2, "<dl>");
        for (term, value) in [
            ("Tool version", metadata.tool_version()),
            ("Report ID", metadata.report_id()),
            ("Project ID", metadata.project_id()),
            ("Schema version", document.schema_version()),
            ("Generated", metadata.datetime()),
        ] {
            out.text_element(3, "dt", term);
            out.text_element(3, "dd", value);
        }
        out.line(2, "</dl>");

        self.write_table(&mut out, "Packages", document.packages());
        if !document.host_packages().is_empty() {
            self.write_table(&mut out, "Host packages", document.host_packages());
        }

        out.line(1, "</body>");
        out.line(0, "</html>");
        Ok(out.finish())
    }
}
