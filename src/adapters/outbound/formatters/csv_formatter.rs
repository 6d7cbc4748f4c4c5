use crate::ports::outbound::SbomFormatter;
use crate::sbom_generation::domain::{BomDocument, PackageRecord};
use crate::shared::Result;

const HEADER: [&str; 7] = [
    "name",
    "version",
    "install-type",
    "vcs-type",
    "site",
    "licenses",
    "uid",
];

/// Separator between licenses in the `licenses` column
const LICENSE_SEPARATOR: &str = "; ";

/// Record terminator per RFC 4180
const LINE_END: &str = "\r\n";

/// CsvFormatter adapter for the CSV report
///
/// One row per package, target packages first.
pub struct CsvFormatter;

impl CsvFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Quotes a field when it holds a separator, quote or line break
    fn escape_field(field: &str) -> String {
        if field.contains([',', '"', '\r', '\n']) {
            format!("\"{}\"", field.replace('"', "\"\""))
        } else {
            field.to_string()
        }
    }

    fn write_row<'a>(out: &mut String, fields: impl IntoIterator<Item = &'a str>) {
        let row: Vec<String> = fields.into_iter().map(Self::escape_field).collect();
        out.push_str(&row.join(","));
        out.push_str(LINE_END);
    }

    fn write_record(out: &mut String, record: &PackageRecord) {
        let licenses = record.licenses().join(LICENSE_SEPARATOR);
        Self::write_row(
            out,
            [
                record.name(),
                record.version(),
                record.install_kind().as_str(),
                record.vcs_kind().as_str(),
                record.site().unwrap_or(""),
                licenses.as_str(),
                record.uid(),
            ],
        );
    }
}

impl Default for CsvFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl SbomFormatter for CsvFormatter {
    fn format(&self, document: &BomDocument) -> Result<String> {
        let mut out = String::new();
        Self::write_row(&mut out, HEADER);
        for record in document.all_packages() {
            Self::write_record(&mut out, record);
        }
        Ok(out)
    }
}
