use crate::ports::outbound::SbomFormatter;
use crate::sbom_generation::domain::{BomDocument, PackageBucket, PackageRecord};
use crate::shared::Result;
use std::fmt::Write;

/// Placeholder written for an empty field
const EMPTY_FIELD: &str = "-";

/// TextFormatter adapter for the plain-text report
///
/// This is the format emitted when no other format is selected.
pub struct TextFormatter;

impl TextFormatter {
    pub fn new() -> Self {
        Self
    }

    fn write_heading(out: &mut String, title: &str) {
        out.push_str(title);
        out.push('\n');
        out.push_str(&"-".repeat(title.len()));
        out.push_str("\n\n");
    }

    fn write_bucket(&self, out: &mut String, title: &str, bucket: &PackageBucket) -> Result<()> {
        Self::write_heading(out, title);
        if bucket.is_empty() {
            out.push_str("(none)\n\n");
            return Ok(());
        }

        for record in bucket {
            self.write_package(out, record)?;
        }
        Ok(())
    }

    fn write_package(&self, out: &mut String, record: &PackageRecord) -> Result<()> {
        let licenses = if record.licenses().is_empty() {
            EMPTY_FIELD.to_string()
        } else {
            record.licenses().join(", ")
        };

        writeln!(out, "{}", record.name())?;
        writeln!(out, "  version:      {}", or_empty(record.version()))?;
        writeln!(out, "  install type: {}", record.install_kind())?;
        writeln!(out, "  vcs type:     {}", record.vcs_kind())?;
        writeln!(out, "  site:         {}", or_empty(record.site().unwrap_or("")))?;
        writeln!(out, "  licenses:     {}", licenses)?;
        if record.hashes().is_empty() {
            writeln!(out, "  hashes:       {}", EMPTY_FIELD)?;
        } else {
            writeln!(out, "  hashes:")?;
            for entry in record.hashes().entries() {
                writeln!(
                    out,
                    "    {} {} {}",
                    entry.algorithm(),
                    entry.digest(),
                    entry.asset()
                )?;
            }
        }
        writeln!(out, "  uid:          {}", record.uid())?;
        out.push('\n');
        Ok(())
    }
}

fn or_empty(value: &str) -> &str {
    if value.is_empty() {
        EMPTY_FIELD
    } else {
        value
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl SbomFormatter for TextFormatter {
    fn format(&self, document: &BomDocument) -> Result<String> {
        let metadata = document.metadata();
        let mut out = String::new();

        out.push_str("releng-tool SBOM\n================\n\n");
        writeln!(out, "tool version:   {}", metadata.tool_version())?;
        writeln!(out, "report id:      {}", metadata.report_id())?;
        writeln!(out, "project id:     {}", metadata.project_id())?;
        writeln!(out, "schema version: {}", document.schema_version())?;
        writeln!(out, "generated:      {}", metadata.datetime())?;
        out.push('\n');

        self.write_bucket(&mut out, "Packages", document.packages())?;
        if !document.host_packages().is_empty() {
            self.write_bucket(&mut out, "Host packages", document.host_packages())?;
        }

        Ok(out)
    }
}
