/// SbomMetadata value object representing per-report identity information
#[derive(Debug, Clone, PartialEq)]
pub struct SbomMetadata {
    report_id: String,
    tool_version: String,
    project_id: String,
    datetime: String,
}

impl SbomMetadata {
    pub fn new(report_id: String, tool_version: String, project_id: String, datetime: String) -> Self {
        Self {
            report_id,
            tool_version,
            project_id,
            datetime,
        }
    }

    /// RFC 4122 v4 UUID unique to one generate invocation
    pub fn report_id(&self) -> &str {
        &self.report_id
    }

    pub fn tool_version(&self) -> &str {
        &self.tool_version
    }

    /// Stable token derived from the ordered package names
    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    /// UTC timestamp, `YYYY-MM-DDTHH:MM:SSZ`
    pub fn datetime(&self) -> &str {
        &self.datetime
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sbom_metadata_new() {
        let metadata = SbomMetadata::new(
            "6f1c9a52-3c1e-4a55-9a53-0d5e6c7b8a91".to_string(),
            "1.0.0".to_string(),
            "releng-tool-0123abcd".to_string(),
            "2024-01-01T00:00:00Z".to_string(),
        );

        assert_eq!(metadata.report_id(), "6f1c9a52-3c1e-4a55-9a53-0d5e6c7b8a91");
        assert_eq!(metadata.tool_version(), "1.0.0");
        assert_eq!(metadata.project_id(), "releng-tool-0123abcd");
        assert_eq!(metadata.datetime(), "2024-01-01T00:00:00Z");
    }
}
