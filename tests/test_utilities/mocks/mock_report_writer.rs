use releng_sbom::prelude::*;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Mock ReportWriter that keeps written reports in memory
#[derive(Default, Clone)]
pub struct MockReportWriter {
    pub reports: Arc<Mutex<Vec<(PathBuf, String)>>>,
    /// File name whose write fails
    pub fail_on: Option<String>,
}

#[allow(dead_code)]
impl MockReportWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_on(file_name: &str) -> Self {
        Self {
            fail_on: Some(file_name.to_string()),
            ..Self::default()
        }
    }

    pub fn file_names(&self) -> Vec<String> {
        self.reports
            .lock()
            .unwrap()
            .iter()
            .filter_map(|(path, _)| path.file_name())
            .map(|name| name.to_string_lossy().into_owned())
            .collect()
    }

    pub fn content_of(&self, file_name: &str) -> Option<String> {
        self.reports
            .lock()
            .unwrap()
            .iter()
            .find(|(path, _)| path.ends_with(file_name))
            .map(|(_, content)| content.clone())
    }
}

impl ReportWriter for MockReportWriter {
    fn prepare_directory(&self, _directory: &Path) -> Result<()> {
        Ok(())
    }

    fn write_report(&self, path: &Path, content: &str) -> Result<()> {
        if let Some(fail_on) = &self.fail_on {
            if path.ends_with(fail_on) {
                anyhow::bail!("Mock write failure: disk full");
            }
        }
        self.reports
            .lock()
            .unwrap()
            .push((path.to_path_buf(), content.to_string()));
        Ok(())
    }
}
