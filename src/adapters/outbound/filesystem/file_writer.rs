use crate::ports::outbound::ReportWriter;
use crate::shared::error::SbomError;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// FileSystemWriter adapter for writing reports to files
///
/// This adapter implements the ReportWriter port. Writes are not atomic;
/// a failed write may leave a partial file behind.
pub struct FileSystemWriter;

impl FileSystemWriter {
    pub fn new() -> Self {
        Self
    }

    /// Rejects an existing output path that is a symbolic link
    fn validate_output_security(&self, path: &Path) -> Result<()> {
        if let Ok(metadata) = fs::symlink_metadata(path) {
            if metadata.is_symlink() {
                return Err(SbomError::EmitterWrite {
                    path: path.to_path_buf(),
                    details: "Security: Output path is a symbolic link. For security reasons, writing to symbolic links is not allowed.".to_string(),
                }
                .into());
            }
        }
        Ok(())
    }
}

impl Default for FileSystemWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportWriter for FileSystemWriter {
    fn prepare_directory(&self, directory: &Path) -> Result<()> {
        fs::create_dir_all(directory).map_err(|e| SbomError::OutputDirectoryUnavailable {
            path: directory.to_path_buf(),
            details: e.to_string(),
        })?;
        Ok(())
    }

    fn write_report(&self, path: &Path, content: &str) -> Result<()> {
        self.validate_output_security(path)?;

        fs::write(path, content).map_err(|e| SbomError::EmitterWrite {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;
        Ok(())
    }
}
