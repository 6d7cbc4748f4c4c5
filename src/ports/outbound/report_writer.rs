use crate::shared::Result;
use std::path::Path;

/// ReportWriter port for persisting rendered reports
///
/// This port abstracts the output destination where each emitter's
/// content ends up.
pub trait ReportWriter {
    /// Makes sure `directory` exists and can receive reports
    ///
    /// # Errors
    /// Returns an error if the directory cannot be created
    fn prepare_directory(&self, directory: &Path) -> Result<()>;

    /// Writes one report file, replacing any previous content
    ///
    /// # Errors
    /// Returns an error if:
    /// - Writing to the output destination fails
    /// - File permissions prevent writing
    /// - Disk space is insufficient
    fn write_report(&self, path: &Path, content: &str) -> Result<()>;
}
