use super::output_format::FormatSelection;
use crate::sbom_generation::domain::BuiltPackage;
use std::path::PathBuf;

/// SbomRequest - Internal request DTO for the SBOM generation use case
#[derive(Debug, Clone)]
pub struct SbomRequest {
    /// Packages processed by the build, in visit order
    pub packages: Vec<BuiltPackage>,
    /// Directory that receives the report files
    pub output_dir: PathBuf,
    /// Formats to emit
    pub formats: FormatSelection,
}

impl SbomRequest {
    pub fn new(packages: Vec<BuiltPackage>, output_dir: PathBuf, formats: FormatSelection) -> Self {
        Self {
            packages,
            output_dir,
            formats,
        }
    }
}
