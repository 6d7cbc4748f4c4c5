use crate::sbom_generation::domain::BomDocument;
use std::path::PathBuf;

/// SbomResponse - Internal response DTO from the SBOM generation use case
#[derive(Debug, Clone)]
pub struct SbomResponse {
    /// The assembled document every report was rendered from
    pub document: BomDocument,
    /// Report files written, in emission order
    pub written_files: Vec<PathBuf>,
}

impl SbomResponse {
    pub fn new(document: BomDocument, written_files: Vec<PathBuf>) -> Self {
        Self {
            document,
            written_files,
        }
    }
}
