use releng_sbom::prelude::*;
use releng_sbom::shared::error::HashManifestError;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Mock HashManifestReader serving manifest text from memory
///
/// Paths without registered content read as unreadable files.
#[derive(Default)]
pub struct MockHashManifestReader {
    pub manifests: HashMap<PathBuf, String>,
}

#[allow(dead_code)]
impl MockHashManifestReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_manifest(mut self, path: &str, content: &str) -> Self {
        self.manifests
            .insert(PathBuf::from(path), content.to_string());
        self
    }
}

impl HashManifestReader for MockHashManifestReader {
    fn read_hash_manifest(
        &self,
        path: &Path,
    ) -> std::result::Result<HashManifest, HashManifestError> {
        let content = self
            .manifests
            .get(path)
            .ok_or_else(|| HashManifestError::Unreadable {
                path: path.to_path_buf(),
                details: "Mock manifest not found".to_string(),
            })?;

        HashManifestParser::parse(content).map_err(|source| HashManifestError::Malformed {
            path: path.to_path_buf(),
            source,
        })
    }
}
