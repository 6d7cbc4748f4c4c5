use crate::ports::outbound::{AssetReader, HashManifestReader};
use crate::sbom_generation::domain::{HashAlgorithm, HashEntry, HashManifest};
use crate::sbom_generation::services::{DigestKind, Digester};
use crate::shared::error::VerifyError;
use std::path::{Path, PathBuf};

/// VerifyHashesUseCase - checks files against a package's hash manifest
///
/// For every file, each algorithm the manifest lists for it must produce
/// one of the digests listed for that algorithm.
///
/// # Type Parameters
/// * `R` - Reader for both the manifest and the files being checked
pub struct VerifyHashesUseCase<R> {
    reader: R,
}

impl<R> VerifyHashesUseCase<R>
where
    R: HashManifestReader + AssetReader,
{
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    /// Verifies `assets` against the manifest at `manifest_path`
    ///
    /// Assets are looked up in the manifest by file name. Verification
    /// stops at the first failure.
    pub fn verify(&self, manifest_path: &Path, assets: &[PathBuf]) -> Result<(), VerifyError> {
        let manifest = self.reader.read_hash_manifest(manifest_path)?;
        for asset in assets {
            self.verify_asset(&manifest, asset)?;
        }
        Ok(())
    }

    /// Verifies every asset the manifest lists, resolved inside `directory`
    pub fn verify_directory(&self, manifest_path: &Path, directory: &Path) -> Result<(), VerifyError> {
        let manifest = self.reader.read_hash_manifest(manifest_path)?;

        let mut assets: Vec<&str> = Vec::new();
        for entry in manifest.entries() {
            if !assets.contains(&entry.asset()) {
                assets.push(entry.asset());
            }
        }

        for asset in assets {
            self.verify_asset(&manifest, &directory.join(asset))?;
        }
        Ok(())
    }

    fn verify_asset(&self, manifest: &HashManifest, path: &Path) -> Result<(), VerifyError> {
        let asset = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        let entries: Vec<&HashEntry> = manifest.entries_for(&asset).collect();
        if entries.is_empty() {
            return Err(VerifyError::MissingEntry { asset });
        }

        let data = self
            .reader
            .read_asset(path)
            .map_err(|e| VerifyError::AssetUnreadable {
                path: path.to_path_buf(),
                details: e.to_string(),
            })?;

        let mut algorithms: Vec<&HashAlgorithm> = Vec::new();
        for entry in &entries {
            if !algorithms.contains(&entry.algorithm()) {
                algorithms.push(entry.algorithm());
            }
        }

        for algorithm in algorithms {
            let kind = DigestKind::resolve(algorithm.name(), algorithm.key_length())
                .ok_or_else(|| VerifyError::UnsupportedAlgorithm {
                    algorithm: algorithm.to_string(),
                    asset: asset.clone(),
                })?;

            let computed = Digester::compute(kind, &data);
            let accepted: Vec<&str> = entries
                .iter()
                .filter(|entry| entry.algorithm() == algorithm)
                .map(|entry| entry.digest())
                .collect();

            if !accepted.contains(&computed.as_str()) {
                return Err(VerifyError::Mismatch {
                    asset: asset.clone(),
                    algorithm: algorithm.to_string(),
                    expected: accepted.join(", "),
                    computed,
                });
            }
        }

        Ok(())
    }
}
