use crate::sbom_generation::domain::HashManifest;
use crate::shared::error::HashManifestError;
use std::path::Path;

/// HashManifestReader port for loading a package's hash manifest
///
/// Unlike the other ports this one reports a typed error, so callers can
/// tell an unreadable manifest from a malformed one.
pub trait HashManifestReader {
    /// Loads and parses the manifest at `path`
    ///
    /// # Errors
    /// * [`HashManifestError::Unreadable`] - the file cannot be read
    /// * [`HashManifestError::Malformed`] - a line violates the manifest format
    fn read_hash_manifest(&self, path: &Path) -> Result<HashManifest, HashManifestError>;
}
