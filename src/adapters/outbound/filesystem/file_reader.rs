use crate::ports::outbound::{AssetReader, HashManifestReader, PackageInventoryReader};
use crate::sbom_generation::domain::{BuiltPackage, HashManifest, InstallKind, VcsKind};
use crate::sbom_generation::services::HashManifestParser;
use crate::shared::error::{HashManifestError, SbomError};
use crate::shared::Result;
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::Path;

/// Maximum file size for security (100 MB)
const MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct InventoryFile {
    #[serde(default, rename = "package")]
    packages: Vec<InventoryEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
struct InventoryEntry {
    name: String,
    version: Option<String>,
    revision: Option<String>,
    site: Option<String>,
    #[serde(default)]
    install_type: InstallKind,
    #[serde(default)]
    vcs_type: VcsKind,
    license: Option<LicenseField>,
    hash_file: Option<String>,
}

/// `license = "MIT"` or `license = ["MIT", "Zlib"]`
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum LicenseField {
    One(String),
    Many(Vec<String>),
}

impl LicenseField {
    fn into_vec(self) -> Vec<String> {
        match self {
            LicenseField::One(license) => vec![license],
            LicenseField::Many(licenses) => licenses,
        }
    }
}

/// FileSystemReader adapter for reading files from the file system
///
/// This adapter implements the PackageInventoryReader, HashManifestReader
/// and AssetReader ports.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystemReader {
    /// Safely read a file with security checks:
    /// - Reject symbolic links
    /// - Check file size limits
    /// - Validate file is a regular file
    fn safe_read_file(&self, path: &Path, file_type: &str) -> Result<String> {
        // Get file metadata without following symlinks
        let metadata = fs::symlink_metadata(path)
            .map_err(|e| anyhow::anyhow!("Failed to read {} metadata: {}", file_type, e))?;

        if metadata.is_symlink() {
            anyhow::bail!(
                "Security: {} is a symbolic link. For security reasons, symbolic links are not allowed.",
                path.display()
            );
        }

        if !metadata.is_file() {
            anyhow::bail!("{} is not a regular file", path.display());
        }

        let file_size = metadata.len();
        if file_size > MAX_FILE_SIZE {
            anyhow::bail!(
                "Security: {} is too large ({} bytes). Maximum allowed size is {} bytes.",
                path.display(),
                file_size,
                MAX_FILE_SIZE
            );
        }

        fs::read_to_string(path).map_err(|e| anyhow::anyhow!("Failed to read {}: {}", file_type, e))
    }

    fn build_package(entry: InventoryEntry, base_dir: &Path) -> Result<BuiltPackage> {
        let mut package = BuiltPackage::new(entry.name)?
            .with_install_kind(entry.install_type)
            .with_vcs_kind(entry.vcs_type)
            .with_licenses(entry.license.map(LicenseField::into_vec).unwrap_or_default());

        if let Some(version) = entry.version {
            package = package.with_version(version);
        }
        if let Some(revision) = entry.revision {
            package = package.with_revision(revision);
        }
        if let Some(site) = entry.site {
            package = package.with_site(site);
        }
        if let Some(hash_file) = entry.hash_file {
            // Relative hash files live next to the inventory
            package = package.with_hash_file(base_dir.join(hash_file));
        }

        Ok(package)
    }
}

impl PackageInventoryReader for FileSystemReader {
    fn read_inventory(&self, path: &Path) -> Result<Vec<BuiltPackage>> {
        if !path.exists() {
            return Err(SbomError::InventoryNotFound {
                path: path.to_path_buf(),
                suggestion: "Please specify the package inventory with the --inventory option, \
                             or set `inventory` in the configuration file."
                    .to_string(),
            }
            .into());
        }

        let content = self
            .safe_read_file(path, "package inventory")
            .map_err(|e| SbomError::FileReadError {
                path: path.to_path_buf(),
                details: e.to_string(),
            })?;

        let inventory: InventoryFile =
            toml::from_str(&content).map_err(|e| SbomError::InventoryParseError {
                path: path.to_path_buf(),
                details: e.to_string(),
            })?;

        let base_dir = path.parent().unwrap_or_else(|| Path::new(""));
        inventory
            .packages
            .into_iter()
            .map(|entry| {
                Self::build_package(entry, base_dir).map_err(|e| {
                    anyhow::Error::from(SbomError::InventoryParseError {
                        path: path.to_path_buf(),
                        details: e.to_string(),
                    })
                })
            })
            .collect()
    }
}

impl HashManifestReader for FileSystemReader {
    fn read_hash_manifest(&self, path: &Path) -> std::result::Result<HashManifest, HashManifestError> {
        let content = fs::read_to_string(path).map_err(|e| HashManifestError::Unreadable {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;

        HashManifestParser::parse(&content).map_err(|source| HashManifestError::Malformed {
            path: path.to_path_buf(),
            source,
        })
    }
}

impl AssetReader for FileSystemReader {
    fn read_asset(&self, path: &Path) -> io::Result<Vec<u8>> {
        fs::read(path)
    }
}
