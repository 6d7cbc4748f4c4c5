use crate::shared::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// Maximum length for package names
const MAX_PACKAGE_NAME_LENGTH: usize = 255;

/// NewType wrapper for package name with validation
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PackageName(String);

impl PackageName {
    pub fn new(name: String) -> Result<Self> {
        if name.is_empty() {
            anyhow::bail!("Package name cannot be empty");
        }

        if name.len() > MAX_PACKAGE_NAME_LENGTH {
            anyhow::bail!(
                "Package name is too long ({} bytes). Maximum allowed: {} bytes",
                name.len(),
                MAX_PACKAGE_NAME_LENGTH
            );
        }

        // Names double as directory names in the build tree
        if !name
            .chars()
            .all(|c| c.is_alphanumeric() || c == '-' || c == '_' || c == '.' || c == '+')
        {
            anyhow::bail!(
                "Package name '{}' contains invalid characters. Only alphanumeric, hyphens, underscores, dots, and plus signs are allowed.",
                name
            );
        }

        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PackageName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Where a package's output is installed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InstallKind {
    #[default]
    Target,
    Host,
}

impl InstallKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            InstallKind::Target => "target",
            InstallKind::Host => "host",
        }
    }
}

impl fmt::Display for InstallKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a package's sources are acquired
///
/// Packages with [`VcsKind::None`] have no sources of their own and never
/// appear in a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VcsKind {
    Brz,
    Bzr,
    Cvs,
    Git,
    Hg,
    Local,
    None,
    Perforce,
    Rsync,
    Scp,
    Svn,
    #[default]
    Url,
}

impl VcsKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            VcsKind::Brz => "brz",
            VcsKind::Bzr => "bzr",
            VcsKind::Cvs => "cvs",
            VcsKind::Git => "git",
            VcsKind::Hg => "hg",
            VcsKind::Local => "local",
            VcsKind::None => "none",
            VcsKind::Perforce => "perforce",
            VcsKind::Rsync => "rsync",
            VcsKind::Scp => "scp",
            VcsKind::Svn => "svn",
            VcsKind::Url => "url",
        }
    }
}

impl fmt::Display for VcsKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A package handed over by the build once it has been processed
#[derive(Debug, Clone, PartialEq)]
pub struct BuiltPackage {
    name: PackageName,
    version: Option<String>,
    revision: Option<String>,
    site: Option<String>,
    install_kind: InstallKind,
    vcs_kind: VcsKind,
    licenses: Vec<String>,
    hash_file: Option<PathBuf>,
}

impl BuiltPackage {
    pub fn new(name: String) -> Result<Self> {
        Ok(Self {
            name: PackageName::new(name)?,
            version: None,
            revision: None,
            site: None,
            install_kind: InstallKind::default(),
            vcs_kind: VcsKind::default(),
            licenses: Vec::new(),
            hash_file: None,
        })
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn with_revision(mut self, revision: impl Into<String>) -> Self {
        self.revision = Some(revision.into());
        self
    }

    pub fn with_site(mut self, site: impl Into<String>) -> Self {
        self.site = Some(site.into());
        self
    }

    pub fn with_install_kind(mut self, install_kind: InstallKind) -> Self {
        self.install_kind = install_kind;
        self
    }

    pub fn with_vcs_kind(mut self, vcs_kind: VcsKind) -> Self {
        self.vcs_kind = vcs_kind;
        self
    }

    pub fn with_licenses<I, S>(mut self, licenses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.licenses = licenses.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_hash_file(mut self, hash_file: impl Into<PathBuf>) -> Self {
        self.hash_file = Some(hash_file.into());
        self
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    pub fn revision(&self) -> Option<&str> {
        self.revision.as_deref()
    }

    /// Version reported in a BOM: the version, else the revision, else empty
    pub fn reported_version(&self) -> &str {
        self.version()
            .filter(|v| !v.is_empty())
            .or_else(|| self.revision().filter(|r| !r.is_empty()))
            .unwrap_or("")
    }

    pub fn site(&self) -> Option<&str> {
        self.site.as_deref()
    }

    pub fn install_kind(&self) -> InstallKind {
        self.install_kind
    }

    pub fn vcs_kind(&self) -> VcsKind {
        self.vcs_kind
    }

    pub fn licenses(&self) -> &[String] {
        &self.licenses
    }

    pub fn hash_file(&self) -> Option<&Path> {
        self.hash_file.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_package_name_new_valid() {
        let name = PackageName::new("libfoo-1.x".to_string()).unwrap();
        assert_eq!(name.as_str(), "libfoo-1.x");
    }

    #[test]
    fn test_package_name_new_empty() {
        assert!(PackageName::new("".to_string()).is_err());
    }

    #[test]
    fn test_package_name_rejects_path_separators() {
        assert!(PackageName::new("../etc".to_string()).is_err());
        assert!(PackageName::new("a b".to_string()).is_err());
    }

    #[test]
    fn test_package_name_display() {
        let name = PackageName::new("gtk+".to_string()).unwrap();
        assert_eq!(format!("{}", name), "gtk+");
    }

    #[test]
    fn test_reported_version_prefers_version() {
        let pkg = BuiltPackage::new("a".to_string())
            .unwrap()
            .with_version("1.2")
            .with_revision("abc123");
        assert_eq!(pkg.reported_version(), "1.2");
    }

    #[test]
    fn test_reported_version_falls_back_to_revision() {
        let pkg = BuiltPackage::new("a".to_string())
            .unwrap()
            .with_revision("abc123");
        assert_eq!(pkg.reported_version(), "abc123");

        let empty_version = BuiltPackage::new("b".to_string())
            .unwrap()
            .with_version("")
            .with_revision("r1");
        assert_eq!(empty_version.reported_version(), "r1");
    }

    #[test]
    fn test_reported_version_empty_when_unset() {
        let pkg = BuiltPackage::new("a".to_string()).unwrap();
        assert_eq!(pkg.reported_version(), "");
    }

    #[test]
    fn test_defaults() {
        let pkg = BuiltPackage::new("a".to_string()).unwrap();
        assert_eq!(pkg.install_kind(), InstallKind::Target);
        assert_eq!(pkg.vcs_kind(), VcsKind::Url);
        assert!(pkg.licenses().is_empty());
        assert!(pkg.hash_file().is_none());
    }

    #[test]
    fn test_kind_serde_names() {
        let kind: VcsKind = serde_json::from_str("\"none\"").unwrap();
        assert_eq!(kind, VcsKind::None);
        let install: InstallKind = serde_json::from_str("\"host\"").unwrap();
        assert_eq!(install, InstallKind::Host);
        assert_eq!(VcsKind::Perforce.to_string(), "perforce");
    }
}
