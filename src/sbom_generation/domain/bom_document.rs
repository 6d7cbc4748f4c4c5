use super::hash_manifest::HashManifest;
use super::package::{InstallKind, VcsKind};
use super::sbom_metadata::SbomMetadata;

/// Document type tag written into every report
pub const DOCUMENT_TYPE: &str = "releng-tool-sbom";

/// Schema revision of the BOM document
pub const SCHEMA_VERSION: &str = "0";

/// A package as recorded in the BOM
#[derive(Debug, Clone, PartialEq)]
pub struct PackageRecord {
    name: String,
    version: String,
    site: Option<String>,
    install_kind: InstallKind,
    vcs_kind: VcsKind,
    licenses: Vec<String>,
    hashes: HashManifest,
    uid: String,
}

impl PackageRecord {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: String,
        version: String,
        site: Option<String>,
        install_kind: InstallKind,
        vcs_kind: VcsKind,
        licenses: Vec<String>,
        hashes: HashManifest,
        uid: String,
    ) -> Self {
        Self {
            name,
            version,
            site,
            install_kind,
            vcs_kind,
            licenses,
            hashes,
            uid,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.version
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

    /// Raw license strings, verbatim from the package definition
    pub fn licenses(&self) -> &[String] {
        &self.licenses
    }

    pub fn hashes(&self) -> &HashManifest {
        &self.hashes
    }

    pub fn uid(&self) -> &str {
        &self.uid
    }
}

/// Insertion-ordered mapping of package name to record
///
/// Iteration order is observable in every output format.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PackageBucket {
    records: Vec<PackageRecord>,
}

impl PackageBucket {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a record; a record with the same name is replaced in place
    pub fn insert(&mut self, record: PackageRecord) {
        match self.records.iter_mut().find(|r| r.name == record.name) {
            Some(existing) => *existing = record,
            None => self.records.push(record),
        }
    }

    pub fn get(&self, name: &str) -> Option<&PackageRecord> {
        self.records.iter().find(|r| r.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PackageRecord> {
        self.records.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|r| r.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<'a> IntoIterator for &'a PackageBucket {
    type Item = &'a PackageRecord;
    type IntoIter = std::slice::Iter<'a, PackageRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// The assembled build-of-materials
#[derive(Debug, Clone, PartialEq)]
pub struct BomDocument {
    metadata: SbomMetadata,
    packages: PackageBucket,
    host_packages: PackageBucket,
}

impl BomDocument {
    pub fn new(metadata: SbomMetadata, packages: PackageBucket, host_packages: PackageBucket) -> Self {
        Self {
            metadata,
            packages,
            host_packages,
        }
    }

    pub fn doc_type(&self) -> &'static str {
        DOCUMENT_TYPE
    }

    pub fn schema_version(&self) -> &'static str {
        SCHEMA_VERSION
    }

    pub fn metadata(&self) -> &SbomMetadata {
        &self.metadata
    }

    /// Target packages
    pub fn packages(&self) -> &PackageBucket {
        &self.packages
    }

    pub fn host_packages(&self) -> &PackageBucket {
        &self.host_packages
    }

    /// Every package, target bucket first
    pub fn all_packages(&self) -> impl Iterator<Item = &PackageRecord> {
        self.packages.iter().chain(self.host_packages.iter())
    }
}
