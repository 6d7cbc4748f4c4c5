//! Fixtures shared by the formatter tests

use crate::sbom_generation::domain::{
    BomDocument, HashAlgorithm, HashEntry, HashManifest, InstallKind, PackageBucket,
    PackageRecord, SbomMetadata, VcsKind,
};
use crate::sbom_generation::services::SbomGenerator;

/// A record with version `1.0`, a site and one sha256 hash
pub fn record(name: &str, licenses: &[&str], install_kind: InstallKind) -> PackageRecord {
    let site = format!("https://example.com/{}.tgz", name);
    record_at(name, licenses, install_kind, Some(&site))
}

pub fn record_at(
    name: &str,
    licenses: &[&str],
    install_kind: InstallKind,
    site: Option<&str>,
) -> PackageRecord {
    let hashes = HashManifest::new(vec![HashEntry::new(
        HashAlgorithm::new("sha256", None),
        "0123abcd",
        format!("{}.tgz", name),
    )]);

    PackageRecord::new(
        name.to_string(),
        "1.0".to_string(),
        site.map(str::to_string),
        install_kind,
        VcsKind::Url,
        licenses.iter().map(|l| l.to_string()).collect(),
        hashes,
        SbomGenerator::package_uid(name),
    )
}

/// Buckets the records by install kind behind fixed metadata
pub fn document_with(records: Vec<PackageRecord>) -> BomDocument {
    let mut packages = PackageBucket::new();
    let mut host_packages = PackageBucket::new();
    for record in records {
        match record.install_kind() {
            InstallKind::Target => packages.insert(record),
            InstallKind::Host => host_packages.insert(record),
        }
    }

    let names: Vec<String> = packages
        .names()
        .chain(host_packages.names())
        .map(str::to_string)
        .collect();
    let metadata = SbomMetadata::new(
        "9b2f1c7e-3d4a-4b8e-a1f0-5c6d7e8f9a0b".to_string(),
        "1.0.0".to_string(),
        SbomGenerator::project_id(names.iter().map(String::as_str)),
        "2024-05-06T07:08:09Z".to_string(),
    );

    BomDocument::new(metadata, packages, host_packages)
}
