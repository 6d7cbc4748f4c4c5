use serde::Serialize;
use std::fmt;

/// HashEntry value object: one `<algorithm>[:<keylen>] <digest> <asset>` line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HashEntry {
    algorithm: HashAlgorithm,
    digest: String,
    asset: String,
}

impl HashEntry {
    /// Creates an entry; the digest is normalized to lowercase
    pub fn new(algorithm: HashAlgorithm, digest: &str, asset: impl Into<String>) -> Self {
        Self {
            algorithm,
            digest: digest.to_ascii_lowercase(),
            asset: asset.into(),
        }
    }

    pub fn algorithm(&self) -> &HashAlgorithm {
        &self.algorithm
    }

    pub fn digest(&self) -> &str {
        &self.digest
    }

    pub fn asset(&self) -> &str {
        &self.asset
    }
}

/// Hash algorithm name with an optional key length
///
/// Extendable-output hash families take a key length, written `name:N`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HashAlgorithm {
    name: String,
    key_length: Option<u64>,
}

impl HashAlgorithm {
    pub fn new(name: impl Into<String>, key_length: Option<u64>) -> Self {
        Self {
            name: name.into(),
            key_length,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn key_length(&self) -> Option<u64> {
        self.key_length
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.key_length {
            Some(length) => write!(f, "{}:{}", self.name, length),
            None => f.write_str(&self.name),
        }
    }
}

impl Serialize for HashAlgorithm {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Ordered collection of hash entries
///
/// Several entries may share an `(algorithm, asset)` pair; each one is an
/// alternative accepted digest.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct HashManifest {
    entries: Vec<HashEntry>,
}

impl HashManifest {
    pub fn new(entries: Vec<HashEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[HashEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Entries listed for the given asset, in manifest order
    pub fn entries_for<'a>(&'a self, asset: &'a str) -> impl Iterator<Item = &'a HashEntry> + 'a {
        self.entries.iter().filter(move |entry| entry.asset == asset)
    }
}
