use sha1::Sha1;
use sha2::{Digest, Sha224, Sha256, Sha384, Sha512};
use sha3::digest::{ExtendableOutput, Update};
use sha3::{Shake128, Shake256};

/// Largest extendable output computed, in bytes
pub const MAX_XOF_LENGTH: u64 = 64 * 1024;

/// Hash algorithms that can be computed locally
///
/// The SHAKE variants carry their output length in bytes, taken from the
/// manifest's `name:N` key length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DigestKind {
    Sha1,
    Sha224,
    Sha256,
    Sha384,
    Sha512,
    Shake128 { length: usize },
    Shake256 { length: usize },
}

impl DigestKind {
    /// Resolves a manifest algorithm (case-insensitive name)
    ///
    /// Fixed-length algorithms take no key length; the SHAKE family needs
    /// one no larger than [`MAX_XOF_LENGTH`].
    pub fn resolve(name: &str, key_length: Option<u64>) -> Option<Self> {
        match (name.to_ascii_lowercase().as_str(), key_length) {
            ("sha1", None) => Some(DigestKind::Sha1),
            ("sha224", None) => Some(DigestKind::Sha224),
            ("sha256", None) => Some(DigestKind::Sha256),
            ("sha384", None) => Some(DigestKind::Sha384),
            ("sha512", None) => Some(DigestKind::Sha512),
            ("shake128", Some(length)) => {
                xof_length(length).map(|length| DigestKind::Shake128 { length })
            }
            ("shake256", Some(length)) => {
                xof_length(length).map(|length| DigestKind::Shake256 { length })
            }
            _ => None,
        }
    }
}

fn xof_length(length: u64) -> Option<usize> {
    if length > MAX_XOF_LENGTH {
        return None;
    }
    usize::try_from(length).ok()
}

/// Digester service computing lowercase hex digests
pub struct Digester;

impl Digester {
    pub fn compute(kind: DigestKind, data: &[u8]) -> String {
        match kind {
            DigestKind::Sha1 => hex::encode(Sha1::digest(data)),
            DigestKind::Sha224 => hex::encode(Sha224::digest(data)),
            DigestKind::Sha256 => hex::encode(Sha256::digest(data)),
            DigestKind::Sha384 => hex::encode(Sha384::digest(data)),
            DigestKind::Sha512 => hex::encode(Sha512::digest(data)),
            DigestKind::Shake128 { length } => {
                Self::extendable(Shake128::default(), data, length)
            }
            DigestKind::Shake256 { length } => {
                Self::extendable(Shake256::default(), data, length)
            }
        }
    }

    fn extendable<H>(mut hasher: H, data: &[u8], length: usize) -> String
    where
        H: Update + ExtendableOutput,
    {
        Update::update(&mut hasher, data);
        let mut output = vec![0u8; length];
        hasher.finalize_xof_into(&mut output);
        hex::encode(output)
    }
}
