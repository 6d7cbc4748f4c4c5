use crate::sbom_generation::domain::{HashAlgorithm, HashEntry, HashManifest};
use crate::shared::error::HashFormatError;

/// HashManifestParser service for the line-oriented hash file format
///
/// Each data line reads `<algorithm>[:<keylen>] <hex-digest> <asset>`.
/// A whitespace-delimited token starting with `#` begins a comment that
/// runs to the end of the line.
pub struct HashManifestParser;

impl HashManifestParser {
    pub fn parse(content: &str) -> Result<HashManifest, HashFormatError> {
        let mut entries = Vec::new();

        let data_lines = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(Self::strip_comment)
            .filter(|parts| !parts.is_empty());

        for (idx, parts) in data_lines.enumerate() {
            let entry = idx + 1;

            if parts.len() > 3 {
                return Err(HashFormatError::TooManyValues { entry });
            }

            let (algorithm, digest, asset) = match parts.as_slice() {
                [algorithm, digest, asset] => (*algorithm, *digest, *asset),
                _ => return Err(HashFormatError::TooFewValues { entry }),
            };

            let algorithm = Self::parse_algorithm(algorithm, entry)?;
            entries.push(HashEntry::new(algorithm, digest, asset));
        }

        Ok(HashManifest::new(entries))
    }

    /// Tokenizes a line, dropping everything from the first `#` token on
    fn strip_comment(line: &str) -> Vec<&str> {
        line.split_whitespace()
            .take_while(|token| !token.starts_with('#'))
            .collect()
    }

    fn parse_algorithm(field: &str, entry: usize) -> Result<HashAlgorithm, HashFormatError> {
        let Some((name, key_length)) = field.split_once(':') else {
            return Ok(HashAlgorithm::new(field, None));
        };

        if key_length.is_empty() {
            return Ok(HashAlgorithm::new(name, None));
        }

        match key_length.parse::<u64>() {
            Ok(length) if length >= 1 => Ok(HashAlgorithm::new(name, Some(length))),
            _ => Err(HashFormatError::InvalidKeyLength {
                entry,
                value: key_length.to_string(),
            }),
        }
    }
}
