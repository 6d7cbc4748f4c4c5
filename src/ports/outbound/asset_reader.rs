use std::io;
use std::path::Path;

/// AssetReader port for loading the raw bytes of a file to be hashed
pub trait AssetReader {
    /// Reads the whole file at `path`
    fn read_asset(&self, path: &Path) -> io::Result<Vec<u8>>;
}
