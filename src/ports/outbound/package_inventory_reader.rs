use crate::sbom_generation::domain::BuiltPackage;
use crate::shared::Result;
use std::path::Path;

/// PackageInventoryReader port for loading the list of built packages
///
/// This port abstracts where the build hands its processed packages over;
/// the order of the returned packages is the order they are reported in.
pub trait PackageInventoryReader {
    /// Reads the inventory at `path`
    ///
    /// # Errors
    /// Returns an error if:
    /// - The inventory does not exist or cannot be read
    /// - The inventory cannot be parsed or names an invalid package
    fn read_inventory(&self, path: &Path) -> Result<Vec<BuiltPackage>>;
}
