use crate::sbom_generation::domain::BomDocument;
use crate::shared::Result;

/// SbomFormatter port for rendering a BOM document
///
/// This port abstracts the rendering logic for the different report
/// formats (text, CSV, HTML, JSON, XML, SPDX JSON, SPDX RDF/XML).
pub trait SbomFormatter {
    /// Renders the document
    ///
    /// # Arguments
    /// * `document` - The assembled BOM document
    ///
    /// # Returns
    /// Report content as a string
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, document: &BomDocument) -> Result<String>;
}
