use crate::adapters::outbound::formatters::{
    CsvFormatter, HtmlFormatter, JsonFormatter, SpdxJsonFormatter, SpdxRdfFormatter,
    TextFormatter, XmlFormatter,
};
use crate::application::dto::OutputFormat;
use crate::ports::outbound::SbomFormatter;

/// Factory for creating SBOM formatters
///
/// This factory encapsulates the creation logic for different formatter implementations,
/// following the Factory Pattern. It belongs in the application layer as it orchestrates
/// the selection of infrastructure adapters based on application needs.
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates a formatter instance for the specified output format
    ///
    /// # Examples
    /// ```
    /// use releng_sbom::application::dto::OutputFormat;
    /// use releng_sbom::application::factories::FormatterFactory;
    ///
    /// let formatter = FormatterFactory::create(OutputFormat::SpdxJson);
    /// ```
    pub fn create(format: OutputFormat) -> Box<dyn SbomFormatter> {
        match format {
            OutputFormat::Csv => Box::new(CsvFormatter::new()),
            OutputFormat::Html => Box::new(HtmlFormatter::new()),
            OutputFormat::Json => Box::new(JsonFormatter::new()),
            OutputFormat::SpdxJson => Box::new(SpdxJsonFormatter::new()),
            OutputFormat::SpdxRdf => Box::new(SpdxRdfFormatter::new()),
            OutputFormat::Text => Box::new(TextFormatter::new()),
            OutputFormat::Xml => Box::new(XmlFormatter::new()),
        }
    }

    /// Returns the progress message for the specified output format
    ///
    /// # Examples
    /// ```
    /// use releng_sbom::application::dto::OutputFormat;
    /// use releng_sbom::application::factories::FormatterFactory;
    ///
    /// let message = FormatterFactory::progress_message(OutputFormat::Csv);
    /// assert_eq!(message, "📝 Generating CSV output...");
    /// ```
    pub fn progress_message(format: OutputFormat) -> &'static str {
        match format {
            OutputFormat::Csv => "📝 Generating CSV output...",
            OutputFormat::Html => "📝 Generating HTML output...",
            OutputFormat::Json => "📝 Generating JSON output...",
            OutputFormat::SpdxJson => "📝 Generating SPDX JSON output...",
            OutputFormat::SpdxRdf => "📝 Generating SPDX RDF/XML output...",
            OutputFormat::Text => "📝 Generating text output...",
            OutputFormat::Xml => "📝 Generating XML output...",
        }
    }
}
