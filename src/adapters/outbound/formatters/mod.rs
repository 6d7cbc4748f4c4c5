/// Formatter adapters for the supported SBOM output formats
mod csv_formatter;
mod html_formatter;
mod json_formatter;
mod spdx;
mod spdx_json_formatter;
mod spdx_rdf_formatter;
mod text_formatter;
mod xml_formatter;

#[cfg(test)]
mod test_support;

pub use csv_formatter::CsvFormatter;
pub use html_formatter::HtmlFormatter;
pub use json_formatter::JsonFormatter;
pub use spdx_json_formatter::SpdxJsonFormatter;
pub use spdx_rdf_formatter::SpdxRdfFormatter;
pub use text_formatter::TextFormatter;
pub use xml_formatter::XmlFormatter;
