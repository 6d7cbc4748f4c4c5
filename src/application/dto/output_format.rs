/// Output format enumeration for SBOM generation
///
/// This enum represents the supported report formats. It belongs in the
/// application layer as both the CLI (inbound adapter) and the formatters
/// (outbound adapters) need to understand it.
///
/// Variants are declared in emission order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum OutputFormat {
    Csv,
    Html,
    Json,
    /// SPDX 2.3 JSON
    SpdxJson,
    /// SPDX 2.3 RDF/XML
    SpdxRdf,
    Text,
    Xml,
}

impl OutputFormat {
    /// Every format, in the fixed order reports are emitted
    pub const ALL: [OutputFormat; 7] = [
        OutputFormat::Csv,
        OutputFormat::Html,
        OutputFormat::Json,
        OutputFormat::SpdxJson,
        OutputFormat::SpdxRdf,
        OutputFormat::Text,
        OutputFormat::Xml,
    ];

    /// File name written inside the output directory
    pub fn filename(&self) -> &'static str {
        match self {
            OutputFormat::Csv => "sbom.csv",
            OutputFormat::Html => "sbom.html",
            OutputFormat::Json => "sbom.json",
            OutputFormat::SpdxJson => "sbom-spdx.json",
            OutputFormat::SpdxRdf => "sbom-spdx.xml",
            OutputFormat::Text => "sbom.txt",
            OutputFormat::Xml => "sbom.xml",
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(OutputFormat::Csv),
            "html" => Ok(OutputFormat::Html),
            "json" => Ok(OutputFormat::Json),
            "json-spdx" => Ok(OutputFormat::SpdxJson),
            "rdf-spdx" => Ok(OutputFormat::SpdxRdf),
            "text" => Ok(OutputFormat::Text),
            "xml" => Ok(OutputFormat::Xml),
            _ => Err(format!(
                "Invalid format: {}. Please specify one of 'csv', 'html', 'json', 'json-spdx', 'rdf-spdx', 'text', 'xml' or 'all'",
                s
            )),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Csv => write!(f, "csv"),
            OutputFormat::Html => write!(f, "html"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::SpdxJson => write!(f, "json-spdx"),
            OutputFormat::SpdxRdf => write!(f, "rdf-spdx"),
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Xml => write!(f, "xml"),
        }
    }
}

/// A single `--format` value: one format, or every format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatSelector {
    All,
    Format(OutputFormat),
}

impl std::str::FromStr for FormatSelector {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            Ok(FormatSelector::All)
        } else {
            s.parse().map(FormatSelector::Format)
        }
    }
}

/// The set of formats to emit, kept in emission order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatSelection {
    formats: Vec<OutputFormat>,
}

impl FormatSelection {
    /// Resolves selectors into a de-duplicated, ordered selection
    ///
    /// No selectors means text only; `all` selects every format.
    pub fn from_selectors(selectors: &[FormatSelector]) -> Self {
        if selectors.is_empty() {
            return Self {
                formats: vec![OutputFormat::Text],
            };
        }

        if selectors.contains(&FormatSelector::All) {
            return Self::all();
        }

        let formats = OutputFormat::ALL
            .into_iter()
            .filter(|format| selectors.contains(&FormatSelector::Format(*format)))
            .collect();
        Self { formats }
    }

    pub fn all() -> Self {
        Self {
            formats: OutputFormat::ALL.to_vec(),
        }
    }

    pub fn formats(&self) -> &[OutputFormat] {
        &self.formats
    }

    pub fn contains(&self, format: OutputFormat) -> bool {
        self.formats.contains(&format)
    }
}

impl Default for FormatSelection {
    fn default() -> Self {
        Self::from_selectors(&[])
    }
}
