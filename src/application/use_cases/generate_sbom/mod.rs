use crate::application::dto::{SbomRequest, SbomResponse};
use crate::application::factories::FormatterFactory;
use crate::ports::outbound::{HashManifestReader, ProgressReporter, ReportWriter};
use crate::sbom_generation::domain::{
    BomDocument, BuiltPackage, HashManifest, InstallKind, PackageBucket, PackageRecord, VcsKind,
};
use crate::sbom_generation::services::SbomGenerator;
use crate::shared::error::SbomError;
use crate::shared::Result;

/// GenerateSbomUseCase - Core use case for SBOM generation
///
/// Assembles a BOM document from the processed packages and renders it
/// through every selected formatter, in a fixed order.
///
/// # Type Parameters
/// * `HR` - HashManifestReader implementation
/// * `RW` - ReportWriter implementation
/// * `PR` - ProgressReporter implementation
pub struct GenerateSbomUseCase<HR, RW, PR> {
    hash_manifest_reader: HR,
    report_writer: RW,
    progress_reporter: PR,
}

impl<HR, RW, PR> GenerateSbomUseCase<HR, RW, PR>
where
    HR: HashManifestReader,
    RW: ReportWriter,
    PR: ProgressReporter,
{
    /// Creates a new GenerateSbomUseCase with injected dependencies
    pub fn new(hash_manifest_reader: HR, report_writer: RW, progress_reporter: PR) -> Self {
        Self {
            hash_manifest_reader,
            report_writer,
            progress_reporter,
        }
    }

    /// Runs the generate step, reporting any failure as a single error line
    ///
    /// # Returns
    /// `true` when every selected report was written
    pub fn generate(&self, request: SbomRequest) -> bool {
        match self.execute(request) {
            Ok(_) => true,
            Err(error) => {
                self.progress_reporter.report_error(&summarize(&error));
                false
            }
        }
    }

    /// Executes the SBOM generation use case
    ///
    /// The output directory is prepared before anything is rendered.
    /// Emission stops at the first formatter or write failure; reports
    /// written before it are left in place.
    pub fn execute(&self, request: SbomRequest) -> Result<SbomResponse> {
        self.report_writer.prepare_directory(&request.output_dir)?;

        self.progress_reporter.report(&format!(
            "📦 Assembling SBOM from {} package(s)",
            request.packages.len()
        ));
        let document = self.assemble(&request.packages);

        let formats = request.formats.formats();
        let mut written_files = Vec::with_capacity(formats.len());
        for (idx, format) in formats.iter().enumerate() {
            self.progress_reporter.report_progress(
                idx,
                formats.len(),
                Some(FormatterFactory::progress_message(*format)),
            );

            let formatter = FormatterFactory::create(*format);
            let content = formatter.format(&document)?;
            let path = request.output_dir.join(format.filename());
            self.report_writer.write_report(&path, &content)?;
            written_files.push(path);
        }
        self.progress_reporter
            .report_progress(formats.len(), formats.len(), None);

        self.progress_reporter.report_completion(&format!(
            "✅ Wrote {} SBOM file(s) to {}",
            written_files.len(),
            request.output_dir.display()
        ));

        Ok(SbomResponse::new(document, written_files))
    }

    /// Builds the BOM document for the given packages
    ///
    /// Packages without sources are left out. A hash manifest that cannot
    /// be loaded is reported as a warning and recorded as an empty list.
    pub fn assemble(&self, packages: &[BuiltPackage]) -> BomDocument {
        let mut target_packages = PackageBucket::new();
        let mut host_packages = PackageBucket::new();
        let mut visited: Vec<&str> = Vec::new();

        for package in packages {
            if package.vcs_kind() == VcsKind::None {
                self.progress_reporter.report_warning(&format!(
                    "skipping package without sources: {}",
                    package.name()
                ));
                continue;
            }

            let record = PackageRecord::new(
                package.name().to_string(),
                package.reported_version().to_string(),
                package.site().map(str::to_string),
                package.install_kind(),
                package.vcs_kind(),
                package.licenses().to_vec(),
                self.load_hashes(package),
                SbomGenerator::package_uid(package.name()),
            );

            match package.install_kind() {
                InstallKind::Target => target_packages.insert(record),
                InstallKind::Host => host_packages.insert(record),
            }
            if !visited.contains(&package.name()) {
                visited.push(package.name());
            }
        }

        let metadata = SbomGenerator::generate_default_metadata(visited);
        BomDocument::new(metadata, target_packages, host_packages)
    }

    fn load_hashes(&self, package: &BuiltPackage) -> HashManifest {
        let Some(path) = package.hash_file() else {
            return HashManifest::default();
        };

        match self.hash_manifest_reader.read_hash_manifest(path) {
            Ok(manifest) => manifest,
            Err(error) => {
                self.progress_reporter.report_warning(&format!(
                    "no hashes recorded for {}: {}",
                    package.name(),
                    error.to_string().replace('\n', " ")
                ));
                HashManifest::default()
            }
        }
    }
}

/// One-line description of a generate failure, carrying the system message
fn summarize(error: &anyhow::Error) -> String {
    let line = match error.downcast_ref::<SbomError>() {
        Some(SbomError::EmitterWrite { path, details }) => {
            format!("unable to write SBOM file {}: {}", path.display(), details)
        }
        Some(SbomError::OutputDirectoryUnavailable { path, details }) => {
            format!("unable to prepare SBOM directory {}: {}", path.display(), details)
        }
        _ => format!("unable to generate SBOM: {}", error),
    };
    line.replace(['\r', '\n'], " ")
}

#[cfg(test)]
mod tests;
