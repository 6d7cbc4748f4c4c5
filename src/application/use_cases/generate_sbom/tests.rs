use super::*;
use crate::application::dto::{FormatSelection, FormatSelector, OutputFormat};
use crate::sbom_generation::domain::{HashAlgorithm, HashEntry};
use crate::shared::error::{HashFormatError, HashManifestError};
use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::rc::Rc;

// Mock implementations for testing
#[derive(Default)]
struct MockHashManifestReader {
    manifests: HashMap<PathBuf, HashManifest>,
    malformed: Vec<PathBuf>,
}

impl HashManifestReader for MockHashManifestReader {
    fn read_hash_manifest(
        &self,
        path: &Path,
    ) -> std::result::Result<HashManifest, HashManifestError> {
        if self.malformed.iter().any(|p| p == path) {
            return Err(HashManifestError::Malformed {
                path: path.to_path_buf(),
                source: HashFormatError::TooFewValues { entry: 1 },
            });
        }
        self.manifests
            .get(path)
            .cloned()
            .ok_or_else(|| HashManifestError::Unreadable {
                path: path.to_path_buf(),
                details: "No such file or directory (os error 2)".to_string(),
            })
    }
}

#[derive(Default, Clone)]
struct MockReportWriter {
    written: Rc<RefCell<Vec<(PathBuf, String)>>>,
    prepared: Rc<RefCell<Vec<PathBuf>>>,
    fail_prepare: bool,
    fail_on: Option<&'static str>,
}

impl ReportWriter for MockReportWriter {
    fn prepare_directory(&self, directory: &Path) -> Result<()> {
        if self.fail_prepare {
            return Err(SbomError::OutputDirectoryUnavailable {
                path: directory.to_path_buf(),
                details: "Permission denied (os error 13)".to_string(),
            }
            .into());
        }
        self.prepared.borrow_mut().push(directory.to_path_buf());
        Ok(())
    }

    fn write_report(&self, path: &Path, content: &str) -> Result<()> {
        if let Some(name) = self.fail_on {
            if path.ends_with(name) {
                return Err(SbomError::EmitterWrite {
                    path: path.to_path_buf(),
                    details: "No space left on device (os error 28)".to_string(),
                }
                .into());
            }
        }
        self.written
            .borrow_mut()
            .push((path.to_path_buf(), content.to_string()));
        Ok(())
    }
}

#[derive(Default, Clone)]
struct MockProgressReporter {
    warnings: Rc<RefCell<Vec<String>>>,
    errors: Rc<RefCell<Vec<String>>>,
}

impl ProgressReporter for MockProgressReporter {
    fn report(&self, _message: &str) {}
    fn report_progress(&self, _current: usize, _total: usize, _message: Option<&str>) {}
    fn report_warning(&self, message: &str) {
        self.warnings.borrow_mut().push(message.to_string());
    }
    fn report_error(&self, message: &str) {
        self.errors.borrow_mut().push(message.to_string());
    }
    fn report_completion(&self, _message: &str) {}
}

fn package(name: &str) -> BuiltPackage {
    BuiltPackage::new(name.to_string())
        .unwrap()
        .with_version("1.0")
        .with_vcs_kind(VcsKind::Git)
}

fn sha256_manifest(asset: &str) -> HashManifest {
    HashManifest::new(vec![HashEntry::new(
        HashAlgorithm::new("sha256", None),
        "ABCDEF",
        asset,
    )])
}

fn request(packages: Vec<BuiltPackage>, selectors: &[FormatSelector]) -> SbomRequest {
    SbomRequest::new(
        packages,
        PathBuf::from("/out/sbom"),
        FormatSelection::from_selectors(selectors),
    )
}

fn use_case(
    reader: MockHashManifestReader,
    writer: MockReportWriter,
    reporter: MockProgressReporter,
) -> GenerateSbomUseCase<MockHashManifestReader, MockReportWriter, MockProgressReporter> {
    GenerateSbomUseCase::new(reader, writer, reporter)
}

#[test]
fn test_assemble_skips_packages_without_sources() {
    let reporter = MockProgressReporter::default();
    let uc = use_case(
        MockHashManifestReader::default(),
        MockReportWriter::default(),
        reporter.clone(),
    );

    let packages = vec![
        package("a"),
        package("virtual").with_vcs_kind(VcsKind::None),
        package("b"),
    ];
    let document = uc.assemble(&packages);

    let names: Vec<&str> = document.packages().names().collect();
    assert_eq!(names, vec!["a", "b"]);
    assert!(!document.packages().contains("virtual"));
    assert_eq!(reporter.warnings.borrow().len(), 1);
    assert!(reporter.warnings.borrow()[0].contains("virtual"));
}

#[test]
fn test_assemble_buckets_by_install_kind() {
    let uc = use_case(
        MockHashManifestReader::default(),
        MockReportWriter::default(),
        MockProgressReporter::default(),
    );

    let packages = vec![
        package("host-tool").with_install_kind(InstallKind::Host),
        package("libfoo"),
    ];
    let document = uc.assemble(&packages);

    assert!(document.packages().contains("libfoo"));
    assert!(document.host_packages().contains("host-tool"));
    assert_eq!(document.packages().len(), 1);
    assert_eq!(document.host_packages().len(), 1);
}

#[test]
fn test_assemble_record_fields() {
    let uc = use_case(
        MockHashManifestReader::default(),
        MockReportWriter::default(),
        MockProgressReporter::default(),
    );

    let packages = vec![BuiltPackage::new("libbar".to_string())
        .unwrap()
        .with_revision("v2.1")
        .with_site("https://example.com/libbar.git")
        .with_vcs_kind(VcsKind::Git)
        .with_licenses(["GPL-2.0-only", "MIT"])];
    let document = uc.assemble(&packages);

    let record = document.packages().get("libbar").unwrap();
    assert_eq!(record.version(), "v2.1");
    assert_eq!(record.site(), Some("https://example.com/libbar.git"));
    assert_eq!(record.vcs_kind(), VcsKind::Git);
    assert_eq!(record.licenses(), &["GPL-2.0-only".to_string(), "MIT".to_string()]);
    assert_eq!(record.uid(), SbomGenerator::package_uid("libbar"));
    assert!(record.hashes().is_empty());
}

#[test]
fn test_assemble_loads_hash_manifest() {
    let mut reader = MockHashManifestReader::default();
    reader
        .manifests
        .insert(PathBuf::from("/pkgs/a/a.hash"), sha256_manifest("a-1.0.tgz"));
    let uc = use_case(reader, MockReportWriter::default(), MockProgressReporter::default());

    let document = uc.assemble(&[package("a").with_hash_file("/pkgs/a/a.hash")]);

    let hashes = document.packages().get("a").unwrap().hashes();
    assert_eq!(hashes.len(), 1);
    assert_eq!(hashes.entries()[0].digest(), "abcdef");
}

#[test]
fn test_assemble_suppresses_manifest_errors() {
    let mut reader = MockHashManifestReader::default();
    reader.malformed.push(PathBuf::from("/pkgs/bad.hash"));
    let reporter = MockProgressReporter::default();
    let uc = use_case(reader, MockReportWriter::default(), reporter.clone());

    let document = uc.assemble(&[
        package("bad").with_hash_file("/pkgs/bad.hash"),
        package("missing").with_hash_file("/pkgs/missing.hash"),
    ]);

    assert!(document.packages().get("bad").unwrap().hashes().is_empty());
    assert!(document.packages().get("missing").unwrap().hashes().is_empty());
    let warnings = reporter.warnings.borrow();
    assert_eq!(warnings.len(), 2);
    assert!(warnings[0].contains("malformed"));
    assert!(warnings[1].contains("unable to read hash file"));
}

#[test]
fn test_assemble_metadata() {
    let uc = use_case(
        MockHashManifestReader::default(),
        MockReportWriter::default(),
        MockProgressReporter::default(),
    );

    let document = uc.assemble(&[package("a"), package("b").with_install_kind(InstallKind::Host)]);
    let metadata = document.metadata();

    assert_eq!(document.doc_type(), "releng-tool-sbom");
    assert_eq!(document.schema_version(), "0");
    assert_eq!(metadata.tool_version(), env!("CARGO_PKG_VERSION"));
    assert_eq!(metadata.project_id(), SbomGenerator::project_id(["a", "b"]));
    assert_eq!(metadata.report_id().len(), 36);
    assert!(metadata.datetime().ends_with('Z'));
}

#[test]
fn test_assemble_fresh_report_id_each_time() {
    let uc = use_case(
        MockHashManifestReader::default(),
        MockReportWriter::default(),
        MockProgressReporter::default(),
    );

    let first = uc.assemble(&[package("a")]);
    let second = uc.assemble(&[package("a")]);
    assert_ne!(first.metadata().report_id(), second.metadata().report_id());
    assert_eq!(first.metadata().project_id(), second.metadata().project_id());
}

#[test]
fn test_execute_default_writes_text_only() {
    let writer = MockReportWriter::default();
    let uc = use_case(
        MockHashManifestReader::default(),
        writer.clone(),
        MockProgressReporter::default(),
    );

    let response = uc.execute(request(vec![package("a")], &[])).unwrap();

    assert_eq!(response.written_files, vec![PathBuf::from("/out/sbom/sbom.txt")]);
    assert_eq!(writer.prepared.borrow().as_slice(), &[PathBuf::from("/out/sbom")]);
    let written = writer.written.borrow();
    assert_eq!(written.len(), 1);
    assert!(written[0].1.contains("releng-tool SBOM"));
}

#[test]
fn test_execute_all_formats_in_order() {
    let writer = MockReportWriter::default();
    let uc = use_case(
        MockHashManifestReader::default(),
        writer.clone(),
        MockProgressReporter::default(),
    );

    let response = uc
        .execute(request(vec![package("a")], &[FormatSelector::All]))
        .unwrap();

    let names: Vec<String> = writer
        .written
        .borrow()
        .iter()
        .map(|(path, _)| path.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(
        names,
        vec![
            "sbom.csv",
            "sbom.html",
            "sbom.json",
            "sbom-spdx.json",
            "sbom-spdx.xml",
            "sbom.txt",
            "sbom.xml"
        ]
    );
    assert_eq!(response.written_files.len(), OutputFormat::ALL.len());
}

#[test]
fn test_execute_renders_one_document() {
    let writer = MockReportWriter::default();
    let uc = use_case(
        MockHashManifestReader::default(),
        writer.clone(),
        MockProgressReporter::default(),
    );

    let response = uc
        .execute(request(
            vec![package("a")],
            &[
                FormatSelector::Format(OutputFormat::Json),
                FormatSelector::Format(OutputFormat::Xml),
            ],
        ))
        .unwrap();

    let report_id = response.document.metadata().report_id().to_string();
    for (_, content) in writer.written.borrow().iter() {
        assert!(content.contains(&report_id));
    }
}

#[test]
fn test_generate_stops_at_first_write_failure() {
    let writer = MockReportWriter {
        fail_on: Some("sbom.json"),
        ..Default::default()
    };
    let reporter = MockProgressReporter::default();
    let uc = use_case(MockHashManifestReader::default(), writer.clone(), reporter.clone());

    let ok = uc.generate(request(vec![package("a")], &[FormatSelector::All]));

    assert!(!ok);
    let written: Vec<PathBuf> = writer.written.borrow().iter().map(|(p, _)| p.clone()).collect();
    assert_eq!(
        written,
        vec![
            PathBuf::from("/out/sbom/sbom.csv"),
            PathBuf::from("/out/sbom/sbom.html")
        ]
    );

    let errors = reporter.errors.borrow();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].contains("No space left on device"));
    assert!(errors[0].contains("sbom.json"));
    assert!(!errors[0].contains('\n'));
}

#[test]
fn test_generate_fails_before_emitting_when_directory_unavailable() {
    let writer = MockReportWriter {
        fail_prepare: true,
        ..Default::default()
    };
    let reporter = MockProgressReporter::default();
    let uc = use_case(MockHashManifestReader::default(), writer.clone(), reporter.clone());

    let ok = uc.generate(request(vec![package("a")], &[FormatSelector::All]));

    assert!(!ok);
    assert!(writer.written.borrow().is_empty());
    assert!(reporter.errors.borrow()[0].contains("Permission denied"));
}

#[test]
fn test_summarize_multi_line_details_on_one_line() {
    let errors: Vec<anyhow::Error> = vec![
        SbomError::EmitterWrite {
            path: PathBuf::from("/out/sbom/sbom.csv"),
            details: "Input/output error\nremote host closed\r\n".to_string(),
        }
        .into(),
        SbomError::OutputDirectoryUnavailable {
            path: PathBuf::from("/out/sbom"),
            details: "Read-only file system\n(os error 30)".to_string(),
        }
        .into(),
        anyhow::anyhow!("first\nsecond"),
    ];

    for error in &errors {
        let line = summarize(error);
        assert!(!line.contains('\n'), "{:?}", line);
        assert!(!line.contains('\r'), "{:?}", line);
    }
    assert!(summarize(&errors[0]).contains("Input/output error remote host closed"));
    assert!(summarize(&errors[1]).contains("Read-only file system (os error 30)"));
}

#[test]
fn test_generate_success() {
    let reporter = MockProgressReporter::default();
    let uc = use_case(
        MockHashManifestReader::default(),
        MockReportWriter::default(),
        reporter.clone(),
    );

    assert!(uc.generate(request(vec![package("a")], &[])));
    assert!(reporter.errors.borrow().is_empty());
}

#[test]
fn test_execute_empty_package_list() {
    let writer = MockReportWriter::default();
    let uc = use_case(
        MockHashManifestReader::default(),
        writer.clone(),
        MockProgressReporter::default(),
    );

    let response = uc
        .execute(request(vec![], &[FormatSelector::Format(OutputFormat::Json)]))
        .unwrap();

    assert!(response.document.packages().is_empty());
    let written = writer.written.borrow();
    let json: serde_json::Value = serde_json::from_str(&written[0].1).unwrap();
    assert!(json["packages"].as_object().unwrap().is_empty());
    assert!(json.get("host-packages").is_none());
}
