/// Mock implementations for testing
mod mock_hash_manifest_reader;
mod mock_progress_reporter;
mod mock_report_writer;

#[allow(unused_imports)]
pub use mock_hash_manifest_reader::MockHashManifestReader;
#[allow(unused_imports)]
pub use mock_progress_reporter::MockProgressReporter;
#[allow(unused_imports)]
pub use mock_report_writer::MockReportWriter;
