/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, console, etc.).
pub mod asset_reader;
pub mod formatter;
pub mod hash_manifest_reader;
pub mod package_inventory_reader;
pub mod progress_reporter;
pub mod report_writer;

pub use asset_reader::AssetReader;
pub use formatter::SbomFormatter;
pub use hash_manifest_reader::HashManifestReader;
pub use package_inventory_reader::PackageInventoryReader;
pub use progress_reporter::ProgressReporter;
pub use report_writer::ReportWriter;
