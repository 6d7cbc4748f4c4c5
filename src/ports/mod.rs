/// Ports module defining interfaces for hexagonal architecture
///
/// Only outbound ports (driven ports - infrastructure interfaces) exist;
/// the use cases are called directly by the binary.
pub mod outbound;
