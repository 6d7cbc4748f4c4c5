/// Use cases module containing application business logic orchestration
mod generate_sbom;
mod verify_hashes;

pub use generate_sbom::GenerateSbomUseCase;
pub use verify_hashes::VerifyHashesUseCase;
