//! Query execution and request validation.

mod directory;
mod kartu;
mod validation;

pub use directory::DirectoryService;
pub use kartu::KartuService;
pub use validation::RequestValidator;
