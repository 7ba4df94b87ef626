pub mod types;
pub mod structure;
pub mod utils;
pub mod walker;

// Re-export common types and functions
pub use structure::DirectoryStructure;
pub use utils::clean_destination;
pub use walker::FsEntry;
