pub mod types;
pub mod parser;
pub mod defaults;

// Re-export the most common items for convenience
pub use types::Metadata;
pub use parser::extract;
pub use defaults::load_defaults;
