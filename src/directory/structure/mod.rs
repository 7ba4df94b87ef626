mod directory_structure;

pub use directory_structure::DirectoryStructure;
