mod directory_type;

pub use directory_type::DirectoryType;
