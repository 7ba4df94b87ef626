pub mod app;
pub mod config;
pub mod core;

pub use self::config::ServerConfig;
pub use self::core::serve;
