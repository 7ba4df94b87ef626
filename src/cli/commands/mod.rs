mod build;
mod init;
mod watch;

pub use build::handle_build_command;
pub use init::handle_init_command;
pub use watch::handle_watch_command;
