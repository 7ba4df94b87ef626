pub mod site;
pub mod types;
pub mod watcher;

pub use site::{build_site, SiteBuilder};
pub use types::BuildStats;
pub use watcher::watch_site;
