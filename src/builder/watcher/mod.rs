mod fs_watcher;

pub use fs_watcher::{rebuild_on_changes, start_watcher, watch_site, DEBOUNCE};
