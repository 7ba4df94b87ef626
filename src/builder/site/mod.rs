mod assets;
mod builder;
mod context;
mod navigation;
mod tree;
mod writer;

pub use builder::{build_site, SiteBuilder};
