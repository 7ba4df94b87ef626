//! foldsite folds a `content/` tree, Liquid layouts, partials and helpers into
//! a directory of HTML files.
//!
//! The binary drives [`cli::run`]. Embedders can build a site directly with
//! [`builder::SiteBuilder`], and swap in their own [`template::HelperLoader`]
//! to provide helpers backed by Rust closures ([`template::FnHelper`]).

pub mod builder;
pub mod cli;
pub mod config;
pub mod directory;
pub mod front_matter;
pub mod markdown;
pub mod server;
pub mod template;
pub mod utils;
