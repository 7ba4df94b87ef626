pub mod filters;
pub mod format;
pub mod helpers;
pub mod renderer;

pub use format::ContentFormat;
pub use helpers::{FnHelper, Helper, HelperLoader, TemplateHelperLoader};
pub use renderer::Renderer;
