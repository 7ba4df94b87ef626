pub mod renderer;
pub mod engine;
pub mod headings;

pub use renderer::MarkdownRenderer;
