mod yaml_parser;

pub use yaml_parser::{extract, parse_yaml, Extracted};
