pub mod parser;
pub mod tags;

pub use parser::{normalize_element, parse_pois};
