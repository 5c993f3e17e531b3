//! Output formatters for Markdown, JSON and CSV.

mod csv;
mod json;
mod markdown;

pub use self::csv::*;
pub use self::json::*;
pub use markdown::*;
