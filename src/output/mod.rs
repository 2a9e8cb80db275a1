//! Presentation adapter: renders search results to a display or a
//! delimited output file.

pub mod writer;

pub use writer::{OutputFormat, ResultWriter};
