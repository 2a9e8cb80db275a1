//! Command-line interface.
//!
//! `main.rs` delegates here. Argument parsing lives in `args`, command
//! dispatch in `commands`, CLI-level errors in `errors`.

pub mod args;
pub mod commands;
pub mod errors;

pub use commands::run;
pub use errors::{CliError, CliResult};
