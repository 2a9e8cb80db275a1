//! CLI argument definitions using clap.
//!
//! Commands:
//! - neodb query --data <path> [selectors] [--filter EXPR]...
//! - neodb stats --data <path>
//!
//! Date and limit arguments stay raw strings here; `QuerySpec::build` owns
//! their validation so the CLI reports the same error codes as the library.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::output::OutputFormat;

/// neodb - query engine for near-Earth object close approaches
#[derive(Parser, Debug)]
#[command(name = "neodb")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Search close approaches in a data set
    Query {
        /// Path to the source data file
        #[arg(long, default_value = "./data/neo_data.csv")]
        data: PathBuf,

        /// Single approach date (ISO-8601); excludes the range pair
        #[arg(long)]
        date: Option<String>,

        /// Range start date (ISO-8601), inclusive
        #[arg(long)]
        start_date: Option<String>,

        /// Range end date (ISO-8601), inclusive
        #[arg(long)]
        end_date: Option<String>,

        /// Filter expression of the form field:operator:value (repeatable)
        #[arg(long = "filter")]
        filters: Vec<String>,

        /// Maximum number of results to return
        #[arg(long)]
        number: Option<String>,

        /// Entity kind to return: object or event
        #[arg(long)]
        return_kind: Option<String>,

        /// Where results go
        #[arg(long, value_enum, default_value = "display")]
        output: OutputFormat,

        /// Directory for file artifacts
        #[arg(long, default_value = ".")]
        out_dir: PathBuf,

        /// Log the full search trace
        #[arg(long)]
        verbose: bool,
    },

    /// Load a data set and report store statistics
    Stats {
        /// Path to the source data file
        #[arg(long, default_value = "./data/neo_data.csv")]
        data: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
