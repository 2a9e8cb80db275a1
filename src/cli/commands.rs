//! CLI command implementations.
//!
//! The query command is the whole pipeline end to end: load the source
//! file, build the store, validate the spec, search, write results.

use std::path::{Path, PathBuf};

use crate::ingest::load_records;
use crate::observability::{Logger, Severity};
use crate::output::{OutputFormat, ResultWriter};
use crate::query::{QueryParams, QuerySpec};
use crate::search::Searcher;
use crate::store::RecordStore;

use super::args::{Cli, Command};
use super::errors::CliResult;

/// Parses arguments and dispatches to the selected command.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    match cli.command {
        Command::Query {
            data,
            date,
            start_date,
            end_date,
            filters,
            number,
            return_kind,
            output,
            out_dir,
            verbose,
        } => run_query(
            &data,
            QueryParams {
                date,
                start_date,
                end_date,
                limit: number,
                filters,
                return_kind,
            },
            output,
            out_dir,
            verbose,
        ),
        Command::Stats { data } => run_stats(&data),
    }
}

fn run_query(
    data: &Path,
    params: QueryParams,
    output: OutputFormat,
    out_dir: PathBuf,
    verbose: bool,
) -> CliResult<()> {
    // Warnings (skipped rows) always show; the search trace is opt-in so
    // display output stays readable.
    let logger = if verbose {
        Logger::new()
    } else {
        Logger::with_min_severity(Severity::Warn)
    };

    // Spec validation runs before the file is touched: fail fast on a bad
    // query rather than after a long load.
    let spec = QuerySpec::build(params)?;

    let rows = load_records(data)?;
    let mut store = RecordStore::new();
    store.index_all(rows, &logger);

    let searcher = Searcher::new(&store, &logger);
    let outcome = searcher.search(&spec)?;

    let writer = ResultWriter::new(out_dir);
    if let Some(path) = writer.write(output, &outcome)? {
        println!("results written to {}", path.display());
    }
    Ok(())
}

fn run_stats(data: &Path) -> CliResult<()> {
    let logger = Logger::with_min_severity(Severity::Warn);

    let rows = load_records(data)?;
    let mut store = RecordStore::new();
    let summary = store.index_all(rows, &logger);

    println!("records indexed: {}", summary.indexed);
    println!("rows skipped:    {}", summary.skipped);
    println!("distinct names:  {}", store.name_count());
    println!("distinct dates:  {}", store.date_count());
    Ok(())
}
