//! neodb - a strict, deterministic query engine for near-Earth object
//! close approaches.
//!
//! The pipeline: the ingestion adapter reads a delimited source file into
//! raw rows, the record store indexes them by approach date and name, a
//! validated query spec selects and filters candidates through the search
//! orchestrator, and the presentation adapter renders the result.

pub mod cli;
pub mod ingest;
pub mod observability;
pub mod output;
pub mod query;
pub mod search;
pub mod store;
