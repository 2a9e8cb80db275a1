//! Result writer.
//!
//! Both formats render the same fixed four-column layout:
//! `id name close_approach_date miss_distance_kilometers`, space-separated.
//! The display format prints to stdout; the file format appends the rows,
//! newline-delimited, to an artifact whose name embeds the generation
//! timestamp. Event results carry no id of their own, so the id column
//! holds a `-` placeholder.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chrono::Local;
use clap::ValueEnum;

use crate::search::{SearchMatch, SearchOutcome};

/// Fixed column header shared by both formats.
const HEADER: &str = "id name close_approach_date miss_distance_kilometers";

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Render to stdout
    Display,
    /// Append to a timestamped delimited file
    #[value(name = "csv-file", alias = "csv_file")]
    CsvFile,
}

/// Writes search results in one of the supported formats.
pub struct ResultWriter {
    /// Directory file artifacts are written into
    out_dir: PathBuf,
}

impl ResultWriter {
    /// Creates a writer placing file artifacts under `out_dir`.
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
        }
    }

    /// Writes the outcome in the requested format.
    ///
    /// Returns the path of the written artifact for the file format,
    /// `None` for display output.
    pub fn write(
        &self,
        format: OutputFormat,
        outcome: &SearchOutcome,
    ) -> io::Result<Option<PathBuf>> {
        match format {
            OutputFormat::Display => {
                self.write_display(&mut io::stdout(), outcome)?;
                Ok(None)
            }
            OutputFormat::CsvFile => self.write_file(outcome).map(Some),
        }
    }

    /// Renders the display layout into any writer.
    pub fn write_display<W: Write>(&self, out: &mut W, outcome: &SearchOutcome) -> io::Result<()> {
        if outcome.is_empty() {
            writeln!(out, "No search result found")?;
            return Ok(());
        }
        writeln!(out, "{}", HEADER)?;
        for line in render_rows(outcome) {
            writeln!(out, "{}", line)?;
        }
        out.flush()
    }

    /// Appends header and rows to a fresh timestamped artifact.
    fn write_file(&self, outcome: &SearchOutcome) -> io::Result<PathBuf> {
        let timestamp = Local::now().format("%Y_%m_%d_%H_%M_%S");
        let path = self.out_dir.join(format!("neo_results_{}.csv", timestamp));

        let mut file = OpenOptions::new().append(true).create(true).open(&path)?;
        writeln!(file, "{}", HEADER)?;
        for line in render_rows(outcome) {
            writeln!(file, "{}", line)?;
        }
        file.flush()?;
        Ok(path)
    }

    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }
}

/// One space-separated line per match, in result order.
fn render_rows(outcome: &SearchOutcome) -> Vec<String> {
    outcome.iter().map(render_row).collect()
}

fn render_row(m: &SearchMatch) -> String {
    format!(
        "{} {} {} {}",
        m.id().unwrap_or("-"),
        m.name(),
        m.close_approach_date(),
        m.miss_distance_km()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::CelestialObject;
    use chrono::NaiveDate;

    fn outcome_with(matches: Vec<SearchMatch>) -> SearchOutcome {
        SearchOutcome {
            scanned_count: matches.len(),
            limit_applied: false,
            matches,
        }
    }

    fn object(id: &str, name: &str) -> CelestialObject {
        CelestialObject {
            id: id.to_string(),
            name: name.to_string(),
            diameter_min_km: 0.5,
            is_hazardous: false,
            close_approach_date: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
            miss_distance_km: 1000.0,
        }
    }

    #[test]
    fn test_display_empty_outcome() {
        let writer = ResultWriter::new(".");
        let mut buf = Vec::new();
        writer
            .write_display(&mut buf, &outcome_with(Vec::new()))
            .unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "No search result found\n");
    }

    #[test]
    fn test_display_rows() {
        let writer = ResultWriter::new(".");
        let mut buf = Vec::new();
        writer
            .write_display(
                &mut buf,
                &outcome_with(vec![SearchMatch::Object(object("1", "(2019 PQ)"))]),
            )
            .unwrap();
        let text = String::from_utf8(buf).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some(HEADER));
        assert_eq!(lines.next(), Some("1 (2019 PQ) 2020-01-01 1000"));
    }

    #[test]
    fn test_event_row_id_placeholder() {
        let event = object("1", "(2019 PQ)").approach_event();
        let line = render_row(&SearchMatch::Event(event));
        assert!(line.starts_with("- (2019 PQ) "));
    }

    #[test]
    fn test_file_artifact_written() {
        let dir = tempfile::tempdir().unwrap();
        let writer = ResultWriter::new(dir.path());

        let path = writer
            .write(
                OutputFormat::CsvFile,
                &outcome_with(vec![SearchMatch::Object(object("7", "x"))]),
            )
            .unwrap()
            .expect("file format returns a path");

        let name = path.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with("neo_results_"));
        assert!(name.ends_with(".csv"));

        let content = std::fs::read_to_string(&path).unwrap();
        let mut lines = content.lines();
        assert_eq!(lines.next(), Some(HEADER));
        assert_eq!(lines.next(), Some("7 x 2020-01-01 1000"));
    }
}
