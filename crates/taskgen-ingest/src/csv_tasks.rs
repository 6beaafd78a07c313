//! Semicolon-delimited task source.
//!
//! Layout: one header row, then `category;description;complexity;time_estimate`.
//! Fields may be wrapped in double quotes. Rows with fewer than four fields are
//! skipped; extra trailing fields are ignored.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use tracing::{debug, info};

use taskgen_model::Task;

use crate::error::{IngestError, Result};

/// Field separator of the task CSV.
pub const CSV_DELIMITER: u8 = b';';

/// Minimum number of fields for a row to be read.
pub const REQUIRED_FIELDS: usize = 4;

/// A row dropped for having too few fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkippedRow {
    /// 1-based line number in the source.
    pub line: u64,
    pub field_count: usize,
}

/// Tasks read from a CSV source, in file order.
#[derive(Debug, Clone, Default)]
pub struct CsvIngest {
    pub tasks: Vec<Task>,
    pub skipped_rows: Vec<SkippedRow>,
}

/// Read tasks from a CSV file on disk.
pub fn read_task_csv(path: &Path) -> Result<CsvIngest> {
    let file = File::open(path).map_err(|e| IngestError::read(path, e))?;
    let ingest = read_task_csv_from_reader(file, path)?;
    info!(
        source = %path.display(),
        task_count = ingest.tasks.len(),
        skipped_rows = ingest.skipped_rows.len(),
        "read task csv"
    );
    Ok(ingest)
}

/// Read tasks from any reader; `source` is used for error messages only.
pub fn read_task_csv_from_reader<R: Read>(reader: R, source: &Path) -> Result<CsvIngest> {
    let mut reader = ReaderBuilder::new()
        .delimiter(CSV_DELIMITER)
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);
    let mut ingest = CsvIngest::default();
    for record in reader.records() {
        let record = record.map_err(|e| IngestError::Csv {
            path: source.to_path_buf(),
            source: e,
        })?;
        let line = record.position().map_or(0, csv::Position::line);
        if record.len() < REQUIRED_FIELDS {
            debug!(line, field_count = record.len(), "skipping short row");
            ingest.skipped_rows.push(SkippedRow {
                line,
                field_count: record.len(),
            });
            continue;
        }
        ingest.tasks.push(parse_task_record(&record, source, line)?);
    }
    Ok(ingest)
}

fn parse_task_record(record: &StringRecord, source: &Path, line: u64) -> Result<Task> {
    let field = |idx: usize| record.get(idx).unwrap_or("");
    let complexity_raw = field(2);
    let complexity = complexity_raw
        .trim()
        .parse::<i64>()
        .map_err(|_| invalid_value("complexity", complexity_raw, source, line))?;
    let time_raw = field(3);
    let time_estimate = time_raw
        .trim()
        .parse::<f64>()
        .map_err(|_| invalid_value("time_estimate", time_raw, source, line))?;
    Ok(Task::new(
        strip_quotes(field(0)),
        strip_quotes(field(1)),
        complexity,
        time_estimate,
    ))
}

// Quotes left over when a quoted field is preceded by whitespace.
fn strip_quotes(value: &str) -> &str {
    value.trim_matches('"')
}

fn invalid_value(field: &'static str, value: &str, source: &Path, line: u64) -> IngestError {
    IngestError::InvalidValue {
        field,
        value: value.to_string(),
        path: source.to_path_buf(),
        line,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read(contents: &str) -> Result<CsvIngest> {
        read_task_csv_from_reader(contents.as_bytes(), Path::new("tasks.csv"))
    }

    #[test]
    fn reads_quoted_rows() {
        let ingest = read(
            "category;description;complexity;time_estimate\n\
             \"Ops\";\"Fix pipeline\";3;1.5\n\
             \"Ops\";\"Add metric\";2;0.5\n",
        )
        .expect("read csv");
        assert_eq!(
            ingest.tasks,
            vec![
                Task::new("Ops", "Fix pipeline", 3, 1.5),
                Task::new("Ops", "Add metric", 2, 0.5),
            ]
        );
        assert!(ingest.skipped_rows.is_empty());
    }

    #[test]
    fn quoted_fields_may_contain_the_delimiter() {
        let ingest = read("h\n\"Ops\";\"a; b\";1;1\n").expect("read csv");
        assert_eq!(ingest.tasks[0].description, "a; b");
    }

    #[test]
    fn short_rows_are_skipped_with_line_numbers() {
        let ingest = read("h\nOps;only two\nOps;ok;1;2.0\nx\n").expect("read csv");
        assert_eq!(ingest.tasks.len(), 1);
        assert_eq!(
            ingest.skipped_rows,
            vec![
                SkippedRow {
                    line: 2,
                    field_count: 2
                },
                SkippedRow {
                    line: 4,
                    field_count: 1
                },
            ]
        );
    }

    #[test]
    fn extra_fields_are_ignored() {
        let ingest = read("h\nOps;desc;1;2.0;extra;more\n").expect("read csv");
        assert_eq!(ingest.tasks, vec![Task::new("Ops", "desc", 1, 2.0)]);
    }

    #[test]
    fn numeric_fields_tolerate_padding() {
        let ingest = read("h\nOps;desc; 4 ; 2.25 \n").expect("read csv");
        assert_eq!(ingest.tasks[0].complexity, 4);
        assert!((ingest.tasks[0].time_estimate - 2.25).abs() < f64::EPSILON);
    }

    #[test]
    fn non_numeric_complexity_is_fatal() {
        let err = read("h\nOps;desc;high;2.0\n").expect_err("invalid complexity");
        match err {
            IngestError::InvalidValue {
                field, value, line, ..
            } => {
                assert_eq!(field, "complexity");
                assert_eq!(value, "high");
                assert_eq!(line, 2);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn header_only_reads_nothing() {
        let ingest = read("category;description;complexity;time_estimate\n").expect("read csv");
        assert!(ingest.tasks.is_empty());
        assert!(ingest.skipped_rows.is_empty());
    }
}
