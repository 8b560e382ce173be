//! Argument sources for parameterized test cases.
//!
//! Every source yields rows of string arguments in declared order. A single
//! column source (literal values, provider function) yields one-element rows.
//!
//! CSV sources trim whitespace around unquoted values only; quoted values are
//! kept as written. Inline CSV quotes with `'`, CSV files with `"`.

use crate::error::{HarnessError, HarnessResult};
use std::fs;
use std::path::PathBuf;
use tracing::debug;

/// One invocation's arguments.
pub type Arguments = Vec<String>;

/// Where a parameterized test takes its arguments from.
#[derive(Debug, Clone)]
pub enum ArgumentSource {
    /// Literal values, one per invocation
    Values(Vec<String>),

    /// Inline CSV lines, one per invocation, quoted with `'`
    Csv(Vec<String>),

    /// A CSV file without header, quoted with `"`, optionally skipping
    /// leading lines
    CsvFile { path: PathBuf, skip_lines: usize },

    /// A function producing one value per invocation
    Method(fn() -> Vec<String>),
}

impl ArgumentSource {
    pub fn values<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Values(values.into_iter().map(Into::into).collect())
    }

    pub fn csv<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Csv(lines.into_iter().map(Into::into).collect())
    }

    pub fn csv_file(path: impl Into<PathBuf>) -> Self {
        Self::CsvFile {
            path: path.into(),
            skip_lines: 0,
        }
    }

    /// Resolve the source into argument rows.
    ///
    /// # Errors
    ///
    /// - `HarnessError::Io` if a CSV file cannot be opened
    /// - `HarnessError::Csv` if CSV content cannot be parsed
    /// - `HarnessError::EmptyRow` if an inline CSV line holds no record
    pub fn arguments(&self) -> HarnessResult<Vec<Arguments>> {
        match self {
            Self::Values(values) => Ok(single_column(values.iter().cloned())),
            Self::Csv(lines) => lines
                .iter()
                .enumerate()
                .map(|(index, line)| parse_csv_line(index + 1, line))
                .collect(),
            Self::CsvFile { path, skip_lines } => {
                debug!("Loading arguments from {}", path.display());
                let content = trim_unquoted(&fs::read_to_string(path)?, FILE_QUOTE);
                let mut reader = csv_reader_builder(FILE_QUOTE).from_reader(content.as_bytes());

                let mut rows = Vec::new();
                for record in reader.records().skip(*skip_lines) {
                    rows.push(record?.iter().map(str::to_string).collect());
                }
                Ok(rows)
            }
            Self::Method(provider) => Ok(single_column(provider())),
        }
    }
}

fn single_column(values: impl IntoIterator<Item = String>) -> Vec<Arguments> {
    values.into_iter().map(|value| vec![value]).collect()
}

const INLINE_QUOTE: u8 = b'\'';
const FILE_QUOTE: u8 = b'"';

fn csv_reader_builder(quote: u8) -> csv::ReaderBuilder {
    let mut builder = csv::ReaderBuilder::new();
    builder.has_headers(false).flexible(true).quote(quote);
    builder
}

/// Drop spaces and tabs that sit outside quotes next to a delimiter or line
/// boundary. Quoted sections pass through untouched for the CSV reader.
fn trim_unquoted(input: &str, quote: u8) -> String {
    let quote = char::from(quote);
    let mut out = String::with_capacity(input.len());
    let mut pending = String::new();
    let mut in_quotes = false;
    let mut at_field_start = true;

    for c in input.chars() {
        if in_quotes {
            out.push(c);
            if c == quote {
                in_quotes = false;
            }
            continue;
        }

        match c {
            ' ' | '\t' => {
                if !at_field_start {
                    pending.push(c);
                }
            }
            ',' | '\n' | '\r' => {
                pending.clear();
                out.push(c);
                at_field_start = true;
            }
            _ => {
                out.push_str(&pending);
                pending.clear();
                if c == quote && at_field_start {
                    in_quotes = true;
                }
                out.push(c);
                at_field_start = false;
            }
        }
    }

    out
}

fn parse_csv_line(row: usize, line: &str) -> HarnessResult<Arguments> {
    let line = trim_unquoted(line, INLINE_QUOTE);
    let mut reader = csv_reader_builder(INLINE_QUOTE).from_reader(line.as_bytes());

    match reader.records().next() {
        Some(record) => Ok(record?.iter().map(str::to_string).collect()),
        None => Err(HarnessError::EmptyRow(row)),
    }
}
