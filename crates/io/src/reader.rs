//! Delimited text reader configuration and orchestration.

use std::fs;
use std::path::Path;

use csv::{ReaderBuilder, Trim};
use tracing::{debug, info};

use crate::error::IoError;
use crate::series::Series;

// ---------------------------------------------------------------------------
// FillPolicy
// ---------------------------------------------------------------------------

/// How missing values are replaced after reading.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FillPolicy {
    /// Keep missing values as NaN.
    None,
    /// Replace missing values with zero.
    Zero,
    /// Fill each gap from the next valid value, then fill a trailing gap
    /// from the last valid value.
    #[default]
    BackwardForward,
}

impl FillPolicy {
    fn apply(self, values: &mut [f64]) {
        match self {
            Self::None => {}
            Self::Zero => values
                .iter_mut()
                .filter(|v| v.is_nan())
                .for_each(|v| *v = 0.0),
            Self::BackwardForward => {
                let mut next = f64::NAN;
                for v in values.iter_mut().rev() {
                    if v.is_nan() {
                        *v = next;
                    } else {
                        next = *v;
                    }
                }
                let mut prev = f64::NAN;
                for v in values.iter_mut() {
                    if v.is_nan() {
                        *v = prev;
                    } else {
                        prev = *v;
                    }
                }
            }
        }
    }
}

// ---------------------------------------------------------------------------
// ReaderConfig
// ---------------------------------------------------------------------------

/// Configuration for reading a series from delimited text.
///
/// The [`Default`] implementation reads tab-separated files with `-9999`
/// as the missing-value marker and the first value column.
#[derive(Debug, Clone, PartialEq)]
pub struct ReaderConfig {
    /// Field separator.
    delimiter: char,
    /// Name of the value column; `None` selects the first column after the
    /// index.
    column: Option<String>,
    /// Numeric marker for missing values.
    na_value: f64,
    /// How missing values are filled.
    fill: FillPolicy,
    /// Lines skipped before the header row.
    skip_rows: usize,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            delimiter: '\t',
            column: None,
            na_value: -9999.0,
            fill: FillPolicy::default(),
            skip_rows: 0,
        }
    }
}

impl ReaderConfig {
    /// Set the field separator.
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Set the value column name, or `None` for the first value column.
    pub fn with_column(mut self, column: Option<impl Into<String>>) -> Self {
        self.column = column.map(Into::into);
        self
    }

    /// Set the numeric missing-value marker.
    pub fn with_na_value(mut self, na_value: f64) -> Self {
        self.na_value = na_value;
        self
    }

    /// Set the fill policy for missing values.
    pub fn with_fill(mut self, fill: FillPolicy) -> Self {
        self.fill = fill;
        self
    }

    /// Set the number of lines skipped before the header.
    pub fn with_skip_rows(mut self, skip_rows: usize) -> Self {
        self.skip_rows = skip_rows;
        self
    }

    /// Returns the field separator.
    pub fn delimiter(&self) -> char {
        self.delimiter
    }

    /// Returns the value column name, if set.
    pub fn column(&self) -> Option<&str> {
        self.column.as_deref()
    }

    /// Returns the missing-value marker.
    pub fn na_value(&self) -> f64 {
        self.na_value
    }

    /// Returns the fill policy.
    pub fn fill(&self) -> FillPolicy {
        self.fill
    }

    /// Returns the number of skipped leading lines.
    pub fn skip_rows(&self) -> usize {
        self.skip_rows
    }

    /// Validate that the configuration is internally consistent.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::InvalidConfig`] if the delimiter is not ASCII, is a
    /// line break or a quote, or the column name is empty.
    pub fn validate(&self) -> Result<(), IoError> {
        validate_delimiter(self.delimiter)?;
        if self.column.as_deref().is_some_and(|c| c.trim().is_empty()) {
            return Err(IoError::InvalidConfig {
                reason: "column name must not be empty".to_string(),
            });
        }
        Ok(())
    }
}

pub(crate) fn validate_delimiter(delimiter: char) -> Result<(), IoError> {
    if !delimiter.is_ascii() || matches!(delimiter, '\n' | '\r' | '"') {
        return Err(IoError::InvalidConfig {
            reason: format!("delimiter {delimiter:?} is not allowed"),
        });
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// read_series
// ---------------------------------------------------------------------------

/// Read one value column of a delimited text file.
///
/// The first non-skipped record is the header. Fields may be quoted. The
/// first field of every data row is kept verbatim as the index. Empty fields
/// and fields equal to the missing-value marker become NaN before the fill
/// policy is applied. Blank lines are ignored.
///
/// # Errors
///
/// Returns [`IoError::FileNotFound`] if `path` does not exist,
/// [`IoError::MissingHeader`] or [`IoError::MissingColumn`] for an unusable
/// header, [`IoError::Csv`] for malformed quoting, and
/// [`IoError::ShortRow`] or [`IoError::Parse`] for malformed data rows.
#[tracing::instrument(skip(config), fields(path = %path.display()))]
pub fn read_series(path: &Path, config: &ReaderConfig) -> Result<Series, IoError> {
    config.validate()?;

    if !path.exists() {
        return Err(IoError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let text = fs::read_to_string(path).map_err(|source| IoError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    // Leading lines are skipped verbatim, before any quote handling.
    let offset: usize = text
        .split_inclusive('\n')
        .take(config.skip_rows)
        .map(str::len)
        .sum();

    let mut rdr = ReaderBuilder::new()
        .delimiter(config.delimiter as u8)
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(text[offset..].as_bytes());

    let csv_err = |source: csv::Error| IoError::Csv {
        path: path.to_path_buf(),
        source,
    };
    let mut records = rdr
        .records()
        .filter(|r| r.as_ref().map_or(true, |rec| !rec.iter().all(str::is_empty)));

    let header = records
        .next()
        .ok_or_else(|| IoError::MissingHeader {
            path: path.to_path_buf(),
        })?
        .map_err(csv_err)?;

    let col = match config.column() {
        Some(name) => header
            .iter()
            .skip(1)
            .position(|h| h == name)
            .map(|p| p + 1),
        None => (header.len() > 1).then_some(1),
    }
    .ok_or_else(|| IoError::MissingColumn {
        name: config.column().unwrap_or("<first value column>").to_string(),
        path: path.to_path_buf(),
    })?;
    let name = header[col].to_string();
    debug!(column = %name, position = col, "resolved value column");

    let mut index = Vec::new();
    let mut values = Vec::new();
    for record in records {
        let record = record.map_err(csv_err)?;
        let line_no = record.position().map_or(0, |p| p.line() as usize) + config.skip_rows;
        if record.len() <= col {
            return Err(IoError::ShortRow {
                line: line_no,
                expected: col + 1,
                got: record.len(),
            });
        }
        index.push(record[0].to_string());
        values.push(parse_value(&record[col], config.na_value, line_no)?);
    }

    let missing = values.iter().filter(|v| v.is_nan()).count();
    config.fill.apply(&mut values);
    info!(rows = values.len(), missing, fill = ?config.fill, "read series");

    Series::new(name, index, values)
}

fn parse_value(field: &str, na_value: f64, line: usize) -> Result<f64, IoError> {
    if field.is_empty() {
        return Ok(f64::NAN);
    }
    let value: f64 = field.parse().map_err(|_| IoError::Parse {
        line,
        field: field.to_string(),
    })?;
    if value == na_value {
        Ok(f64::NAN)
    } else {
        Ok(value)
    }
}
