//! Delimited text writer configuration and orchestration.

use std::fs::File;
use std::path::Path;

use csv::{Terminator, WriterBuilder};
use tracing::info;

use crate::error::IoError;
use crate::reader::validate_delimiter;
use crate::series::Series;

/// Configuration for writing a series to delimited text.
#[derive(Debug, Clone, PartialEq)]
pub struct WriterConfig {
    /// Field separator.
    delimiter: char,
    /// Fixed number of decimals; `None` writes the shortest exact form.
    precision: Option<usize>,
}

impl Default for WriterConfig {
    fn default() -> Self {
        Self {
            delimiter: ';',
            precision: None,
        }
    }
}

impl WriterConfig {
    /// Sets the field separator.
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Sets a fixed number of decimals, or `None` for the shortest form.
    pub fn with_precision(mut self, precision: Option<usize>) -> Self {
        self.precision = precision;
        self
    }

    /// Returns the field separator.
    pub fn delimiter(&self) -> char {
        self.delimiter
    }

    /// Returns the fixed number of decimals, if set.
    pub fn precision(&self) -> Option<usize> {
        self.precision
    }

    /// Validates this configuration.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::InvalidConfig`] if the delimiter is not ASCII, is a
    /// line break or a quote.
    pub fn validate(&self) -> Result<(), IoError> {
        validate_delimiter(self.delimiter)
    }

    fn format(&self, value: f64) -> String {
        match (value.is_nan(), self.precision) {
            (true, _) => String::new(),
            (false, Some(p)) => format!("{value:.p$}"),
            (false, None) => value.to_string(),
        }
    }
}

/// Write a series to a delimited text file.
///
/// The file starts with two header rows, the unit and then the column name,
/// each preceded by an empty index field. Every following row holds the
/// index and the value. NaN is written as an empty field. Fields containing
/// the delimiter or a quote are quoted.
///
/// # Errors
///
/// Returns [`IoError::InvalidConfig`] if the configuration is invalid,
/// [`IoError::Io`] if the file cannot be created or flushed, or
/// [`IoError::Csv`] if a record cannot be written.
#[tracing::instrument(skip(series, config), fields(path = %path.display(), rows = series.len()))]
pub fn write_series(path: &Path, series: &Series, config: &WriterConfig) -> Result<(), IoError> {
    config.validate()?;

    let file = File::create(path).map_err(|source| IoError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mut wtr = WriterBuilder::new()
        .delimiter(config.delimiter as u8)
        .has_headers(false)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(file);
    let csv_err = |source: csv::Error| IoError::Csv {
        path: path.to_path_buf(),
        source,
    };

    wtr.write_record(["", series.unit().unwrap_or_default()])
        .map_err(csv_err)?;
    wtr.write_record(["", series.name()]).map_err(csv_err)?;
    for (index, &value) in series.index().iter().zip(series.values()) {
        wtr.write_record([index.as_str(), config.format(value).as_str()])
            .map_err(csv_err)?;
    }
    wtr.flush().map_err(|source| IoError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    info!("wrote series");
    Ok(())
}
