//! Named, indexed time series.

use crate::error::IoError;

/// A single named column of values with its row index.
///
/// The index is kept as the raw text of the first column so dates, lags and
/// plain counters pass through unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    name: String,
    unit: Option<String>,
    index: Vec<String>,
    values: Vec<f64>,
}

impl Series {
    /// Creates a series from an index and matching values.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::LengthMismatch`] if the lengths differ.
    pub fn new(
        name: impl Into<String>,
        index: Vec<String>,
        values: Vec<f64>,
    ) -> Result<Self, IoError> {
        if index.len() != values.len() {
            return Err(IoError::LengthMismatch {
                index: index.len(),
                values: values.len(),
            });
        }
        Ok(Self {
            name: name.into(),
            unit: None,
            index,
            values,
        })
    }

    /// Creates a series indexed by the time steps `1..=n`.
    pub fn from_steps(name: impl Into<String>, values: Vec<f64>) -> Self {
        let index = (1..=values.len()).map(|t| t.to_string()).collect();
        Self {
            name: name.into(),
            unit: None,
            index,
            values,
        }
    }

    /// Sets the unit written in the first header row.
    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    /// Returns a series with the same index and unit but new values.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::LengthMismatch`] if `values` has a different length.
    pub fn with_values(
        &self,
        name: impl Into<String>,
        values: Vec<f64>,
    ) -> Result<Self, IoError> {
        let mut series = Self::new(name, self.index.clone(), values)?;
        series.unit = self.unit.clone();
        Ok(series)
    }

    /// Returns the column name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the unit, if set.
    pub fn unit(&self) -> Option<&str> {
        self.unit.as_deref()
    }

    /// Returns the row index.
    pub fn index(&self) -> &[String] {
        &self.index
    }

    /// Returns the values.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Returns the number of rows.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if the series has no rows.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the number of missing (NaN) values.
    pub fn missing(&self) -> usize {
        self.values.iter().filter(|v| v.is_nan()).count()
    }

    /// Consumes self and returns the values.
    pub fn into_values(self) -> Vec<f64> {
        self.values
    }
}
