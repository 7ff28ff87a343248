//! Error types for transep-io.

use std::path::PathBuf;

/// Error type for all fallible operations in the transep-io crate.
///
/// Covers file system failures, malformed delimited text and invalid
/// reader or writer settings.
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    /// Returned when a required file does not exist on disk.
    #[error("file not found: {}", path.display())]
    FileNotFound {
        /// Path that could not be found.
        path: PathBuf,
    },

    /// Wraps a read or write failure of the underlying file.
    #[error("i/o error on {}: {source}", path.display())]
    Io {
        /// Path being read or written.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// Wraps a tokenizing or writing failure of the delimited text layer.
    #[error("malformed delimited text in {}: {source}", path.display())]
    Csv {
        /// Path being read or written.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: csv::Error,
    },

    /// Returned when the file has no header row.
    #[error("no header row in {}", path.display())]
    MissingHeader {
        /// Path to the file that was inspected.
        path: PathBuf,
    },

    /// Returned when the requested value column is not in the header.
    #[error("column '{name}' not found in {}", path.display())]
    MissingColumn {
        /// Name of the missing column.
        name: String,
        /// Path to the file that was inspected.
        path: PathBuf,
    },

    /// Returned when a data row has fewer fields than the value column needs.
    #[error("line {line}: expected at least {expected} fields, got {got}")]
    ShortRow {
        /// One-based line number in the file.
        line: usize,
        /// Number of fields required.
        expected: usize,
        /// Number of fields found.
        got: usize,
    },

    /// Returned when a value field is not a number.
    #[error("line {line}: cannot parse '{field}' as a number")]
    Parse {
        /// One-based line number in the file.
        line: usize,
        /// The offending field.
        field: String,
    },

    /// Returned when index and value vectors differ in length.
    #[error("index has {index} entries but values has {values}")]
    LengthMismatch {
        /// Length of the index.
        index: usize,
        /// Length of the values.
        values: usize,
    },

    /// Returned when a reader or writer setting is invalid.
    #[error("invalid configuration: {reason}")]
    InvalidConfig {
        /// Description of the problem.
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_file_not_found() {
        let err = IoError::FileNotFound {
            path: PathBuf::from("/tmp/missing.csv"),
        };
        assert_eq!(err.to_string(), "file not found: /tmp/missing.csv");
    }

    #[test]
    fn display_io() {
        let err = IoError::Io {
            path: PathBuf::from("/tmp/out.csv"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(err.to_string(), "i/o error on /tmp/out.csv: denied");
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn display_csv() {
        let io = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "truncated");
        let err = IoError::Csv {
            path: PathBuf::from("/tmp/in.csv"),
            source: csv::Error::from(io),
        };
        assert!(
            err.to_string()
                .starts_with("malformed delimited text in /tmp/in.csv: ")
        );
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn display_missing_column() {
        let err = IoError::MissingColumn {
            name: "d18O".to_string(),
            path: PathBuf::from("/data/in.csv"),
        };
        assert_eq!(err.to_string(), "column 'd18O' not found in /data/in.csv");
    }

    #[test]
    fn display_short_row() {
        let err = IoError::ShortRow {
            line: 7,
            expected: 3,
            got: 2,
        };
        assert_eq!(
            err.to_string(),
            "line 7: expected at least 3 fields, got 2"
        );
    }

    #[test]
    fn display_parse() {
        let err = IoError::Parse {
            line: 4,
            field: "abc".to_string(),
        };
        assert_eq!(err.to_string(), "line 4: cannot parse 'abc' as a number");
    }

    #[test]
    fn display_length_mismatch() {
        let err = IoError::LengthMismatch {
            index: 3,
            values: 2,
        };
        assert_eq!(err.to_string(), "index has 3 entries but values has 2");
    }

    #[test]
    fn display_invalid_config() {
        let err = IoError::InvalidConfig {
            reason: "bad delimiter".to_string(),
        };
        assert_eq!(err.to_string(), "invalid configuration: bad delimiter");
    }

    #[test]
    fn error_is_send_sync_and_std_error() {
        fn assert_bounds<T: Send + Sync + std::error::Error>() {}
        assert_bounds::<IoError>();
    }
}
