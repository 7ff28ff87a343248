//! Error types for the transep-kernel crate.

use crate::transfer::KernelFamily;

/// Error type for all fallible operations in the transep-kernel crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum KernelError {
    /// Returned when a kernel parameter lies outside its valid domain.
    #[error("invalid {kernel} parameter {name}={value}: {reason}")]
    InvalidParameter {
        /// Kernel family the parameter belongs to.
        kernel: KernelFamily,
        /// Parameter name.
        name: &'static str,
        /// The rejected value.
        value: f64,
        /// Domain the value violates.
        reason: &'static str,
    },

    /// Returned when a kernel family name cannot be parsed.
    #[error("unknown kernel family: {name:?}")]
    UnknownFamily {
        /// The name that failed to parse.
        name: String,
    },
}

/// Rejects values that are not finite and strictly positive.
pub(crate) fn require_positive(
    kernel: KernelFamily,
    name: &'static str,
    value: f64,
) -> Result<f64, KernelError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(KernelError::InvalidParameter {
            kernel,
            name,
            value,
            reason: "must be finite and > 0",
        })
    }
}
