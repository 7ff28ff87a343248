//! Error types for the transep-simulate crate.

use transep_convolve::ConvolveError;
use transep_kernel::KernelError;
use transep_loss::LossError;

/// Error type for all fallible operations in the transep-simulate crate.
///
/// Wraps kernel, loss filter and convolution errors, and adds input and
/// configuration validation failures.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SimulateError {
    /// Transfer-function parameter error.
    #[error(transparent)]
    Kernel(#[from] KernelError),

    /// Loss filter parameter error.
    #[error(transparent)]
    Loss(#[from] LossError),

    /// Convolution engine error.
    #[error(transparent)]
    Convolve(#[from] ConvolveError),

    /// Returned when the input signal is empty.
    #[error("input signal is empty")]
    EmptyInput,

    /// Returned when the input signal contains NaN or infinity.
    #[error("input contains non-finite value {value} at index {index}")]
    NonFiniteInput {
        /// Position of the first offending sample.
        index: usize,
        /// The offending sample.
        value: f64,
    },

    /// Returned when a configuration parameter is invalid.
    #[error("invalid configuration: {reason}")]
    InvalidConfig {
        /// Description of the problem.
        reason: String,
    },
}
