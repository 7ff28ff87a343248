//! Error types for the transep-convolve crate.

/// Error type for all fallible operations in the transep-convolve crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConvolveError {
    /// Returned when the input signal is empty.
    #[error("input signal is empty")]
    EmptyInput,

    /// Returned when the kernel samples and the input differ in length.
    #[error("length mismatch: input has {input} samples, kernel has {kernel}")]
    LengthMismatch {
        /// Length of the input signal.
        input: usize,
        /// Length of the kernel sample array.
        kernel: usize,
    },

    /// Returned when the time-step width is not finite and positive.
    #[error("invalid time step: {dtau} (must be finite and > 0)")]
    InvalidTimeStep {
        /// The rejected time-step width.
        dtau: f64,
    },
}
