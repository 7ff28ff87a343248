//! Error types for the transep-loss crate.

/// Error type for all fallible operations in the transep-loss crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LossError {
    /// Returned when `b2` is zero, which makes the retention factor `1 - 1/b2` undefined.
    #[error("b2 must be non-zero")]
    ZeroDecay,

    /// Returned when a parameter is NaN.
    #[error("loss parameter {name} is NaN")]
    NanParameter {
        /// Parameter name.
        name: &'static str,
    },
}
