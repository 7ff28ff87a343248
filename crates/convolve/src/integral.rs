//! Convolution integrals of an input signal with sampled kernel densities.
//!
//! Both engines evaluate
//!
//! ```text
//! C_out(t) = ∫ C_in(t - τ) g(τ) dτ
//! ```
//!
//! on a unit-spaced grid, with the kernel sampled at lags `1..=n`.

use tracing::debug;

use crate::error::ConvolveError;
use crate::linear::{LinearMethod, linear_convolve, same_window};

fn check_operands(input: &[f64], kernel: &[f64]) -> Result<(), ConvolveError> {
    if input.is_empty() {
        return Err(ConvolveError::EmptyInput);
    }
    if kernel.len() != input.len() {
        return Err(ConvolveError::LengthMismatch {
            input: input.len(),
            kernel: kernel.len(),
        });
    }
    Ok(())
}

/// Fast convolution integral.
///
/// Convolves `input` with `kernel`, keeps the centered `n`-sample window of
/// the full result (start index `(n - 1) / 2`), multiplies by `dtau` and
/// returns the window in reverse order. The reversal is part of the
/// contract: reference outputs depend on it.
///
/// # Errors
///
/// [`ConvolveError::EmptyInput`], [`ConvolveError::LengthMismatch`] if
/// `kernel.len() != input.len()`, and [`ConvolveError::InvalidTimeStep`]
/// if `dtau` is not finite and positive.
pub fn convolution_integral(
    input: &[f64],
    kernel: &[f64],
    dtau: f64,
    method: LinearMethod,
) -> Result<Vec<f64>, ConvolveError> {
    check_operands(input, kernel)?;
    if !dtau.is_finite() || dtau <= 0.0 {
        return Err(ConvolveError::InvalidTimeStep { dtau });
    }
    let n = input.len();
    debug!(n, ?method, dtau, "fast convolution integral");

    let full = linear_convolve(input, kernel, method);
    let mut output: Vec<f64> = same_window(&full, n).iter().map(|v| v * dtau).collect();
    output.reverse();
    Ok(output)
}

/// Explicit convolution integral by superposition.
///
/// For every step `i` in `1..n` the response `input[i]·kernel[..n-i]` is
/// added to `output[i..]`. The first input sample has no lag-0 kernel value
/// to pair with and does not contribute. No time-step scaling is applied.
///
/// # Errors
///
/// [`ConvolveError::EmptyInput`] and [`ConvolveError::LengthMismatch`].
pub fn convolution_integral_explicit(
    input: &[f64],
    kernel: &[f64],
) -> Result<Vec<f64>, ConvolveError> {
    check_operands(input, kernel)?;
    let n = input.len();
    debug!(n, "explicit convolution integral");

    let mut output = vec![0.0; n];
    for (i, &x) in input.iter().enumerate().skip(1) {
        for (o, &g) in output[i..].iter_mut().zip(&kernel[..n - i]) {
            *o += x * g;
        }
    }
    Ok(output)
}
