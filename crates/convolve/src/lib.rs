//! # transep-convolve
//!
//! Convolution engines combining an input signal with sampled transfer
//! function densities.
//!
//! - [`convolution_integral`]: fast path. Linear convolution (FFT or direct),
//!   centered trim to the input length, `dτ` scaling, time reversal.
//! - [`convolution_integral_explicit`]: `O(n²)` superposition sum without
//!   scaling or reversal, used as the reference path.
//!
//! Both require kernel samples of the same length as the input.
//!
//! ```
//! use transep_convolve::{LinearMethod, convolution_integral, convolution_integral_explicit};
//!
//! let input = [0.0, 10.0, 0.0, 0.0];
//! let kernel = [0.5, 0.25, 0.125, 0.0625];
//! let fast = convolution_integral(&input, &kernel, 1.0, LinearMethod::Fft)?;
//! let explicit = convolution_integral_explicit(&input, &kernel)?;
//! assert_eq!(fast.len(), 4);
//! assert_eq!(explicit, vec![0.0, 5.0, 2.5, 1.25]);
//! # Ok::<(), transep_convolve::ConvolveError>(())
//! ```

mod error;
mod integral;
mod linear;

pub use error::ConvolveError;
pub use integral::{convolution_integral, convolution_integral_explicit};
pub use linear::{LinearMethod, linear_convolve};
