//! Full linear convolution backends.

use num_complex::Complex;
use rustfft::FftPlanner;
use tracing::debug;

/// Algorithm used to compute the full linear convolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LinearMethod {
    /// Direct double sum, `O(n·m)`. Exact zeros stay exact.
    #[default]
    Direct,
    /// Zero-padded FFT product, `O(n log n)`. Leaves rounding noise of
    /// either sign where the exact result is zero.
    Fft,
}

/// Full linear convolution of `signal` and `kernel`.
///
/// The result has `signal.len() + kernel.len() - 1` samples, or none if
/// either operand is empty.
pub fn linear_convolve(signal: &[f64], kernel: &[f64], method: LinearMethod) -> Vec<f64> {
    if signal.is_empty() || kernel.is_empty() {
        return Vec::new();
    }
    match method {
        LinearMethod::Fft => fft_convolve(signal, kernel),
        LinearMethod::Direct => direct_convolve(signal, kernel),
    }
}

/// The centered `n`-sample window of a full convolution of two length-`n`
/// operands, starting at index `(n - 1) / 2`.
///
/// # Panics
///
/// Panics if `full` is shorter than `(n - 1) / 2 + n`.
pub(crate) fn same_window(full: &[f64], n: usize) -> &[f64] {
    if n == 0 {
        return &[];
    }
    let start = (n - 1) / 2;
    &full[start..start + n]
}

fn direct_convolve(signal: &[f64], kernel: &[f64]) -> Vec<f64> {
    let mut output = vec![0.0; signal.len() + kernel.len() - 1];
    for (i, &s) in signal.iter().enumerate() {
        for (j, &k) in kernel.iter().enumerate() {
            output[i + j] += s * k;
        }
    }
    output
}

fn fft_convolve(signal: &[f64], kernel: &[f64]) -> Vec<f64> {
    let output_len = signal.len() + kernel.len() - 1;
    let npad = output_len.next_power_of_two();
    debug!(output_len, npad, "fft convolution");

    let pad = |x: &[f64]| -> Vec<Complex<f64>> {
        x.iter()
            .map(|&v| Complex::new(v, 0.0))
            .chain(std::iter::repeat_n(Complex::new(0.0, 0.0), npad - x.len()))
            .collect()
    };
    let mut signal_fft = pad(signal);
    let mut kernel_fft = pad(kernel);

    let mut planner = FftPlanner::new();
    let fft_forward = planner.plan_fft_forward(npad);
    let fft_inverse = planner.plan_fft_inverse(npad);

    fft_forward.process(&mut signal_fft);
    fft_forward.process(&mut kernel_fft);

    for (s, k) in signal_fft.iter_mut().zip(&kernel_fft) {
        *s *= *k;
    }

    fft_inverse.process(&mut signal_fft);

    // rustfft is unnormalized
    let norm = 1.0 / npad as f64;
    signal_fft[..output_len].iter().map(|c| c.re * norm).collect()
}
