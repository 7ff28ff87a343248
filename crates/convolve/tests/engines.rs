//! Integration tests for the fast and explicit convolution engines.

use approx::assert_relative_eq;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use transep_convolve::{
    ConvolveError, LinearMethod, convolution_integral, convolution_integral_explicit,
    linear_convolve,
};

fn random_signal(n: usize, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n).map(|_| rng.random_range(0.0..50.0)).collect()
}

/// Exponentially decaying kernel with a little noise, always positive.
fn random_kernel(n: usize, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|i| (-(i as f64) / 7.0).exp() * rng.random_range(0.5..1.5))
        .collect()
}

fn impulse(n: usize, at: usize, height: f64) -> Vec<f64> {
    let mut x = vec![0.0; n];
    x[at] = height;
    x
}

#[test]
fn fast_impulse_response_is_reversed_centered_kernel() {
    for n in [1, 2, 3, 4, 9, 10, 64, 101] {
        let kernel = random_kernel(n, n as u64);
        let dtau = 0.5;
        let out =
            convolution_integral(&impulse(n, 0, 1.0), &kernel, dtau, LinearMethod::Fft).unwrap();
        assert_eq!(out.len(), n);

        let h = (n - 1) / 2;
        for (m, &o) in out.iter().enumerate() {
            let expected = if m >= h { dtau * kernel[n - 1 + h - m] } else { 0.0 };
            assert_relative_eq!(o, expected, epsilon = 1e-12);
        }
    }
}

#[test]
fn explicit_impulse_response_is_shifted_kernel() {
    let n = 50;
    let kernel = random_kernel(n, 5);
    let out = convolution_integral_explicit(&impulse(n, 1, 1.0), &kernel).unwrap();
    assert_eq!(out[0], 0.0);
    for k in 0..n - 1 {
        assert_eq!(out[k + 1], kernel[k]);
    }
}

#[test]
fn explicit_ignores_first_sample() {
    let n = 20;
    let kernel = random_kernel(n, 1);
    let out = convolution_integral_explicit(&impulse(n, 0, 100.0), &kernel).unwrap();
    assert!(out.iter().all(|&v| v == 0.0));
}

#[test]
fn output_length_equals_input_length() {
    for n in 1..=40 {
        let x = random_signal(n, n as u64);
        let g = random_kernel(n, 100 + n as u64);
        assert_eq!(
            convolution_integral(&x, &g, 1.0, LinearMethod::Fft).unwrap().len(),
            n
        );
        assert_eq!(convolution_integral_explicit(&x, &g).unwrap().len(), n);
    }
}

#[test]
fn fast_engine_backends_agree() {
    for n in [1, 2, 7, 33, 128, 365] {
        let x = random_signal(n, 1);
        let g = random_kernel(n, 2);
        let fft = convolution_integral(&x, &g, 1.0, LinearMethod::Fft).unwrap();
        let direct = convolution_integral(&x, &g, 1.0, LinearMethod::Direct).unwrap();
        for (a, b) in fft.iter().zip(&direct) {
            assert_relative_eq!(a, b, epsilon = 1e-9, max_relative = 1e-9);
        }
    }
}

#[test]
fn explicit_engine_equals_causal_convolution_when_first_sample_is_zero() {
    let n = 200;
    let mut x = random_signal(n, 9);
    x[0] = 0.0;
    let g = random_kernel(n, 10);

    let explicit = convolution_integral_explicit(&x, &g).unwrap();
    let causal = linear_convolve(&x, &g, LinearMethod::Fft);
    for (a, b) in explicit.iter().zip(&causal[..n]) {
        assert_relative_eq!(a, b, epsilon = 1e-9, max_relative = 1e-9);
    }
}

#[test]
fn both_engines_are_linear() {
    let n = 150;
    let x1 = random_signal(n, 21);
    let x2 = random_signal(n, 22);
    let g = random_kernel(n, 23);
    let (a, b) = (2.5, -0.75);
    let combined: Vec<f64> = x1.iter().zip(&x2).map(|(u, v)| a * u + b * v).collect();

    let fast = |x: &[f64]| convolution_integral(x, &g, 1.0, LinearMethod::Fft).unwrap();
    let (y, y1, y2) = (fast(&combined), fast(&x1), fast(&x2));
    for i in 0..n {
        assert_relative_eq!(y[i], a * y1[i] + b * y2[i], epsilon = 1e-8);
    }

    let explicit = |x: &[f64]| convolution_integral_explicit(x, &g).unwrap();
    let (y, y1, y2) = (explicit(&combined), explicit(&x1), explicit(&x2));
    for i in 0..n {
        assert_relative_eq!(y[i], a * y1[i] + b * y2[i], epsilon = 1e-8);
    }
}

#[test]
fn fast_engine_scales_with_time_step() {
    let n = 30;
    let x = random_signal(n, 31);
    let g = random_kernel(n, 32);
    let unit = convolution_integral(&x, &g, 1.0, LinearMethod::Direct).unwrap();
    let scaled = convolution_integral(&x, &g, 0.25, LinearMethod::Direct).unwrap();
    for (u, s) in unit.iter().zip(&scaled) {
        assert_relative_eq!(*s, 0.25 * u, max_relative = 1e-12);
    }
}

#[test]
fn mismatched_lengths_fail_fast() {
    let x = random_signal(10, 1);
    let g = random_kernel(9, 2);
    assert_eq!(
        convolution_integral(&x, &g, 1.0, LinearMethod::Fft),
        Err(ConvolveError::LengthMismatch {
            input: 10,
            kernel: 9
        })
    );
    assert_eq!(
        convolution_integral_explicit(&x, &g),
        Err(ConvolveError::LengthMismatch {
            input: 10,
            kernel: 9
        })
    );
}
