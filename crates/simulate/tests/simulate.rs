//! Integration tests for the simulation facade.

use approx::assert_relative_eq;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use transep_simulate::{
    Engine, LinearMethod, LossParams, SimulateError, SimulationConfig, TransferFunction, run,
    simulate, simulate_explicit,
};

/// The five kernels with the parameter sets of the reference runs, paired
/// with the fast-engine response to the input `[30, 0, 0]`.
fn reference_cases() -> Vec<(TransferFunction, [f64; 3])> {
    vec![
        (
            TransferFunction::dispersion(0.1, 10.0).unwrap(),
            [0.0, 0.2744513088064001, 0.010037266932366402],
        ),
        (
            TransferFunction::exponential_piston(100.0, 0.1).unwrap(),
            [0.0, 0.012196967821929904, 0.012195870144222168],
        ),
        (
            TransferFunction::gamma(1.0, 1.0).unwrap(),
            [0.0, 1.4936120510359183, 4.060058497098381],
        ),
        (
            TransferFunction::linear_reservoir(40.0).unwrap(),
            [0.0, 0.6958076147464146, 0.7134220683755356],
        ),
        (
            TransferFunction::parallel_linear_reservoir(60.0, 10.0, 0.1).unwrap(),
            [0.0, 28.711566730000897, 29.213741435359466],
        ),
    ]
}

fn all_kernels() -> Vec<TransferFunction> {
    reference_cases().into_iter().map(|(k, _)| k).collect()
}

/// Valid parameter sets spanning every family.
fn parameter_grid() -> Vec<TransferFunction> {
    let mut kernels = Vec::new();
    for &mtt in &[1.0, 10.0, 40.0, 100.0, 365.0] {
        for &p_d in &[0.01, 0.1, 1.0] {
            kernels.push(TransferFunction::dispersion(p_d, mtt).unwrap());
        }
        kernels.push(TransferFunction::linear_reservoir(mtt).unwrap());
        for &eta in &[0.1, 1.0, 1.5, 2.0, 3.0] {
            kernels.push(TransferFunction::exponential_piston(mtt, eta).unwrap());
        }
        for &frac in &[0.0, 0.1, 0.5, 1.0] {
            kernels.push(
                TransferFunction::parallel_linear_reservoir(mtt.max(1.0), mtt / 10.0, frac)
                    .unwrap(),
            );
        }
    }
    for &alpha in &[0.5, 1.0, 2.0, 4.5] {
        for &beta in &[0.5, 1.0, 10.0, 50.0] {
            kernels.push(TransferFunction::gamma(alpha, beta).unwrap());
        }
    }
    kernels
}

fn random_input(n: usize, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| {
            if rng.random_bool(0.5) {
                0.0
            } else {
                rng.random_range(0.0..30.0)
            }
        })
        .collect()
}

#[test]
fn reference_pulse_fast_engine() {
    let input = [30.0, 0.0, 0.0];
    for (kernel, expected) in reference_cases() {
        let output = simulate(&input, &kernel, 1.0).unwrap();
        assert_eq!(output.len(), 3);
        for (o, e) in output.iter().zip(expected) {
            assert_relative_eq!(*o, e, epsilon = 1e-12, max_relative = 1e-9);
        }
    }
}

#[test]
fn reference_pulse_explicit_engine_is_silent() {
    // A pulse in the first step never reaches the explicit superposition sum.
    let input = [30.0, 0.0, 0.0];
    for kernel in all_kernels() {
        assert_eq!(simulate_explicit(&input, &kernel, 1.0).unwrap(), vec![0.0; 3]);
    }
}

#[test]
fn impulse_reproduces_kernel() {
    let n = 120;
    for kernel in all_kernels() {
        let g = kernel.sample_n(n);

        let mut at_zero = vec![0.0; n];
        at_zero[0] = 1.0;
        let fast = simulate(&at_zero, &kernel, 1.0).unwrap();
        let h = (n - 1) / 2;
        for m in h..n {
            assert_relative_eq!(fast[m], g[n - 1 + h - m], epsilon = 1e-12, max_relative = 1e-9);
        }

        let mut at_one = vec![0.0; n];
        at_one[1] = 1.0;
        let explicit = simulate_explicit(&at_one, &kernel, 1.0).unwrap();
        assert_eq!(&explicit[1..], &g[..n - 1]);
    }
}

#[test]
fn output_length_equals_input_length() {
    for kernel in all_kernels() {
        for n in [1, 2, 17, 365, 400] {
            let input = random_input(n, n as u64);
            assert_eq!(simulate(&input, &kernel, 1.0).unwrap().len(), n);
            assert_eq!(simulate_explicit(&input, &kernel, 1.0).unwrap().len(), n);
        }
    }
}

#[test]
fn non_negative_input_gives_non_negative_output() {
    let mut burst = vec![0.0; 400];
    burst[..5].fill(2500.0);
    let inputs = [burst, random_input(400, 7), random_input(97, 8)];

    for kernel in parameter_grid() {
        for input in &inputs {
            let output = simulate(input, &kernel, 1.0).unwrap();
            if let Some((i, v)) = output.iter().enumerate().find(|(_, v)| **v < 0.0) {
                panic!("{kernel:?} produced {v} at step {i}");
            }
        }
    }
}

#[test]
fn quiet_steps_stay_exactly_zero_after_an_early_burst() {
    // Reversal maps the quiet tail of the window onto the first steps.
    let mut burst = vec![0.0; 400];
    burst[..5].fill(2500.0);
    let kernel = TransferFunction::exponential_piston(10.0, 2.0).unwrap();
    let output = simulate(&burst, &kernel, 1.0).unwrap();
    let h = (burst.len() - 1) / 2;
    assert!(output[..h - 5].iter().all(|v| *v == 0.0));
}

#[test]
fn simulate_is_linear() {
    let n = 200;
    let x1 = random_input(n, 1);
    let x2 = random_input(n, 2);
    let (a, b) = (3.0, 0.5);
    let mixed: Vec<f64> = x1.iter().zip(&x2).map(|(u, v)| a * u + b * v).collect();

    for kernel in all_kernels() {
        let y = simulate(&mixed, &kernel, 1.0).unwrap();
        let y1 = simulate(&x1, &kernel, 1.0).unwrap();
        let y2 = simulate(&x2, &kernel, 1.0).unwrap();
        for i in 0..n {
            let expected = a * y1[i] + b * y2[i];
            assert_relative_eq!(y[i], expected, epsilon = 1e-9, max_relative = 1e-9);
        }
    }
}

#[test]
fn explicit_ignores_time_step_unless_asked() {
    let input = random_input(50, 3);
    let kernel = TransferFunction::linear_reservoir(10.0).unwrap();

    let unit = simulate_explicit(&input, &kernel, 1.0).unwrap();
    let half = simulate_explicit(&input, &kernel, 0.5).unwrap();
    assert_eq!(unit, half);

    let config = SimulationConfig::new()
        .with_engine(Engine::Explicit)
        .with_dtau(0.5)
        .with_scale_explicit(true);
    let scaled = run(&input, &kernel, &config).unwrap();
    for (s, u) in scaled.output().iter().zip(&unit) {
        assert_relative_eq!(*s, 0.5 * u, max_relative = 1e-12);
    }
}

#[test]
fn fast_engine_applies_time_step() {
    let input = random_input(64, 4);
    let kernel = TransferFunction::gamma(2.0, 5.0).unwrap();
    let unit = simulate(&input, &kernel, 1.0).unwrap();
    let double = simulate(&input, &kernel, 2.0).unwrap();
    for (d, u) in double.iter().zip(&unit) {
        assert_relative_eq!(*d, 2.0 * u, epsilon = 1e-12, max_relative = 1e-9);
    }
}

#[test]
fn run_exposes_kernel_and_effective_input() {
    let input = random_input(30, 5);
    let kernel = TransferFunction::dispersion(0.2, 15.0).unwrap();
    let loss = LossParams::new(1.0, 1.0, 0.0).unwrap();
    let config = SimulationConfig::new()
        .with_method(LinearMethod::Direct)
        .with_loss(loss);

    let result = run(&input, &kernel, &config).unwrap();
    assert_eq!(result.len(), 30);
    assert!(!result.is_empty());
    assert_eq!(result.kernel(), kernel.sample_n(30).as_slice());
    for (e, p) in result.effective_input().iter().zip(&input) {
        assert_relative_eq!(*e, p * p, max_relative = 1e-12);
    }

    let squared: Vec<f64> = input.iter().map(|p| p * p).collect();
    let direct = run(
        &squared,
        &kernel,
        &SimulationConfig::new().with_method(LinearMethod::Direct),
    )
    .unwrap();
    for (a, b) in result.output().iter().zip(direct.output()) {
        assert_relative_eq!(a, b, max_relative = 1e-12);
    }
}

#[test]
fn without_loss_effective_input_is_raw_input() {
    let input = random_input(10, 6);
    let kernel = TransferFunction::linear_reservoir(3.0).unwrap();
    let result = run(&input, &kernel, &SimulationConfig::new()).unwrap();
    assert_eq!(result.effective_input(), input.as_slice());
}

#[test]
fn rejects_empty_input() {
    let kernel = TransferFunction::linear_reservoir(3.0).unwrap();
    assert_eq!(simulate(&[], &kernel, 1.0), Err(SimulateError::EmptyInput));
    assert_eq!(
        simulate_explicit(&[], &kernel, 1.0),
        Err(SimulateError::EmptyInput)
    );
}

#[test]
fn rejects_non_finite_input() {
    let kernel = TransferFunction::linear_reservoir(3.0).unwrap();
    let err = simulate(&[1.0, f64::NAN, 2.0], &kernel, 1.0).unwrap_err();
    assert!(matches!(err, SimulateError::NonFiniteInput { index: 1, .. }));
}

#[test]
fn rejects_invalid_time_step() {
    let kernel = TransferFunction::linear_reservoir(3.0).unwrap();
    assert!(matches!(
        simulate(&[1.0, 2.0], &kernel, 0.0),
        Err(SimulateError::InvalidConfig { .. })
    ));
}
