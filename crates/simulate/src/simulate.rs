//! Simulation entry points.

use tracing::debug;
use transep_convolve::{convolution_integral, convolution_integral_explicit};
use transep_kernel::TransferFunction;
use transep_loss::effective_precipitation;

use crate::config::{Engine, SimulationConfig};
use crate::error::SimulateError;
use crate::result::SimulationResult;

fn validate_input(input: &[f64]) -> Result<(), SimulateError> {
    if input.is_empty() {
        return Err(SimulateError::EmptyInput);
    }
    if let Some((index, &value)) = input.iter().enumerate().find(|(_, v)| !v.is_finite()) {
        return Err(SimulateError::NonFiniteInput { index, value });
    }
    Ok(())
}

/// Runs a transport simulation.
///
/// Applies the optional loss filter, samples `kernel` on lags `1..=n` and
/// convolves with the configured engine.
///
/// # Errors
///
/// Returns [`SimulateError`] for an invalid configuration, an empty input or
/// an input containing NaN or infinity.
#[tracing::instrument(
    skip_all,
    fields(n = input.len(), family = %kernel.family(), engine = ?config.engine())
)]
pub fn run(
    input: &[f64],
    kernel: &TransferFunction,
    config: &SimulationConfig,
) -> Result<SimulationResult, SimulateError> {
    config.validate()?;
    validate_input(input)?;

    let effective = match config.loss() {
        Some(loss) => effective_precipitation(input, loss),
        None => input.to_vec(),
    };
    let samples = kernel.sample_n(input.len());

    let output = match config.engine() {
        Engine::Fast => {
            convolution_integral(&effective, &samples, config.dtau(), config.method())?
        }
        Engine::Explicit => {
            let mut out = convolution_integral_explicit(&effective, &samples)?;
            if config.scale_explicit() {
                out.iter_mut().for_each(|v| *v *= config.dtau());
            }
            out
        }
    };
    debug!(
        output_sum = output.iter().sum::<f64>(),
        kernel_sum = samples.iter().sum::<f64>(),
        "simulation complete"
    );

    Ok(SimulationResult::new(output, samples, effective))
}

/// Simulates the response of `input` with the fast engine.
///
/// # Example
///
/// ```
/// use transep_simulate::{TransferFunction, simulate};
///
/// let kernel = TransferFunction::dispersion(0.1, 10.0)?;
/// let output = simulate(&[30.0, 0.0, 0.0], &kernel, 1.0)?;
/// assert_eq!(output.len(), 3);
/// # Ok::<(), transep_simulate::SimulateError>(())
/// ```
pub fn simulate(
    input: &[f64],
    kernel: &TransferFunction,
    dtau: f64,
) -> Result<Vec<f64>, SimulateError> {
    let config = SimulationConfig::new().with_dtau(dtau);
    run(input, kernel, &config).map(SimulationResult::into_output)
}

/// Simulates the response of `input` with the explicit engine.
///
/// The time step is accepted for symmetry with [`simulate`] but is not
/// applied; multiply the output by `dtau`, or use [`run`] with
/// [`SimulationConfig::with_scale_explicit`], for unit-consistent results.
pub fn simulate_explicit(
    input: &[f64],
    kernel: &TransferFunction,
    _dtau: f64,
) -> Result<Vec<f64>, SimulateError> {
    let config = SimulationConfig::new().with_engine(Engine::Explicit);
    run(input, kernel, &config).map(SimulationResult::into_output)
}
