//! Result type of a transport simulation.

/// Output of [`run`](crate::run) together with its intermediate signals.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationResult {
    output: Vec<f64>,
    kernel: Vec<f64>,
    effective_input: Vec<f64>,
}

impl SimulationResult {
    /// Creates a new simulation result.
    pub fn new(output: Vec<f64>, kernel: Vec<f64>, effective_input: Vec<f64>) -> Self {
        Self {
            output,
            kernel,
            effective_input,
        }
    }

    /// Simulated output signal, same length as the input.
    pub fn output(&self) -> &[f64] {
        &self.output
    }

    /// Consumes self and returns the owned output signal.
    pub fn into_output(self) -> Vec<f64> {
        self.output
    }

    /// Kernel densities sampled at lags `1..=n`.
    pub fn kernel(&self) -> &[f64] {
        &self.kernel
    }

    /// Input after the loss filter; equal to the raw input when no loss
    /// filter is configured.
    pub fn effective_input(&self) -> &[f64] {
        &self.effective_input
    }

    /// Number of time steps.
    pub fn len(&self) -> usize {
        self.output.len()
    }

    /// Returns `true` if the result holds no time steps.
    pub fn is_empty(&self) -> bool {
        self.output.is_empty()
    }
}
