//! Closed set of transfer functions and lag sampling.

use std::fmt;
use std::str::FromStr;

use crate::dispersion::DispersionParams;
use crate::error::KernelError;
use crate::gamma::GammaParams;
use crate::piston::ExponentialPistonParams;
use crate::reservoir::{LinearReservoirParams, ParallelLinearReservoirParams};

/// Identifier of a transfer-function family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum KernelFamily {
    /// Dispersion model.
    Dispersion,
    /// Single linear reservoir.
    LinearReservoir,
    /// Two linear reservoirs in parallel.
    ParallelLinearReservoir,
    /// Exponential piston flow model.
    ExponentialPiston,
    /// Gamma model.
    Gamma,
}

impl KernelFamily {
    /// All families, in declaration order.
    pub const ALL: [KernelFamily; 5] = [
        KernelFamily::Dispersion,
        KernelFamily::LinearReservoir,
        KernelFamily::ParallelLinearReservoir,
        KernelFamily::ExponentialPiston,
        KernelFamily::Gamma,
    ];

    /// Stable snake_case name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dispersion => "dispersion",
            Self::LinearReservoir => "linear_reservoir",
            Self::ParallelLinearReservoir => "parallel_linear_reservoir",
            Self::ExponentialPiston => "exponential_piston",
            Self::Gamma => "gamma",
        }
    }
}

impl fmt::Display for KernelFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for KernelFamily {
    type Err = KernelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        Self::ALL
            .into_iter()
            .find(|family| family.as_str() == lower)
            .ok_or_else(|| KernelError::UnknownFamily {
                name: s.to_string(),
            })
    }
}

/// A transit-time distribution with its parameters.
///
/// Each variant carries only the parameter set of its own family, so a
/// kernel cannot be built with missing or foreign parameters.
///
/// # Example
///
/// ```
/// use transep_kernel::TransferFunction;
///
/// let kernel = TransferFunction::linear_reservoir(40.0)?;
/// let samples = kernel.sample_n(365);
/// assert_eq!(samples.len(), 365);
/// # Ok::<(), transep_kernel::KernelError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TransferFunction {
    /// Dispersion model.
    Dispersion(DispersionParams),
    /// Single linear reservoir.
    LinearReservoir(LinearReservoirParams),
    /// Two linear reservoirs in parallel.
    ParallelLinearReservoir(ParallelLinearReservoirParams),
    /// Exponential piston flow model.
    ExponentialPiston(ExponentialPistonParams),
    /// Gamma model.
    Gamma(GammaParams),
}

impl TransferFunction {
    /// Dispersion kernel with dispersion parameter `p_d` and mean travel time `mtt`.
    pub fn dispersion(p_d: f64, mtt: f64) -> Result<Self, KernelError> {
        DispersionParams::new(p_d, mtt).map(Self::Dispersion)
    }

    /// Linear reservoir kernel with mean travel time `mtt`.
    pub fn linear_reservoir(mtt: f64) -> Result<Self, KernelError> {
        LinearReservoirParams::new(mtt).map(Self::LinearReservoir)
    }

    /// Parallel linear reservoir kernel.
    pub fn parallel_linear_reservoir(
        mtt_slow: f64,
        mtt_fast: f64,
        frac_fast: f64,
    ) -> Result<Self, KernelError> {
        ParallelLinearReservoirParams::new(mtt_slow, mtt_fast, frac_fast)
            .map(Self::ParallelLinearReservoir)
    }

    /// Exponential piston kernel with mean travel time `mtt` and ratio `eta`.
    pub fn exponential_piston(mtt: f64, eta: f64) -> Result<Self, KernelError> {
        ExponentialPistonParams::new(mtt, eta).map(Self::ExponentialPiston)
    }

    /// Gamma kernel with shape `alpha` and scale `beta`.
    pub fn gamma(alpha: f64, beta: f64) -> Result<Self, KernelError> {
        GammaParams::new(alpha, beta).map(Self::Gamma)
    }

    /// Family of this kernel.
    pub fn family(&self) -> KernelFamily {
        match self {
            Self::Dispersion(_) => KernelFamily::Dispersion,
            Self::LinearReservoir(_) => KernelFamily::LinearReservoir,
            Self::ParallelLinearReservoir(_) => KernelFamily::ParallelLinearReservoir,
            Self::ExponentialPiston(_) => KernelFamily::ExponentialPiston,
            Self::Gamma(_) => KernelFamily::Gamma,
        }
    }

    /// Density at a single lag. Lags must be positive.
    pub fn density(&self, tau: f64) -> f64 {
        match self {
            Self::Dispersion(p) => p.density(tau),
            Self::LinearReservoir(p) => p.density(tau),
            Self::ParallelLinearReservoir(p) => p.density(tau),
            Self::ExponentialPiston(p) => p.density(tau),
            Self::Gamma(p) => p.density(tau),
        }
    }

    /// Densities at every lag in `lags`, same length and order.
    pub fn sample(&self, lags: &[f64]) -> Vec<f64> {
        lags.iter().map(|&tau| self.density(tau)).collect()
    }

    /// Densities on the lag grid `1, 2, ..., n`.
    pub fn sample_n(&self, n: usize) -> Vec<f64> {
        self.sample(&lags(n))
    }
}

impl From<DispersionParams> for TransferFunction {
    fn from(p: DispersionParams) -> Self {
        Self::Dispersion(p)
    }
}

impl From<LinearReservoirParams> for TransferFunction {
    fn from(p: LinearReservoirParams) -> Self {
        Self::LinearReservoir(p)
    }
}

impl From<ParallelLinearReservoirParams> for TransferFunction {
    fn from(p: ParallelLinearReservoirParams) -> Self {
        Self::ParallelLinearReservoir(p)
    }
}

impl From<ExponentialPistonParams> for TransferFunction {
    fn from(p: ExponentialPistonParams) -> Self {
        Self::ExponentialPiston(p)
    }
}

impl From<GammaParams> for TransferFunction {
    fn from(p: GammaParams) -> Self {
        Self::Gamma(p)
    }
}

/// The 1-based lag grid `[1.0, 2.0, ..., n]`.
///
/// Sampling starts at lag 1 because the dispersion density is undefined at 0.
pub fn lags(n: usize) -> Vec<f64> {
    (1..=n).map(|t| t as f64).collect()
}
