//! Exponential piston flow transfer function.

use tracing::warn;

use crate::error::{KernelError, require_positive};
use crate::transfer::KernelFamily;

/// Validated parameters of the exponential piston flow model.
///
/// ```text
/// g(τ) = η/T_m · exp(-η^τ/T_m + η - 1)   for τ ≥ T_m·(1 - 1/η)
/// g(τ) = 0                               otherwise
/// ```
///
/// The literature domain is `η ≥ 1`. Values in `(0, 1)` are accepted because
/// reference runs use them; the piston threshold is then negative and every
/// lag receives mass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExponentialPistonParams {
    mtt: f64,
    eta: f64,
}

impl ExponentialPistonParams {
    /// Creates exponential piston parameters. `mtt` and `eta` must be finite
    /// and positive.
    pub fn new(mtt: f64, eta: f64) -> Result<Self, KernelError> {
        let family = KernelFamily::ExponentialPiston;
        let mtt = require_positive(family, "mtt", mtt)?;
        let eta = require_positive(family, "eta", eta)?;
        if eta < 1.0 {
            warn!(eta, "exponential piston eta below 1, piston threshold is negative");
        }
        Ok(Self { mtt, eta })
    }

    /// Mean travel time `T_m`.
    pub fn mtt(&self) -> f64 {
        self.mtt
    }

    /// Ratio of total volume to exponential-flow volume `η`.
    pub fn eta(&self) -> f64 {
        self.eta
    }

    /// Smallest lag with non-zero density, `T_m·(1 - 1/η)`.
    pub fn threshold(&self) -> f64 {
        self.mtt * (1.0 - 1.0 / self.eta)
    }

    /// Density at lag `tau`.
    pub fn density(&self, tau: f64) -> f64 {
        if tau >= self.threshold() {
            (self.eta / self.mtt) * (-self.eta.powf(tau) / self.mtt + self.eta - 1.0).exp()
        } else {
            0.0
        }
    }
}
