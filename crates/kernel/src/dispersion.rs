//! Dispersion model transfer function.

use std::f64::consts::PI;

use crate::error::{KernelError, require_positive};
use crate::transfer::KernelFamily;

/// Validated parameters of the dispersion model.
///
/// The transit-time density is
///
/// ```text
/// g(τ) = 1 / (τ·sqrt(4π·P_D·τ/T_m)) · exp(-(1 - τ/T_m)² / (4·P_D·τ/T_m))
/// ```
///
/// with dispersion parameter `P_D` and mean travel time `T_m` (Stumpp et
/// al., 2009). The density diverges at τ = 0, so it must only be sampled on
/// lags τ ≥ 1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DispersionParams {
    p_d: f64,
    mtt: f64,
}

impl DispersionParams {
    /// Creates dispersion parameters. Both `p_d` and `mtt` must be finite
    /// and positive.
    pub fn new(p_d: f64, mtt: f64) -> Result<Self, KernelError> {
        Ok(Self {
            p_d: require_positive(KernelFamily::Dispersion, "p_d", p_d)?,
            mtt: require_positive(KernelFamily::Dispersion, "mtt", mtt)?,
        })
    }

    /// Dispersion parameter `P_D`.
    pub fn p_d(&self) -> f64 {
        self.p_d
    }

    /// Mean travel time `T_m`.
    pub fn mtt(&self) -> f64 {
        self.mtt
    }

    /// Density at lag `tau` (`tau > 0`).
    pub fn density(&self, tau: f64) -> f64 {
        let ratio = tau / self.mtt;
        let spread = 4.0 * self.p_d * ratio;
        (1.0 / (tau * (PI * spread).sqrt())) * (-(1.0 - ratio).powi(2) / spread).exp()
    }
}
