//! Linear reservoir and parallel linear reservoir transfer functions
//! (Seeger and Weiler, 2014).

use crate::error::{KernelError, require_positive};
use crate::transfer::KernelFamily;

/// Validated parameters of the linear reservoir model.
///
/// `g(τ) = (1/T_m)·exp(-τ/T_m)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearReservoirParams {
    mtt: f64,
}

impl LinearReservoirParams {
    /// Creates linear reservoir parameters; `mtt` must be finite and positive.
    pub fn new(mtt: f64) -> Result<Self, KernelError> {
        Ok(Self {
            mtt: require_positive(KernelFamily::LinearReservoir, "mtt", mtt)?,
        })
    }

    /// Mean travel time `T_m`.
    pub fn mtt(&self) -> f64 {
        self.mtt
    }

    /// Density at lag `tau`.
    pub fn density(&self, tau: f64) -> f64 {
        (1.0 / self.mtt) * (-tau / self.mtt).exp()
    }
}

/// Validated parameters of the parallel linear reservoir model.
///
/// The literature mixture law is
///
/// ```text
/// g(τ) = φ/τ_f·exp(-τ/τ_f) + (1-φ)/τ_s·exp(-τ/τ_s)
/// ```
///
/// but the weight of the slow reservoir is computed here as `1 - φ/τ_s`,
/// without the `1/τ_s` prefactor:
///
/// ```text
/// g(τ) = φ/τ_f·exp(-τ/τ_f) + (1 - φ/τ_s)·exp(-τ/τ_s)
/// ```
///
/// Existing reference outputs were produced with this form, so it is kept
/// as is. The slow term turns negative when `φ > τ_s`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParallelLinearReservoirParams {
    mtt_slow: f64,
    mtt_fast: f64,
    frac_fast: f64,
}

impl ParallelLinearReservoirParams {
    /// Creates parallel linear reservoir parameters.
    ///
    /// `mtt_slow` and `mtt_fast` must be finite and positive, `frac_fast`
    /// must lie in `[0, 1]`.
    pub fn new(mtt_slow: f64, mtt_fast: f64, frac_fast: f64) -> Result<Self, KernelError> {
        let family = KernelFamily::ParallelLinearReservoir;
        let mtt_slow = require_positive(family, "mtt_slow", mtt_slow)?;
        let mtt_fast = require_positive(family, "mtt_fast", mtt_fast)?;
        if !(0.0..=1.0).contains(&frac_fast) {
            return Err(KernelError::InvalidParameter {
                kernel: family,
                name: "frac_fast",
                value: frac_fast,
                reason: "must be in [0, 1]",
            });
        }
        Ok(Self {
            mtt_slow,
            mtt_fast,
            frac_fast,
        })
    }

    /// Mean travel time of the slow reservoir.
    pub fn mtt_slow(&self) -> f64 {
        self.mtt_slow
    }

    /// Mean travel time of the fast reservoir.
    pub fn mtt_fast(&self) -> f64 {
        self.mtt_fast
    }

    /// Fraction routed through the fast reservoir.
    pub fn frac_fast(&self) -> f64 {
        self.frac_fast
    }

    /// Density at lag `tau`.
    pub fn density(&self, tau: f64) -> f64 {
        let fast = (self.frac_fast / self.mtt_fast) * (-tau / self.mtt_fast).exp();
        let slow = (1.0 - self.frac_fast / self.mtt_slow) * (-tau / self.mtt_slow).exp();
        fast + slow
    }
}
