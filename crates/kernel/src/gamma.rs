//! Gamma model transfer function.

use statrs::function::gamma::gamma;

use crate::error::{KernelError, require_positive};
use crate::transfer::KernelFamily;

/// Validated parameters of the gamma model.
///
/// The gamma probability density divides by `Γ(α)`; this kernel multiplies
/// by it, matching the values existing reference outputs were produced
/// with:
///
/// ```text
/// g(τ) = τ^(α-1) / β^α · Γ(α) · exp(-τ/β)
/// ```
///
/// The two forms coincide for `α = 1` and `α = 2`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GammaParams {
    alpha: f64,
    beta: f64,
    /// `Γ(α) / β^α`, constant over all lags.
    factor: f64,
}

impl GammaParams {
    /// Creates gamma parameters. Both `alpha` and `beta` must be finite and
    /// positive.
    pub fn new(alpha: f64, beta: f64) -> Result<Self, KernelError> {
        let alpha = require_positive(KernelFamily::Gamma, "alpha", alpha)?;
        let beta = require_positive(KernelFamily::Gamma, "beta", beta)?;
        Ok(Self {
            alpha,
            beta,
            factor: gamma(alpha) / beta.powf(alpha),
        })
    }

    /// Shape parameter `α`.
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Scale parameter `β`.
    pub fn beta(&self) -> f64 {
        self.beta
    }

    /// Density at lag `tau`.
    pub fn density(&self, tau: f64) -> f64 {
        tau.powf(self.alpha - 1.0) * self.factor * (-tau / self.beta).exp()
    }
}
