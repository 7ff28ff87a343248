//! Antecedent precipitation index recursion.

use crate::error::LossError;

/// Parameters of the loss filter (Weiler et al., 2003).
///
/// ```text
/// s(t)     = b1·p(t) + (1 - 1/b2)·s(t - Δt),   s(0) = b3
/// p_eff(t) = p(t)·s(t)
/// ```
///
/// `b2` weighs precipitation exponentially backward in time: `b2 = 1`
/// forgets everything (`s(t) = b1·p(t)`), `b2 → ∞` never forgets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LossParams {
    b1: f64,
    b2: f64,
    b3: f64,
}

impl LossParams {
    /// Creates loss parameters.
    ///
    /// `b2` must be non-zero. Infinite `b2` is allowed and gives a
    /// retention factor of exactly 1.
    pub fn new(b1: f64, b2: f64, b3: f64) -> Result<Self, LossError> {
        for (name, value) in [("b1", b1), ("b2", b2), ("b3", b3)] {
            if value.is_nan() {
                return Err(LossError::NanParameter { name });
            }
        }
        if b2 == 0.0 {
            return Err(LossError::ZeroDecay);
        }
        Ok(Self { b1, b2, b3 })
    }

    /// Scaling of the current precipitation.
    pub fn b1(&self) -> f64 {
        self.b1
    }

    /// Backward weighting parameter.
    pub fn b2(&self) -> f64 {
        self.b2
    }

    /// Initial antecedent precipitation index.
    pub fn b3(&self) -> f64 {
        self.b3
    }

    /// Fraction of the previous index carried into the next step, `1 - 1/b2`.
    pub fn retention(&self) -> f64 {
        1.0 - self.b2.recip()
    }
}

/// Antecedent precipitation index `s(t)` for every time step.
///
/// Computed as a strict left-to-right scan; the first step is seeded with
/// `b3`. Returns an empty vector for empty input.
pub fn antecedent_index(prec: &[f64], params: &LossParams) -> Vec<f64> {
    let retention = params.retention();
    prec.iter()
        .scan(params.b3, |prev, &p| {
            let s = params.b1 * p + retention * *prev;
            *prev = s;
            Some(s)
        })
        .collect()
}

/// Effective precipitation `p(t)·s(t)`.
#[tracing::instrument(skip(prec), fields(n = prec.len()))]
pub fn effective_precipitation(prec: &[f64], params: &LossParams) -> Vec<f64> {
    antecedent_index(prec, params)
        .into_iter()
        .zip(prec)
        .map(|(s, &p)| p * s)
        .collect()
}
