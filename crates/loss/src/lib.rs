//! # transep-loss
//!
//! Converts raw precipitation into effective precipitation with an
//! antecedent precipitation index (API) recursion, so that rain falling on a
//! wet catchment contributes more to the response than rain on a dry one.
//!
//! ```
//! use transep_loss::{LossParams, effective_precipitation};
//!
//! let params = LossParams::new(0.02, 10.0, 5.0)?;
//! let p_eff = effective_precipitation(&[0.0, 12.5, 3.0, 0.0], &params);
//! assert_eq!(p_eff.len(), 4);
//! # Ok::<(), transep_loss::LossError>(())
//! ```

mod error;
mod filter;

pub use error::LossError;
pub use filter::{LossParams, antecedent_index, effective_precipitation};
