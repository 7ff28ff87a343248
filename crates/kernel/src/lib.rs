//! # transep-kernel
//!
//! Analytic transit-time distributions used as transfer functions in
//! lumped catchment transport models.
//!
//! | Family | Parameters |
//! |---|---|
//! | dispersion | `p_d`, `mtt` |
//! | linear reservoir | `mtt` |
//! | parallel linear reservoir | `mtt_slow`, `mtt_fast`, `frac_fast` |
//! | exponential piston | `mtt`, `eta` |
//! | gamma | `alpha`, `beta` |
//!
//! Parameters are validated on construction. Kernels are stateless and are
//! sampled on the lag grid `1..=n` returned by [`lags`].
//!
//! ```
//! use transep_kernel::{KernelFamily, TransferFunction};
//!
//! let kernel = TransferFunction::dispersion(0.1, 100.0)?;
//! assert_eq!(kernel.family(), KernelFamily::Dispersion);
//! let g = kernel.sample_n(400);
//! assert!(g.iter().all(|&v| v >= 0.0));
//! # Ok::<(), transep_kernel::KernelError>(())
//! ```

mod dispersion;
mod error;
mod gamma;
mod piston;
mod reservoir;
mod transfer;

pub use dispersion::DispersionParams;
pub use error::KernelError;
pub use gamma::GammaParams;
pub use piston::ExponentialPistonParams;
pub use reservoir::{LinearReservoirParams, ParallelLinearReservoirParams};
pub use transfer::{KernelFamily, TransferFunction, lags};
