//! # transep-simulate
//!
//! Lumped transfer-function transport model: convolves a precipitation or
//! tracer input with a catchment transit-time distribution.
//!
//! ## Pipeline
//!
//! ```mermaid
//! graph LR
//!     A["input signal"] -->|"loss filter (optional)"| B["effective input"]
//!     K["TransferFunction"] -->|"sample lags 1..=n"| G["kernel samples"]
//!     B --> C["convolution engine"]
//!     G --> C
//!     C --> D["output signal"]
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use transep_simulate::{TransferFunction, simulate, simulate_explicit};
//!
//! let mut input = vec![0.0; 400];
//! input[..5].fill(2500.0);
//!
//! let kernel = TransferFunction::gamma(1.0, 10.0)?;
//! let fast = simulate(&input, &kernel, 1.0)?;
//! let explicit = simulate_explicit(&input, &kernel, 1.0)?;
//! assert_eq!(fast.len(), input.len());
//! assert_eq!(explicit.len(), input.len());
//! # Ok::<(), transep_simulate::SimulateError>(())
//! ```

mod config;
mod error;
mod result;
mod simulate;

pub use config::{Engine, SimulationConfig};
pub use error::SimulateError;
pub use result::SimulationResult;
pub use simulate::{run, simulate, simulate_explicit};

// Re-export the types needed to build a simulation.
pub use transep_convolve::{ConvolveError, LinearMethod};
pub use transep_kernel::{KernelError, KernelFamily, TransferFunction, lags};
pub use transep_loss::{LossError, LossParams};
