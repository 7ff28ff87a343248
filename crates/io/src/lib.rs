//! # transep-io
//!
//! Read input series from delimited text files and write simulated output
//! series back out. Bridges file data into the `&[f64]` slice-based APIs of
//! the simulation crates.

mod error;
mod reader;
mod series;
mod writer;

pub use error::IoError;
pub use reader::{FillPolicy, ReaderConfig, read_series};
pub use series::Series;
pub use writer::{WriterConfig, write_series};
