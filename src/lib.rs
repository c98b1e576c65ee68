/// Port Progress
///
/// Tracks a manual port of a runtime library: which source files carry the
/// review marker, and how much of the original test suite has been ported.
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod output;
pub mod parity;
pub mod review;

pub use config::{Config, ParityConfig, ReviewConfig};
pub use error::{Error, Result};
pub use parity::ParityReport;
pub use review::ReviewReport;
