//! Time-integration engine for the Airshed air-quality model.
//!
//! [`AirshedModel`] drives the outer iteration loop: inject emissions,
//! advance every interior cell concurrently through the transport and
//! chemistry closures, test per-species convergence, and repeat until
//! the concentration fields stabilize and the simulated-time horizon
//! has passed. The final state is assembled into user-facing pollutant
//! concentrations with the inverse unit conversions.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
mod convergence;
mod emissions;
pub mod engine;
mod kernel;
mod output;
mod sweep;

pub use config::{ConfigError, ModelConfig, DEFAULT_HORIZON_DAYS};
pub use engine::{AirshedModel, RunMetrics, RunResult};
