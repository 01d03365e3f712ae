//! Core types for the Airshed air-quality model.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the chemical species tracked by the model, the dense 3-D field
//! storage the engine operates on, the immutable grid geometry, and
//! the run-level error types.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod field;
pub mod grid;
pub mod species;

pub use error::RunError;
pub use field::DenseField3;
pub use grid::GridGeometry;
pub use species::{EmissionSpecies, OutputSpecies, Species};

/// A single cell's concentration vector, one slot per [`Species`].
pub type CellVector = [f64; Species::COUNT];
