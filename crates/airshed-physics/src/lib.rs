//! Physical closure seam for the Airshed model.
//!
//! The integration engine does not define any numerical formulas of its
//! own: advection, diffusion, settling, oxidation, scavenging, and
//! gas–particle partitioning all live behind the [`Physics`] trait, and
//! wind sampling behind [`WindField`]. This crate defines those seams
//! plus the spatial stencil types the closures consume.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod closures;
pub mod stencil;
pub mod wind;

pub use closures::Physics;
pub use stencil::{Neighborhood, VerticalStencil};
pub use wind::{BinnedWind, ComponentBins, WindField};
