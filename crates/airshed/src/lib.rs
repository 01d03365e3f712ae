//! Airshed: a steady-state air-quality model with concurrent grid
//! integration.
//!
//! This is the top-level facade crate that re-exports the public API
//! from the Airshed sub-crates. For most users, adding `airshed` as a
//! single dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use airshed::prelude::*;
//! use airshed_test_utils::{uniform_geometry, zero_diffusivity, IdentityPhysics, StillWind};
//!
//! // A 4×4×4 grid of 1 km cells stepped hourly, with calm winds and
//! // inert closures.
//! let geometry = uniform_geometry(4, 1000.0, 3600.0);
//! let vertical_diffusivity = zero_diffusivity(&geometry);
//! let config = ModelConfig {
//!     geometry,
//!     wind: Box::new(StillWind),
//!     vertical_diffusivity,
//!     physics: Box::new(IdentityPhysics),
//!     horizon_days: DEFAULT_HORIZON_DAYS,
//!     worker_count: None,
//! };
//! let model = AirshedModel::new(config).unwrap();
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in
//! the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `airshed-core` | Species, fields, grid geometry, run errors |
//! | [`physics`] | `airshed-physics` | The [`physics::Physics`] and [`physics::WindField`] seams, stencils, binned wind |
//! | [`engine`] | `airshed-engine` | Model configuration and the integration loop |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Species, dense 3-D fields, grid geometry, and run errors
/// (`airshed-core`).
pub use airshed_core as types;

/// Physical closure seams and meteorology (`airshed-physics`).
///
/// The [`physics::Physics`] trait is the main extension point for the
/// transport and chemistry parameterizations; [`physics::WindField`]
/// abstracts the wind sampler, with [`physics::BinnedWind`] as the
/// cumulative-frequency reference implementation.
pub use airshed_physics as physics;

/// Model configuration and the time-integration loop
/// (`airshed-engine`).
pub use airshed_engine as engine;

/// Common imports for typical Airshed usage.
///
/// ```rust
/// use airshed::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use airshed_core::{
        CellVector, DenseField3, EmissionSpecies, GridGeometry, OutputSpecies, RunError, Species,
    };

    // Physics seams
    pub use airshed_physics::{Neighborhood, Physics, VerticalStencil, WindField};

    // Engine
    pub use airshed_engine::{
        AirshedModel, ConfigError, ModelConfig, RunMetrics, RunResult, DEFAULT_HORIZON_DAYS,
    };
}
