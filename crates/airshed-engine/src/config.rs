//! Model configuration and validation.
//!
//! [`ModelConfig`] binds the grid geometry, meteorology, and physical
//! closures to an engine instance. [`ModelConfig::validate`] checks the
//! structural invariants at startup, before any iteration runs.

use std::error::Error;
use std::fmt;

use airshed_core::{DenseField3, GridGeometry};
use airshed_physics::{Physics, WindField};

/// Simulated-time horizon a run must pass before it may terminate, in
/// days. Convergence reached earlier keeps iterating until the horizon
/// is crossed.
pub const DEFAULT_HORIZON_DAYS: f64 = 15.0;

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`ModelConfig::validate()`].
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// A horizontal axis has fewer than 3 cells, leaving no interior
    /// to sweep.
    GridTooSmall {
        /// Axis name (`"nx"` or `"ny"`).
        axis: &'static str,
        /// The configured cell count.
        got: usize,
    },
    /// The vertical axis has zero cells.
    EmptyColumn,
    /// The timestep is NaN, infinite, zero, or negative.
    InvalidDt {
        /// The invalid value.
        value: f64,
    },
    /// The cell-height field does not match the grid dimensions.
    DzShapeMismatch {
        /// Grid dimensions as `(nz, ny, nx)`.
        expected: (usize, usize, usize),
        /// The field's dimensions.
        got: (usize, usize, usize),
    },
    /// The vertical diffusivity field does not match the grid
    /// dimensions.
    DiffusivityShapeMismatch {
        /// Grid dimensions as `(nz, ny, nx)`.
        expected: (usize, usize, usize),
        /// The field's dimensions.
        got: (usize, usize, usize),
    },
    /// The time horizon is NaN, infinite, zero, or negative.
    InvalidHorizon {
        /// The invalid value.
        value: f64,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GridTooSmall { axis, got } => {
                write!(f, "{axis} is {got}; the sweep needs at least 3 cells per horizontal axis")
            }
            Self::EmptyColumn => write!(f, "nz must be at least 1"),
            Self::InvalidDt { value } => {
                write!(f, "dt must be finite and positive, got {value}")
            }
            Self::DzShapeMismatch { expected, got } => {
                write!(f, "dz field has shape {got:?}, grid is {expected:?}")
            }
            Self::DiffusivityShapeMismatch { expected, got } => {
                write!(f, "diffusivity field has shape {got:?}, grid is {expected:?}")
            }
            Self::InvalidHorizon { value } => {
                write!(f, "horizon_days must be finite and positive, got {value}")
            }
        }
    }
}

impl Error for ConfigError {}

// ── ModelConfig ────────────────────────────────────────────────────

/// Complete configuration for constructing an [`AirshedModel`].
///
/// [`AirshedModel`]: crate::AirshedModel
pub struct ModelConfig {
    /// Grid geometry, immutable for the run.
    pub geometry: GridGeometry,
    /// Wind sampler; resampled once per iteration.
    pub wind: Box<dyn WindField>,
    /// Vertical diffusivity, shaped like the grid.
    pub vertical_diffusivity: DenseField3,
    /// Transport and chemistry closures.
    pub physics: Box<dyn Physics>,
    /// Simulated days that must elapse before termination. Use
    /// [`DEFAULT_HORIZON_DAYS`] unless testing.
    pub horizon_days: f64,
    /// Sweep worker threads. `None` auto-detects from the available
    /// parallelism; explicit values are clamped to `[1, 64]`. The sweep
    /// additionally caps workers at the number of interior east-west
    /// slices.
    pub worker_count: Option<usize>,
}

impl ModelConfig {
    /// Validate all structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let geom = &self.geometry;
        if geom.nx < 3 {
            return Err(ConfigError::GridTooSmall {
                axis: "nx",
                got: geom.nx,
            });
        }
        if geom.ny < 3 {
            return Err(ConfigError::GridTooSmall {
                axis: "ny",
                got: geom.ny,
            });
        }
        if geom.nz == 0 {
            return Err(ConfigError::EmptyColumn);
        }
        if !geom.dt.is_finite() || geom.dt <= 0.0 {
            return Err(ConfigError::InvalidDt { value: geom.dt });
        }
        let expected = (geom.nz, geom.ny, geom.nx);
        if geom.dz.shape() != expected {
            return Err(ConfigError::DzShapeMismatch {
                expected,
                got: geom.dz.shape(),
            });
        }
        if self.vertical_diffusivity.shape() != expected {
            return Err(ConfigError::DiffusivityShapeMismatch {
                expected,
                got: self.vertical_diffusivity.shape(),
            });
        }
        if !self.horizon_days.is_finite() || self.horizon_days <= 0.0 {
            return Err(ConfigError::InvalidHorizon {
                value: self.horizon_days,
            });
        }
        Ok(())
    }

    /// Resolve the sweep worker count, applying auto-detection if
    /// `None`.
    pub(crate) fn resolved_worker_count(&self) -> usize {
        match self.worker_count {
            Some(n) => n.clamp(1, 64),
            None => {
                let cpus = std::thread::available_parallelism()
                    .map(|n| n.get())
                    .unwrap_or(4);
                cpus.clamp(2, 16)
            }
        }
    }
}

impl fmt::Debug for ModelConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModelConfig")
            .field("nx", &self.geometry.nx)
            .field("ny", &self.geometry.ny)
            .field("nz", &self.geometry.nz)
            .field("dt", &self.geometry.dt)
            .field("physics", &self.physics.name())
            .field("horizon_days", &self.horizon_days)
            .field("worker_count", &self.worker_count)
            .finish()
    }
}
