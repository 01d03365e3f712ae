//! Spatial stencils handed to the physical closures.
//!
//! A [`Neighborhood`] is the 7-point concentration stencil around one
//! cell for one species, plus the local vertical cell heights. Missing
//! neighbours at domain edges are clamped to the center value, so a
//! filled stencil is always total.

use airshed_core::{DenseField3, GridGeometry};

/// The concentration neighborhood of one cell for one species.
#[derive(Clone, Copy, Debug, Default)]
pub struct Neighborhood {
    /// Concentration at the cell itself.
    pub center: f64,
    /// Concentration one cell east (i+1).
    pub iplus: f64,
    /// Concentration one cell west (i-1).
    pub iminus: f64,
    /// Concentration one cell north (j+1).
    pub jplus: f64,
    /// Concentration one cell south (j-1).
    pub jminus: f64,
    /// Concentration one cell up (k+1).
    pub kplus: f64,
    /// Concentration one cell down (k-1).
    pub kminus: f64,
    /// Height of the cell (m).
    pub dz: f64,
    /// Height of the cell above (m); clamped at the domain top.
    pub dzplus: f64,
    /// Height of the cell below (m); clamped at the surface.
    pub dzminus: f64,
}

impl Neighborhood {
    /// Populate the stencil from `field` around `(k, j, i)`.
    ///
    /// Neighbours outside the domain take the center value, matching a
    /// zero-gradient edge.
    pub fn fill(
        &mut self,
        field: &DenseField3,
        geometry: &GridGeometry,
        k: usize,
        j: usize,
        i: usize,
    ) {
        let (nz, ny, nx) = field.shape();
        self.center = field.get(k, j, i);
        self.iplus = if i + 1 < nx {
            field.get(k, j, i + 1)
        } else {
            self.center
        };
        self.iminus = if i > 0 {
            field.get(k, j, i - 1)
        } else {
            self.center
        };
        self.jplus = if j + 1 < ny {
            field.get(k, j + 1, i)
        } else {
            self.center
        };
        self.jminus = if j > 0 {
            field.get(k, j - 1, i)
        } else {
            self.center
        };
        self.kplus = if k + 1 < nz {
            field.get(k + 1, j, i)
        } else {
            self.center
        };
        self.kminus = if k > 0 {
            field.get(k - 1, j, i)
        } else {
            self.center
        };

        self.dz = geometry.dz.get(k, j, i);
        self.dzplus = if k + 1 < nz {
            geometry.dz.get(k + 1, j, i)
        } else {
            self.dz
        };
        self.dzminus = if k > 0 {
            geometry.dz.get(k - 1, j, i)
        } else {
            self.dz
        };
    }

    /// Whether every concentration in the stencil is below `min`.
    ///
    /// Used for the minimum-significant-mass cutoff: cells whose whole
    /// neighborhood is negligible skip transport computation.
    pub fn below_threshold(&self, min: f64) -> bool {
        self.max_concentration() < min
    }

    /// Maximum concentration across the 7-point stencil.
    pub fn max_concentration(&self) -> f64 {
        self.center
            .max(self.iplus)
            .max(self.iminus)
            .max(self.jplus)
            .max(self.jminus)
            .max(self.kplus)
            .max(self.kminus)
    }
}

/// The vertical diffusivity stencil: the diffusivity at the cell and
/// its vertical neighbours, edge-clamped like [`Neighborhood`].
#[derive(Clone, Copy, Debug, Default)]
pub struct VerticalStencil {
    /// Diffusivity at the cell.
    pub center: f64,
    /// Diffusivity one cell up.
    pub kplus: f64,
    /// Diffusivity one cell down.
    pub kminus: f64,
}

impl VerticalStencil {
    /// Populate the stencil from `field` around `(k, j, i)`.
    pub fn fill(&mut self, field: &DenseField3, k: usize, j: usize, i: usize) {
        let (nz, _, _) = field.shape();
        self.center = field.get(k, j, i);
        self.kplus = if k + 1 < nz {
            field.get(k + 1, j, i)
        } else {
            self.center
        };
        self.kminus = if k > 0 {
            field.get(k - 1, j, i)
        } else {
            self.center
        };
    }
}
