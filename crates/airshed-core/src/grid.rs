//! Immutable grid geometry.

use crate::field::DenseField3;

/// Description of the discretized model domain.
///
/// Shared read-only by every component for the duration of a run. Cell
/// counts are `nx` (east-west), `ny` (north-south), `nz` (vertical);
/// horizontal cell dimensions are uniform scalars while the vertical
/// cell height varies per cell.
#[derive(Clone, Debug)]
pub struct GridGeometry {
    /// Cell count along the east-west axis.
    pub nx: usize,
    /// Cell count along the north-south axis.
    pub ny: usize,
    /// Cell count along the vertical axis.
    pub nz: usize,
    /// East-west cell width (m).
    pub dx: f64,
    /// North-south cell width (m).
    pub dy: f64,
    /// Per-cell vertical height (m), shaped `(nz, ny, nx)`.
    pub dz: DenseField3,
    /// Timestep length (s).
    pub dt: f64,
}

impl GridGeometry {
    /// Volume of the cell at `(k, j, i)` in m³.
    pub fn cell_volume(&self, k: usize, j: usize, i: usize) -> f64 {
        self.dx * self.dy * self.dz.get(k, j, i)
    }

    /// Total number of cells in the domain.
    pub fn cell_count(&self) -> usize {
        self.nx * self.ny * self.nz
    }

    /// Number of east-west slices in the sweep interior.
    ///
    /// Boundary slices (i = 0 and i = nx-1) are excluded; they are
    /// treated as a fixed, non-updated edge.
    pub fn interior_slice_count(&self) -> usize {
        self.nx.saturating_sub(2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn geometry() -> GridGeometry {
        GridGeometry {
            nx: 5,
            ny: 4,
            nz: 3,
            dx: 1000.0,
            dy: 2000.0,
            dz: DenseField3::splat(3, 4, 5, 50.0),
            dt: 3600.0,
        }
    }

    #[test]
    fn cell_volume_uses_local_height() {
        let mut geom = geometry();
        geom.dz.set(2, 1, 0, 100.0);
        assert_eq!(geom.cell_volume(0, 0, 0), 1000.0 * 2000.0 * 50.0);
        assert_eq!(geom.cell_volume(2, 1, 0), 1000.0 * 2000.0 * 100.0);
    }

    #[test]
    fn interior_slice_count_excludes_boundaries() {
        assert_eq!(geometry().interior_slice_count(), 3);
        let mut narrow = geometry();
        narrow.nx = 2;
        assert_eq!(narrow.interior_slice_count(), 0);
    }
}
