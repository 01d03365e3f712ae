//! The [`Physics`] trait: the closure operations the engine consumes.

use airshed_core::CellVector;

use crate::stencil::{Neighborhood, VerticalStencil};

/// The set of physical closures driving one cell update.
///
/// # Contract
///
/// - Every method MUST be a pure function of its arguments (plus any
///   immutable state captured at construction): the engine invokes them
///   concurrently from multiple worker threads over disjoint cells.
/// - The flux methods return instantaneous rates; the engine multiplies
///   by the timestep.
/// - [`wet_deposition`](Physics::wet_deposition) and
///   [`chemical_partitioning`](Physics::chemical_partitioning) mutate
///   only the single cell vector they are handed, never any shared
///   state.
///
/// # Object safety
///
/// The trait is object-safe; the engine holds `Box<dyn Physics>`.
pub trait Physics: Send + Sync {
    /// Human-readable name for logging.
    fn name(&self) -> &str;

    /// Advective flux along each axis from the three axis-aligned
    /// wind pairs (the cell value paired with its forward neighbour).
    ///
    /// Returns `(x_flux, y_flux, z_flux)`.
    #[allow(clippy::too_many_arguments)]
    fn advective_flux(
        &self,
        c: &Neighborhood,
        u: f64,
        u_next: f64,
        v: f64,
        v_next: f64,
        w: f64,
        w_next: f64,
    ) -> (f64, f64, f64);

    /// Vertical diffusive flux from the diffusivity stencil.
    fn diffusive_flux(&self, c: &Neighborhood, kz: &VerticalStencil) -> f64;

    /// Gravitational settling flux for particulate species. `k` is the
    /// cell's vertical index (0 at the surface).
    fn gravitational_settling(&self, c: &Neighborhood, k: usize) -> f64;

    /// VOC oxidation loss for gaseous organic matter.
    fn voc_oxidation_flux(&self, c: &Neighborhood) -> f64;

    /// Wet-deposition scavenging, applied in place to one cell's full
    /// species vector after transport.
    fn wet_deposition(&self, cell: &mut CellVector, k: usize, j: usize, i: usize);

    /// Gas–particle equilibrium redistribution, applied in place to one
    /// cell's full species vector after wet deposition.
    fn chemical_partitioning(&self, cell: &mut CellVector, k: usize, j: usize, i: usize);
}
