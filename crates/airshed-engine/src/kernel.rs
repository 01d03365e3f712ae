//! Per-cell update kernel.
//!
//! [`CellKernel`] advances one interior cell through a single timestep:
//! transport fluxes per species, then the in-place chemistry closures on
//! the full cell vector. It borrows the iteration's frozen inputs and is
//! shared read-only across sweep workers; each worker brings its own
//! [`CellScratch`].

use airshed_core::{CellVector, DenseField3, GridGeometry, Species};
use airshed_physics::{Neighborhood, Physics, VerticalStencil, WindField};

/// Read-only state for one iteration's cell updates.
pub(crate) struct CellKernel<'a> {
    pub(crate) geometry: &'a GridGeometry,
    pub(crate) physics: &'a dyn Physics,
    pub(crate) wind: &'a dyn WindField,
    pub(crate) diffusivity: &'a DenseField3,
    /// The iteration's input generation, one field per species.
    pub(crate) initial: &'a [DenseField3; Species::COUNT],
    /// Minimum-significant-mass cutoff for this iteration.
    pub(crate) threshold: f64,
}

/// Per-worker scratch reused across cell updates to avoid per-cell
/// allocation.
#[derive(Default)]
pub(crate) struct CellScratch {
    neighborhood: Neighborhood,
    vertical: VerticalStencil,
    cell: CellVector,
}

impl CellKernel<'_> {
    /// Advance the cell at `(k, j, i)` one timestep, returning its new
    /// species vector.
    ///
    /// Species whose whole stencil falls below the significance
    /// threshold skip the transport terms and carry their current value
    /// into the chemistry stage unchanged. Wet deposition and
    /// partitioning always run on the full vector.
    pub(crate) fn update_cell(&self, scratch: &mut CellScratch, k: usize, j: usize, i: usize) -> CellVector {
        let dt = self.geometry.dt;
        let u = self.wind.u(k, j, i);
        let u_next = self.wind.u(k, j, i + 1);
        let v = self.wind.v(k, j, i);
        let v_next = self.wind.v(k, j + 1, i);
        let w = self.wind.w(k, j, i);
        let w_next = self.wind.w(k + 1, j, i);

        for species in Species::ALL {
            let q = species.index();
            scratch
                .neighborhood
                .fill(&self.initial[q], self.geometry, k, j, i);

            if scratch.neighborhood.below_threshold(self.threshold) {
                scratch.cell[q] = scratch.neighborhood.center;
                continue;
            }

            scratch.vertical.fill(self.diffusivity, k, j, i);

            let (x_flux, y_flux, z_flux) = self.physics.advective_flux(
                &scratch.neighborhood,
                u,
                u_next,
                v,
                v_next,
                w,
                w_next,
            );
            let mut rate = x_flux
                + y_flux
                + z_flux
                + self
                    .physics
                    .diffusive_flux(&scratch.neighborhood, &scratch.vertical);
            if species.is_particulate() {
                rate += self
                    .physics
                    .gravitational_settling(&scratch.neighborhood, k);
            }
            if species == Species::GasOrganic {
                rate += self.physics.voc_oxidation_flux(&scratch.neighborhood);
            }

            scratch.cell[q] = scratch.neighborhood.center + dt * rate;
        }

        self.physics.wet_deposition(&mut scratch.cell, k, j, i);
        self.physics
            .chemical_partitioning(&mut scratch.cell, k, j, i);
        scratch.cell
    }
}
