//! Test fixtures for Airshed development.
//!
//! Provides identity implementations of the physics seams ([`Physics`],
//! [`WindField`]) and uniform-grid constructors for engine and closure
//! tests.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use airshed_core::{CellVector, DenseField3, GridGeometry};
use airshed_physics::{Neighborhood, Physics, VerticalStencil, WindField};

/// Physics where every flux is zero and the in-place closures are
/// no-ops. A sweep under `IdentityPhysics` copies the initial
/// generation into the final generation for every interior cell.
pub struct IdentityPhysics;

impl Physics for IdentityPhysics {
    fn name(&self) -> &str {
        "identity"
    }

    fn advective_flux(
        &self,
        _c: &Neighborhood,
        _u: f64,
        _u_next: f64,
        _v: f64,
        _v_next: f64,
        _w: f64,
        _w_next: f64,
    ) -> (f64, f64, f64) {
        (0.0, 0.0, 0.0)
    }

    fn diffusive_flux(&self, _c: &Neighborhood, _kz: &VerticalStencil) -> f64 {
        0.0
    }

    fn gravitational_settling(&self, _c: &Neighborhood, _k: usize) -> f64 {
        0.0
    }

    fn voc_oxidation_flux(&self, _c: &Neighborhood) -> f64 {
        0.0
    }

    fn wet_deposition(&self, _cell: &mut CellVector, _k: usize, _j: usize, _i: usize) {}

    fn chemical_partitioning(&self, _cell: &mut CellVector, _k: usize, _j: usize, _i: usize) {}
}

/// A wind field that is calm everywhere.
pub struct StillWind;

impl WindField for StillWind {
    fn resample(&mut self) {}

    fn u(&self, _k: usize, _j: usize, _i: usize) -> f64 {
        0.0
    }

    fn v(&self, _k: usize, _j: usize, _i: usize) -> f64 {
        0.0
    }

    fn w(&self, _k: usize, _j: usize, _i: usize) -> f64 {
        0.0
    }
}

/// A cubic grid with uniform cell dimensions.
pub fn uniform_geometry(n: usize, cell_size: f64, dt: f64) -> GridGeometry {
    GridGeometry {
        nx: n,
        ny: n,
        nz: n,
        dx: cell_size,
        dy: cell_size,
        dz: DenseField3::splat(n, n, n, cell_size),
        dt,
    }
}

/// A zero diffusivity field matching `geometry`.
pub fn zero_diffusivity(geometry: &GridGeometry) -> DenseField3 {
    DenseField3::zeros(geometry.nz, geometry.ny, geometry.nx)
}
