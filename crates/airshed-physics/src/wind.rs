//! Wind sampling.
//!
//! The engine sees wind through the [`WindField`] trait: one
//! realization is drawn per iteration, then every cell update reads the
//! sampled components. [`BinnedWind`] is the production implementation,
//! reconstructing a wind distribution from per-cell frequency/value bin
//! tables with a seeded ChaCha8 RNG so runs are reproducible.

use airshed_core::DenseField3;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// A sampled wind field over the model grid.
///
/// `u`, `v`, `w` return the current realization's components at a cell.
/// The vertical component is staggered: implementations must answer
/// `w` for `k` in `0..=nz` (the kernel reads the face above the top
/// cell layer), while `u` spans `i` in `0..nx` and `v` spans `j` in
/// `0..ny`.
pub trait WindField: Send + Sync {
    /// Draw a new wind realization for the next sweep.
    fn resample(&mut self);

    /// East-west component at `(k, j, i)` (m/s).
    fn u(&self, k: usize, j: usize, i: usize) -> f64;

    /// North-south component at `(k, j, i)` (m/s).
    fn v(&self, k: usize, j: usize, i: usize) -> f64;

    /// Vertical component at `(k, j, i)` (m/s), staggered in `k`.
    fn w(&self, k: usize, j: usize, i: usize) -> f64;
}

/// Frequency-binned tables for one wind component.
///
/// Layer `b` pairs a per-cell occurrence frequency with a per-cell
/// component value. Frequencies at each cell are expected to sum to 1;
/// sampling walks the layers accumulating frequency until the draw is
/// covered, falling back to the last layer for any residual.
#[derive(Clone, Debug)]
pub struct ComponentBins {
    freq: Vec<DenseField3>,
    bins: Vec<DenseField3>,
}

impl ComponentBins {
    /// Build from parallel frequency and value layers.
    ///
    /// # Panics
    ///
    /// Panics if the layer counts differ or are zero; bin tables are
    /// fixed model inputs, so a mismatch is a programming error.
    pub fn new(freq: Vec<DenseField3>, bins: Vec<DenseField3>) -> Self {
        assert_eq!(freq.len(), bins.len(), "frequency/value layer mismatch");
        assert!(!bins.is_empty(), "wind bin tables need at least one layer");
        Self { freq, bins }
    }

    /// The component value at `(k, j, i)` selected by the uniform draw
    /// `r` in `[0, 1)`.
    fn get(&self, r: f64, k: usize, j: usize, i: usize) -> f64 {
        let mut cumulative = 0.0;
        for (freq, bins) in self.freq.iter().zip(&self.bins) {
            cumulative += freq.get(k, j, i);
            if r < cumulative {
                return bins.get(k, j, i);
            }
        }
        // Frequencies that sum below 1 leave a residual; attribute it
        // to the last bin.
        self.bins[self.bins.len() - 1].get(k, j, i)
    }
}

/// Wind field sampled from frequency-binned component tables.
pub struct BinnedWind {
    u: ComponentBins,
    v: ComponentBins,
    w: ComponentBins,
    rng: ChaCha8Rng,
    sample: f64,
}

impl BinnedWind {
    /// Build a sampler over the three component tables, seeded for
    /// deterministic replay.
    ///
    /// The `w` tables must carry `nz + 1` vertical layers to satisfy
    /// the staggered [`WindField::w`] contract; `u` and `v` tables are
    /// cell-shaped.
    pub fn new(u: ComponentBins, v: ComponentBins, w: ComponentBins, seed: u64) -> Self {
        let mut wind = Self {
            u,
            v,
            w,
            rng: ChaCha8Rng::seed_from_u64(seed),
            sample: 0.0,
        };
        wind.resample();
        wind
    }
}

impl WindField for BinnedWind {
    fn resample(&mut self) {
        // One shared draw per iteration: all cells see the same
        // realization of the distribution within a sweep.
        self.sample = self.rng.random::<f64>();
    }

    fn u(&self, k: usize, j: usize, i: usize) -> f64 {
        self.u.get(self.sample, k, j, i)
    }

    fn v(&self, k: usize, j: usize, i: usize) -> f64 {
        self.v.get(self.sample, k, j, i)
    }

    fn w(&self, k: usize, j: usize, i: usize) -> f64 {
        self.w.get(self.sample, k, j, i)
    }
}
