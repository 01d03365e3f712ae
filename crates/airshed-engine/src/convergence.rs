//! Per-species convergence tracking.
//!
//! A species is converged once its domain-wide mass sum stops growing
//! between iterations. The flag latches: later growth (emissions are
//! re-injected every iteration) never un-converges a species.

use airshed_core::{DenseField3, Species};

/// Tracks the mass sum of every species across iterations.
pub(crate) struct ConvergenceTracker {
    prev_sums: [f64; Species::COUNT],
    converged: [bool; Species::COUNT],
}

impl ConvergenceTracker {
    pub(crate) fn new() -> Self {
        Self {
            prev_sums: [0.0; Species::COUNT],
            converged: [false; Species::COUNT],
        }
    }

    /// Record one iteration's output generation. Returns `true` once
    /// every species has converged at least once.
    ///
    /// The relative bias `(new - old) / old` must be finite and
    /// non-positive to count; a zero or vanishing previous sum yields a
    /// non-finite bias and keeps the species unconverged.
    pub(crate) fn observe(&mut self, generation: &[DenseField3; Species::COUNT]) -> bool {
        for species in Species::ALL {
            let q = species.index();
            let sum = generation[q].sum();
            if !self.converged[q] {
                let bias = (sum - self.prev_sums[q]) / self.prev_sums[q];
                if bias.is_finite() && bias <= 0.0 {
                    self.converged[q] = true;
                }
                log::debug!("{species}: mass {sum:.6e}, bias {bias:+.3e}");
            }
            self.prev_sums[q] = sum;
        }
        self.converged.iter().all(|&flag| flag)
    }

    #[cfg(test)]
    fn is_converged(&self, species: Species) -> bool {
        self.converged[species.index()]
    }
}
