//! Concurrent interior sweep.
//!
//! Each iteration advances every interior cell exactly once. Work is
//! split into east-west slices (fixed `i`, all interior `j`, all `k`):
//! workers pull slice indices from a task channel, update their cells
//! against the frozen input generation, and send the computed values
//! back. The calling thread is the only writer of the output
//! generation, receiving exactly one result per slice.

use airshed_core::{CellVector, DenseField3, Species};
use crossbeam_channel::bounded;

use crate::kernel::{CellKernel, CellScratch};

/// Relative cutoff below the domain-wide concentration peak under which
/// a cell's transport update is skipped.
const SIGNIFICANCE_FRACTION: f64 = 1e-6;

/// Minimum-significant-mass cutoff for one iteration: the largest
/// concentration anywhere in the input generation, scaled down by
/// [`SIGNIFICANCE_FRACTION`]. Recomputed every iteration.
pub(crate) fn significance_threshold(initial: &[DenseField3; Species::COUNT]) -> f64 {
    let peak = initial
        .iter()
        .map(DenseField3::max)
        .fold(f64::NEG_INFINITY, f64::max);
    peak * SIGNIFICANCE_FRACTION
}

/// One slice's worth of updated cells, ordered `(j, k)` interior-major.
struct SliceUpdate {
    i: usize,
    cells: Vec<CellVector>,
}

/// Advance every interior cell one timestep, writing results into
/// `output`. Boundary cells (`i` or `j` on the domain edge) are never
/// written.
pub(crate) fn sweep(
    kernel: &CellKernel<'_>,
    worker_count: usize,
    output: &mut [DenseField3; Species::COUNT],
) {
    let geometry = kernel.geometry;
    let slices = geometry.interior_slice_count();
    if slices == 0 || geometry.ny < 3 {
        return;
    }
    let workers = worker_count.min(slices).max(1);

    let (task_tx, task_rx) = bounded::<usize>(slices);
    let (result_tx, result_rx) = bounded::<SliceUpdate>(slices);
    for i in 1..geometry.nx - 1 {
        // Capacity equals the slice count, so this never blocks.
        let _ = task_tx.send(i);
    }
    drop(task_tx);

    std::thread::scope(|scope| {
        for _ in 0..workers {
            let task_rx = task_rx.clone();
            let result_tx = result_tx.clone();
            scope.spawn(move || {
                let mut scratch = CellScratch::default();
                let cells_per_slice = geometry.nz * (geometry.ny - 2);
                while let Ok(i) = task_rx.recv() {
                    let mut cells = Vec::with_capacity(cells_per_slice);
                    for j in 1..geometry.ny - 1 {
                        for k in 0..geometry.nz {
                            cells.push(kernel.update_cell(&mut scratch, k, j, i));
                        }
                    }
                    let _ = result_tx.send(SliceUpdate { i, cells });
                }
            });
        }
        drop(result_tx);

        // Counting join: one result arrives per slice, so the iterator
        // finishes without waiting on worker shutdown.
        for update in result_rx.iter().take(slices) {
            let mut cursor = update.cells.into_iter();
            for j in 1..geometry.ny - 1 {
                for k in 0..geometry.nz {
                    if let Some(cell) = cursor.next() {
                        for species in Species::ALL {
                            output[species.index()].set(k, j, update.i, cell[species.index()]);
                        }
                    }
                }
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use airshed_test_utils::{uniform_geometry, zero_diffusivity, IdentityPhysics, StillWind};

    fn zero_generation(n: usize) -> [DenseField3; Species::COUNT] {
        std::array::from_fn(|_| DenseField3::zeros(n, n, n))
    }

    #[test]
    fn threshold_tracks_domain_peak() {
        let mut initial = zero_generation(3);
        initial[Species::GasSulfur.index()].set(2, 0, 1, 4e6);
        initial[Species::Pm25.index()].set(0, 0, 0, 1e3);
        assert!((significance_threshold(&initial) - 4.0).abs() < 1e-9);
    }

    #[test]
    fn identity_sweep_copies_interior_and_skips_boundary() {
        let geometry = uniform_geometry(4, 100.0, 60.0);
        let diffusivity = zero_diffusivity(&geometry);
        let initial: [DenseField3; Species::COUNT] =
            std::array::from_fn(|q| DenseField3::splat(4, 4, 4, (q + 1) as f64));
        let kernel = CellKernel {
            geometry: &geometry,
            physics: &IdentityPhysics,
            wind: &StillWind,
            diffusivity: &diffusivity,
            initial: &initial,
            threshold: 0.0,
        };
        let mut output = zero_generation(4);
        sweep(&kernel, 2, &mut output);

        for species in Species::ALL {
            let q = species.index();
            for k in 0..4 {
                for j in 0..4 {
                    for i in 0..4 {
                        let interior = (1..3).contains(&i) && (1..3).contains(&j);
                        let expected = if interior { (q + 1) as f64 } else { 0.0 };
                        assert_eq!(output[q].get(k, j, i), expected, "{species} at ({k},{j},{i})");
                    }
                }
            }
        }
    }

    #[test]
    fn worker_count_does_not_change_results() {
        let geometry = uniform_geometry(5, 100.0, 60.0);
        let diffusivity = zero_diffusivity(&geometry);
        let mut initial = zero_generation(5);
        for (q, field) in initial.iter_mut().enumerate() {
            for k in 0..5 {
                for j in 0..5 {
                    for i in 0..5 {
                        field.set(k, j, i, (q * 125 + k * 25 + j * 5 + i) as f64);
                    }
                }
            }
        }
        let kernel = CellKernel {
            geometry: &geometry,
            physics: &IdentityPhysics,
            wind: &StillWind,
            diffusivity: &diffusivity,
            initial: &initial,
            threshold: 0.0,
        };

        let mut serial = zero_generation(5);
        sweep(&kernel, 1, &mut serial);
        let mut parallel = zero_generation(5);
        sweep(&kernel, 8, &mut parallel);
        for q in 0..Species::COUNT {
            assert_eq!(serial[q], parallel[q]);
        }
    }
}
