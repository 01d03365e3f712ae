//! The outer time-integration loop.

use airshed_core::{DenseField3, GridGeometry, RunError, Species};
use airshed_physics::{Physics, WindField};
use indexmap::IndexMap;

use crate::config::{ConfigError, ModelConfig};
use crate::convergence::ConvergenceTracker;
use crate::emissions::EmissionFlux;
use crate::kernel::CellKernel;
use crate::output;
use crate::sweep::{significance_threshold, sweep};

const SECONDS_PER_DAY: f64 = 86_400.0;

/// Counters describing a completed run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RunMetrics {
    /// Iterations executed, including the final one.
    pub iterations: usize,
    /// Simulated time elapsed, in days.
    pub simulated_days: f64,
}

/// The outcome of a completed run.
#[derive(Debug)]
pub struct RunResult {
    /// Final pollutant concentrations (μg/m³), keyed by output name.
    pub concentrations: IndexMap<String, DenseField3>,
    /// Run counters.
    pub metrics: RunMetrics,
}

/// The air-quality model: grid, meteorology, and closures, ready to
/// integrate emission scenarios to steady state.
///
/// Construct once with [`AirshedModel::new`], then call
/// [`AirshedModel::run`] per emission scenario. The model holds no
/// concentration state between runs.
pub struct AirshedModel {
    geometry: GridGeometry,
    wind: Box<dyn WindField>,
    diffusivity: DenseField3,
    physics: Box<dyn Physics>,
    horizon_days: f64,
    workers: usize,
}

impl AirshedModel {
    /// Validate `config` and build the model.
    pub fn new(config: ModelConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let workers = config.resolved_worker_count();
        Ok(Self {
            geometry: config.geometry,
            wind: config.wind,
            diffusivity: config.vertical_diffusivity,
            physics: config.physics,
            horizon_days: config.horizon_days,
            workers,
        })
    }

    /// Integrate `emissions` (μg/s per cell, keyed by pollutant name)
    /// to steady state and return the final concentrations.
    ///
    /// Each iteration injects the emissions, resamples the wind,
    /// advances every interior cell one timestep, and updates the
    /// per-species convergence latches. The loop terminates only when
    /// every species has converged AND more than `horizon_days` of
    /// simulated time has elapsed.
    pub fn run(
        &mut self,
        emissions: &IndexMap<String, DenseField3>,
    ) -> Result<RunResult, RunError> {
        let flux = EmissionFlux::build(emissions, &self.geometry)?;
        log::info!(
            "starting run: {}x{}x{} grid, physics '{}', {} workers",
            self.geometry.nx,
            self.geometry.ny,
            self.geometry.nz,
            self.physics.name(),
            self.workers,
        );

        let mut initial: [DenseField3; Species::COUNT] = std::array::from_fn(|_| {
            DenseField3::zeros(self.geometry.nz, self.geometry.ny, self.geometry.nx)
        });
        let mut current = initial.clone();
        let mut tracker = ConvergenceTracker::new();
        let mut simulated_days = 0.0;
        let mut iterations = 0;

        loop {
            iterations += 1;
            flux.inject(&mut initial);
            self.wind.resample();
            let threshold = significance_threshold(&initial);

            let kernel = CellKernel {
                geometry: &self.geometry,
                physics: self.physics.as_ref(),
                wind: self.wind.as_ref(),
                diffusivity: &self.diffusivity,
                initial: &initial,
                threshold,
            };
            sweep(&kernel, self.workers, &mut current);

            let all_converged = tracker.observe(&current);
            simulated_days += self.geometry.dt / SECONDS_PER_DAY;
            log::debug!(
                "iteration {iterations}: {simulated_days:.3} days simulated, converged: {all_converged}"
            );

            if all_converged && simulated_days > self.horizon_days {
                break;
            }

            for q in 0..Species::COUNT {
                initial[q].clone_from(&current[q]);
                current[q].fill(0.0);
            }
        }

        log::info!("run finished after {iterations} iterations ({simulated_days:.3} days)");
        Ok(RunResult {
            concentrations: output::assemble(&current),
            metrics: RunMetrics {
                iterations,
                simulated_days,
            },
        })
    }
}
