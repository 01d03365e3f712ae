//! Emission validation and per-iteration injection.
//!
//! Raw emission rates arrive as μg/s per cell, keyed by pollutant name.
//! [`EmissionFlux::build`] validates names and shapes once, converts
//! each rate to a concentration increment per timestep, and folds it
//! onto the target species. [`EmissionFlux::inject`] adds the resulting
//! flux fields to the working generation at the top of every iteration.

use airshed_core::{DenseField3, EmissionSpecies, GridGeometry, RunError, Species};
use indexmap::IndexMap;

/// Precomputed per-species concentration increments (μg/m³ per step).
pub(crate) struct EmissionFlux {
    fields: [Option<DenseField3>; Species::COUNT],
}

impl EmissionFlux {
    /// Validate `emissions` against the grid and convert every rate
    /// array into a concentration increment on its target species.
    ///
    /// Multiple pollutants mapping to the same species accumulate; the
    /// increment is `rate * mass_ratio * dt / cell_volume`.
    pub(crate) fn build(
        emissions: &IndexMap<String, DenseField3>,
        geometry: &GridGeometry,
    ) -> Result<Self, RunError> {
        let expected = (geometry.nz, geometry.ny, geometry.nx);
        let mut fields: [Option<DenseField3>; Species::COUNT] = Default::default();

        for (name, rates) in emissions {
            let pollutant =
                EmissionSpecies::from_name(name).ok_or_else(|| RunError::UnknownEmission {
                    name: name.clone(),
                })?;
            if rates.shape() != expected {
                return Err(RunError::EmissionShapeMismatch {
                    name: name.clone(),
                    expected,
                    got: rates.shape(),
                });
            }

            let ratio = pollutant.mass_ratio();
            let target = fields[pollutant.target().index()]
                .get_or_insert_with(|| DenseField3::zeros(geometry.nz, geometry.ny, geometry.nx));
            for k in 0..geometry.nz {
                for j in 0..geometry.ny {
                    for i in 0..geometry.nx {
                        let flux = rates.get(k, j, i) * ratio / geometry.cell_volume(k, j, i)
                            * geometry.dt;
                        target.set(k, j, i, target.get(k, j, i) + flux);
                    }
                }
            }
        }

        Ok(Self { fields })
    }

    /// Add the flux increments onto `generation`.
    pub(crate) fn inject(&self, generation: &mut [DenseField3; Species::COUNT]) {
        for (q, flux) in self.fields.iter().enumerate() {
            if let Some(flux) = flux {
                generation[q].add_assign(flux);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use airshed_core::species::NOX_TO_N;
    use airshed_test_utils::uniform_geometry;

    fn single_emission(name: &str, rates: DenseField3) -> IndexMap<String, DenseField3> {
        let mut map = IndexMap::new();
        map.insert(name.to_string(), rates);
        map
    }

    #[test]
    fn unknown_pollutant_is_rejected() {
        let geometry = uniform_geometry(3, 100.0, 60.0);
        let emissions = single_emission("CO2", DenseField3::zeros(3, 3, 3));
        match EmissionFlux::build(&emissions, &geometry) {
            Err(RunError::UnknownEmission { name }) => assert_eq!(name, "CO2"),
            other => panic!("expected UnknownEmission, got {:?}", other.err()),
        }
    }

    #[test]
    fn shape_mismatch_is_rejected() {
        let geometry = uniform_geometry(3, 100.0, 60.0);
        let emissions = single_emission("NOx", DenseField3::zeros(2, 3, 3));
        match EmissionFlux::build(&emissions, &geometry) {
            Err(RunError::EmissionShapeMismatch { name, expected, got }) => {
                assert_eq!(name, "NOx");
                assert_eq!(expected, (3, 3, 3));
                assert_eq!(got, (2, 3, 3));
            }
            other => panic!("expected EmissionShapeMismatch, got {:?}", other.err()),
        }
    }

    #[test]
    fn nox_flux_lands_on_gas_nitrate_with_ratio() {
        let geometry = uniform_geometry(3, 100.0, 60.0);
        let mut rates = DenseField3::zeros(3, 3, 3);
        rates.set(0, 1, 1, 50.0);
        let emissions = single_emission("NOx", rates);
        let flux = EmissionFlux::build(&emissions, &geometry).unwrap();

        let mut generation: [DenseField3; Species::COUNT] =
            std::array::from_fn(|_| DenseField3::zeros(3, 3, 3));
        flux.inject(&mut generation);

        let expected = 50.0 * NOX_TO_N / (100.0 * 100.0 * 100.0) * 60.0;
        let gno = &generation[Species::GasNitrate.index()];
        assert!((gno.get(0, 1, 1) - expected).abs() < 1e-15);
        assert_eq!(gno.sum(), gno.get(0, 1, 1));
        // Nothing lands on any other species.
        for species in Species::ALL {
            if species != Species::GasNitrate {
                assert_eq!(generation[species.index()].sum(), 0.0);
            }
        }
    }

    #[test]
    fn voc_flux_passes_mass_through() {
        let geometry = uniform_geometry(3, 100.0, 60.0);
        let mut rates = DenseField3::zeros(3, 3, 3);
        rates.set(0, 0, 0, 10.0);
        let emissions = single_emission("VOC", rates);
        let flux = EmissionFlux::build(&emissions, &geometry).unwrap();

        let mut generation: [DenseField3; Species::COUNT] =
            std::array::from_fn(|_| DenseField3::zeros(3, 3, 3));
        flux.inject(&mut generation);

        let expected = 10.0 / (100.0 * 100.0 * 100.0) * 60.0;
        assert!(
            (generation[Species::GasOrganic.index()].get(0, 0, 0) - expected).abs() < 1e-18
        );
    }

    #[test]
    fn repeated_injection_accumulates() {
        let geometry = uniform_geometry(3, 100.0, 60.0);
        let emissions = single_emission("PM2_5", DenseField3::splat(3, 3, 3, 1.0));
        let flux = EmissionFlux::build(&emissions, &geometry).unwrap();

        let mut generation: [DenseField3; Species::COUNT] =
            std::array::from_fn(|_| DenseField3::zeros(3, 3, 3));
        flux.inject(&mut generation);
        flux.inject(&mut generation);

        let per_step = 1.0 / (100.0 * 100.0 * 100.0) * 60.0;
        let pm = &generation[Species::Pm25.index()];
        assert!((pm.get(1, 1, 1) - 2.0 * per_step).abs() < 1e-18);
    }
}
