//! Chemical species, emission pollutants, output pollutants, and the
//! molar-mass conversions between them.
//!
//! The model tracks nine internal species per grid cell. Their index
//! order is fixed and significant: the engine's field arrays are laid
//! out in this order, and the per-cell chemistry closures receive the
//! concentration vector in this order.

/// Molar masses in grams per mole.
pub mod molar {
    /// NOx expressed as NO2.
    pub const MW_NOX: f64 = 46.0055;
    /// Atomic nitrogen.
    pub const MW_N: f64 = 14.0067;
    /// Nitrate ion.
    pub const MW_NO3: f64 = 62.00501;
    /// Ammonia.
    pub const MW_NH3: f64 = 17.03056;
    /// Ammonium ion.
    pub const MW_NH4: f64 = 18.03851;
    /// Atomic sulfur.
    pub const MW_S: f64 = 32.0655;
    /// Sulfur dioxide.
    pub const MW_SO2: f64 = 64.0644;
    /// Sulfate ion.
    pub const MW_SO4: f64 = 96.0632;
}

/// Mass ratio applied when converting NOx emissions to nitrogen.
pub const NOX_TO_N: f64 = molar::MW_N / molar::MW_NOX;
/// Mass ratio applied when converting tracked nitrogen back to nitrate.
pub const N_TO_NO3: f64 = molar::MW_NO3 / molar::MW_N;
/// Mass ratio applied when converting SOx emissions to tracked sulfur.
pub const SOX_TO_S: f64 = molar::MW_SO2 / molar::MW_S;
/// Mass ratio applied when converting tracked sulfur back to sulfate.
pub const S_TO_SO4: f64 = molar::MW_S / molar::MW_SO4;
/// Mass ratio applied when converting NH3 emissions to nitrogen.
pub const NH3_TO_N: f64 = molar::MW_N / molar::MW_NH3;
/// Mass ratio applied when converting tracked nitrogen back to ammonium.
pub const N_TO_NH4: f64 = molar::MW_NH4 / molar::MW_N;

/// One of the nine chemical-state variables tracked per grid cell.
///
/// `index()` gives the stable 0–8 array index. The order dictates which
/// index maps to which physical process branch (settling applies to the
/// particulate members, VOC oxidation to [`Species::GasOrganic`]).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Species {
    /// Gaseous organic matter.
    GasOrganic,
    /// Particulate organic matter (secondary organic aerosol).
    ParticulateOrganic,
    /// Primary fine particulate matter.
    Pm25,
    /// Gaseous ammonia, tracked as nitrogen.
    GasAmmonia,
    /// Particulate ammonium, tracked as nitrogen.
    ParticulateAmmonium,
    /// Gaseous sulfur.
    GasSulfur,
    /// Particulate sulfate, tracked as sulfur.
    ParticulateSulfate,
    /// Gaseous nitrate precursor, tracked as nitrogen.
    GasNitrate,
    /// Particulate nitrate, tracked as nitrogen.
    ParticulateNitrate,
}

impl Species {
    /// Number of tracked species.
    pub const COUNT: usize = 9;

    /// All species in stable index order.
    pub const ALL: [Species; Species::COUNT] = [
        Species::GasOrganic,
        Species::ParticulateOrganic,
        Species::Pm25,
        Species::GasAmmonia,
        Species::ParticulateAmmonium,
        Species::GasSulfur,
        Species::ParticulateSulfate,
        Species::GasNitrate,
        Species::ParticulateNitrate,
    ];

    /// Stable array index, 0–8.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Inverse of [`Species::index`].
    pub fn from_index(index: usize) -> Option<Species> {
        Species::ALL.get(index).copied()
    }

    /// Whether this species is in the particulate phase.
    ///
    /// Particulate species receive a gravitational-settling term in the
    /// cell update; gaseous species do not.
    pub fn is_particulate(self) -> bool {
        matches!(
            self,
            Species::ParticulateOrganic
                | Species::Pm25
                | Species::ParticulateAmmonium
                | Species::ParticulateSulfate
                | Species::ParticulateNitrate
        )
    }

    /// Short internal name used in logs.
    pub fn name(self) -> &'static str {
        match self {
            Species::GasOrganic => "gOrg",
            Species::ParticulateOrganic => "pOrg",
            Species::Pm25 => "PM2_5",
            Species::GasAmmonia => "gNH",
            Species::ParticulateAmmonium => "pNH",
            Species::GasSulfur => "gS",
            Species::ParticulateSulfate => "pS",
            Species::GasNitrate => "gNO",
            Species::ParticulateNitrate => "pNO",
        }
    }
}

impl std::fmt::Display for Species {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A pollutant accepted as a surface emission input (μg/s).
///
/// Emission names outside this set are a fatal configuration error: the
/// run aborts before the first iteration rather than silently ignoring
/// the unknown pollutant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EmissionSpecies {
    /// Volatile organic compounds.
    Voc,
    /// Nitrogen oxides.
    Nox,
    /// Ammonia.
    Nh3,
    /// Sulfur oxides.
    Sox,
    /// Primary fine particulate matter.
    Pm25,
}

impl EmissionSpecies {
    /// All recognized emission pollutants.
    pub const ALL: [EmissionSpecies; 5] = [
        EmissionSpecies::Voc,
        EmissionSpecies::Nox,
        EmissionSpecies::Nh3,
        EmissionSpecies::Sox,
        EmissionSpecies::Pm25,
    ];

    /// Parse a user-facing emission name. Returns `None` for anything
    /// outside the recognized set.
    pub fn from_name(name: &str) -> Option<EmissionSpecies> {
        match name {
            "VOC" => Some(EmissionSpecies::Voc),
            "NOx" => Some(EmissionSpecies::Nox),
            "NH3" => Some(EmissionSpecies::Nh3),
            "SOx" => Some(EmissionSpecies::Sox),
            "PM2_5" => Some(EmissionSpecies::Pm25),
            _ => None,
        }
    }

    /// User-facing name.
    pub fn name(self) -> &'static str {
        match self {
            EmissionSpecies::Voc => "VOC",
            EmissionSpecies::Nox => "NOx",
            EmissionSpecies::Nh3 => "NH3",
            EmissionSpecies::Sox => "SOx",
            EmissionSpecies::Pm25 => "PM2_5",
        }
    }

    /// The internal species this emission feeds. All except PM2.5 enter
    /// the gas phase.
    pub fn target(self) -> Species {
        match self {
            EmissionSpecies::Voc => Species::GasOrganic,
            EmissionSpecies::Nox => Species::GasNitrate,
            EmissionSpecies::Nh3 => Species::GasAmmonia,
            EmissionSpecies::Sox => Species::GasSulfur,
            EmissionSpecies::Pm25 => Species::Pm25,
        }
    }

    /// Molar-mass ratio applied when converting the emitted mass into
    /// the tracked form. VOC and PM2.5 pass through unchanged.
    pub fn mass_ratio(self) -> f64 {
        match self {
            EmissionSpecies::Voc => 1.0,
            EmissionSpecies::Nox => NOX_TO_N,
            EmissionSpecies::Nh3 => NH3_TO_N,
            EmissionSpecies::Sox => SOX_TO_S,
            EmissionSpecies::Pm25 => 1.0,
        }
    }
}

impl std::fmt::Display for EmissionSpecies {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A pollutant reported in the model output (μg/m³).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OutputSpecies {
    /// Gaseous organic matter.
    Voc,
    /// Secondary organic aerosol.
    Soa,
    /// Primary fine particulate matter.
    PrimaryPm25,
    /// Gaseous ammonia, as NH3 mass.
    Nh3,
    /// Particulate ammonium, as NH4 mass.
    PNh4,
    /// Gaseous sulfur, as SOx mass.
    Sox,
    /// Particulate sulfate, as SO4 mass.
    PSo4,
    /// Gaseous nitrate precursor, as NOx mass.
    Nox,
    /// Particulate nitrate, as NO3 mass.
    PNo3,
    /// Sum of primary PM2.5 and all secondary particulate components.
    TotalPm25,
}

impl OutputSpecies {
    /// All output pollutants, in the order they appear in the output map.
    pub const ALL: [OutputSpecies; 10] = [
        OutputSpecies::Voc,
        OutputSpecies::Soa,
        OutputSpecies::PrimaryPm25,
        OutputSpecies::Nh3,
        OutputSpecies::PNh4,
        OutputSpecies::Sox,
        OutputSpecies::PSo4,
        OutputSpecies::Nox,
        OutputSpecies::PNo3,
        OutputSpecies::TotalPm25,
    ];

    /// User-facing name, used as the key in the output map.
    pub fn name(self) -> &'static str {
        match self {
            OutputSpecies::Voc => "VOC",
            OutputSpecies::Soa => "SOA",
            OutputSpecies::PrimaryPm25 => "PrimaryPM2_5",
            OutputSpecies::Nh3 => "NH3",
            OutputSpecies::PNh4 => "pNH4",
            OutputSpecies::Sox => "SOx",
            OutputSpecies::PSo4 => "pSO4",
            OutputSpecies::Nox => "NOx",
            OutputSpecies::PNo3 => "pNO3",
            OutputSpecies::TotalPm25 => "TotalPM2_5",
        }
    }
}

impl std::fmt::Display for OutputSpecies {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_round_trip() {
        for species in Species::ALL {
            assert_eq!(Species::from_index(species.index()), Some(species));
        }
        assert_eq!(Species::from_index(Species::COUNT), None);
    }

    #[test]
    fn index_order_is_stable() {
        assert_eq!(Species::GasOrganic.index(), 0);
        assert_eq!(Species::ParticulateOrganic.index(), 1);
        assert_eq!(Species::Pm25.index(), 2);
        assert_eq!(Species::GasAmmonia.index(), 3);
        assert_eq!(Species::ParticulateAmmonium.index(), 4);
        assert_eq!(Species::GasSulfur.index(), 5);
        assert_eq!(Species::ParticulateSulfate.index(), 6);
        assert_eq!(Species::GasNitrate.index(), 7);
        assert_eq!(Species::ParticulateNitrate.index(), 8);
    }

    #[test]
    fn particulate_partition() {
        let particulate: Vec<Species> = Species::ALL
            .into_iter()
            .filter(|s| s.is_particulate())
            .collect();
        assert_eq!(
            particulate,
            vec![
                Species::ParticulateOrganic,
                Species::Pm25,
                Species::ParticulateAmmonium,
                Species::ParticulateSulfate,
                Species::ParticulateNitrate,
            ]
        );
    }

    #[test]
    fn emission_names_round_trip() {
        for pollutant in EmissionSpecies::ALL {
            assert_eq!(EmissionSpecies::from_name(pollutant.name()), Some(pollutant));
        }
        assert_eq!(EmissionSpecies::from_name("CO2"), None);
        assert_eq!(EmissionSpecies::from_name("voc"), None);
    }

    #[test]
    fn emission_targets() {
        assert_eq!(EmissionSpecies::Voc.target(), Species::GasOrganic);
        assert_eq!(EmissionSpecies::Nox.target(), Species::GasNitrate);
        assert_eq!(EmissionSpecies::Nh3.target(), Species::GasAmmonia);
        assert_eq!(EmissionSpecies::Sox.target(), Species::GasSulfur);
        assert_eq!(EmissionSpecies::Pm25.target(), Species::Pm25);
    }

    #[test]
    fn mass_ratios() {
        assert_eq!(EmissionSpecies::Voc.mass_ratio(), 1.0);
        assert_eq!(EmissionSpecies::Pm25.mass_ratio(), 1.0);
        assert!((EmissionSpecies::Nox.mass_ratio() - 14.0067 / 46.0055).abs() < 1e-12);
        assert!((EmissionSpecies::Nh3.mass_ratio() - 14.0067 / 17.03056).abs() < 1e-12);
        assert!((EmissionSpecies::Sox.mass_ratio() - 64.0644 / 32.0655).abs() < 1e-12);
    }

    #[test]
    fn conversion_ratios_invert() {
        // Converting N to NH4 and the NH4 mass back through the molar
        // table reproduces the nitrogen mass.
        let n_mass = 3.7;
        let nh4_mass = n_mass * N_TO_NH4;
        assert!((nh4_mass * molar::MW_N / molar::MW_NH4 - n_mass).abs() < 1e-12);

        let no3_mass = n_mass * N_TO_NO3;
        assert!((no3_mass * molar::MW_N / molar::MW_NO3 - n_mass).abs() < 1e-12);
    }

    #[test]
    fn output_names_are_distinct() {
        for (a_idx, a) in OutputSpecies::ALL.iter().enumerate() {
            for b in &OutputSpecies::ALL[a_idx + 1..] {
                assert_ne!(a.name(), b.name());
            }
        }
    }
}
