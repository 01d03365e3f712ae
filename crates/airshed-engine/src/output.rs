//! Output assembly.
//!
//! The tracked species carry nitrogen and sulfur mass internally; the
//! output map converts them back to the user-facing pollutant masses
//! by inverting the emission-side molar ratios, and adds the derived
//! total fine-particulate field.

use airshed_core::species::{N_TO_NH4, N_TO_NO3, NH3_TO_N, NOX_TO_N, SOX_TO_S, S_TO_SO4};
use airshed_core::{DenseField3, OutputSpecies, Species};
use indexmap::IndexMap;

/// Convert the final generation into the output pollutant map, keyed by
/// [`OutputSpecies::name`] in [`OutputSpecies::ALL`] order.
pub(crate) fn assemble(
    generation: &[DenseField3; Species::COUNT],
) -> IndexMap<String, DenseField3> {
    let field = |species: Species| &generation[species.index()];

    let soa = field(Species::ParticulateOrganic).clone();
    let primary_pm25 = field(Species::Pm25).clone();
    let p_nh4 = field(Species::ParticulateAmmonium).scale_copy(N_TO_NH4);
    let p_so4 = field(Species::ParticulateSulfate).scale_copy(S_TO_SO4);
    let p_no3 = field(Species::ParticulateNitrate).scale_copy(N_TO_NO3);

    let mut total_pm25 = soa.clone();
    total_pm25.add_assign(&primary_pm25);
    total_pm25.add_assign(&p_nh4);
    total_pm25.add_assign(&p_so4);
    total_pm25.add_assign(&p_no3);

    let mut output = IndexMap::with_capacity(OutputSpecies::ALL.len());
    for pollutant in OutputSpecies::ALL {
        let concentrations = match pollutant {
            OutputSpecies::Voc => field(Species::GasOrganic).clone(),
            OutputSpecies::Soa => soa.clone(),
            OutputSpecies::PrimaryPm25 => primary_pm25.clone(),
            OutputSpecies::Nh3 => field(Species::GasAmmonia).scale_copy(1.0 / NH3_TO_N),
            OutputSpecies::PNh4 => p_nh4.clone(),
            OutputSpecies::Sox => field(Species::GasSulfur).scale_copy(1.0 / SOX_TO_S),
            OutputSpecies::PSo4 => p_so4.clone(),
            OutputSpecies::Nox => field(Species::GasNitrate).scale_copy(1.0 / NOX_TO_N),
            OutputSpecies::PNo3 => p_no3.clone(),
            OutputSpecies::TotalPm25 => total_pm25.clone(),
        };
        output.insert(pollutant.name().to_string(), concentrations);
    }
    output
}
