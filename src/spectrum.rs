// Neutron birth energy spectrum parameters from ion temperature
//
// The mean follows the Ballabio fit: base reaction energy plus a
// temperature dependent shift. The width is the Muir thermal broadening
// formula used by transport engines for fusion sources.

use crate::error::{Result, SourceError};
use crate::fuel::FuelType;
use crate::stats::EnergyDistribution;

/// Mean and standard deviation of a Gaussian-like neutron energy
/// spectrum, both in eV.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnergySpectrum {
    pub mean: f64,
    pub std_dev: f64,
}

impl EnergySpectrum {
    /// The Gaussian energy distribution with these parameters.
    pub fn into_distribution(self) -> EnergyDistribution {
        EnergyDistribution::Gaussian {
            mean: self.mean,
            std_dev: self.std_dev,
        }
    }
}

/// Compute the neutron energy spectrum parameters for a plasma at the
/// given ion temperature (eV).
///
/// The spectrum mean increases with temperature (relativistic shift of
/// the reaction kinematics) and the width grows as sqrt(kT): hotter
/// plasmas emit broader spectra.
pub fn neutron_energy_spectrum(ion_temperature: f64, fuel: FuelType) -> Result<EnergySpectrum> {
    if !(ion_temperature > 0.0) || !ion_temperature.is_finite() {
        return Err(SourceError::InvalidTemperature(ion_temperature));
    }

    let constants = fuel.reaction_constants();
    let t_kev = ion_temperature / 1e3;

    // Ballabio fit evaluates in keV
    let [a1, a2, a3, a4] = constants.mean_shift;
    let shift_kev = a1 * t_kev.powf(2.0 / 3.0) / (1.0 + a2 * t_kev.powf(a3)) + a4 * t_kev;
    let mean = constants.base_energy + shift_kev * 1e3;

    let std_dev =
        (constants.variance_coeff * mean * ion_temperature / constants.mass_of_reactants).sqrt();

    Ok(EnergySpectrum { mean, std_dev })
}
