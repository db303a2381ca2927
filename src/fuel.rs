// Fusion fuel reactions and the published fit constants relating ion
// temperature to the neutron birth energy distribution

use crate::error::SourceError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Supported fusion fuel reactions.
///
/// Selects the constants used to turn an ion temperature into a neutron
/// energy spectrum. Only the two neutron-producing branches relevant for
/// fusion source terms are supported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FuelType {
    /// Deuterium-tritium, 14.1 MeV neutrons
    DT,
    /// Deuterium-deuterium, 2.45 MeV neutrons
    DD,
}

/// Fit constants for one fuel reaction.
///
/// `base_energy` and `mean_shift` are the Ballabio parametrisation of the
/// primary neutron spectrum mean: the zero-temperature birth energy plus
/// a temperature dependent shift. `variance_coeff` and
/// `mass_of_reactants` give the Muir thermal broadening width
/// `sqrt(variance_coeff * mean * kT / mass_of_reactants)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReactionConstants {
    /// Neutron birth energy at zero ion temperature (eV)
    pub base_energy: f64,
    /// Ballabio mean shift coefficients a1..a4 (keV in, keV out)
    pub mean_shift: [f64; 4],
    /// Prefactor of the Muir width formula
    pub variance_coeff: f64,
    /// Summed reactant mass (AMU): D + T = 5, D + D = 4
    pub mass_of_reactants: f64,
}

impl FuelType {
    /// Published fit constants for this reaction.
    pub fn reaction_constants(&self) -> ReactionConstants {
        match self {
            FuelType::DT => ReactionConstants {
                base_energy: 14.021e6,
                mean_shift: [5.30509, 2.4736e-3, 1.84, 1.3818],
                variance_coeff: 4.0,
                mass_of_reactants: 5.0,
            },
            FuelType::DD => ReactionConstants {
                base_energy: 2.4495e6,
                mean_shift: [4.69515, -0.040729, 0.47, 0.81844],
                variance_coeff: 4.0,
                mass_of_reactants: 4.0,
            },
        }
    }
}

impl FromStr for FuelType {
    type Err = SourceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "DT" => Ok(FuelType::DT),
            "DD" => Ok(FuelType::DD),
            other => Err(SourceError::UnsupportedFuel(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fuel_from_str() {
        assert_eq!("DT".parse::<FuelType>().unwrap(), FuelType::DT);
        assert_eq!("DD".parse::<FuelType>().unwrap(), FuelType::DD);
    }

    #[test]
    fn test_unsupported_fuel() {
        let err = "XX".parse::<FuelType>().unwrap_err();
        assert_eq!(err, SourceError::UnsupportedFuel("XX".to_string()));

        // lowercase is not accepted either
        assert!("dt".parse::<FuelType>().is_err());
        assert!("".parse::<FuelType>().is_err());
    }

    #[test]
    fn test_reaction_constants() {
        let dt = FuelType::DT.reaction_constants();
        assert_eq!(dt.base_energy, 14.021e6);
        assert_eq!(dt.mass_of_reactants, 5.0);

        let dd = FuelType::DD.reaction_constants();
        assert_eq!(dd.base_energy, 2.4495e6);
        assert_eq!(dd.mass_of_reactants, 4.0);
    }

    #[test]
    fn test_fuel_serde_roundtrip() {
        let json = serde_json::to_string(&FuelType::DT).unwrap();
        let back: FuelType = serde_json::from_str(&json).unwrap();
        assert_eq!(back, FuelType::DT);
    }
}
