// Independent source emitters
//
// A SourceEmitter is the unit handed to the transport engine: a spatial
// distribution, an angular distribution, an energy distribution and a
// relative strength. The fusion_point and fusion_ring constructors cover
// the non-tokamak cases with a single emitter each; the tokamak module
// produces whole populations of ring emitters.

use crate::error::{Result, SourceError};
use crate::fuel::FuelType;
use crate::spectrum::neutron_energy_spectrum;
use crate::stats::{AngularDistribution, EnergyDistribution, SpatialDistribution};
use rand::Rng;
use std::f64::consts::PI;

/// Validate a toroidal sub-arc: both ends within one full turn either
/// way, and a strictly positive sweep.
pub(crate) fn check_arc(start_angle: f64, stop_angle: f64) -> Result<()> {
    for angle in [start_angle, stop_angle] {
        if !(-2.0 * PI..=2.0 * PI).contains(&angle) {
            return Err(SourceError::Configuration(format!(
                "arc angles must lie within [-2*pi, 2*pi] radians, got {}",
                angle
            )));
        }
    }
    if !(stop_angle > start_angle) {
        return Err(SourceError::InvalidAngleRange {
            start: start_angle,
            stop: stop_angle,
        });
    }
    Ok(())
}

/// One weighted, independent neutron source.
///
/// Strengths are relative probabilities across the emitted set and need
/// not sum to one; the importing transport engine normalises them.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceEmitter {
    pub space: SpatialDistribution,
    pub angle: AngularDistribution,
    pub energy: EnergyDistribution,
    pub strength: f64,
}

/// A concrete sampled birth site.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceSite {
    pub position: [f64; 3],
    pub direction: [f64; 3],
    pub energy: f64,
}

impl SourceEmitter {
    /// Isotropic point source with a thermal fusion energy spectrum.
    ///
    /// The coordinate is in the length units of the surrounding model;
    /// the temperature is the local ion temperature in eV.
    pub fn fusion_point(coordinate: [f64; 3], temperature: f64, fuel: FuelType) -> Result<Self> {
        let spectrum = neutron_energy_spectrum(temperature, fuel)?;
        Ok(Self {
            space: SpatialDistribution::Point {
                position: coordinate,
            },
            angle: AngularDistribution::Isotropic,
            energy: spectrum.into_distribution(),
            strength: 1.0,
        })
    }

    /// Isotropic ring source about the z-axis at z = 0, with the
    /// toroidal angle drawn uniformly from the given sub-arc (radians).
    pub fn fusion_ring(
        radius: f64,
        angles: (f64, f64),
        temperature: f64,
        fuel: FuelType,
    ) -> Result<Self> {
        if !(radius >= 0.0) || !radius.is_finite() {
            return Err(SourceError::Configuration(format!(
                "ring radius must be a non-negative finite number, got {}",
                radius
            )));
        }
        let (start_angle, stop_angle) = angles;
        check_arc(start_angle, stop_angle)?;
        let spectrum = neutron_energy_spectrum(temperature, fuel)?;
        Ok(Self {
            space: SpatialDistribution::Ring {
                radius,
                z: 0.0,
                start_angle,
                stop_angle,
            },
            angle: AngularDistribution::Isotropic,
            energy: spectrum.into_distribution(),
            strength: 1.0,
        })
    }

    /// Sample one birth site from this emitter.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> SourceSite {
        SourceSite {
            position: self.space.sample(rng),
            direction: self.angle.sample(rng),
            energy: self.energy.sample(rng),
        }
    }
}
