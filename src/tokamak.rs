// Tokamak plasma source discretisation
//
// Samples the plasma volume and collapses it into a finite population of
// weighted ring emitters. Each sample of (normalised radius, poloidal
// angle) becomes one axisymmetric ring at the mapped (R, Z) position,
// weighted by the local neutron source density and carrying an energy
// spectrum evaluated at the local ion temperature.

use crate::error::{Result, SourceError};
use crate::fuel::FuelType;
use crate::geometry::FluxSurface;
use crate::physics::neutron_source_density;
use crate::profiles::{DensityProfile, Mode, TemperatureProfile};
use crate::source::SourceEmitter;
use crate::spectrum::neutron_energy_spectrum;
use crate::stats::{AngularDistribution, SpatialDistribution};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Plasma parameters for a tokamak neutron source.
///
/// Lengths are metres, temperatures eV, densities m-3; elongation,
/// triangularity, the Shafranov factor and the peaking exponents are
/// dimensionless. The field names follow the Fausser et al. source
/// model paper.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TokamakParameters {
    pub major_radius: f64,
    pub minor_radius: f64,
    pub pedestal_radius: f64,
    pub elongation: f64,
    pub triangularity: f64,
    pub shafranov_factor: f64,
    pub mode: Mode,
    pub ion_density_centre: f64,
    pub ion_density_peaking_factor: f64,
    pub ion_density_pedestal: f64,
    pub ion_density_separatrix: f64,
    pub ion_temperature_centre: f64,
    pub ion_temperature_peaking_factor: f64,
    pub ion_temperature_beta: f64,
    pub ion_temperature_pedestal: f64,
    pub ion_temperature_separatrix: f64,
}

/// A validated tokamak plasma source ready for discretisation.
#[derive(Debug, Clone, PartialEq)]
pub struct TokamakSource {
    flux_surface: FluxSurface,
    density: DensityProfile,
    temperature: TemperatureProfile,
    fuel: FuelType,
    angles: (f64, f64),
}

impl TokamakSource {
    /// Validate the parameter set and build a source. The toroidal
    /// sub-arc in `angles` (radians) is shared by every emitted ring.
    pub fn new(params: TokamakParameters, fuel: FuelType, angles: (f64, f64)) -> Result<Self> {
        let flux_surface = FluxSurface::new(
            params.major_radius,
            params.minor_radius,
            params.elongation,
            params.triangularity,
            params.shafranov_factor,
        )?;

        if !(params.pedestal_radius > 0.0) || !params.pedestal_radius.is_finite() {
            return Err(SourceError::Configuration(format!(
                "pedestal radius must be a positive finite number, got {}",
                params.pedestal_radius
            )));
        }
        if params.pedestal_radius >= params.minor_radius {
            return Err(SourceError::Configuration(format!(
                "pedestal radius ({}) must be smaller than minor radius ({})",
                params.pedestal_radius, params.minor_radius
            )));
        }
        let pedestal_rho = params.pedestal_radius / params.minor_radius;

        let density = DensityProfile::new(
            params.ion_density_centre,
            params.ion_density_peaking_factor,
            params.ion_density_pedestal,
            params.ion_density_separatrix,
            pedestal_rho,
        )?;
        let temperature = TemperatureProfile::new(
            params.ion_temperature_centre,
            params.ion_temperature_peaking_factor,
            params.ion_temperature_beta,
            params.ion_temperature_pedestal,
            params.ion_temperature_separatrix,
            pedestal_rho,
            params.mode,
        )?;

        let (start, stop) = angles;
        crate::source::check_arc(start, stop)?;

        Ok(Self {
            flux_surface,
            density,
            temperature,
            fuel,
            angles,
        })
    }

    pub fn flux_surface(&self) -> &FluxSurface {
        &self.flux_surface
    }

    pub fn density_profile(&self) -> &DensityProfile {
        &self.density
    }

    pub fn temperature_profile(&self) -> &TemperatureProfile {
        &self.temperature
    }

    pub fn fuel(&self) -> FuelType {
        self.fuel
    }

    pub fn angles(&self) -> (f64, f64) {
        self.angles
    }

    /// Discretise the plasma into `sample_size` weighted ring emitters.
    ///
    /// Draws (rho, poloidal angle) uniformly and weights each sample by
    /// the local neutron source density over the sample count, so the
    /// summed strength converges to the same value whatever the sample
    /// size. Samples landing where the source density is exactly zero
    /// (a cold separatrix) are dropped; they carry no strength.
    ///
    /// Deterministic for a seeded rng: the same seed and sample size
    /// reproduce the same emitter sequence.
    pub fn sample_emitters<R: Rng + ?Sized>(
        &self,
        sample_size: usize,
        rng: &mut R,
    ) -> Result<Vec<SourceEmitter>> {
        if sample_size == 0 {
            return Err(SourceError::InvalidSampleCount(sample_size));
        }

        let mut emitters = Vec::with_capacity(sample_size);
        for _ in 0..sample_size {
            let rho = rng.gen::<f64>();
            let poloidal_angle = 2.0 * PI * rng.gen::<f64>();

            let local_density = self.density.at(rho)?;
            let local_temperature = self.temperature.at(rho)?;
            let strength =
                neutron_source_density(local_density, local_temperature) / sample_size as f64;
            if strength == 0.0 {
                continue;
            }

            let (r, z) = self.flux_surface.position(rho, poloidal_angle);
            let spectrum = neutron_energy_spectrum(local_temperature, self.fuel)?;

            emitters.push(SourceEmitter {
                space: SpatialDistribution::Ring {
                    radius: r,
                    z,
                    start_angle: self.angles.0,
                    stop_angle: self.angles.1,
                },
                angle: AngularDistribution::Isotropic,
                energy: spectrum.into_distribution(),
                strength,
            });
        }
        Ok(emitters)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn iter_like_parameters() -> TokamakParameters {
        TokamakParameters {
            major_radius: 9.06,
            minor_radius: 2.92258,
            pedestal_radius: 0.8 * 2.92258,
            elongation: 1.557,
            triangularity: 0.270,
            shafranov_factor: 0.153,
            mode: Mode::H,
            ion_density_centre: 1.09e20,
            ion_density_peaking_factor: 1.0,
            ion_density_pedestal: 1.09e20,
            ion_density_separatrix: 3e19,
            ion_temperature_centre: 45.9e3,
            ion_temperature_peaking_factor: 8.06,
            ion_temperature_beta: 6.0,
            ion_temperature_pedestal: 6.09e3,
            ion_temperature_separatrix: 100.0,
        }
    }

    fn iter_like_source() -> TokamakSource {
        TokamakSource::new(iter_like_parameters(), FuelType::DT, (0.0, 2.0 * PI)).unwrap()
    }

    #[test]
    fn test_construction_validates_pedestal_radius() {
        let mut params = iter_like_parameters();
        params.pedestal_radius = 3.0;
        assert!(matches!(
            TokamakSource::new(params, FuelType::DT, (0.0, 2.0 * PI)).unwrap_err(),
            SourceError::Configuration(_)
        ));

        params.pedestal_radius = 0.0;
        assert!(TokamakSource::new(params, FuelType::DT, (0.0, 2.0 * PI)).is_err());
    }

    #[test]
    fn test_construction_validates_angles() {
        let err =
            TokamakSource::new(iter_like_parameters(), FuelType::DT, (1.0, 1.0)).unwrap_err();
        assert_eq!(
            err,
            SourceError::InvalidAngleRange {
                start: 1.0,
                stop: 1.0
            }
        );
    }

    #[test]
    fn test_sample_count_and_strengths() {
        let source = iter_like_source();
        let mut rng = StdRng::seed_from_u64(1);
        let emitters = source.sample_emitters(500, &mut rng).unwrap();
        // a warm separatrix keeps every sample above zero weight
        assert_eq!(emitters.len(), 500);
        assert!(emitters.iter().all(|e| e.strength > 0.0));
    }

    #[test]
    fn test_zero_sample_size_rejected() {
        let source = iter_like_source();
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(
            source.sample_emitters(0, &mut rng).unwrap_err(),
            SourceError::InvalidSampleCount(0)
        );
    }

    #[test]
    fn test_rings_lie_inside_the_plasma_envelope() {
        let source = iter_like_source();
        let params = iter_like_parameters();
        let mut rng = StdRng::seed_from_u64(3);
        let emitters = source.sample_emitters(1000, &mut rng).unwrap();

        let max_shift = params.shafranov_factor * params.minor_radius;
        let r_min = params.major_radius - params.minor_radius;
        let r_max = params.major_radius + params.minor_radius + max_shift;
        let z_max = params.elongation * params.minor_radius;
        for emitter in &emitters {
            match emitter.space {
                SpatialDistribution::Ring { radius, z, .. } => {
                    assert!(radius > r_min && radius < r_max, "R = {}", radius);
                    assert!(z.abs() <= z_max, "Z = {}", z);
                }
                ref other => panic!("expected ring emitters, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_emitters_carry_local_spectra() {
        let source = iter_like_source();
        let mut rng = StdRng::seed_from_u64(5);
        let emitters = source.sample_emitters(200, &mut rng).unwrap();
        // local temperatures differ sample to sample, so the spectra do too
        let mut means: Vec<f64> = emitters
            .iter()
            .map(|e| match e.energy {
                crate::stats::EnergyDistribution::Gaussian { mean, .. } => mean,
                ref other => panic!("expected Gaussian spectra, got {:?}", other),
            })
            .collect();
        means.sort_by(|a, b| a.partial_cmp(b).unwrap());
        assert!(means.last().unwrap() - means.first().unwrap() > 1e3);
    }

    #[test]
    fn test_cold_separatrix_samples_are_dropped() {
        let mut params = iter_like_parameters();
        params.ion_temperature_separatrix = 0.0;
        let source = TokamakSource::new(params, FuelType::DT, (0.0, 2.0 * PI)).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        // every emitted ring still carries strength
        let emitters = source.sample_emitters(2000, &mut rng).unwrap();
        assert!(emitters.iter().all(|e| e.strength > 0.0));
    }
}
