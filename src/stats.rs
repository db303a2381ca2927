// Sampling distributions for source descriptions
//
// A source emitter is described by three independent distributions:
// where a particle is born, which direction it travels, and how much
// energy it carries. Each one samples with an externally supplied rng so
// seeded runs are reproducible.

use rand::Rng;
use rand_distr::{Distribution, Normal};
use std::f64::consts::PI;

/// Spatial distribution of birth positions.
#[derive(Debug, Clone, PartialEq)]
pub enum SpatialDistribution {
    /// Fixed point, zero spatial extent
    Point { position: [f64; 3] },
    /// Circle of the given radius about the z-axis at the given height,
    /// with the toroidal angle drawn uniformly from [start_angle, stop_angle)
    Ring {
        radius: f64,
        z: f64,
        start_angle: f64,
        stop_angle: f64,
    },
}

impl SpatialDistribution {
    /// Sample a birth position (x, y, z).
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> [f64; 3] {
        match self {
            SpatialDistribution::Point { position } => *position,
            SpatialDistribution::Ring {
                radius,
                z,
                start_angle,
                stop_angle,
            } => {
                let phi = start_angle + (stop_angle - start_angle) * rng.gen::<f64>();
                [radius * phi.cos(), radius * phi.sin(), *z]
            }
        }
    }
}

/// Angular distribution of birth directions.
#[derive(Debug, Clone, PartialEq)]
pub enum AngularDistribution {
    Isotropic,
    Monodirectional { reference_uvw: [f64; 3] },
}

impl AngularDistribution {
    /// Create a new monodirectional distribution from an unnormalized
    /// direction vector.
    pub fn new_monodirectional(u: f64, v: f64, w: f64) -> Self {
        let mag = (u * u + v * v + w * w).sqrt();
        if mag == 0.0 {
            panic!("Direction vector cannot be zero");
        }
        Self::Monodirectional {
            reference_uvw: [u / mag, v / mag, w / mag],
        }
    }

    /// Sample a unit direction vector.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> [f64; 3] {
        match self {
            AngularDistribution::Isotropic => {
                let mu = 2.0 * rng.gen::<f64>() - 1.0;
                let phi = 2.0 * PI * rng.gen::<f64>();
                let sin_theta = (1.0 - mu * mu).sqrt();
                [sin_theta * phi.cos(), sin_theta * phi.sin(), mu]
            }
            AngularDistribution::Monodirectional { reference_uvw } => *reference_uvw,
        }
    }
}

/// Energy distribution of birth energies (eV).
#[derive(Debug, Clone, PartialEq)]
pub enum EnergyDistribution {
    Monoenergetic { energy: f64 },
    Gaussian { mean: f64, std_dev: f64 },
}

impl EnergyDistribution {
    /// Sample a birth energy.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        match self {
            EnergyDistribution::Monoenergetic { energy } => *energy,
            EnergyDistribution::Gaussian { mean, std_dev } => {
                // parameters come from the spectrum module, which only
                // produces finite mean > 0 and std_dev >= 0
                let normal = Normal::new(*mean, *std_dev).unwrap();
                normal.sample(rng)
            }
        }
    }
}
