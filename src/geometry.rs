// Analytic flux-surface geometry
//
// Maps a flux-surface label and poloidal angle to real-space (R, Z)
// using a Miller-type parametrisation: elongation and triangularity
// distort the circular cross section into the D shape, and a
// radius-dependent Shafranov shift displaces the inner surfaces
// outward. This is an idealised shape model, not a solved equilibrium.

use crate::error::{Result, SourceError};
use serde::{Deserialize, Serialize};

/// Idealised tokamak flux-surface shape.
///
/// Lengths are metres; elongation, triangularity and the Shafranov
/// factor are dimensionless.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FluxSurface {
    pub major_radius: f64,
    pub minor_radius: f64,
    pub elongation: f64,
    pub triangularity: f64,
    pub shafranov_factor: f64,
}

impl FluxSurface {
    pub fn new(
        major_radius: f64,
        minor_radius: f64,
        elongation: f64,
        triangularity: f64,
        shafranov_factor: f64,
    ) -> Result<Self> {
        if !(major_radius > 0.0) || !major_radius.is_finite() {
            return Err(SourceError::Configuration(format!(
                "major radius must be a positive finite number, got {}",
                major_radius
            )));
        }
        if !(minor_radius > 0.0) || !minor_radius.is_finite() {
            return Err(SourceError::Configuration(format!(
                "minor radius must be a positive finite number, got {}",
                minor_radius
            )));
        }
        if minor_radius >= major_radius {
            return Err(SourceError::Configuration(format!(
                "minor radius ({}) must be smaller than major radius ({})",
                minor_radius, major_radius
            )));
        }
        if !(elongation > 0.0) || !elongation.is_finite() {
            return Err(SourceError::Configuration(format!(
                "elongation must be a positive finite number, got {}",
                elongation
            )));
        }
        // arcsin(triangularity * sin(angle)) must stay defined
        if !(-1.0..=1.0).contains(&triangularity) {
            return Err(SourceError::Configuration(format!(
                "triangularity must be within [-1, 1], got {}",
                triangularity
            )));
        }
        if !(shafranov_factor.abs() < 0.5) {
            return Err(SourceError::Configuration(format!(
                "Shafranov factor must have magnitude below 0.5, got {}",
                shafranov_factor
            )));
        }
        Ok(Self {
            major_radius,
            minor_radius,
            elongation,
            triangularity,
            shafranov_factor,
        })
    }

    /// Outward displacement of the flux surface labelled rho: maximal on
    /// the magnetic axis, zero at the separatrix.
    pub fn shafranov_shift(&self, rho: f64) -> f64 {
        self.shafranov_factor * self.minor_radius * (1.0 - rho * rho)
    }

    /// Real-space (R, Z) of the point at normalised minor radius rho and
    /// poloidal angle theta.
    pub fn position(&self, rho: f64, theta: f64) -> (f64, f64) {
        let shaped_angle = theta + (self.triangularity * theta.sin()).asin();
        let r = self.major_radius
            + self.minor_radius * rho * shaped_angle.cos()
            + self.shafranov_shift(rho);
        let z = self.elongation * self.minor_radius * rho * theta.sin();
        (r, z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    fn iter_like() -> FluxSurface {
        FluxSurface::new(9.06, 2.92258, 1.557, 0.270, 0.153).unwrap()
    }

    #[test]
    fn test_shafranov_shift_endpoints() {
        let surface = iter_like();
        assert_eq!(surface.shafranov_shift(0.0), 0.153 * 2.92258);
        assert_eq!(surface.shafranov_shift(1.0), 0.0);
    }

    #[test]
    fn test_position_on_axis() {
        let surface = iter_like();
        let (r, z) = surface.position(0.0, 1.234);
        assert_eq!(r, 9.06 + surface.shafranov_shift(0.0));
        assert_eq!(z, 0.0);
    }

    #[test]
    fn test_position_outboard_midplane() {
        let surface = iter_like();
        // theta = 0: no triangular distortion, no height
        let (r, z) = surface.position(1.0, 0.0);
        assert!((r - (9.06 + 2.92258)).abs() < 1e-12);
        assert_eq!(z, 0.0);
    }

    #[test]
    fn test_position_top_of_plasma() {
        let surface = iter_like();
        let (r, z) = surface.position(1.0, PI / 2.0);
        // at the top the triangularity pulls the surface inward
        let expected_r = 9.06 + 2.92258 * (PI / 2.0 + 0.270_f64.asin()).cos();
        assert!((r - expected_r).abs() < 1e-12);
        assert!((z - 1.557 * 2.92258).abs() < 1e-12);
    }

    #[test]
    fn test_elongation_stretches_z() {
        let round = FluxSurface::new(9.0, 3.0, 1.0, 0.0, 0.0).unwrap();
        let tall = FluxSurface::new(9.0, 3.0, 2.0, 0.0, 0.0).unwrap();
        let (_, z_round) = round.position(1.0, PI / 2.0);
        let (_, z_tall) = tall.position(1.0, PI / 2.0);
        assert!((z_tall - 2.0 * z_round).abs() < 1e-12);
    }

    #[test]
    fn test_invalid_shapes() {
        assert!(FluxSurface::new(-9.0, 3.0, 1.5, 0.3, 0.1).is_err());
        assert!(FluxSurface::new(9.0, 0.0, 1.5, 0.3, 0.1).is_err());
        // minor radius must stay inside the major radius
        assert!(FluxSurface::new(3.0, 9.0, 1.5, 0.3, 0.1).is_err());
        assert!(FluxSurface::new(9.0, 3.0, 0.0, 0.3, 0.1).is_err());
        assert!(FluxSurface::new(9.0, 3.0, 1.5, 1.3, 0.1).is_err());
        assert!(FluxSurface::new(9.0, 3.0, 1.5, 0.3, 0.5).is_err());
        assert!(FluxSurface::new(9.0, 3.0, 1.5, 0.3, f64::NAN).is_err());
    }
}
