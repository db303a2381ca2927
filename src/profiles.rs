// Radial plasma profiles
//
// Parametric ion density and ion temperature as functions of the
// normalised minor radius rho (0 on the magnetic axis, 1 at the
// separatrix), following the Fausser et al. confinement-mode
// parametrisation: a peaked power law inside the pedestal radius and a
// linear ramp down to the separatrix value outside it.

use crate::error::{Result, SourceError};
use serde::{Deserialize, Serialize};

/// Plasma confinement mode.
///
/// Selects the core branch of the temperature profile: L-mode is a plain
/// power law, H-mode applies an extra exponent that flattens the core
/// and steepens the gradient just inside the pedestal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mode {
    L,
    H,
}

fn check_positive(name: &str, value: f64) -> Result<()> {
    if !(value > 0.0) || !value.is_finite() {
        return Err(SourceError::Configuration(format!(
            "{} must be a positive finite number, got {}",
            name, value
        )));
    }
    Ok(())
}

fn check_non_negative(name: &str, value: f64) -> Result<()> {
    if !(value >= 0.0) || !value.is_finite() {
        return Err(SourceError::Configuration(format!(
            "{} must be a non-negative finite number, got {}",
            name, value
        )));
    }
    Ok(())
}

fn check_rho(rho: f64) -> Result<()> {
    // NaN fails the containment check and is rejected with the rest
    if !(0.0..=1.0).contains(&rho) {
        return Err(SourceError::OutOfRange(rho));
    }
    Ok(())
}

/// Ion density profile (m-3) over the normalised minor radius.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DensityProfile {
    pub centre: f64,
    pub peaking_factor: f64,
    pub pedestal: f64,
    pub separatrix: f64,
    /// Pedestal position as a normalised minor radius
    pub pedestal_rho: f64,
}

impl DensityProfile {
    pub fn new(
        centre: f64,
        peaking_factor: f64,
        pedestal: f64,
        separatrix: f64,
        pedestal_rho: f64,
    ) -> Result<Self> {
        check_positive("ion density centre", centre)?;
        check_positive("ion density peaking factor", peaking_factor)?;
        check_positive("ion density pedestal", pedestal)?;
        check_positive("ion density separatrix", separatrix)?;
        if !(pedestal_rho > 0.0 && pedestal_rho < 1.0) {
            return Err(SourceError::Configuration(format!(
                "pedestal radius must lie strictly between the magnetic axis \
                 and the separatrix, got normalised position {}",
                pedestal_rho
            )));
        }
        Ok(Self {
            centre,
            peaking_factor,
            pedestal,
            separatrix,
            pedestal_rho,
        })
    }

    /// Ion density at the normalised minor radius rho.
    pub fn at(&self, rho: f64) -> Result<f64> {
        check_rho(rho)?;
        if rho <= self.pedestal_rho {
            // blend form keeps the axis and pedestal values exact
            let x = rho / self.pedestal_rho;
            let shape = (1.0 - x * x).powf(self.peaking_factor);
            Ok(self.centre * shape + self.pedestal * (1.0 - shape))
        } else {
            let ramp = (1.0 - rho) / (1.0 - self.pedestal_rho);
            Ok(self.pedestal * ramp + self.separatrix * (1.0 - ramp))
        }
    }
}

/// Ion temperature profile (eV) over the normalised minor radius.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TemperatureProfile {
    pub centre: f64,
    pub peaking_factor: f64,
    /// Exponent controlling the H-mode core-to-pedestal blend
    pub beta: f64,
    pub pedestal: f64,
    pub separatrix: f64,
    pub pedestal_rho: f64,
    pub mode: Mode,
}

impl TemperatureProfile {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        centre: f64,
        peaking_factor: f64,
        beta: f64,
        pedestal: f64,
        separatrix: f64,
        pedestal_rho: f64,
        mode: Mode,
    ) -> Result<Self> {
        check_positive("ion temperature centre", centre)?;
        check_positive("ion temperature peaking factor", peaking_factor)?;
        check_positive("ion temperature beta", beta)?;
        check_positive("ion temperature pedestal", pedestal)?;
        // a cold scrape-off layer is a meaningful configuration
        check_non_negative("ion temperature separatrix", separatrix)?;
        if !(pedestal_rho > 0.0 && pedestal_rho < 1.0) {
            return Err(SourceError::Configuration(format!(
                "pedestal radius must lie strictly between the magnetic axis \
                 and the separatrix, got normalised position {}",
                pedestal_rho
            )));
        }
        Ok(Self {
            centre,
            peaking_factor,
            beta,
            pedestal,
            separatrix,
            pedestal_rho,
            mode,
        })
    }

    /// Ion temperature at the normalised minor radius rho.
    pub fn at(&self, rho: f64) -> Result<f64> {
        check_rho(rho)?;
        if rho <= self.pedestal_rho {
            let x = rho / self.pedestal_rho;
            let shape = match self.mode {
                Mode::L => (1.0 - x * x).powf(self.peaking_factor),
                Mode::H => (1.0 - x.powf(self.beta)).powf(self.peaking_factor),
            };
            Ok(self.centre * shape + self.pedestal * (1.0 - shape))
        } else {
            let ramp = (1.0 - rho) / (1.0 - self.pedestal_rho);
            Ok(self.pedestal * ramp + self.separatrix * (1.0 - ramp))
        }
    }
}
