// Fusion reaction rate physics
//
// The D-T reactivity follows the Sadler and Van Belle parametrisation
// used by Fausser et al. for tokamak neutron source models. The neutron
// source density combines it with the local ion density.

/// D-T reaction rate coefficient at the given ion temperature (keV).
///
/// Monotonically increasing over the fusion-relevant temperature range.
/// A zero temperature means no thermal reactions, so the reactivity is
/// defined as exactly zero there rather than evaluating the fit.
pub fn dt_reactivity(ion_temperature: f64) -> f64 {
    if ion_temperature == 0.0 {
        return 0.0;
    }

    const C: [f64; 7] = [
        2.5663271e-18,
        19.983026,
        2.5077133e-2,
        2.5773408e-3,
        6.1880463e-5,
        6.6024089e-2,
        8.1215505e-3,
    ];

    let t = ion_temperature;
    let u = 1.0 - t * (C[2] + t * (C[3] - C[4] * t)) / (1.0 + t * (C[5] + C[6] * t));

    C[0] * (-C[1] * (u / t).powf(1.0 / 3.0)).exp() / (u.powf(5.0 / 6.0) * t.powf(2.0 / 3.0))
}

/// Neutron source density (neutrons/s/m3) for an ion density in m-3 and
/// an ion temperature in eV.
pub fn neutron_source_density(ion_density: f64, ion_temperature: f64) -> f64 {
    ion_density * ion_density * dt_reactivity(ion_temperature / 1e3)
}
