use fusion_plasma_source::{
    FuelType, Mode, SpatialDistribution, TokamakParameters, TokamakSource,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::f64::consts::PI;

fn main() {
    // ITER-like plasma in H-mode
    let params = TokamakParameters {
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
    };

    let source = TokamakSource::new(params, FuelType::DT, (0.0, 2.0 * PI))
        .expect("valid tokamak parameters");

    println!("=== Tokamak plasma source ===");
    println!("\nRadial profiles:");
    for i in 0..=10 {
        let rho = i as f64 / 10.0;
        let density = source.density_profile().at(rho).unwrap();
        let temperature = source.temperature_profile().at(rho).unwrap();
        println!(
            "  rho = {:.1}: n_i = {:.3e} m-3, T_i = {:8.1} eV",
            rho, density, temperature
        );
    }

    let mut rng = StdRng::seed_from_u64(1);
    let emitters = source.sample_emitters(1000, &mut rng).unwrap();
    let total_strength: f64 = emitters.iter().map(|e| e.strength).sum();
    println!("\nDiscretised into {} ring emitters", emitters.len());
    println!("total relative strength: {:.4e}", total_strength);

    println!("\nFirst 5 rings:");
    for (i, emitter) in emitters.iter().take(5).enumerate() {
        if let SpatialDistribution::Ring { radius, z, .. } = emitter.space {
            println!(
                "  ring {}: R = {:.3} m, Z = {:+.3} m, strength = {:.3e}",
                i + 1,
                radius,
                z,
                emitter.strength
            );
        }
    }
}
