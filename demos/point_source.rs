use fusion_plasma_source::{FuelType, SourceEmitter};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() {
    println!("=== Fusion point source ===");

    let source = SourceEmitter::fusion_point([0.0, 0.0, 0.0], 20e3, FuelType::DT)
        .expect("valid point source parameters");
    println!("energy distribution: {:?}", source.energy);

    let mut rng = StdRng::seed_from_u64(1);
    println!("\nSampling 10 birth sites:");
    for i in 0..10 {
        let site = source.sample(&mut rng);
        println!(
            "  site {}: E = {:.4e} eV, direction = [{:.3}, {:.3}, {:.3}]",
            i + 1,
            site.energy,
            site.direction[0],
            site.direction[1],
            site.direction[2]
        );
    }
}
