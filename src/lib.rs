// Import the modules and re-export the types for library usage
mod error;
mod fuel;
mod geometry;
mod physics;
mod profiles;
mod source;
mod spectrum;
mod stats;
mod tokamak;

pub use error::{Result, SourceError};
pub use fuel::{FuelType, ReactionConstants};
pub use geometry::FluxSurface;
pub use physics::{dt_reactivity, neutron_source_density};
pub use profiles::{DensityProfile, Mode, TemperatureProfile};
pub use source::{SourceEmitter, SourceSite};
pub use spectrum::{neutron_energy_spectrum, EnergySpectrum};
pub use stats::{AngularDistribution, EnergyDistribution, SpatialDistribution};
pub use tokamak::{TokamakParameters, TokamakSource};
