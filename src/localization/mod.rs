//! Monte Carlo localization: particle filter, sensor model and RNG.

mod particle_filter;
mod rng;
mod sensor_model;

pub use particle_filter::{Particle, ParticleFilter, ParticleFilterConfig, ParticleFilterState};
pub use rng::{Rng, SimpleRng};
pub use sensor_model::{kernel, RangeSensorModel, SensorModelConfig};
