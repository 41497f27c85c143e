//! Particle filter (Monte Carlo Localization) over a wall map.
//!
//! Sequential Monte Carlo estimation of a mobile agent's pose from a
//! three-ray range reading. The filter deliberately injects no noise in the
//! prediction step; the belief spread comes entirely from the resampling
//! jitter and the uniform scatter fraction, and the kernel half-life and
//! jitter magnitudes are tuned assuming that split of noise sources.

use crate::core::types::{MotionEstimate, Pose2D, RangeReading};
use crate::map::{Bounds, WorldMap};
use serde::{Deserialize, Serialize};
use std::f32::consts::TAU;

use super::rng::{Rng, SimpleRng};
use super::sensor_model::{RangeSensorModel, SensorModelConfig};

/// A single particle representing a possible agent pose.
#[derive(Debug, Clone, Copy)]
pub struct Particle {
    /// Hypothesized agent pose.
    pub pose: Pose2D,
    /// Importance weight. Sums to 1 over the set after a successful weigh.
    pub weight: f64,
}

impl Particle {
    /// Create a particle with the given weight.
    pub fn with_weight(pose: Pose2D, weight: f64) -> Self {
        Self { pose, weight }
    }
}

/// Configuration for the particle filter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParticleFilterConfig {
    /// Number of particles.
    pub num_particles: usize,

    /// Fraction of resampling draws replaced by a uniformly random pose,
    /// guarding against particle deprivation.
    pub scatter_prob: f64,

    /// Uniform jitter applied to a resampled particle's x and y, in map
    /// units (drawn from ±jitter_linear).
    pub jitter_linear: f32,

    /// Uniform jitter applied to a resampled particle's heading, in radians
    /// (drawn from ±jitter_angular).
    pub jitter_angular: f32,

    /// Sensor model configuration.
    pub sensor: SensorModelConfig,

    /// Random seed for deterministic behavior (0 for time-based).
    pub seed: u64,
}

impl Default for ParticleFilterConfig {
    fn default() -> Self {
        Self {
            num_particles: 5000,
            scatter_prob: 0.01,
            jitter_linear: 2.0,
            jitter_angular: 0.05,
            sensor: SensorModelConfig::default(),
            seed: 0,
        }
    }
}

impl ParticleFilterConfig {
    /// Smaller set for constrained hardware or fast tests.
    pub fn light() -> Self {
        Self {
            num_particles: 1000,
            ..Default::default()
        }
    }
}

/// Diagnostics published by the filter for display and tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct ParticleFilterState {
    /// Highest normalized weight from the last successful weigh.
    pub max_weight: f64,
    /// Number of particles the last resample drew from the scatter branch.
    pub scattered_last: usize,
    /// Ticks on which the weight sum was degenerate and normalization was
    /// skipped.
    pub degenerate_ticks: u64,
    /// Total weigh calls.
    pub iterations: u64,
}

/// Monte Carlo localization filter.
#[derive(Debug)]
pub struct ParticleFilter {
    config: ParticleFilterConfig,
    particles: Vec<Particle>,
    sensor: RangeSensorModel,
    rng: SimpleRng,
    state: ParticleFilterState,
    // Raw scores staged here each weigh so a degenerate sum can leave the
    // previous weights untouched.
    scores: Vec<f64>,
}

impl ParticleFilter {
    /// Create a filter with particles spread uniformly over the map bounds.
    pub fn new(config: ParticleFilterConfig, map: &WorldMap) -> Self {
        let mut rng = SimpleRng::from_seed_or_time(config.seed);
        let n = config.num_particles.max(1);
        let particles = seed_uniform(n, map.bounds(), &mut rng);

        Self {
            config,
            particles,
            sensor: RangeSensorModel::new(config.sensor),
            rng,
            state: ParticleFilterState::default(),
            scores: Vec::with_capacity(n),
        }
    }

    /// Get the configuration.
    pub fn config(&self) -> &ParticleFilterConfig {
        &self.config
    }

    /// Current particles (position + weight, for visualization).
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Diagnostics from the last tick.
    pub fn state(&self) -> &ParticleFilterState {
        &self.state
    }

    /// Number of particles.
    pub fn num_particles(&self) -> usize {
        self.particles.len()
    }

    /// The sensor model used to score particles.
    pub fn sensor(&self) -> &RangeSensorModel {
        &self.sensor
    }

    /// Reseed the internal RNG.
    pub fn reseed(&mut self, seed: u64) {
        self.rng.reseed(seed);
    }

    /// Prediction step: apply the motion estimate to every particle.
    ///
    /// Deterministic translation along each particle's own heading followed
    /// by the angular delta, with the heading re-wrapped to [0, 2π).
    pub fn predict(&mut self, motion: &MotionEstimate) {
        for p in &mut self.particles {
            let (sin_t, cos_t) = p.pose.theta.sin_cos();
            p.pose = Pose2D::new(
                p.pose.x + motion.linear * cos_t,
                p.pose.y + motion.linear * sin_t,
                p.pose.theta + motion.angular,
            );
        }
    }

    /// Update step: score every particle against the agent's reading and
    /// normalize. Returns the maximum normalized weight.
    ///
    /// Particles outside the map's bounding rectangle score zero. If the
    /// weight sum comes out non-positive or non-finite the previous weights
    /// are retained for the tick and 0 is returned.
    pub fn weigh(&mut self, map: &WorldMap, reference: &RangeReading) -> f64 {
        self.state.iterations += 1;

        let sensor = &self.sensor;
        self.scores.clear();
        let mut sum = 0.0f64;
        for p in &self.particles {
            let w = if map.contains(p.pose.position()) {
                sensor.score(map, &p.pose, reference)
            } else {
                0.0
            };
            sum += w;
            self.scores.push(w);
        }

        if !(sum > 0.0) || !sum.is_finite() {
            self.state.degenerate_ticks += 1;
            log::warn!(
                "degenerate weight sum ({}); keeping previous weights this tick",
                sum
            );
            return 0.0;
        }

        let mut max_weight = 0.0f64;
        for (p, &w) in self.particles.iter_mut().zip(self.scores.iter()) {
            p.weight = w / sum;
            if p.weight > max_weight {
                max_weight = p.weight;
            }
        }
        self.state.max_weight = max_weight;
        max_weight
    }

    /// Best-estimate pose: the particle with the highest weight, first
    /// occurrence on ties.
    pub fn best_estimate(&self) -> Pose2D {
        let mut best = &self.particles[0];
        for p in &self.particles[1..] {
            if p.weight > best.weight {
                best = p;
            }
        }
        best.pose
    }

    /// Low-variance (systematic) resampling with a scatter fraction.
    ///
    /// One uniform offset spaces the N draws evenly through the cumulative
    /// weight mass; the cumulative pointer persists and wraps across draws.
    /// Each drawn particle is copied with independent uniform jitter on x, y
    /// and heading. With probability `scatter_prob` a draw is replaced by a
    /// uniformly random pose over the map bounds. The new set replaces the
    /// old atomically and weights reset to 1/N.
    pub fn resample(&mut self, map: &WorldMap) {
        let n = self.particles.len();
        let step = 1.0 / n as f64;

        // The walk below only terminates if some weight is positive.
        let total: f64 = self.particles.iter().map(|p| p.weight).sum();
        if !(total > 0.0) || !total.is_finite() {
            for p in &mut self.particles {
                p.weight = step;
            }
        }

        let bounds = map.bounds();
        let offset = self.rng.gen_f32() as f64;
        let mut next = Vec::with_capacity(n);
        let mut scattered = 0usize;
        let mut j = 0usize;

        for i in 0..n {
            if (self.rng.gen_f32() as f64) < 1.0 - self.config.scatter_prob {
                let u = offset + i as f64 * step;
                let mut cumulative = 0.0f64;
                while u > cumulative {
                    cumulative += self.particles[j].weight;
                    j += 1;
                    if j >= n {
                        j = 0;
                    }
                }
                // Step back to the particle whose weight crossed u; the
                // pointer continues from there on the next draw.
                j = if j == 0 { n - 1 } else { j - 1 };

                let src = self.particles[j].pose;
                next.push(Particle::with_weight(
                    Pose2D::new(
                        src.x + self.config.jitter_linear * self.rng.gen_symmetric(),
                        src.y + self.config.jitter_linear * self.rng.gen_symmetric(),
                        src.theta + self.config.jitter_angular * self.rng.gen_symmetric(),
                    ),
                    step,
                ));
            } else {
                next.push(Particle::with_weight(random_pose(bounds, &mut self.rng), step));
                scattered += 1;
            }
        }

        self.particles = next;
        self.state.scattered_last = scattered;
    }

    /// Replace the whole set with uniformly random particles.
    ///
    /// Recovery escape hatch for when the belief has collapsed onto a wrong
    /// mode (kidnapped-agent situations).
    pub fn reseed_uniform(&mut self, map: &WorldMap) {
        let n = self.particles.len();
        self.particles = seed_uniform(n, map.bounds(), &mut self.rng);
        self.state = ParticleFilterState::default();
    }

    #[cfg(test)]
    fn set_weights(&mut self, weights: &[f64]) {
        assert_eq!(weights.len(), self.particles.len());
        for (p, &w) in self.particles.iter_mut().zip(weights) {
            p.weight = w;
        }
    }
}

fn random_pose<R: Rng>(bounds: Bounds, rng: &mut R) -> Pose2D {
    Pose2D::new(
        rng.gen_range(bounds.min.x, bounds.max.x),
        rng.gen_range(bounds.min.y, bounds.max.y),
        rng.gen_range(0.0, TAU),
    )
}

fn seed_uniform<R: Rng>(n: usize, bounds: Bounds, rng: &mut R) -> Vec<Particle> {
    let weight = 1.0 / n as f64;
    (0..n)
        .map(|_| Particle::with_weight(random_pose(bounds, rng), weight))
        .collect()
}
