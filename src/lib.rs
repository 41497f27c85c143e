//! disha-nav - Monte Carlo localization and path refinement for mobile robots
//!
//! Estimates the pose of an agent moving through a known 2D map of
//! line-segment walls, using a particle filter over noisy three-ray range
//! readings, and refines a straight-line path around obstacles as the agent
//! moves.
//!
//! # Architecture
//!
//! The crate is organized into 5 logical layers:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │                   harness/                          │  ← Tick driver
//! │            (scenario, sim agent, config)            │
//! └─────────────────────────────────────────────────────┘
//!                          │
//! ┌─────────────────────────────────────────────────────┐
//! │        localization/              planning/         │  ← Core algorithms
//! │  (particle filter, sensor)   (path refinement)      │
//! └─────────────────────────────────────────────────────┘
//!                          │
//! ┌─────────────────────────────────────────────────────┐
//! │                     map/                            │  ← Geometry
//! │              (walls, ray casting)                   │
//! └─────────────────────────────────────────────────────┘
//!                          │
//! ┌─────────────────────────────────────────────────────┐
//! │                     core/                           │  ← Foundation
//! │                 (types, math)                       │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Tick order
//!
//! Each tick runs strictly in sequence: predict (apply the motion estimate
//! to every particle) → sense (three-ray fan from the agent's true pose) →
//! weigh (score and normalize particle weights) → select-best (arg-max
//! weight) → path-refactor (re-derive the route to the goal) → resample
//! (systematic resampling with jitter and a uniform scatter fraction).
//! Everything is single-threaded and owned by the driver's context object.

// Layer 1: Core foundation (no internal deps)
pub mod core;

// Layer 2: Map geometry (depends on core)
pub mod map;

// Layer 3: Algorithms (depend on core, map)
pub mod localization;
pub mod planning;

// Layer 4: Simulation harness (depends on all layers)
pub mod harness;

pub mod error;

// ============================================================================
// Convenience re-exports (flat namespace for common use)
// ============================================================================

pub use crate::core::math;
pub use crate::core::types::{MotionEstimate, Point2D, Pose2D, RangeReading};

pub use error::{DishaError, Result};

pub use map::{cast, cast_detailed, Bounds, RaycastHit, Wall, WorldMap, NO_HIT_RANGE};

pub use localization::{
    kernel, Particle, ParticleFilter, ParticleFilterConfig, ParticleFilterState,
    RangeSensorModel, Rng, SensorModelConfig, SimpleRng,
};

pub use planning::{segment_intersection, Path, PathPlanner, PathSegment, SplitHint};

pub use harness::{Scenario, ScenarioConfig, SimAgent, TickSummary};
