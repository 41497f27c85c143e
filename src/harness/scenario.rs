//! Tick-driven simulation scenario.
//!
//! Owns the map, the ground-truth agent, the particle filter and the path
//! planner, and runs them in the fixed per-tick order:
//! predict -> sense -> weigh -> select-best -> path-refactor -> resample.
//! No global state; everything lives in the [`Scenario`].

use crate::core::types::{MotionEstimate, Point2D, Pose2D, RangeReading};
use crate::localization::{Particle, ParticleFilter, RangeSensorModel};
use crate::map::WorldMap;
use crate::planning::{Path, PathPlanner};

use super::config::ScenarioConfig;
use crate::core::math::angle_diff;

/// Ground-truth agent simulated against the map.
#[derive(Debug, Clone, Copy)]
pub struct SimAgent {
    /// True pose, unknown to the filter.
    pub pose: Pose2D,
    /// Last three-ray reading taken from the true pose.
    pub reading: RangeReading,
}

impl SimAgent {
    /// Place an agent at a pose with no reading yet.
    pub fn new(pose: Pose2D) -> Self {
        Self {
            pose,
            reading: RangeReading::default(),
        }
    }

    /// Integrate a motion command on the true pose.
    pub fn apply(&mut self, motion: &MotionEstimate) {
        let (sin_t, cos_t) = self.pose.theta.sin_cos();
        self.pose = Pose2D::new(
            self.pose.x + motion.linear * cos_t,
            self.pose.y + motion.linear * sin_t,
            self.pose.theta + motion.angular,
        );
    }

    /// Refresh the reading from the true pose.
    pub fn sense(&mut self, map: &WorldMap, model: &RangeSensorModel) {
        self.reading = model.sense(map, &self.pose);
    }
}

/// What a tick produced, for logging and display.
#[derive(Debug, Clone, Copy)]
pub struct TickSummary {
    /// Best-estimate pose (arg-max weight particle).
    pub best: Pose2D,
    /// Maximum normalized particle weight (0 on a degenerate tick).
    pub max_weight: f64,
    /// The agent's reading this tick.
    pub reading: RangeReading,
    /// Number of path segments after refactoring.
    pub path_segments: usize,
}

/// Simulation context bundling map, agent, filter and planner.
#[derive(Debug)]
pub struct Scenario {
    map: WorldMap,
    agent: SimAgent,
    filter: ParticleFilter,
    planner: PathPlanner,
}

impl Scenario {
    /// Build a scenario from its configuration.
    pub fn from_config(config: ScenarioConfig) -> crate::Result<Self> {
        let map = WorldMap::new(config.walls)?;
        let filter = ParticleFilter::new(config.filter, &map);
        Ok(Self {
            map,
            agent: SimAgent::new(config.agent_start),
            filter,
            planner: PathPlanner::new(config.goal),
        })
    }

    /// Run one tick with the given motion command.
    pub fn step(&mut self, motion: &MotionEstimate) -> TickSummary {
        self.filter.predict(motion);

        self.agent.apply(motion);
        self.agent.sense(&self.map, self.filter.sensor());

        let max_weight = self.filter.weigh(&self.map, &self.agent.reading);
        let best = self.filter.best_estimate();

        self.planner.refactor(&self.map, self.agent.pose.position());

        self.filter.resample(&self.map);

        TickSummary {
            best,
            max_weight,
            reading: self.agent.reading,
            path_segments: self.planner.path().len(),
        }
    }

    /// Steer toward the first path waypoint.
    ///
    /// Turns in place while the heading error is large, otherwise drives
    /// forward with a small correcting turn. Stops at the goal.
    pub fn autopilot_motion(&self, linear_speed: f32, angular_speed: f32) -> MotionEstimate {
        let segments = self.planner.path().segments();
        let target = match segments.first() {
            Some(seg) => seg.end,
            None => self.planner.goal(),
        };
        let pos = self.agent.pose.position();
        if pos.distance(&target) < linear_speed {
            return MotionEstimate::stationary();
        }

        let desired = (target.y - pos.y).atan2(target.x - pos.x);
        let err = angle_diff(self.agent.pose.theta, desired);
        let turn = err.clamp(-angular_speed, angular_speed);
        if err.abs() > 0.3 {
            MotionEstimate::turn(turn)
        } else {
            MotionEstimate::new(linear_speed, turn)
        }
    }

    /// Retarget the path goal.
    pub fn set_goal(&mut self, goal: Point2D) {
        self.planner.set_goal(goal);
    }

    /// The wall map.
    pub fn map(&self) -> &WorldMap {
        &self.map
    }

    /// Ground-truth agent.
    pub fn agent(&self) -> &SimAgent {
        &self.agent
    }

    /// Particle set for visualization.
    pub fn particles(&self) -> &[Particle] {
        self.filter.particles()
    }

    /// The particle filter.
    pub fn filter(&self) -> &ParticleFilter {
        &self.filter
    }

    /// The current path polyline.
    pub fn path(&self) -> &Path {
        self.planner.path()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::localization::ParticleFilterConfig;
    use approx::assert_relative_eq;

    fn small_scenario() -> Scenario {
        let config = ScenarioConfig {
            filter: ParticleFilterConfig {
                num_particles: 200,
                seed: 42,
                ..Default::default()
            },
            ..ScenarioConfig::demo_room()
        };
        Scenario::from_config(config).unwrap()
    }

    #[test]
    fn test_agent_apply_moves_along_heading() {
        let mut agent = SimAgent::new(Pose2D::new(100.0, 100.0, 0.0));
        agent.apply(&MotionEstimate::forward(5.0));
        assert_relative_eq!(agent.pose.x, 105.0);
        assert_relative_eq!(agent.pose.y, 100.0);
    }

    #[test]
    fn test_step_produces_reading_and_path() {
        let mut scenario = small_scenario();
        let summary = scenario.step(&MotionEstimate::forward(5.0));

        // Agent at ~(105, 100) facing +x: center beam hits the right wall.
        assert_relative_eq!(summary.reading.center, 990.0 - 105.0, epsilon = 1e-2);
        assert!(summary.max_weight > 0.0);
        assert!(summary.path_segments >= 1);
        assert_eq!(scenario.path().start(), Some(Point2D::new(105.0, 100.0)));
    }

    #[test]
    fn test_step_keeps_weights_normalized() {
        let mut scenario = small_scenario();
        scenario.step(&MotionEstimate::new(5.0, 0.02));
        // resample resets to uniform; run weigh via another step and check
        // through the summary instead of poking filter internals.
        let summary = scenario.step(&MotionEstimate::new(5.0, 0.02));
        assert!(summary.max_weight > 0.0 && summary.max_weight <= 1.0);
    }

    #[test]
    fn test_goal_persists_across_ticks() {
        let mut scenario = small_scenario();
        scenario.step(&MotionEstimate::stationary());
        scenario.step(&MotionEstimate::forward(5.0));
        assert_eq!(scenario.path().goal(), Some(Point2D::new(500.0, 500.0)));
    }

    #[test]
    fn test_set_goal_takes_effect_next_tick() {
        let mut scenario = small_scenario();
        scenario.set_goal(Point2D::new(200.0, 800.0));
        scenario.step(&MotionEstimate::stationary());
        assert_eq!(scenario.path().goal(), Some(Point2D::new(200.0, 800.0)));
    }

    #[test]
    fn test_autopilot_stops_at_goal() {
        let mut scenario = small_scenario();
        scenario.set_goal(Point2D::new(100.0, 100.0));
        scenario.step(&MotionEstimate::stationary());
        let motion = scenario.autopilot_motion(5.0, 0.05);
        assert_eq!(motion, MotionEstimate::stationary());
    }

    #[test]
    fn test_autopilot_turns_toward_waypoint() {
        let scenario = small_scenario();
        // Agent faces +x; goal is at (500, 500): expect a CCW turn blended
        // into forward motion, or a pure turn when the error is large.
        let motion = scenario.autopilot_motion(5.0, 0.05);
        assert!(motion.angular > 0.0);
    }
}
