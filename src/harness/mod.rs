//! Simulation harness: scenario configuration and the tick driver.

mod config;
mod scenario;

pub use config::ScenarioConfig;
pub use scenario::{Scenario, SimAgent, TickSummary};
