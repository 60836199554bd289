//! Simulation of complete games.
//!
//! Each game gets its own seed derived from `SimulationConfig::seed`, so a
//! batch replays identically and games can run in any order.

mod runner;

pub use runner::{win_counts, EngineRunner, SimulationConfig, SimulationResult};
