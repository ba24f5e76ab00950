//! Simulation execution

use ampulla_core::{Simulation, SimulationConfig, SimulationRun};
use anyhow::Context;

/// Validate `config` and run the experiment once
///
/// Any error aborts the run before a single line is reported.
pub fn execute(config: SimulationConfig) -> anyhow::Result<SimulationRun> {
    let simulation = Simulation::new(config).context("invalid simulation configuration")?;
    let run = simulation.run().context("simulation aborted")?;
    Ok(run)
}
