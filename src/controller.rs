use tracing::info;

use crate::config::Config;
use crate::errors::RunError;
use crate::io::writer;
use crate::scenario::Scenario;
use crate::signals;

/// The full pipeline: load the scenario, run the green light heuristic,
/// write the schedule. A load failure aborts before anything is written.
pub fn run(config: &Config) -> Result<(), RunError> {
    let mut scenario = Scenario::load(&config.input_file)?;

    let plan = signals::plan_signals(&mut scenario, config.sort);

    writer::write_schedule(&scenario, &plan, &config.output_file)?;
    info!("Schedule written to {:?}", config.output_file);
    Ok(())
}
