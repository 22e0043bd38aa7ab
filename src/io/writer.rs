use std::fs;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use itertools::Itertools;
use tracing::info;

use crate::errors::WriteError;
use crate::scenario::Scenario;
use crate::signals::SignalPlan;

/// Serializes the planned schedule: a count line, then per intersection
/// (ascending by id) its id, the number of incoming streets and one
/// `name green_time` line per incoming street, ordered ascending by travel
/// time.
pub fn write_schedule(scenario: &Scenario, plan: &SignalPlan, path: &Path) -> Result<(), WriteError> {
    info!("Writing schedule to {:?}", path);

    if let Some(prefix) = path.parent() {
        if !prefix.as_os_str().is_empty() {
            fs::create_dir_all(prefix).map_err(|source| io_error(path, source))?;
        }
    }
    let file = File::create(path).map_err(|source| io_error(path, source))?;
    let mut writer = BufWriter::new(file);

    write_to(scenario, plan, &mut writer).map_err(|source| io_error(path, source))?;
    writer.flush().map_err(|source| io_error(path, source))
}

fn write_to<W: Write>(scenario: &Scenario, plan: &SignalPlan, writer: &mut W) -> std::io::Result<()> {
    let network = &scenario.network;
    writeln!(writer, "{}", plan.intersections.len())?;
    for &index in &plan.intersections {
        let intersection = &network.intersections[index];
        writeln!(writer, "{}", intersection.id)?;
        writeln!(writer, "{}", intersection.in_streets.len())?;
        let by_travel_time = intersection
            .in_streets
            .iter()
            .sorted_by_key(|&&street| network.streets[street].travel_time);
        for &street in by_travel_time {
            let street = &network.streets[street];
            writeln!(writer, "{} {}", street.name, street.green_time)?;
        }
    }
    Ok(())
}

fn io_error(path: &Path, source: std::io::Error) -> WriteError {
    WriteError::Io {
        path: path.to_path_buf(),
        source,
    }
}
