use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::Path;

use tracing::info;

use crate::errors::LoadError;
use crate::network::Network;
use crate::population::Population;
use crate::scenario::Scenario;

/// Reads the whitespace-delimited scenario format: one header line
/// `D I S C F`, then S street lines `source dest name time`, then C car
/// lines `n name_1 ... name_n`. Streets are parsed before any car route is
/// resolved. Any parse error aborts the whole load.
pub fn read(path: &Path) -> Result<Scenario, LoadError> {
    info!("Loading scenario from {:?}", path);
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let scenario = read_from(BufReader::new(file), path)?;
    info!(
        "Loaded scenario: {} intersections, {} streets, {} cars",
        scenario.network.intersections.len(),
        scenario.network.streets.len(),
        scenario.population.cars.len()
    );
    Ok(scenario)
}

fn read_from<R: BufRead>(reader: R, path: &Path) -> Result<Scenario, LoadError> {
    let mut lines = reader.lines();
    let mut line_no = 0;

    let header_line = next_line(&mut lines, &mut line_no, path)?.ok_or_else(|| {
        LoadError::MalformedHeader {
            line: 1,
            reason: String::from("empty file"),
        }
    })?;
    let [duration, intersection_count, street_count, car_count, score_bonus] =
        parse_header(&header_line)?;

    let mut network = Network::with_capacity(intersection_count as usize, street_count as usize);
    for _ in 0..street_count {
        let line = next_line(&mut lines, &mut line_no, path)?.ok_or_else(|| {
            LoadError::MalformedRecord {
                line: line_no,
                reason: format!("expected {street_count} street records, file ended early"),
            }
        })?;
        parse_street(&mut network, &line, line_no)?;
    }

    let mut population = Population::with_capacity(car_count as usize);
    for _ in 0..car_count {
        let line = next_line(&mut lines, &mut line_no, path)?.ok_or_else(|| {
            LoadError::MalformedRecord {
                line: line_no,
                reason: format!("expected {car_count} car records, file ended early"),
            }
        })?;
        parse_car(&mut network, &mut population, &line, line_no)?;
    }

    Ok(Scenario {
        duration,
        intersection_count,
        street_count,
        car_count,
        score_bonus,
        network,
        population,
    })
}

fn next_line<R: BufRead>(
    lines: &mut Lines<R>,
    line_no: &mut usize,
    path: &Path,
) -> Result<Option<String>, LoadError> {
    *line_no += 1;
    match lines.next() {
        Some(Ok(line)) => Ok(Some(line)),
        Some(Err(source)) => Err(LoadError::Io {
            path: path.to_path_buf(),
            source,
        }),
        None => Ok(None),
    }
}

fn parse_header(line: &str) -> Result<[u32; 5], LoadError> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() < 5 {
        return Err(LoadError::MalformedHeader {
            line: 1,
            reason: format!("expected 5 fields, got {}", fields.len()),
        });
    }
    let mut values = [0; 5];
    for (value, field) in values.iter_mut().zip(&fields) {
        *value = field.parse().map_err(|_| LoadError::MalformedHeader {
            line: 1,
            reason: format!("'{field}' is not a number"),
        })?;
    }
    Ok(values)
}

fn parse_street(network: &mut Network, line: &str, line_no: usize) -> Result<(), LoadError> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() < 4 {
        return Err(LoadError::MalformedRecord {
            line: line_no,
            reason: format!("street record needs 4 fields, got {}", fields.len()),
        });
    }
    let from = parse_number(fields[0], line_no, "source intersection id")?;
    let to = parse_number(fields[1], line_no, "destination intersection id")?;
    let travel_time = parse_number(fields[3], line_no, "travel time")?;
    if travel_time == 0 {
        return Err(LoadError::MalformedRecord {
            line: line_no,
            reason: String::from("travel time must be positive"),
        });
    }
    network.add_street(from, to, fields[2].to_string(), travel_time);
    Ok(())
}

fn parse_car(
    network: &mut Network,
    population: &mut Population,
    line: &str,
    line_no: usize,
) -> Result<(), LoadError> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    let count_field = fields.first().ok_or_else(|| LoadError::MalformedRecord {
        line: line_no,
        reason: String::from("empty car record"),
    })?;
    let count: usize = parse_number(count_field, line_no, "street count")? as usize;
    if count == 0 {
        return Err(LoadError::MalformedRecord {
            line: line_no,
            reason: String::from("car route must contain at least one street"),
        });
    }
    if fields.len() < count + 1 {
        return Err(LoadError::MalformedRecord {
            line: line_no,
            reason: format!("car route declares {count} streets, lists {}", fields.len() - 1),
        });
    }
    population
        .build_car(network, &fields[1..=count])
        .map_err(|unknown| LoadError::UnknownStreetReference {
            line: line_no,
            name: unknown.0,
        })?;
    Ok(())
}

fn parse_number(field: &str, line: usize, what: &str) -> Result<u32, LoadError> {
    field.parse().map_err(|_| LoadError::MalformedRecord {
        line,
        reason: format!("{what} '{field}' is not a number"),
    })
}
