use std::path::Path;

use crate::errors::LoadError;
use crate::io::reader;
use crate::network::Network;
use crate::population::Population;

/// The scenario contains the full problem data for one run: the header
/// fields of the input file plus the linked network and population. It is
/// the single ownership root, all cross-references are indices into it.
#[derive(Debug)]
pub struct Scenario {
    /// Total simulated duration in seconds. Stored, unused by the heuristic.
    pub duration: u32,
    /// Intersection count as declared in the header.
    pub intersection_count: u32,
    /// Street count as declared in the header.
    pub street_count: u32,
    /// Car count as declared in the header.
    pub car_count: u32,
    /// Score bonus per car as declared in the header. Stored, unused.
    pub score_bonus: u32,
    pub network: Network,
    pub population: Population,
}

impl Scenario {
    pub fn load(path: &Path) -> Result<Scenario, LoadError> {
        reader::read(path)
    }
}
