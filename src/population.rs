use thiserror::Error;

use crate::network::Network;

/// A car and its fixed route. Immutable once built, only the network's
/// counters change afterwards.
#[derive(Debug)]
pub struct Car {
    /// Street indices in traversal order.
    pub streets: Vec<usize>,
    /// Intersection indices visited along the route, always one longer than
    /// the street sequence: the source of the first street, then the
    /// destination of every street.
    pub path: Vec<usize>,
    /// Sum of the travel times of all streets on the route.
    pub total_time: u32,
}

#[derive(Debug, Error)]
#[error("unknown street '{0}'")]
pub struct UnknownStreet(pub String);

#[derive(Debug, Default)]
pub struct Population {
    pub cars: Vec<Car>,
}

impl Population {
    pub fn with_capacity(cars: usize) -> Self {
        Population {
            cars: Vec::with_capacity(cars),
        }
    }

    /// Builds a car from a sequence of street names and registers it with the
    /// network: usage is recorded once per route step and the car is added to
    /// the car set of every visited intersection. This is the only place
    /// usage counts are mutated.
    ///
    /// All names are resolved before anything is touched, so a failed build
    /// leaves every usage counter as it was.
    pub fn build_car(&mut self, network: &mut Network, route: &[&str]) -> Result<usize, UnknownStreet> {
        let mut streets = Vec::with_capacity(route.len());
        for name in route {
            let street = network
                .street_by_name(name)
                .ok_or_else(|| UnknownStreet((*name).to_string()))?;
            streets.push(street);
        }

        let car = self.cars.len();
        let mut path = Vec::with_capacity(streets.len() + 1);
        let mut total_time = 0;
        if let Some(&first) = streets.first() {
            path.push(network.streets[first].from);
        }
        for &street in &streets {
            total_time += network.streets[street].travel_time;
            path.push(network.streets[street].to);
            network.record_usage(street);
        }
        for &intersection in &path {
            network.intersections[intersection].cars.insert(car);
        }

        self.cars.push(Car {
            streets,
            path,
            total_time,
        });
        Ok(car)
    }
}
