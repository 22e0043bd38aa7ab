use ahash::AHashMap;
use nohash_hasher::{IntMap, IntSet};

/// The street network of one scenario. Intersections and streets live in
/// vectors and reference each other by index, external intersection ids and
/// street names resolve through keyed lookup maps. The network is the sole
/// owner, everything else holds indices.
#[derive(Debug, Default)]
pub struct Network {
    pub intersections: Vec<Intersection>,
    pub streets: Vec<Street>,
    intersection_ids: IntMap<u32, usize>,
    street_names: AHashMap<String, usize>,
}

#[derive(Debug)]
pub struct Intersection {
    pub id: u32,
    /// Streets departing from this intersection, in insertion order.
    pub out_streets: Vec<usize>,
    /// Streets arriving at this intersection, in insertion order.
    pub in_streets: Vec<usize>,
    /// Cars whose route passes through this intersection. Membership only,
    /// non-owning back-reference into the population.
    pub cars: IntSet<usize>,
}

#[derive(Debug)]
pub struct Street {
    pub name: String,
    pub from: usize,
    pub to: usize,
    pub travel_time: u32,
    pub usage: u32,
    pub green_time: u32,
}

/// Minimum legal green light duration. Every street starts out with this.
pub const MIN_GREEN_TIME: u32 = 1;

impl Network {
    pub fn with_capacity(intersections: usize, streets: usize) -> Self {
        Network {
            intersections: Vec::with_capacity(intersections),
            streets: Vec::with_capacity(streets),
            intersection_ids: IntMap::default(),
            street_names: AHashMap::with_capacity(streets),
        }
    }

    /// Returns the index of the intersection with the given external id,
    /// creating and registering it on first use. Idempotent by id.
    pub fn add_intersection(&mut self, id: u32) -> usize {
        if let Some(&index) = self.intersection_ids.get(&id) {
            return index;
        }
        let index = self.intersections.len();
        self.intersections.push(Intersection {
            id,
            out_streets: Vec::new(),
            in_streets: Vec::new(),
            cars: IntSet::default(),
        });
        self.intersection_ids.insert(id, index);
        index
    }

    /// Creates a street between the two intersections, resolving or creating
    /// both endpoints. Name uniqueness is assumed, not enforced.
    pub fn add_street(&mut self, from_id: u32, to_id: u32, name: String, travel_time: u32) -> usize {
        let from = self.add_intersection(from_id);
        let to = self.add_intersection(to_id);

        let index = self.streets.len();
        self.streets.push(Street {
            name: name.clone(),
            from,
            to,
            travel_time,
            usage: 0,
            green_time: MIN_GREEN_TIME,
        });
        self.intersections[from].out_streets.push(index);
        self.intersections[to].in_streets.push(index);
        self.street_names.insert(name, index);
        index
    }

    pub fn street_by_name(&self, name: &str) -> Option<usize> {
        self.street_names.get(name).copied()
    }

    pub fn record_usage(&mut self, street: usize) {
        self.streets[street].usage += 1;
    }
}
