use std::cmp::Reverse;

use clap::ValueEnum;
use itertools::Itertools;
use nohash_hasher::IntSet;
use tracing::info;

use crate::scenario::Scenario;

/// How many streets receive extended green time.
pub const GREEN_BOOST_CAP: usize = 10;

/// Direction of the usage sort that picks the boosted streets. The default
/// `Ascending` hands the extra green time to the least-used streets,
/// `Descending` rewards the busiest streets instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

/// The outcome of one planning pass: the intersections that need a schedule
/// entry, ascending by external id.
#[derive(Debug)]
pub struct SignalPlan {
    pub intersections: Vec<usize>,
    pub boosted_streets: usize,
}

/// One static pass over the usage counts: streets with any usage are sorted
/// by usage count (stable, so ties keep street insertion order), the head of
/// that ordering gets its green time bumped by one, and the endpoints of
/// every used street form the set of intersections to schedule.
pub fn plan_signals(scenario: &mut Scenario, order: SortOrder) -> SignalPlan {
    let network = &mut scenario.network;

    let mut used: Vec<usize> = network
        .streets
        .iter()
        .enumerate()
        .filter(|(_, street)| street.usage > 0)
        .map(|(index, _)| index)
        .collect();
    match order {
        SortOrder::Ascending => used.sort_by_key(|&index| network.streets[index].usage),
        SortOrder::Descending => used.sort_by_key(|&index| Reverse(network.streets[index].usage)),
    }

    let boosted_streets = used.len().min(GREEN_BOOST_CAP);
    for &index in used.iter().take(GREEN_BOOST_CAP) {
        network.streets[index].green_time += 1;
    }

    let mut endpoints: IntSet<usize> = IntSet::default();
    for &index in &used {
        endpoints.insert(network.streets[index].from);
        endpoints.insert(network.streets[index].to);
    }
    let intersections: Vec<usize> = endpoints
        .into_iter()
        .sorted_by_key(|&index| network.intersections[index].id)
        .collect();

    info!(
        "Planned green times: boosted {} of {} used streets, {} intersections scheduled",
        boosted_streets,
        used.len(),
        intersections.len()
    );
    SignalPlan {
        intersections,
        boosted_streets,
    }
}

#[cfg(test)]
mod tests {
    use crate::network::Network;
    use crate::population::Population;
    use crate::scenario::Scenario;

    use super::*;

    fn scenario_with(routes: &[&[&str]], streets: &[(u32, u32, &str, u32)]) -> Scenario {
        let mut network = Network::default();
        for &(from, to, name, time) in streets {
            network.add_street(from, to, name.to_string(), time);
        }
        let mut population = Population::default();
        for route in routes {
            population.build_car(&mut network, route).unwrap();
        }
        Scenario {
            duration: 100,
            intersection_count: network.intersections.len() as u32,
            street_count: streets.len() as u32,
            car_count: routes.len() as u32,
            score_bonus: 0,
            network,
            population,
        }
    }

    /// A chain of 12 streets, street `s<k>` used `k + 1` times.
    fn chain_scenario() -> Scenario {
        let streets: Vec<(u32, u32, String, u32)> = (0..12)
            .map(|k| (k, k + 1, format!("s{k}"), 1))
            .collect();
        let street_refs: Vec<(u32, u32, &str, u32)> = streets
            .iter()
            .map(|(f, t, n, d)| (*f, *t, n.as_str(), *d))
            .collect();

        let mut routes: Vec<Vec<&str>> = Vec::new();
        for k in 0..12 {
            for _ in 0..=k {
                routes.push(vec![streets[k].2.as_str()]);
            }
        }
        let route_refs: Vec<&[&str]> = routes.iter().map(|r| r.as_slice()).collect();
        scenario_with(&route_refs, &street_refs)
    }

    #[test]
    fn boosts_every_used_street_below_the_cap() {
        let mut scenario = scenario_with(
            &[&["x", "y"], &["x"]],
            &[(1, 2, "x", 5), (2, 3, "y", 3), (3, 4, "unused", 1)],
        );

        let plan = plan_signals(&mut scenario, SortOrder::Ascending);

        assert_eq!(2, plan.boosted_streets);
        let network = &scenario.network;
        assert_eq!(2, network.streets[network.street_by_name("x").unwrap()].green_time);
        assert_eq!(2, network.streets[network.street_by_name("y").unwrap()].green_time);
        assert_eq!(1, network.streets[network.street_by_name("unused").unwrap()].green_time);
    }

    #[test]
    fn schedule_set_is_endpoints_of_used_streets() {
        let mut scenario = scenario_with(
            &[&["x", "y"]],
            &[(1, 2, "x", 5), (2, 3, "y", 3), (8, 9, "unused", 1)],
        );

        let plan = plan_signals(&mut scenario, SortOrder::Ascending);

        let ids: Vec<u32> = plan
            .intersections
            .iter()
            .map(|&i| scenario.network.intersections[i].id)
            .collect();
        assert_eq!(vec![1, 2, 3], ids);
    }

    #[test]
    fn ascending_order_boosts_least_used_streets() {
        let mut scenario = chain_scenario();

        let plan = plan_signals(&mut scenario, SortOrder::Ascending);

        assert_eq!(GREEN_BOOST_CAP, plan.boosted_streets);
        // usages run 1..=12, ascending head covers s0..s9
        for k in 0..12 {
            let street = scenario.network.street_by_name(&format!("s{k}")).unwrap();
            let expected = if k < 10 { 2 } else { 1 };
            assert_eq!(expected, scenario.network.streets[street].green_time, "s{k}");
        }
    }

    #[test]
    fn descending_order_boosts_most_used_streets() {
        let mut scenario = chain_scenario();

        plan_signals(&mut scenario, SortOrder::Descending);

        for k in 0..12 {
            let street = scenario.network.street_by_name(&format!("s{k}")).unwrap();
            let expected = if k >= 2 { 2 } else { 1 };
            assert_eq!(expected, scenario.network.streets[street].green_time, "s{k}");
        }
    }

    #[test]
    fn ties_keep_street_insertion_order() {
        // eleven streets with equal usage, the cap cuts off the last one
        let streets: Vec<(u32, u32, String, u32)> = (0..11)
            .map(|k| (k, k + 1, format!("s{k}"), 1))
            .collect();
        let street_refs: Vec<(u32, u32, &str, u32)> = streets
            .iter()
            .map(|(f, t, n, d)| (*f, *t, n.as_str(), *d))
            .collect();
        let routes: Vec<Vec<&str>> = streets.iter().map(|s| vec![s.2.as_str()]).collect();
        let route_refs: Vec<&[&str]> = routes.iter().map(|r| r.as_slice()).collect();
        let mut scenario = scenario_with(&route_refs, &street_refs);

        let plan = plan_signals(&mut scenario, SortOrder::Ascending);

        assert_eq!(GREEN_BOOST_CAP, plan.boosted_streets);
        for k in 0..11 {
            let street = scenario.network.street_by_name(&format!("s{k}")).unwrap();
            let expected = if k < 10 { 2 } else { 1 };
            assert_eq!(expected, scenario.network.streets[street].green_time, "s{k}");
        }
    }
}
