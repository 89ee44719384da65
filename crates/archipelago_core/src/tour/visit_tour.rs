use std::cmp::Ordering;
use std::collections::BinaryHeap;

use fxhash::FxHashSet;
use tracing::{debug, instrument};

use crate::{
    graph::Graph,
    problem::location::{Days, LocationIdx},
    utils::sequence::Sequence,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisitTourParams {
    /// The tour stops once the clock reaches this value.
    pub time_limit: Days,
    /// Time spent on each island.
    pub visit_duration: Days,
    /// Islands visited less than this many days ago are skipped.
    pub recent_threshold: Days,
}

impl Default for VisitTourParams {
    fn default() -> Self {
        Self {
            time_limit: 15.0,
            visit_duration: 1.0,
            recent_threshold: 7.0,
        }
    }
}

struct Candidate {
    population: u64,
    sequence: u64,
    location: LocationIdx,
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Candidate {}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.population
            .cmp(&other.population)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

/// Greedy tour visiting the most populous reachable neighbor first.
///
/// Neighbors of every visited island are queued by population. A queued island
/// is skipped when it was visited within `recent_threshold` days, otherwise it
/// is visited, stamped with the current clock and the clock moves forward by
/// `visit_duration`. Returns the visit order, starting with `start`.
#[instrument(skip_all, level = "debug", fields(start = %start))]
pub fn maximize_visits(
    graph: &mut Graph,
    start: LocationIdx,
    params: VisitTourParams,
) -> Vec<LocationIdx> {
    let mut sequence = Sequence::default();
    let mut queue = BinaryHeap::new();
    let mut visited = FxHashSet::default();
    let mut visit_order = vec![start];
    let mut clock: Days = 0.0;

    visited.insert(start);
    debug!("Visiting {}", graph.location(start));

    for neighbor in graph.neighbors(start) {
        queue.push(Candidate {
            population: graph.location(neighbor).population(),
            sequence: sequence.next_value(),
            location: neighbor,
        });
    }

    while clock < params.time_limit {
        let Some(Candidate { location, .. }) = queue.pop() else {
            break;
        };

        if graph
            .location(location)
            .visited_within(clock, params.recent_threshold)
        {
            continue;
        }

        debug!(clock, "Visiting {}", graph.location(location));
        graph.location_mut(location).mark_visited(clock);
        clock += params.visit_duration;

        visited.insert(location);
        visit_order.push(location);

        for neighbor in graph.neighbors(location) {
            if !visited.contains(&neighbor) {
                queue.push(Candidate {
                    population: graph.location(neighbor).population(),
                    sequence: sequence.next_value(),
                    location: neighbor,
                });
            }
        }
    }

    visit_order
}
