use std::cmp::Ordering;
use std::collections::BinaryHeap;

use tracing::{debug, instrument};

use crate::{
    graph::Graph,
    problem::{activity::TravelTime, location::LocationIdx},
};

use super::shortest_paths::ShortestPaths;

#[derive(Copy, Clone, Debug)]
struct HeapItem {
    location: LocationIdx,
    distance: TravelTime,
}

impl PartialEq for HeapItem {
    fn eq(&self, other: &HeapItem) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HeapItem {}

impl PartialOrd for HeapItem {
    fn partial_cmp(&self, other: &HeapItem) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapItem {
    fn cmp(&self, other: &Self) -> Ordering {
        // Flip distance to make this a min-heap
        other
            .distance
            .total_cmp(&self.distance)
            .then_with(|| other.location.cmp(&self.location))
    }
}

/// Single-source shortest travel times from `source` to every location of the
/// graph. Unreachable locations get [`f64::INFINITY`].
///
/// All travel times must be non-negative. This is not checked: with a negative
/// weight the returned distances are unspecified.
#[instrument(skip_all, level = "debug", fields(source = %source))]
pub fn shortest_paths(graph: &Graph, source: LocationIdx) -> ShortestPaths {
    let mut distances = vec![TravelTime::INFINITY; graph.location_count()];
    let mut parents: Vec<Option<LocationIdx>> = vec![None; graph.location_count()];
    let mut heap = BinaryHeap::with_capacity(graph.location_count());

    distances[source.get()] = 0.0;
    heap.push(HeapItem {
        location: source,
        distance: 0.0,
    });

    let mut settled = 0;

    while let Some(HeapItem { location, distance }) = heap.pop() {
        // A shorter distance was found after this entry was pushed
        if distance > distances[location.get()] {
            continue;
        }

        settled += 1;

        for edge in graph.edges(location) {
            let next_distance = distance + edge.travel_time();
            let adj = edge.to();

            if next_distance < distances[adj.get()] {
                distances[adj.get()] = next_distance;
                parents[adj.get()] = Some(location);
                heap.push(HeapItem {
                    location: adj,
                    distance: next_distance,
                });
            }
        }
    }

    debug!(settled, "dijkstra finished");

    ShortestPaths::new(source, distances, parents)
}
