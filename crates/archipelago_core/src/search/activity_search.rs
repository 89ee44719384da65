use std::collections::BinaryHeap;

use tracing::{debug, instrument};

use crate::{
    graph::Graph,
    problem::{
        activity::TravelTime,
        location::{Location, LocationIdx},
    },
    utils::sequence::Sequence,
};

use super::{
    activity_plan::ActivityPlan,
    search_state::{QueuedState, SearchState},
    statistics::SearchStatistics,
};

/// Best-first search for the path completing the most activities within
/// `time_budget`.
///
/// States are expanded by ascending elapsed time, ties in creation order. A
/// state only replaces the best one when it completes strictly more
/// activities, so the first path reaching a count wins.
///
/// Branches do not share anything: the same location is expanded again for
/// every distinct path reaching it, and the number of states grows
/// exponentially with the branching factor and the budget. Only use it on
/// small graphs.
#[instrument(
    skip_all,
    level = "debug",
    fields(start = %start, time_budget = time_budget)
)]
pub fn maximize_activities(
    graph: &Graph,
    start: LocationIdx,
    time_budget: TravelTime,
) -> ActivityPlan {
    let mut statistics = SearchStatistics::default();
    let mut sequence = Sequence::default();
    let mut queue = BinaryHeap::new();

    queue.push(QueuedState {
        sequence: sequence.next_value(),
        state: SearchState::start(start),
    });
    statistics.pushed += 1;

    let mut best = SearchState::start(start);

    while let Some(QueuedState { state, .. }) = queue.pop() {
        statistics.popped += 1;

        if state.elapsed > time_budget {
            statistics.pruned += 1;
            continue;
        }

        if state.activities > best.activities {
            debug!(
                activities = state.activities,
                elapsed = state.elapsed,
                "new best path of {} locations",
                state.path.len()
            );
            best = state.clone();
        }

        for edge in graph.edges(state.location) {
            let neighbor = edge.to();
            if state.visited.contains(&neighbor) {
                continue;
            }

            let arrival = state.elapsed + edge.travel_time();
            let (elapsed, completed) =
                complete_activities(graph.location(neighbor), arrival, time_budget);

            queue.push(QueuedState {
                sequence: sequence.next_value(),
                state: state.extend(neighbor, elapsed, state.activities + completed),
            });
            statistics.pushed += 1;
        }
    }

    debug!(?statistics, "activity search finished");

    ActivityPlan {
        path: best.path,
        activities: best.activities,
        elapsed: best.elapsed,
        statistics,
    }
}

/// Runs through the activities of `location` in order, keeping each one that
/// still ends within the budget. Activities that do not fit are skipped, the
/// following ones are still considered.
fn complete_activities(
    location: &Location,
    arrival: TravelTime,
    time_budget: TravelTime,
) -> (TravelTime, usize) {
    location
        .activities()
        .iter()
        .fold((arrival, 0), |(elapsed, completed), activity| {
            if elapsed + activity.duration() <= time_budget {
                (elapsed + activity.duration(), completed + 1)
            } else {
                (elapsed, completed)
            }
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        problem::activity::Activity,
        test_utils::{PolynesiaIsland, create_polynesia_graph, create_random_graph},
    };

    fn line_graph() -> (Graph, [LocationIdx; 3]) {
        let mut graph = Graph::default();
        let a = graph.add_location(Location::new("A", 10, vec![]));
        let b = graph.add_location(Location::new("B", 20, vec![Activity::new("Diving", 2.0)]));
        let c = graph.add_location(Location::new(
            "C",
            30,
            vec![Activity::new("Market", 1.0), Activity::new("Kayaking", 1.0)],
        ));
        graph.add_edge(a, b, 1.0);
        graph.add_edge(b, c, 1.0);

        (graph, [a, b, c])
    }

    #[test]
    fn test_isolated_start_yields_empty_plan() {
        let graph = create_polynesia_graph();
        let plan = maximize_activities(&graph, PolynesiaIsland::CookIslands.idx(), 100.0);

        assert!(plan.path.is_empty());
        assert_eq!(plan.activities, 0);
        assert_eq!(plan.elapsed, 0.0);
    }

    #[test]
    fn test_line_graph_budgets() {
        let (graph, [a, b, c]) = line_graph();

        let plan = maximize_activities(&graph, a, 4.0);
        assert_eq!(plan.path, vec![b]);
        assert_eq!(plan.activities, 1);
        assert_eq!(plan.elapsed, 3.0);

        let plan = maximize_activities(&graph, a, 5.0);
        assert_eq!(plan.path, vec![b, c]);
        assert_eq!(plan.activities, 2);

        let plan = maximize_activities(&graph, a, 6.0);
        assert_eq!(plan.path, vec![b, c]);
        assert_eq!(plan.activities, 3);
        assert_eq!(plan.elapsed, 6.0);
    }

    #[test]
    fn test_activity_ending_exactly_on_budget_is_counted() {
        let mut graph = Graph::default();
        let a = graph.add_location(Location::new("A", 0, vec![]));
        let b = graph.add_location(Location::new("B", 0, vec![Activity::new("Hike", 3.0)]));
        graph.add_edge(a, b, 2.0);

        assert_eq!(maximize_activities(&graph, a, 5.0).activities, 1);
        assert_eq!(maximize_activities(&graph, a, 4.5).activities, 0);
    }

    #[test]
    fn test_activity_too_long_is_skipped_not_stopping() {
        let mut graph = Graph::default();
        let a = graph.add_location(Location::new("A", 0, vec![]));
        let b = graph.add_location(Location::new(
            "B",
            0,
            vec![
                Activity::new("Volcano tour", 5.0),
                Activity::new("Surfing", 1.0),
                Activity::new("Snorkeling", 1.0),
            ],
        ));
        graph.add_edge(a, b, 2.0);

        let plan = maximize_activities(&graph, a, 4.0);
        assert_eq!(plan.activities, 2);
        assert_eq!(plan.elapsed, 4.0);
    }

    #[test]
    fn test_first_found_tie_wins() {
        let mut graph = Graph::default();
        let a = graph.add_location(Location::new("A", 0, vec![]));
        let b = graph.add_location(Location::new("B", 0, vec![Activity::new("Diving", 1.0)]));
        let c = graph.add_location(Location::new("C", 0, vec![Activity::new("Diving", 1.0)]));
        graph.add_edge(a, b, 1.0);
        graph.add_edge(a, c, 1.0);

        let plan = maximize_activities(&graph, a, 2.0);
        assert_eq!(plan.path, vec![b]);
        assert_eq!(plan.activities, 1);
    }

    #[test]
    fn test_path_never_repeats_a_location() {
        let mut graph = Graph::default();
        let a = graph.add_location(Location::new("A", 0, vec![]));
        let b = graph.add_location(Location::new("B", 0, vec![Activity::new("Market", 1.0)]));
        graph.add_edge(a, b, 1.0);
        graph.add_edge(b, b, 0.0);

        let plan = maximize_activities(&graph, a, 50.0);
        assert_eq!(plan.activities, 1);

        let mut unique = plan.path.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), plan.path.len());
    }

    #[test]
    fn test_pruned_states_are_counted() {
        let (graph, [a, ..]) = line_graph();
        let plan = maximize_activities(&graph, a, 1.5);

        assert_eq!(plan.statistics.popped, plan.statistics.pushed);
        assert!(plan.statistics.pruned > 0);
        assert_eq!(
            plan.statistics.expanded() + plan.statistics.pruned,
            plan.statistics.popped
        );
    }

    #[test]
    fn test_travel_time_along_path_stays_within_budget() {
        for seed in 0..15 {
            let graph = create_random_graph(seed, 8, 6, 4);
            let start = LocationIdx::new(0);

            for budget in [3.0, 8.0, 15.0] {
                let plan = maximize_activities(&graph, start, budget);
                assert!(plan.elapsed <= budget);

                let mut previous = start;
                let mut travel = 0.0;
                for &location in &plan.path {
                    travel += graph
                        .edges(previous)
                        .iter()
                        .filter(|edge| edge.to() == location)
                        .map(|edge| edge.travel_time())
                        .fold(f64::INFINITY, f64::min);
                    assert!(travel <= budget);
                    previous = location;
                }
            }
        }
    }

    #[test]
    fn test_activity_count_grows_with_budget_for_unit_activities() {
        for seed in 0..10 {
            let graph = create_random_graph(seed, 7, 5, 1);
            let start = LocationIdx::new(0);

            let mut previous = 0;
            for budget in 0..=14 {
                let plan = maximize_activities(&graph, start, budget as f64);
                assert!(
                    plan.activities >= previous,
                    "seed {seed}, budget {budget}: {} < {previous}",
                    plan.activities
                );
                previous = plan.activities;
            }
        }
    }
}
