use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::{
    graph::Graph,
    problem::{
        activity::Activity,
        location::{Location, LocationIdx},
    },
};

/// Locations of [`create_test_graph`], in insertion order.
#[derive(Debug, Clone, Copy)]
pub enum TestIsland {
    A = 0,
    B = 1,
    C = 2,
    D = 3,
}

impl TestIsland {
    pub fn idx(self) -> LocationIdx {
        LocationIdx::new(self as usize)
    }
}

/// A–B(2), A–C(5), B–C(3), B–D(1), C–D(2)
pub fn create_test_graph() -> Graph {
    let mut graph = Graph::default();
    for name in ["IslandA", "IslandB", "IslandC", "IslandD"] {
        graph.add_location(Location::new(name, 0, vec![]));
    }

    let edges = [
        (TestIsland::A, TestIsland::B, 2.0),
        (TestIsland::A, TestIsland::C, 5.0),
        (TestIsland::B, TestIsland::C, 3.0),
        (TestIsland::B, TestIsland::D, 1.0),
        (TestIsland::C, TestIsland::D, 2.0),
    ];
    for (from, to, travel_time) in edges {
        graph.add_edge(from.idx(), to.idx(), travel_time);
    }

    graph
}

#[derive(Debug, Clone, Copy)]
pub enum PolynesiaIsland {
    Tahiti = 0,
    Fiji = 1,
    Samoa = 2,
    Tonga = 3,
    Hawaii = 4,
    Niue = 5,
    CookIslands = 6,
}

impl PolynesiaIsland {
    pub fn idx(self) -> LocationIdx {
        LocationIdx::new(self as usize)
    }
}

/// Seven islands with populations and activities. Cook Islands is left
/// without any link.
pub fn create_polynesia_graph() -> Graph {
    let mut graph = Graph::default();

    let islands = [
        ("Tahiti", 205_980, vec![("Snorkeling", 2.0), ("Hiking", 3.0)]),
        ("Fiji", 902_503, vec![("Diving", 2.0)]),
        ("Samoa", 196_628, vec![("Waterfalls", 1.0), ("Market", 1.0)]),
        ("Tonga", 104_494, vec![("Whale watching", 4.0), ("Kayaking", 1.0)]),
        ("Hawaii", 1_453_138, vec![("Volcano tour", 3.0), ("Surfing", 2.0)]),
        ("Niue", 1_600, vec![("Caving", 1.0)]),
        ("Cook Islands", 14_222, vec![("Lagoon cruise", 2.0)]),
    ];

    for (name, population, activities) in islands {
        let activities = activities
            .into_iter()
            .map(|(label, duration)| Activity::new(label, duration))
            .collect();
        graph.add_location(Location::new(name, population, activities));
    }

    let edges = [
        (PolynesiaIsland::Tahiti, PolynesiaIsland::Fiji, 2.0),
        (PolynesiaIsland::Tahiti, PolynesiaIsland::Samoa, 5.0),
        (PolynesiaIsland::Fiji, PolynesiaIsland::Samoa, 3.0),
        (PolynesiaIsland::Fiji, PolynesiaIsland::Tonga, 1.0),
        (PolynesiaIsland::Samoa, PolynesiaIsland::Tonga, 2.0),
        (PolynesiaIsland::Tonga, PolynesiaIsland::Hawaii, 5.0),
        (PolynesiaIsland::Hawaii, PolynesiaIsland::Niue, 4.0),
    ];
    for (from, to, travel_time) in edges {
        graph.add_edge(from.idx(), to.idx(), travel_time);
    }

    graph
}

/// Connected random graph: a spanning chain plus `extra_edges` random links,
/// integer weights in `1..=9` and up to two activities per location lasting
/// `1..=max_duration`.
pub fn create_random_graph(
    seed: u64,
    locations: usize,
    extra_edges: usize,
    max_duration: u32,
) -> Graph {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut graph = Graph::default();

    for i in 0..locations {
        let activities = (0..rng.random_range(0..=2))
            .map(|a| Activity::new(format!("activity-{i}-{a}"), rng.random_range(1..=max_duration) as f64))
            .collect();
        graph.add_location(Location::new(
            format!("island-{i}"),
            rng.random_range(0..10_000),
            activities,
        ));
    }

    for i in 1..locations {
        let weight = rng.random_range(1..=9) as f64;
        graph.add_edge(LocationIdx::new(i - 1), LocationIdx::new(i), weight);
    }

    for _ in 0..extra_edges {
        let from = LocationIdx::new(rng.random_range(0..locations));
        let to = LocationIdx::new(rng.random_range(0..locations));
        let weight = rng.random_range(1..=9) as f64;
        graph.add_edge(from, to, weight);
    }

    graph
}
