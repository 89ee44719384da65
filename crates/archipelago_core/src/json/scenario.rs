use fxhash::FxHashMap;

use crate::{graph::Graph, problem::location::LocationIdx};

/// A graph together with the resource demand and fleet of a distribution run.
#[derive(Debug, Clone)]
pub struct Scenario {
    graph: Graph,
    demand: FxHashMap<LocationIdx, u32>,
    couriers: usize,
}

impl Scenario {
    pub fn new(graph: Graph, couriers: usize) -> Self {
        Self {
            graph,
            demand: FxHashMap::default(),
            couriers,
        }
    }

    /// Demand declared twice for the same location adds up.
    pub fn add_demand(&mut self, location: LocationIdx, amount: u32) {
        *self.demand.entry(location).or_default() += amount;
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn graph_mut(&mut self) -> &mut Graph {
        &mut self.graph
    }

    pub fn demand(&self) -> &FxHashMap<LocationIdx, u32> {
        &self.demand
    }

    /// Demand as `(location, amount)` pairs, ready for
    /// [`distribute_resources`](crate::distribution::distribute_resources).
    pub fn demand_entries(&self) -> impl Iterator<Item = (LocationIdx, u32)> + '_ {
        self.demand
            .iter()
            .map(|(&location, &amount)| (location, amount))
    }

    pub fn couriers(&self) -> usize {
        self.couriers
    }
}
