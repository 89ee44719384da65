use fxhash::FxHashMap;

use crate::problem::{
    activity::TravelTime,
    location::{Location, LocationIdx},
};

use super::edge::Edge;

/// Undirected weighted graph over islands.
///
/// Locations are stored densely and addressed by [`LocationIdx`]. Every call to
/// [`Graph::add_edge`] writes both directions, so the adjacency lists are
/// always symmetric.
///
/// Travel times are expected to be non-negative. The graph does not check it,
/// shortest path results are meaningless otherwise.
#[derive(Default, Debug, Clone)]
pub struct Graph {
    locations: Vec<Location>,
    adjacency_list: Vec<Vec<Edge>>,
    names: FxHashMap<String, LocationIdx>,
    edges: usize,
}

impl Graph {
    /// Adds a location and returns its index. Names are the identity of a
    /// location: adding a second descriptor with a known name returns the
    /// existing index and leaves the stored descriptor untouched.
    pub fn add_location(&mut self, location: Location) -> LocationIdx {
        if let Some(&existing) = self.names.get(location.name()) {
            return existing;
        }

        let idx = LocationIdx::new(self.locations.len());
        self.names.insert(location.name().to_owned(), idx);
        self.locations.push(location);
        self.adjacency_list.push(vec![]);

        idx
    }

    pub fn add_edge(&mut self, from: LocationIdx, to: LocationIdx, travel_time: TravelTime) {
        self.adjacency_list[from.get()].push(Edge::new(to, travel_time));
        self.adjacency_list[to.get()].push(Edge::new(from, travel_time));
        self.edges += 1;
    }

    pub fn location_idx(&self, name: &str) -> Option<LocationIdx> {
        self.names.get(name).copied()
    }

    #[inline]
    pub fn location(&self, idx: LocationIdx) -> &Location {
        &self.locations[idx]
    }

    pub(crate) fn location_mut(&mut self, idx: LocationIdx) -> &mut Location {
        &mut self.locations[idx]
    }

    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    pub fn location_indices(&self) -> impl Iterator<Item = LocationIdx> + use<> {
        LocationIdx::range(self.locations.len())
    }

    #[inline]
    pub fn edges(&self, idx: LocationIdx) -> &[Edge] {
        &self.adjacency_list[idx.get()]
    }

    pub fn neighbors(&self, idx: LocationIdx) -> impl Iterator<Item = LocationIdx> + '_ {
        self.edges(idx).iter().map(|edge| edge.to())
    }

    pub fn location_count(&self) -> usize {
        self.locations.len()
    }

    /// Number of undirected links, a link added twice counts twice.
    pub fn edge_count(&self) -> usize {
        self.edges
    }

    pub fn name(&self, idx: LocationIdx) -> &str {
        self.locations[idx].name()
    }
}
