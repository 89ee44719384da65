use crate::problem::{activity::TravelTime, location::LocationIdx};

/// Result of a single-source shortest path run.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPaths {
    source: LocationIdx,
    distances: Vec<TravelTime>,
    parents: Vec<Option<LocationIdx>>,
}

impl ShortestPaths {
    pub(crate) fn new(
        source: LocationIdx,
        distances: Vec<TravelTime>,
        parents: Vec<Option<LocationIdx>>,
    ) -> Self {
        Self {
            source,
            distances,
            parents,
        }
    }

    pub fn source(&self) -> LocationIdx {
        self.source
    }

    /// Infinite for unreachable locations and for indices the graph never
    /// registered.
    #[inline]
    pub fn distance(&self, location: LocationIdx) -> TravelTime {
        self.distances
            .get(location.get())
            .copied()
            .unwrap_or(TravelTime::INFINITY)
    }

    pub fn is_reachable(&self, location: LocationIdx) -> bool {
        self.distance(location).is_finite()
    }

    /// Locations from the source to `target`, both included.
    pub fn path_to(&self, target: LocationIdx) -> Option<Vec<LocationIdx>> {
        if !self.is_reachable(target) {
            return None;
        }

        let mut path = vec![target];
        let mut current = target;
        while let Some(&Some(parent)) = self.parents.get(current.get()) {
            path.push(parent);
            current = parent;
        }

        path.reverse();
        Some(path)
    }

    pub fn iter(&self) -> impl Iterator<Item = (LocationIdx, TravelTime)> + '_ {
        self.distances
            .iter()
            .enumerate()
            .map(|(i, &distance)| (LocationIdx::new(i), distance))
    }
}
