use std::cmp::Ordering;

use fxhash::FxHashSet;

use crate::problem::{activity::TravelTime, location::LocationIdx};

/// Partial path explored by the activity search. Each branch owns its own
/// visited set, nothing is shared between branches.
#[derive(Debug, Clone)]
pub(super) struct SearchState {
    pub location: LocationIdx,
    pub path: Vec<LocationIdx>,
    pub elapsed: TravelTime,
    pub activities: usize,
    pub visited: FxHashSet<LocationIdx>,
}

impl SearchState {
    pub fn start(location: LocationIdx) -> Self {
        Self {
            location,
            path: vec![],
            elapsed: 0.0,
            activities: 0,
            visited: FxHashSet::default(),
        }
    }

    pub fn extend(&self, location: LocationIdx, elapsed: TravelTime, activities: usize) -> Self {
        let mut path = Vec::with_capacity(self.path.len() + 1);
        path.extend_from_slice(&self.path);
        path.push(location);

        let mut visited = self.visited.clone();
        visited.insert(location);

        Self {
            location,
            path,
            elapsed,
            activities,
            visited,
        }
    }
}

/// Queue entry ordered by elapsed time, then by creation order.
pub(super) struct QueuedState {
    pub sequence: u64,
    pub state: SearchState,
}

impl PartialEq for QueuedState {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for QueuedState {}

impl PartialOrd for QueuedState {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for QueuedState {
    fn cmp(&self, other: &Self) -> Ordering {
        // Flipped on both keys, BinaryHeap is a max-heap
        other
            .state
            .elapsed
            .total_cmp(&self.state.elapsed)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}
