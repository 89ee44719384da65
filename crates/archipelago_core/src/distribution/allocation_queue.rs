use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::{
    problem::{activity::TravelTime, location::LocationIdx},
    utils::sequence::Sequence,
};

struct Candidate {
    location: LocationIdx,
    distance: TravelTime,
    sequence: u64,
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
        other
            .distance
            .total_cmp(&self.distance)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

/// Locations waiting for a delivery, nearest first. A location may be offered
/// several times, each offer is popped separately.
#[derive(Default)]
pub struct AllocationQueue {
    heap: BinaryHeap<Candidate>,
    sequence: Sequence,
}

impl AllocationQueue {
    pub fn offer(&mut self, location: LocationIdx, distance: TravelTime) {
        self.heap.push(Candidate {
            location,
            distance,
            sequence: self.sequence.next_value(),
        });
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

/// Pops the nearest candidate.
impl Iterator for AllocationQueue {
    type Item = LocationIdx;

    fn next(&mut self) -> Option<Self::Item> {
        self.heap.pop().map(|candidate| candidate.location)
    }
}
