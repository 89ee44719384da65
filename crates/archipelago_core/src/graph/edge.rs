use serde::Serialize;

use crate::problem::{activity::TravelTime, location::LocationIdx};

/// One direction of an undirected link, stored in the adjacency list of its
/// origin.
#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    to: LocationIdx,
    travel_time: TravelTime,
}

impl Edge {
    pub fn new(to: LocationIdx, travel_time: TravelTime) -> Self {
        Self { to, travel_time }
    }

    pub fn to(&self) -> LocationIdx {
        self.to
    }

    pub fn travel_time(&self) -> TravelTime {
        self.travel_time
    }
}
