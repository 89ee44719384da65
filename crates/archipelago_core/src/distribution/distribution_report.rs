use serde::Serialize;

use crate::problem::{
    activity::TravelTime,
    courier::{Courier, CourierIdx},
    location::LocationIdx,
};

use super::demand_ledger::DemandLedger;

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Every demand reached zero.
    Completed,
    /// Nothing left to allocate while demand was still outstanding.
    QueueExhausted,
    /// The pool had no courier to send.
    NoCouriers,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct Dispatch {
    pub courier: CourierIdx,
    pub location: LocationIdx,
    pub distance: TravelTime,
}

#[derive(Debug, Clone)]
pub struct DistributionReport {
    pub ledger: DemandLedger,
    pub dispatches: Vec<Dispatch>,
    /// Targets with demand that cannot be reached from the source.
    pub unreachable: Vec<LocationIdx>,
    pub couriers: Vec<Courier>,
    pub outcome: Outcome,
}

impl DistributionReport {
    pub fn is_complete(&self) -> bool {
        self.outcome == Outcome::Completed
    }

    pub fn dispatch_count(&self) -> usize {
        self.dispatches.len()
    }

    pub fn delivered_to(&self, location: LocationIdx) -> usize {
        self.dispatches
            .iter()
            .filter(|dispatch| dispatch.location == location)
            .count()
    }
}
