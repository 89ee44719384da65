use serde::Serialize;

use crate::define_index_newtype;

define_index_newtype!(CourierIdx, Courier);

/// A reusable dispatch unit. Couriers are never consumed, they only keep a
/// tally of the deliveries they made.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Courier {
    id: CourierIdx,
    deliveries: usize,
}

impl Courier {
    pub fn new(id: CourierIdx) -> Self {
        Self { id, deliveries: 0 }
    }

    pub fn id(&self) -> CourierIdx {
        self.id
    }

    pub fn deliveries(&self) -> usize {
        self.deliveries
    }

    pub(crate) fn record_delivery(&mut self) {
        self.deliveries += 1;
    }
}
