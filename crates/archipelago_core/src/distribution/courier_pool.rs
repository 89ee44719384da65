use std::collections::VecDeque;

use crate::problem::courier::{Courier, CourierIdx};

/// FIFO of idle couriers. A courier taken from the front goes back to the
/// end of the line once released.
#[derive(Debug, Clone, Default)]
pub struct CourierPool {
    couriers: Vec<Courier>,
    idle: VecDeque<CourierIdx>,
}

impl CourierPool {
    pub fn with_couriers(count: usize) -> Self {
        let couriers: Vec<_> = CourierIdx::range(count).map(Courier::new).collect();
        let idle = couriers.iter().map(Courier::id).collect();

        Self { couriers, idle }
    }

    pub fn take(&mut self) -> Option<CourierIdx> {
        self.idle.pop_front()
    }

    pub fn release(&mut self, courier: CourierIdx) {
        self.idle.push_back(courier);
    }

    pub fn available(&self) -> usize {
        self.idle.len()
    }

    pub fn courier(&self, courier: CourierIdx) -> &Courier {
        &self.couriers[courier]
    }

    pub fn couriers(&self) -> &[Courier] {
        &self.couriers
    }

    pub(crate) fn record_delivery(&mut self, courier: CourierIdx) {
        self.couriers[courier].record_delivery();
    }
}
