use fxhash::FxHashMap;

use crate::problem::location::LocationIdx;

/// Remaining resource units owed to each location.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DemandLedger {
    remaining: FxHashMap<LocationIdx, u32>,
}

impl DemandLedger {
    pub fn set(&mut self, location: LocationIdx, amount: u32) {
        self.remaining.insert(location, amount);
    }

    /// Unknown locations owe nothing.
    pub fn get(&self, location: LocationIdx) -> u32 {
        self.remaining.get(&location).copied().unwrap_or(0)
    }

    /// Never goes below zero.
    pub fn decrement(&mut self, location: LocationIdx, amount: u32) {
        if let Some(remaining) = self.remaining.get_mut(&location) {
            *remaining = remaining.saturating_sub(amount);
        }
    }

    pub fn total_remaining(&self) -> u64 {
        self.remaining.values().map(|&amount| u64::from(amount)).sum()
    }

    pub fn has_remaining(&self) -> bool {
        self.remaining.values().any(|&amount| amount > 0)
    }

    /// Entries sorted by location.
    pub fn iter(&self) -> impl Iterator<Item = (LocationIdx, u32)> + use<> {
        let mut entries: Vec<_> = self
            .remaining
            .iter()
            .map(|(&location, &amount)| (location, amount))
            .collect();
        entries.sort_unstable_by_key(|&(location, _)| location);
        entries.into_iter()
    }
}

impl FromIterator<(LocationIdx, u32)> for DemandLedger {
    fn from_iter<T: IntoIterator<Item = (LocationIdx, u32)>>(iter: T) -> Self {
        let mut ledger = DemandLedger::default();
        for (location, amount) in iter {
            ledger.set(location, amount);
        }
        ledger
    }
}
