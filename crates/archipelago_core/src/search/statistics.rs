use serde::Serialize;

#[derive(Serialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStatistics {
    pub pushed: usize,
    pub popped: usize,
    pub pruned: usize,
}

impl SearchStatistics {
    pub fn expanded(&self) -> usize {
        self.popped - self.pruned
    }
}
