use serde::Serialize;

use crate::define_index_newtype;

use super::activity::Activity;

define_index_newtype!(LocationIdx, Location);

/// Clock unit of the visit tour.
pub type Days = f64;

/// Descriptor of an island. The graph identifies locations by [`LocationIdx`]
/// and resolves names once, so two descriptors never compete for the same key.
#[derive(Serialize, Debug, Clone)]
pub struct Location {
    name: String,
    population: u64,
    activities: Vec<Activity>,

    /// `None` until the visit tour stops here.
    last_visited: Option<Days>,
}

impl Location {
    pub fn new(name: impl Into<String>, population: u64, activities: Vec<Activity>) -> Self {
        Self {
            name: name.into(),
            population,
            activities,
            last_visited: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn population(&self) -> u64 {
        self.population
    }

    pub fn activities(&self) -> &[Activity] {
        &self.activities
    }

    pub fn last_visited(&self) -> Option<Days> {
        self.last_visited
    }

    /// Whether a visit at `now` falls within `threshold` days of the previous one.
    pub fn visited_within(&self, now: Days, threshold: Days) -> bool {
        self.last_visited
            .is_some_and(|last_visited| now - last_visited < threshold)
    }

    pub(crate) fn mark_visited(&mut self, now: Days) {
        self.last_visited = Some(now);
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (population: {})", self.name, self.population)
    }
}
