use serde::Serialize;

use crate::problem::{activity::TravelTime, location::LocationIdx};

use super::statistics::SearchStatistics;

/// Best path found by [`super::maximize_activities`].
#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct ActivityPlan {
    /// Locations visited after the start, the start itself is not included.
    pub path: Vec<LocationIdx>,
    pub activities: usize,

    /// Travel plus activity time spent along `path`.
    pub elapsed: TravelTime,

    pub statistics: SearchStatistics,
}
