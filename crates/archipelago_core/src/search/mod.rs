pub mod activity_plan;
pub mod activity_search;
mod search_state;
pub mod statistics;

pub use activity_plan::ActivityPlan;
pub use activity_search::maximize_activities;
