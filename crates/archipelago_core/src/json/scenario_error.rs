use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ScenarioError {
    #[error("Location {0} is declared more than once")]
    DuplicateLocation(String),
    #[error("Unknown location {0}")]
    UnknownLocation(String),
    #[error("Travel time between {from} and {to} must be a non-negative number, got {travel_time}")]
    InvalidTravelTime {
        from: String,
        to: String,
        travel_time: f64,
    },
    #[error("Activity {activity} on {location} must last a non-negative number, got {duration}")]
    InvalidDuration {
        location: String,
        activity: String,
        duration: f64,
    },
}
