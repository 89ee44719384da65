pub mod scenario;
pub mod scenario_error;
pub mod schema;
pub mod types;

pub use scenario::Scenario;
pub use scenario_error::ScenarioError;
pub use types::JsonScenario;
