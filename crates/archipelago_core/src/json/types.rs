use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::{
    graph::Graph,
    problem::{
        activity::Activity,
        location::{Location, LocationIdx},
    },
};

use super::{scenario::Scenario, scenario_error::ScenarioError};

#[derive(Serialize, Deserialize, JsonSchema, Debug)]
#[serde(deny_unknown_fields, rename = "Scenario")]
pub struct JsonScenario {
    pub locations: Vec<JsonLocation>,
    #[serde(default)]
    pub edges: Vec<JsonEdge>,
    #[serde(default)]
    pub demands: Vec<JsonDemand>,
    /// Couriers available to the resource distribution.
    #[serde(default)]
    pub couriers: usize,
}

#[derive(Serialize, Deserialize, JsonSchema, Debug)]
#[serde(deny_unknown_fields, rename = "Location")]
pub struct JsonLocation {
    pub name: String,
    #[serde(default)]
    pub population: u64,
    #[serde(default)]
    pub activities: Vec<JsonActivity>,
}

#[derive(Serialize, Deserialize, JsonSchema, Debug)]
#[serde(deny_unknown_fields, rename = "Activity")]
pub struct JsonActivity {
    pub label: String,
    pub duration: f64,
}

#[derive(Serialize, Deserialize, JsonSchema, Debug)]
#[serde(deny_unknown_fields, rename = "Edge")]
pub struct JsonEdge {
    pub from: String,
    pub to: String,
    pub travel_time: f64,
}

#[derive(Serialize, Deserialize, JsonSchema, Debug)]
#[serde(deny_unknown_fields, rename = "Demand")]
pub struct JsonDemand {
    pub location: String,
    pub amount: u32,
}

fn is_valid_time(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}

impl JsonScenario {
    #[instrument(skip_all, level = "debug")]
    pub fn build_scenario(self) -> Result<Scenario, ScenarioError> {
        let mut graph = Graph::default();

        for location in self.locations {
            if graph.location_idx(&location.name).is_some() {
                return Err(ScenarioError::DuplicateLocation(location.name));
            }

            let activities = location
                .activities
                .into_iter()
                .map(|activity| {
                    if is_valid_time(activity.duration) {
                        Ok(Activity::new(activity.label, activity.duration))
                    } else {
                        Err(ScenarioError::InvalidDuration {
                            location: location.name.clone(),
                            activity: activity.label,
                            duration: activity.duration,
                        })
                    }
                })
                .collect::<Result<Vec<_>, _>>()?;

            graph.add_location(Location::new(
                location.name,
                location.population,
                activities,
            ));
        }

        for edge in self.edges {
            if !is_valid_time(edge.travel_time) {
                return Err(ScenarioError::InvalidTravelTime {
                    from: edge.from,
                    to: edge.to,
                    travel_time: edge.travel_time,
                });
            }

            let from = resolve(&graph, &edge.from)?;
            let to = resolve(&graph, &edge.to)?;
            graph.add_edge(from, to, edge.travel_time);
        }

        let mut scenario = Scenario::new(graph, self.couriers);
        for demand in self.demands {
            let location = resolve(scenario.graph(), &demand.location)?;
            scenario.add_demand(location, demand.amount);
        }

        Ok(scenario)
    }
}

fn resolve(graph: &Graph, name: &str) -> Result<LocationIdx, ScenarioError> {
    graph
        .location_idx(name)
        .ok_or_else(|| ScenarioError::UnknownLocation(name.to_owned()))
}
