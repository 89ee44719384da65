use std::{fs::File, io::BufReader, path::Path};

use anyhow::Context;
use archipelago_core::{
    graph::Graph,
    json::{JsonScenario, Scenario},
    problem::location::LocationIdx,
};
use tracing::info;

pub fn read_scenario(path: &Path) -> anyhow::Result<Scenario> {
    let file =
        File::open(path).with_context(|| format!("Cannot open scenario {}", path.display()))?;
    let content: JsonScenario = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Invalid scenario {}", path.display()))?;
    let scenario = content.build_scenario()?;

    info!(
        "Loaded {} islands and {} links from {}",
        scenario.graph().location_count(),
        scenario.graph().edge_count(),
        path.display()
    );

    Ok(scenario)
}

pub fn location_by_name(graph: &Graph, name: &str) -> anyhow::Result<LocationIdx> {
    graph
        .location_idx(name)
        .with_context(|| format!("Unknown island {name}"))
}
