use std::path::PathBuf;

use archipelago_core::search::maximize_activities;
use clap::Args;
use comfy_table::Table;
use tracing::info;

use crate::scenario_file::{location_by_name, read_scenario};

#[derive(Args)]
pub struct ActivitiesArgs {
    /// The scenario file
    #[arg(short = 'i', long)]
    input: PathBuf,

    /// Island the traveler starts from
    #[arg(short, long)]
    start: String,

    /// Total travel and activity time available
    #[arg(short, long)]
    budget: f64,
}

pub fn run(args: ActivitiesArgs) -> anyhow::Result<()> {
    let scenario = read_scenario(&args.input)?;
    let graph = scenario.graph();
    let start = location_by_name(graph, &args.start)?;

    let plan = maximize_activities(graph, start, args.budget);

    let mut table = Table::new();
    table.set_header(vec!["#", "Island", "Activities offered"]);
    for (i, &location) in plan.path.iter().enumerate() {
        table.add_row(vec![
            (i + 1).to_string(),
            graph.name(location).to_owned(),
            graph.location(location).activities().len().to_string(),
        ]);
    }
    println!("{table}");

    info!(
        "Finished: activities = {}, elapsed = {}, states = {}",
        plan.activities, plan.elapsed, plan.statistics.pushed
    );

    Ok(())
}
