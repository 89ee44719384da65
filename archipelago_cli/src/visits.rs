use std::path::PathBuf;

use archipelago_core::tour::{VisitTourParams, maximize_visits};
use clap::Args;
use comfy_table::Table;

use crate::scenario_file::{location_by_name, read_scenario};

#[derive(Args)]
pub struct VisitsArgs {
    /// The scenario file
    #[arg(short = 'i', long)]
    input: PathBuf,

    #[arg(short, long)]
    start: String,

    /// Total available time in days
    #[arg(long, default_value_t = 15.0)]
    time_limit: f64,

    /// Days spent on each island
    #[arg(long, default_value_t = 1.0)]
    visit_duration: f64,

    /// Islands visited within this many days are skipped
    #[arg(long, default_value_t = 7.0)]
    recent_threshold: f64,
}

pub fn run(args: VisitsArgs) -> anyhow::Result<()> {
    let mut scenario = read_scenario(&args.input)?;
    let start = location_by_name(scenario.graph(), &args.start)?;

    let order = maximize_visits(
        scenario.graph_mut(),
        start,
        VisitTourParams {
            time_limit: args.time_limit,
            visit_duration: args.visit_duration,
            recent_threshold: args.recent_threshold,
        },
    );

    let graph = scenario.graph();
    let mut table = Table::new();
    table.set_header(vec!["#", "Island", "Population", "Day"]);
    for (i, &location) in order.iter().enumerate() {
        let island = graph.location(location);
        table.add_row(vec![
            (i + 1).to_string(),
            island.name().to_owned(),
            island.population().to_string(),
            if i == 0 {
                String::from("start")
            } else {
                // The clock only moves when an island is visited
                ((i - 1) as f64 * args.visit_duration).to_string()
            },
        ]);
    }
    println!("{table}");

    Ok(())
}
