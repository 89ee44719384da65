use std::path::PathBuf;

use archipelago_core::distribution::distribute_resources;
use clap::Args;
use comfy_table::Table;
use tracing::{info, warn};

use crate::scenario_file::{location_by_name, read_scenario};

#[derive(Args)]
pub struct DistributeArgs {
    /// The scenario file
    #[arg(short = 'i', long)]
    input: PathBuf,

    /// Island the resources leave from
    #[arg(short, long)]
    source: String,

    /// Overrides the number of couriers declared in the scenario
    #[arg(short, long)]
    couriers: Option<usize>,
}

pub fn run(args: DistributeArgs) -> anyhow::Result<()> {
    let scenario = read_scenario(&args.input)?;
    let graph = scenario.graph();
    let source = location_by_name(graph, &args.source)?;
    let couriers = args.couriers.unwrap_or(scenario.couriers());

    let report = distribute_resources(graph, source, scenario.demand_entries(), couriers);

    let mut table = Table::new();
    table.set_header(vec!["Island", "Requested", "Delivered", "Remaining"]);
    for (location, remaining) in report.ledger.iter() {
        table.add_row(vec![
            graph.name(location).to_owned(),
            scenario.demand()[&location].to_string(),
            report.delivered_to(location).to_string(),
            remaining.to_string(),
        ]);
    }
    println!("{table}");

    for &location in &report.unreachable {
        warn!("{} is unreachable from {}", graph.name(location), args.source);
    }

    info!(
        "Finished: outcome = {:?}, dispatches = {}, remaining = {}",
        report.outcome,
        report.dispatch_count(),
        report.ledger.total_remaining()
    );

    Ok(())
}
