use std::path::PathBuf;

use archipelago_core::routing::shortest_paths;
use clap::Args;
use comfy_table::Table;

use crate::scenario_file::{location_by_name, read_scenario};

#[derive(Args)]
pub struct ShortestPathsArgs {
    /// The scenario file
    #[arg(short = 'i', long)]
    input: PathBuf,

    #[arg(short, long)]
    source: String,
}

pub fn run(args: ShortestPathsArgs) -> anyhow::Result<()> {
    let scenario = read_scenario(&args.input)?;
    let graph = scenario.graph();
    let source = location_by_name(graph, &args.source)?;

    let paths = shortest_paths(graph, source);

    let mut table = Table::new();
    table.set_header(vec!["Island", "Travel time", "Route"]);
    for (location, distance) in paths.iter() {
        let route = paths
            .path_to(location)
            .map(|path| {
                path.iter()
                    .map(|&idx| graph.name(idx))
                    .collect::<Vec<_>>()
                    .join(" -> ")
            })
            .unwrap_or_else(|| String::from("unreachable"));

        table.add_row(vec![
            graph.name(location).to_owned(),
            distance.to_string(),
            route,
        ]);
    }
    println!("{table}");

    Ok(())
}
