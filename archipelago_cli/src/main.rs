use clap::{Parser, Subcommand};

use mimalloc::MiMalloc;

use crate::{
    activities::ActivitiesArgs, distribute::DistributeArgs, generate::GenerateSubcommands,
    shortest_paths::ShortestPathsArgs, visits::VisitsArgs,
};

mod activities;
mod distribute;
mod generate;
mod scenario_file;
mod shortest_paths;
mod visits;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[arg(short, long)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Find the path completing the most activities within a time budget
    Activities {
        #[command(flatten)]
        args: ActivitiesArgs,
    },
    /// Print the shortest travel time from a source to every island
    ShortestPaths {
        #[command(flatten)]
        args: ShortestPathsArgs,
    },
    /// Dispatch couriers until every island's demand is met
    Distribute {
        #[command(flatten)]
        args: DistributeArgs,
    },
    /// Visit the most populous islands, skipping recently visited ones
    Visits {
        #[command(flatten)]
        args: VisitsArgs,
    },
    #[command(visible_alias = "g")]
    Generate {
        #[command(subcommand)]
        commands: GenerateSubcommands,
    },
}

fn main() -> Result<(), anyhow::Error> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(if cli.debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .init();

    match cli.command {
        Some(Commands::Activities { args }) => activities::run(args)?,
        Some(Commands::ShortestPaths { args }) => shortest_paths::run(args)?,
        Some(Commands::Distribute { args }) => distribute::run(args)?,
        Some(Commands::Visits { args }) => visits::run(args)?,
        Some(Commands::Generate { commands }) => generate::run(commands)?,
        None => {
            // Nothing to do without a command
        }
    }

    Ok(())
}
