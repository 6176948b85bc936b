use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use knapsack::{Catalog, Solution, total_value};

/// The smart farm sprinklers, used when no catalog file is given.
const SAMPLE_CATALOG: &str = include_str!("../data/sprinklers.txt");

#[derive(Parser, Debug)]
#[command(name = "knapsack")]
#[command(about = "Schedule catalog items in knapsack-optimal rounds", long_about = None)]
struct Cli {
    /// Capacity of every round, a subset must cost strictly less
    #[arg(short = 'c', long, default_value_t = 40)]
    capacity: i64,

    /// Total number of items to schedule across all rounds
    #[arg(short = 's', long, default_value_t = 10)]
    slots: usize,

    /// Catalog file with one `name cost value` line per item
    #[arg(short = 'f', long)]
    catalog: Option<PathBuf>,

    /// Print a single solver result for the whole catalog
    #[arg(long)]
    solve_only: bool,
}

fn main() -> anyhow::Result<()> {
    // install global collector configured based on RUST_LOG env var.
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let catalog = match &cli.catalog {
        Some(path) => {
            let document = std::fs::read_to_string(path)
                .with_context(|| format!("could not read catalog {}", path.display()))?;
            Catalog::parse(&document).with_context(|| format!("bad catalog {}", path.display()))?
        }
        None => Catalog::parse(SAMPLE_CATALOG).context("bad sample catalog")?,
    };

    if cli.solve_only {
        let picked = knapsack::solve(catalog.items(), cli.capacity)?;
        println!("Selected items:");
        for item in &picked {
            println!(" → {}", item.name());
        }
        println!("Value: {}", total_value(&picked, cli.capacity));
        println!("Output: {}", picked.iter().map(|i| i.cost()).sum::<i64>());
        return Ok(());
    }

    println!(
        "{} of {} items scheduled in rounds under a capacity of {}",
        cli.slots,
        catalog.len(),
        cli.capacity
    );
    let solution = knapsack::run_batches(catalog, cli.slots, cli.capacity)?;
    report(&solution, cli.capacity);
    Ok(())
}

fn report(solution: &Solution, capacity: i64) {
    for batch in solution {
        println!("\nRound {}\n", batch.round());
        println!("Selected items:");
        for name in batch.names() {
            println!(" → {}", name);
        }
        println!("Value: {}", batch.total_value(capacity));
        println!("Output: {}", batch.total_cost());
    }

    println!("\nAggregated sequence:\n");
    for batch in solution {
        let items: Vec<String> = batch.items().iter().map(|i| i.to_string()).collect();
        println!("Step {}: [{}]", batch.round(), items.join(", "));
    }
}
