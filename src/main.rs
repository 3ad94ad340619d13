//! PANPLOT: pan-genome presence/absence and mash-distance plotting.
//!
//! Five analyses behind one binary: gene accumulation and rarefaction curves
//! from incidence tables, sample-by-sample Jaccard heatmaps, and mash
//! shared-hash heatmaps with an optional hierarchical-clustering dendrogram.

use clap::{Parser, Subcommand};
use colored::*;
use log::{error, info};

use panplot::commands::{
    self, AccumulationArgs, GeneHeatmapArgs, MashDendrogramArgs, MashHeatmapArgs, RarefactionArgs,
};

#[derive(Parser, Debug)]
#[command(
    name = "panplot",
    version,
    about = "Pan-genome accumulation, rarefaction and similarity plots"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Gene accumulation curve over samples in file order
    Accumulation(AccumulationArgs),
    /// Monte Carlo rarefaction curve over random sample orders
    Rarefaction(RarefactionArgs),
    /// Sample-by-sample Jaccard similarity heatmap from an incidence table
    GeneHeatmap(GeneHeatmapArgs),
    /// Shared-hash similarity heatmap from a mash distance edge list
    MashHeatmap(MashHeatmapArgs),
    /// Clustered mash similarity heatmap with a dendrogram panel
    MashDendrogram(MashDendrogramArgs),
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Bare invocation prints the banner instead of a clap usage error
    if std::env::args().len() <= 1 {
        display_banner();
        std::process::exit(0);
    }

    let cli = Cli::parse();

    let start_time = std::time::Instant::now();
    let result = match &cli.command {
        Command::Accumulation(args) => commands::run_accumulation(args),
        Command::Rarefaction(args) => commands::run_rarefaction(args),
        Command::GeneHeatmap(args) => commands::run_gene_heatmap(args),
        Command::MashHeatmap(args) => commands::run_mash_heatmap(args),
        Command::MashDendrogram(args) => commands::run_mash_dendrogram(args),
    };

    match result {
        Ok(()) => {
            let duration = start_time.elapsed();
            info!("Finished in {:.2} seconds", duration.as_secs_f64());
        }
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    }
}

fn display_banner() {
    println!(
        "{}",
        r#"
     ____   _    _   _ ____  _     ___ _____
    |  _ \ / \  | \ | |  _ \| |   / _ \_   _|
    | |_) / _ \ |  \| | |_) | |  | | | || |
    |  __/ ___ \| |\  |  __/| |__| |_| || |
    |_| /_/   \_\_| \_|_|   |_____\___/ |_|
"#
        .bright_green()
    );
    println!(
        "{}",
        "Pan-genome accumulation, rarefaction and similarity plots".cyan()
    );
    println!();
    println!("USAGE:");
    println!("    panplot accumulation <incidence.tsv>");
    println!("    panplot rarefaction <incidence.tsv> [--iterations N] [--seed S]");
    println!("    panplot gene-heatmap <incidence.tsv>");
    println!("    panplot mash-heatmap <edges.tsv>");
    println!("    panplot mash-dendrogram <edges.tsv>");
    println!();
    println!("For full documentation, run:");
    println!("    panplot --help");
    println!();
}
