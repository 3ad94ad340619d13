//! Argument structs and pipelines for the five subcommands.

use std::error::Error;
use std::path::{Path, PathBuf};

use clap::Args;
use log::info;

use crate::cluster::Linkage;
use crate::matrix::SimilarityMatrix;
use crate::{mash, plot, rarefaction, report, table};

fn default_output(input: &Path, suffix: &str) -> PathBuf {
    PathBuf::from(format!("{}{}", input.display(), suffix))
}

#[derive(Args, Debug)]
pub struct AccumulationArgs {
    /// Gene incidence table (TSV with a header row of sample labels)
    pub input: PathBuf,

    /// Output SVG path (default: <input>_accumulation.svg)
    #[arg(long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Also write the curve values as CSV next to the image
    #[arg(long, default_value_t = false)]
    pub export_csv: bool,
}

/// Gene accumulation curve over the samples in file order.
pub fn run_accumulation(args: &AccumulationArgs) -> Result<(), Box<dyn Error>> {
    let table = table::read_incidence(&args.input)?;
    let order: Vec<usize> = (0..table.n_samples()).collect();
    let curve = rarefaction::accumulation_curve(&table, &order);
    info!(
        "Accumulation over {} samples reaches {} genes",
        table.n_samples(),
        curve.last().copied().unwrap_or(0)
    );

    let output = args
        .output
        .clone()
        .unwrap_or_else(|| default_output(&args.input, "_accumulation.svg"));
    plot::render_accumulation(&curve, &output)?;
    info!("Accumulation curve written to {}", output.display());

    if args.export_csv {
        let csv_path = output.with_extension("csv");
        report::write_curve_csv(&curve, &csv_path)?;
        info!("Curve values written to {}", csv_path.display());
    }
    Ok(())
}

#[derive(Args, Debug)]
pub struct RarefactionArgs {
    /// Gene incidence table (TSV with a header row of sample labels)
    pub input: PathBuf,

    /// Output SVG path (default: <input>_rarefaction.svg)
    #[arg(long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Number of random sample-order permutations to average
    #[arg(long, default_value_t = 1000)]
    pub iterations: usize,

    /// Base RNG seed; the same seed reproduces the same curves
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Also write the mean curve as CSV next to the image
    #[arg(long, default_value_t = false)]
    pub export_csv: bool,
}

/// Monte Carlo rarefaction curve over random sample orders.
pub fn run_rarefaction(args: &RarefactionArgs) -> Result<(), Box<dyn Error>> {
    if args.iterations == 0 {
        return Err("--iterations must be at least 1".into());
    }
    let table = table::read_incidence(&args.input)?;
    info!(
        "Estimating rarefaction over {} permutations (seed {})",
        args.iterations, args.seed
    );
    let result = rarefaction::rarefaction_curves(&table, args.iterations, args.seed);

    let output = args
        .output
        .clone()
        .unwrap_or_else(|| default_output(&args.input, "_rarefaction.svg"));
    plot::render_rarefaction(&result, &output)?;
    info!("Rarefaction curve written to {}", output.display());

    if args.export_csv {
        let csv_path = output.with_extension("csv");
        report::write_rarefaction_csv(&result, &csv_path)?;
        info!("Mean curve written to {}", csv_path.display());
    }
    Ok(())
}

#[derive(Args, Debug)]
pub struct GeneHeatmapArgs {
    /// Gene incidence table (TSV with a header row of sample labels)
    pub input: PathBuf,

    /// Output SVG path (default: <input>_jaccard_heatmap.svg)
    #[arg(long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Also write the similarity matrix as CSV next to the image
    #[arg(long, default_value_t = false)]
    pub export_csv: bool,
}

/// Sample-by-sample Jaccard similarity heatmap from gene presence sets.
pub fn run_gene_heatmap(args: &GeneHeatmapArgs) -> Result<(), Box<dyn Error>> {
    let table = table::read_incidence(&args.input)?;
    let matrix = SimilarityMatrix::jaccard_from_incidence(&table);
    info!(
        "Computed {} x {} Jaccard similarity matrix",
        matrix.len(),
        matrix.len()
    );

    let output = args
        .output
        .clone()
        .unwrap_or_else(|| default_output(&args.input, "_jaccard_heatmap.svg"));
    plot::render_heatmap(&matrix, "Gene Jaccard index heatmap", &output)?;
    info!("Heatmap written to {}", output.display());

    if args.export_csv {
        let csv_path = output.with_extension("csv");
        report::write_matrix_csv(&matrix, &csv_path)?;
        info!("Similarity matrix written to {}", csv_path.display());
    }
    Ok(())
}

#[derive(Args, Debug)]
pub struct MashHeatmapArgs {
    /// Mash distance edge list (headerless 5-column TSV)
    pub input: PathBuf,

    /// Output SVG path (default: <input>_mash_heatmap.svg)
    #[arg(long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Also write the similarity matrix as CSV next to the image
    #[arg(long, default_value_t = false)]
    pub export_csv: bool,
}

/// Shared-hash similarity heatmap from a mash edge list.
pub fn run_mash_heatmap(args: &MashHeatmapArgs) -> Result<(), Box<dyn Error>> {
    let edges = mash::read_edges(&args.input)?;
    let matrix = SimilarityMatrix::from_edges(&edges);
    info!(
        "Built {} x {} similarity matrix from {} records",
        matrix.len(),
        matrix.len(),
        edges.len()
    );

    let output = args
        .output
        .clone()
        .unwrap_or_else(|| default_output(&args.input, "_mash_heatmap.svg"));
    plot::render_heatmap(&matrix, "k-mer Jaccard index heatmap", &output)?;
    info!("Heatmap written to {}", output.display());

    if args.export_csv {
        let csv_path = output.with_extension("csv");
        report::write_matrix_csv(&matrix, &csv_path)?;
        info!("Similarity matrix written to {}", csv_path.display());
    }
    Ok(())
}

#[derive(Args, Debug)]
pub struct MashDendrogramArgs {
    /// Mash distance edge list (headerless 5-column TSV)
    pub input: PathBuf,

    /// Output SVG path (default: <input>_mash_dendrogram.svg)
    #[arg(long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Also write the similarity matrix as CSV next to the image
    #[arg(long, default_value_t = false)]
    pub export_csv: bool,
}

/// Clustered similarity heatmap with an average-linkage dendrogram panel.
pub fn run_mash_dendrogram(args: &MashDendrogramArgs) -> Result<(), Box<dyn Error>> {
    let edges = mash::read_edges(&args.input)?;
    let matrix = SimilarityMatrix::from_edges(&edges);
    if matrix.len() < 2 {
        return Err(format!(
            "need at least two sequences to cluster, found {}",
            matrix.len()
        )
        .into());
    }
    let linkage = Linkage::average(&matrix.distance_matrix());
    info!(
        "Clustered {} sequences through {} merges",
        matrix.len(),
        linkage.merges.len()
    );

    let output = args
        .output
        .clone()
        .unwrap_or_else(|| default_output(&args.input, "_mash_dendrogram.svg"));
    plot::render_mash_dendrogram(&matrix, &linkage, &output)?;
    info!("Clustered heatmap written to {}", output.display());

    if args.export_csv {
        let csv_path = output.with_extension("csv");
        report::write_matrix_csv(&matrix, &csv_path)?;
        info!("Similarity matrix written to {}", csv_path.display());
    }
    Ok(())
}
