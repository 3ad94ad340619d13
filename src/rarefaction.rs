//! Gene accumulation curves and the Monte Carlo rarefaction estimator.

use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rayon::prelude::*;

use crate::table::Incidence;

/// Cumulative distinct-gene counts walking samples in `order`.
///
/// The curve is non-decreasing and ends at the number of genes present in at
/// least one visited sample.
pub fn accumulation_curve(table: &Incidence, order: &[usize]) -> Vec<u64> {
    let mut seen = vec![false; table.n_genes()];
    let mut total = 0u64;
    let mut curve = Vec::with_capacity(order.len());
    for &sample in order {
        for (gene, &flag) in table.presence.row(sample).iter().enumerate() {
            if flag > 0 && !seen[gene] {
                seen[gene] = true;
                total += 1;
            }
        }
        curve.push(total);
    }
    curve
}

/// Output of [`rarefaction_curves`].
pub struct RarefactionResult {
    /// One accumulation curve per permutation.
    pub curves: Vec<Vec<u64>>,
    /// Element-wise mean across permutations.
    pub mean: Vec<f64>,
}

/// Monte Carlo rarefaction: average the accumulation curve over `iterations`
/// random permutations of the sample order.
///
/// Each iteration derives its own RNG from `seed`, so the estimate is
/// reproducible and does not depend on rayon's worker scheduling.
pub fn rarefaction_curves(table: &Incidence, iterations: usize, seed: u64) -> RarefactionResult {
    let n_samples = table.n_samples();

    let pb = ProgressBar::new(iterations as u64);
    pb.set_style(
        ProgressStyle::with_template(
            "[{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} permutations",
        )
        .unwrap()
        .progress_chars("##-"),
    );

    let curves: Vec<Vec<u64>> = (0..iterations)
        .into_par_iter()
        .map(|iteration| {
            let mut rng = StdRng::seed_from_u64(seed.wrapping_add(iteration as u64));
            let mut order: Vec<usize> = (0..n_samples).collect();
            order.shuffle(&mut rng);
            let curve = accumulation_curve(table, &order);
            pb.inc(1);
            curve
        })
        .collect();
    pb.finish_and_clear();

    let mut mean = vec![0.0f64; n_samples];
    for curve in &curves {
        for (step, &count) in curve.iter().enumerate() {
            mean[step] += count as f64;
        }
    }
    for value in &mut mean {
        *value /= iterations.max(1) as f64;
    }

    info!(
        "Averaged {} accumulation curves over {} samples",
        curves.len(),
        n_samples
    );
    RarefactionResult { curves, mean }
}
