//! Square similarity matrices and Jaccard indices.

use std::collections::{BTreeSet, HashMap};

use log::debug;
use ndarray::{Array2, ArrayView1};

use crate::mash::MashEdge;
use crate::table::Incidence;

/// Symmetric label-indexed similarity matrix.
///
/// Labels are always sorted lexicographically and the diagonal is fixed at
/// 1.0, regardless of how the matrix was built.
#[derive(Debug, Clone)]
pub struct SimilarityMatrix {
    pub labels: Vec<String>,
    pub values: Array2<f64>,
}

impl SimilarityMatrix {
    /// Build from a pairwise edge list, using the shared-hash fraction as the
    /// similarity. Each edge fills both symmetric entries; a later duplicate
    /// of a pair overwrites the earlier value.
    pub fn from_edges(edges: &[MashEdge]) -> Self {
        let labels: Vec<String> = edges
            .iter()
            .flat_map(|e| [e.seq1.as_str(), e.seq2.as_str()])
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(String::from)
            .collect();
        let index: HashMap<&str, usize> = labels
            .iter()
            .enumerate()
            .map(|(i, label)| (label.as_str(), i))
            .collect();

        let n = labels.len();
        let mut values = Array2::zeros((n, n));
        for edge in edges {
            let i = index[edge.seq1.as_str()];
            let j = index[edge.seq2.as_str()];
            if i != j && values[[i, j]] != 0.0 {
                debug!("duplicate pair {} / {} overwrites earlier value", edge.seq1, edge.seq2);
            }
            values[[i, j]] = edge.shared_hashes;
            values[[j, i]] = edge.shared_hashes;
        }
        for i in 0..n {
            values[[i, i]] = 1.0;
        }
        SimilarityMatrix { labels, values }
    }

    /// Pairwise Jaccard similarity between samples over their gene-presence
    /// sets, with samples in sorted label order.
    pub fn jaccard_from_incidence(table: &Incidence) -> Self {
        let mut order: Vec<usize> = (0..table.n_samples()).collect();
        order.sort_by(|&a, &b| table.samples[a].cmp(&table.samples[b]));
        let labels: Vec<String> = order.iter().map(|&i| table.samples[i].clone()).collect();

        let n = order.len();
        let mut values = Array2::zeros((n, n));
        for a in 0..n {
            for b in (a + 1)..n {
                let s = jaccard(
                    table.presence.row(order[a]),
                    table.presence.row(order[b]),
                );
                values[[a, b]] = s;
                values[[b, a]] = s;
            }
        }
        for i in 0..n {
            values[[i, i]] = 1.0;
        }
        SimilarityMatrix { labels, values }
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Distances (1 - similarity) for clustering. Unparsed (NaN) similarities
    /// cluster as maximally distant.
    pub fn distance_matrix(&self) -> Array2<f64> {
        self.values.mapv(|s| {
            let s = if s.is_nan() { 0.0 } else { s };
            1.0 - s
        })
    }

    /// Copy with rows, columns and labels permuted by `order`.
    pub fn reordered(&self, order: &[usize]) -> Self {
        let n = order.len();
        let mut values = Array2::zeros((n, n));
        for (i, &a) in order.iter().enumerate() {
            for (j, &b) in order.iter().enumerate() {
                values[[i, j]] = self.values[[a, b]];
            }
        }
        let labels = order.iter().map(|&i| self.labels[i].clone()).collect();
        SimilarityMatrix { labels, values }
    }
}

/// Jaccard index of two presence vectors: |intersection| / |union|, 0.0 when
/// the union is empty.
pub fn jaccard(a: ArrayView1<u8>, b: ArrayView1<u8>) -> f64 {
    let mut intersection = 0usize;
    let mut union = 0usize;
    for (&x, &y) in a.iter().zip(b.iter()) {
        let px = x > 0;
        let py = y > 0;
        if px && py {
            intersection += 1;
        }
        if px || py {
            union += 1;
        }
    }
    if union == 0 {
        0.0
    } else {
        intersection as f64 / union as f64
    }
}
