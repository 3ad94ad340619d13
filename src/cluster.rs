//! Average-linkage hierarchical clustering over a precomputed distance matrix.

use ndarray::Array2;

/// One agglomeration step: the ids of the two merged clusters, the
/// average-linkage distance at which they merged, and the size of the merged
/// cluster. Ids follow the usual linkage convention: `0..n` are leaves and
/// `n + i` is the cluster created by merge `i`.
#[derive(Debug, Clone, Copy)]
pub struct Merge {
    pub left: usize,
    pub right: usize,
    pub height: f64,
    pub size: usize,
}

#[derive(Debug, Clone)]
pub struct Linkage {
    pub n_leaves: usize,
    pub merges: Vec<Merge>,
}

impl Linkage {
    /// Agglomerate with average linkage, recomputing cluster distances from
    /// the original pairwise matrix at every step. Quadratic-ish and fine for
    /// the matrix sizes a heatmap can display.
    pub fn average(distances: &Array2<f64>) -> Self {
        let n = distances.nrows();
        let mut active: Vec<(usize, Vec<usize>)> = (0..n).map(|i| (i, vec![i])).collect();
        let mut merges = Vec::with_capacity(n.saturating_sub(1));
        let mut next_id = n;

        while active.len() > 1 {
            let mut best = (0usize, 1usize, f64::INFINITY);
            for i in 0..active.len() {
                for j in (i + 1)..active.len() {
                    let mut total = 0.0;
                    for &a in &active[i].1 {
                        for &b in &active[j].1 {
                            total += distances[[a, b]];
                        }
                    }
                    let avg = total / (active[i].1.len() * active[j].1.len()) as f64;
                    if avg < best.2 {
                        best = (i, j, avg);
                    }
                }
            }
            let (i, j, height) = best;
            // remove j first; j > i keeps i's position stable
            let (right_id, right_members) = active.remove(j);
            let (left_id, left_members) = active.remove(i);
            let mut members = left_members;
            members.extend(right_members);
            merges.push(Merge {
                left: left_id,
                right: right_id,
                height,
                size: members.len(),
            });
            active.push((next_id, members));
            next_id += 1;
        }

        Linkage { n_leaves: n, merges }
    }

    /// Leaves in dendrogram display order (in-order traversal of the merge
    /// tree).
    pub fn leaf_order(&self) -> Vec<usize> {
        if self.merges.is_empty() {
            return (0..self.n_leaves).collect();
        }
        let root = self.n_leaves + self.merges.len() - 1;
        let mut order = Vec::with_capacity(self.n_leaves);
        self.collect_leaves(root, &mut order);
        order
    }

    fn collect_leaves(&self, id: usize, out: &mut Vec<usize>) {
        if id < self.n_leaves {
            out.push(id);
        } else {
            let merge = self.merges[id - self.n_leaves];
            self.collect_leaves(merge.left, out);
            self.collect_leaves(merge.right, out);
        }
    }
}
