use ndarray::array;
use panplot::mash::MashEdge;
use panplot::matrix::{jaccard, SimilarityMatrix};
use panplot::table::Incidence;

fn edge(seq1: &str, seq2: &str, shared_hashes: f64) -> MashEdge {
    MashEdge {
        seq1: seq1.to_string(),
        seq2: seq2.to_string(),
        distance: 0.0,
        p_value: 0.0,
        shared_hashes,
    }
}

#[test]
fn jaccard_identical_vectors() {
    let a = array![1u8, 0, 1, 1];
    assert!((jaccard(a.view(), a.view()) - 1.0).abs() < 1e-12);
}

#[test]
fn jaccard_disjoint_vectors() {
    let a = array![1u8, 1, 0, 0];
    let b = array![0u8, 0, 1, 1];
    assert_eq!(jaccard(a.view(), b.view()), 0.0);
}

#[test]
fn jaccard_empty_union_is_zero() {
    let a = array![0u8, 0, 0];
    let b = array![0u8, 0, 0];
    assert_eq!(jaccard(a.view(), b.view()), 0.0);
}

#[test]
fn jaccard_partial_overlap() {
    let a = array![1u8, 1, 0];
    let b = array![0u8, 1, 1];
    assert!((jaccard(a.view(), b.view()) - 1.0 / 3.0).abs() < 1e-12);
}

#[test]
fn from_edges_sorts_labels_and_fills_symmetric() {
    let edges = vec![
        edge("seqC", "seqA", 0.5),
        edge("seqA", "seqB", 0.99),
        edge("seqB", "seqC", 0.1),
    ];
    let m = SimilarityMatrix::from_edges(&edges);
    assert_eq!(m.labels, vec!["seqA", "seqB", "seqC"]);
    assert!((m.values[[0, 2]] - 0.5).abs() < 1e-12);
    assert!((m.values[[0, 1]] - 0.99).abs() < 1e-12);
    for i in 0..m.len() {
        for j in 0..m.len() {
            assert_eq!(m.values[[i, j]], m.values[[j, i]]);
        }
        assert_eq!(m.values[[i, i]], 1.0);
    }
}

#[test]
fn from_edges_duplicate_pair_overwrites() {
    let edges = vec![
        edge("a", "b", 0.2),
        edge("b", "a", 0.7), // reversed duplicate, last one wins
    ];
    let m = SimilarityMatrix::from_edges(&edges);
    assert!((m.values[[0, 1]] - 0.7).abs() < 1e-12);
    assert!((m.values[[1, 0]] - 0.7).abs() < 1e-12);
}

#[test]
fn distance_matrix_sanitizes_nan() {
    let edges = vec![edge("a", "b", f64::NAN), edge("a", "c", 0.25)];
    let m = SimilarityMatrix::from_edges(&edges);
    let d = m.distance_matrix();
    assert_eq!(d[[0, 1]], 1.0); // unparsed pair is maximally distant
    assert!((d[[0, 2]] - 0.75).abs() < 1e-12);
    for i in 0..m.len() {
        assert_eq!(d[[i, i]], 0.0);
    }
}

#[test]
fn jaccard_from_incidence_sorts_samples() {
    let table = Incidence {
        genes: vec!["g1".into(), "g2".into(), "g3".into()],
        samples: vec!["s2".into(), "s1".into()],
        presence: array![[1u8, 1, 0], [1u8, 0, 0]],
    };
    let m = SimilarityMatrix::jaccard_from_incidence(&table);
    assert_eq!(m.labels, vec!["s1", "s2"]);
    // s1 = {g1}, s2 = {g1, g2} -> 1/2
    assert!((m.values[[0, 1]] - 0.5).abs() < 1e-12);
    assert_eq!(m.values[[0, 1]], m.values[[1, 0]]);
    assert_eq!(m.values[[0, 0]], 1.0);
    assert_eq!(m.values[[1, 1]], 1.0);
}

#[test]
fn reordered_permutes_labels_and_cells() {
    let edges = vec![edge("a", "b", 0.9), edge("a", "c", 0.2), edge("b", "c", 0.4)];
    let m = SimilarityMatrix::from_edges(&edges);
    let r = m.reordered(&[2, 0, 1]);
    assert_eq!(r.labels, vec!["c", "a", "b"]);
    assert!((r.values[[0, 1]] - 0.2).abs() < 1e-12); // c vs a
    assert!((r.values[[0, 2]] - 0.4).abs() < 1e-12); // c vs b
    assert!((r.values[[1, 2]] - 0.9).abs() < 1e-12); // a vs b
    for i in 0..3 {
        assert_eq!(r.values[[i, i]], 1.0);
    }
}
