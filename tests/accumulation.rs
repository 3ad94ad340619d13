use ndarray::array;
use panplot::rarefaction::accumulation_curve;
use panplot::table::Incidence;

/// Samples introducing {g1,g2}, {g2,g3}, {g4}.
fn toy_table() -> Incidence {
    Incidence {
        genes: vec!["g1".into(), "g2".into(), "g3".into(), "g4".into()],
        samples: vec!["s1".into(), "s2".into(), "s3".into()],
        presence: array![[1u8, 1, 0, 0], [0u8, 1, 1, 0], [0u8, 0, 0, 1]],
    }
}

#[test]
fn single_pass_curve() {
    let table = toy_table();
    let curve = accumulation_curve(&table, &[0, 1, 2]);
    assert_eq!(curve, vec![2, 3, 4]);
}

#[test]
fn curve_is_monotone_for_any_order() {
    let table = toy_table();
    for order in [[0, 1, 2], [2, 1, 0], [1, 0, 2], [1, 2, 0], [2, 0, 1], [0, 2, 1]] {
        let curve = accumulation_curve(&table, &order);
        for pair in curve.windows(2) {
            assert!(pair[1] >= pair[0], "curve not monotone for {:?}", order);
        }
    }
}

#[test]
fn every_order_ends_at_the_full_gene_count() {
    let table = toy_table();
    for order in [[0, 1, 2], [2, 1, 0], [1, 2, 0]] {
        let curve = accumulation_curve(&table, &order);
        assert_eq!(*curve.last().unwrap() as usize, table.n_nonempty_genes());
    }
}

#[test]
fn absent_genes_never_counted() {
    let table = Incidence {
        genes: vec!["g1".into(), "g2".into()],
        samples: vec!["s1".into(), "s2".into()],
        presence: array![[1u8, 0], [1u8, 0]],
    };
    let curve = accumulation_curve(&table, &[0, 1]);
    assert_eq!(curve, vec![1, 1]);
}
