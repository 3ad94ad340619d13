use std::fs;

use panplot::mash::{parse_fraction, read_edges};
use tempfile::TempDir;

#[test]
fn fraction_basic() {
    assert!((parse_fraction("3/4") - 0.75).abs() < 1e-12);
    assert!((parse_fraction("990/1000") - 0.99).abs() < 1e-12);
    assert!((parse_fraction(" 1/2 ") - 0.5).abs() < 1e-12);
}

#[test]
fn fraction_zero_denominator() {
    assert!(parse_fraction("0/0").is_nan());
    assert!(parse_fraction("5/0").is_nan());
}

#[test]
fn fraction_non_numeric() {
    assert!(parse_fraction("abc").is_nan());
    assert!(parse_fraction("").is_nan());
    assert!(parse_fraction("3").is_nan());
    assert!(parse_fraction("1/2/3").is_nan());
    assert!(parse_fraction("a/b").is_nan());
}

#[test]
fn read_edges_parses_fields() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("edges.tsv");
    fs::write(
        &path,
        "seqA\tseqB\t0.01\t1e-10\t990/1000\nseqA\tseqC\t0.2\t0.0\tbad\n",
    )
    .unwrap();

    let edges = read_edges(&path).unwrap();
    assert_eq!(edges.len(), 2);
    assert_eq!(edges[0].seq1, "seqA");
    assert_eq!(edges[0].seq2, "seqB");
    assert!((edges[0].distance - 0.01).abs() < 1e-12);
    assert!((edges[0].p_value - 1e-10).abs() < 1e-22);
    assert!((edges[0].shared_hashes - 0.99).abs() < 1e-12);
    // malformed fraction is tolerated as NaN, not an error
    assert!(edges[1].shared_hashes.is_nan());
}

#[test]
fn read_edges_rejects_short_rows() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("edges.tsv");
    fs::write(&path, "seqA\tseqB\t0.01\t990/1000\n").unwrap();
    assert!(read_edges(&path).is_err());
}

#[test]
fn read_edges_rejects_non_numeric_distance() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("edges.tsv");
    fs::write(&path, "seqA\tseqB\tnope\t0.0\t990/1000\n").unwrap();
    assert!(read_edges(&path).is_err());
}

#[test]
fn read_edges_missing_file() {
    let tmp = TempDir::new().unwrap();
    assert!(read_edges(&tmp.path().join("absent.tsv")).is_err());
}

#[test]
fn read_edges_empty_file() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("edges.tsv");
    fs::write(&path, "").unwrap();
    assert!(read_edges(&path).is_err());
}
