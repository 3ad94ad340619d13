use std::fs;

use panplot::table::read_incidence;
use tempfile::TempDir;

fn write_table(content: &str) -> (TempDir, std::path::PathBuf) {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("genes.tsv");
    fs::write(&path, content).unwrap();
    (tmp, path)
}

#[test]
fn loads_and_transposes() {
    let (_tmp, path) = write_table("Gene\tS1\tS2\tS3\ng1\t1\t0\t0\ng2\t3\t1\t0\ng3\t0\t0\t1\n");
    let table = read_incidence(&path).unwrap();
    assert_eq!(table.genes, vec!["g1", "g2", "g3"]);
    assert_eq!(table.samples, vec!["S1", "S2", "S3"]);
    assert_eq!(table.n_samples(), 3);
    assert_eq!(table.n_genes(), 3);
    // counts collapse to presence; layout is samples x genes
    assert_eq!(table.presence[[0, 0]], 1); // S1 has g1
    assert_eq!(table.presence[[0, 1]], 1); // S1 has g2 (count 3)
    assert_eq!(table.presence[[1, 0]], 0); // S2 lacks g1
    assert_eq!(table.presence[[2, 2]], 1); // S3 has g3
}

#[test]
fn counts_all_nonempty_genes() {
    let (_tmp, path) = write_table("Gene\tS1\tS2\ng1\t1\t0\ng2\t0\t0\ng3\t0\t2\n");
    let table = read_incidence(&path).unwrap();
    assert_eq!(table.n_nonempty_genes(), 2);
}

#[test]
fn skips_blank_lines() {
    let (_tmp, path) = write_table("Gene\tS1\ng1\t1\n\ng2\t0\n");
    let table = read_incidence(&path).unwrap();
    assert_eq!(table.genes.len(), 2);
}

#[test]
fn rejects_ragged_rows() {
    let (_tmp, path) = write_table("Gene\tS1\tS2\ng1\t1\n");
    let err = read_incidence(&path).unwrap_err().to_string();
    assert!(err.contains("line 2"), "unexpected error: {}", err);
}

#[test]
fn rejects_non_numeric_counts() {
    let (_tmp, path) = write_table("Gene\tS1\tS2\ng1\t1\tyes\n");
    let err = read_incidence(&path).unwrap_err().to_string();
    assert!(err.contains("non-numeric"), "unexpected error: {}", err);
}

#[test]
fn rejects_empty_file() {
    let (_tmp, path) = write_table("");
    assert!(read_incidence(&path).is_err());
}

#[test]
fn rejects_header_without_samples() {
    let (_tmp, path) = write_table("Gene\ng1\n");
    assert!(read_incidence(&path).is_err());
}

#[test]
fn rejects_header_only_file() {
    let (_tmp, path) = write_table("Gene\tS1\tS2\n");
    assert!(read_incidence(&path).is_err());
}

#[test]
fn rejects_missing_file() {
    let tmp = TempDir::new().unwrap();
    assert!(read_incidence(&tmp.path().join("absent.tsv")).is_err());
}
