//! Optional CSV export of the numbers behind each figure.

use std::error::Error;
use std::fs::File;
use std::path::Path;

use csv::Writer;
use serde::Serialize;

use crate::matrix::SimilarityMatrix;
use crate::rarefaction::RarefactionResult;

#[derive(Serialize)]
struct CurveRow {
    sample: usize,
    genes_found: u64,
}

#[derive(Serialize)]
struct RarefactionRow {
    sample: usize,
    mean_genes_found: f64,
}

/// Accumulation curve, one row per sampling step.
pub fn write_curve_csv(curve: &[u64], path: &Path) -> Result<(), Box<dyn Error>> {
    let mut writer = Writer::from_writer(File::create(path)?);
    for (step, &count) in curve.iter().enumerate() {
        writer.serialize(CurveRow {
            sample: step + 1,
            genes_found: count,
        })?;
    }
    writer.flush()?;
    Ok(())
}

/// Mean rarefaction curve, one row per sampling step.
pub fn write_rarefaction_csv(result: &RarefactionResult, path: &Path) -> Result<(), Box<dyn Error>> {
    let mut writer = Writer::from_writer(File::create(path)?);
    for (step, &value) in result.mean.iter().enumerate() {
        writer.serialize(RarefactionRow {
            sample: step + 1,
            mean_genes_found: value,
        })?;
    }
    writer.flush()?;
    Ok(())
}

/// Full similarity matrix with labels on both axes.
pub fn write_matrix_csv(matrix: &SimilarityMatrix, path: &Path) -> Result<(), Box<dyn Error>> {
    let mut writer = Writer::from_writer(File::create(path)?);
    let mut header = vec![String::new()];
    header.extend(matrix.labels.iter().cloned());
    writer.write_record(&header)?;
    for (i, label) in matrix.labels.iter().enumerate() {
        let mut record = vec![label.clone()];
        record.extend(matrix.values.row(i).iter().map(|v| format!("{:.6}", v)));
        writer.write_record(&record)?;
    }
    writer.flush()?;
    Ok(())
}
