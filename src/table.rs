//! Gene presence/absence incidence tables.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::info;
use ndarray::Array2;

/// Sample-by-gene presence matrix parsed from a tab-separated incidence table.
///
/// The file stores one gene per row (label in the first column) with one count
/// column per sample; the header row carries the sample labels. Rows are
/// transposed on load so downstream code walks samples, and counts are reduced
/// to presence flags (any nonzero count marks the gene present).
#[derive(Debug, Clone)]
pub struct Incidence {
    pub genes: Vec<String>,
    pub samples: Vec<String>,
    /// samples x genes, 1 = present
    pub presence: Array2<u8>,
}

impl Incidence {
    pub fn n_samples(&self) -> usize {
        self.presence.nrows()
    }

    pub fn n_genes(&self) -> usize {
        self.presence.ncols()
    }

    /// Number of genes present in at least one sample.
    pub fn n_nonempty_genes(&self) -> usize {
        (0..self.n_genes())
            .filter(|&g| self.presence.column(g).iter().any(|&v| v > 0))
            .count()
    }
}

/// Load an incidence table. Malformed files (ragged rows, non-numeric counts,
/// missing header or gene rows) are reported with line context.
pub fn read_incidence(path: &Path) -> Result<Incidence, Box<dyn std::error::Error>> {
    let file = File::open(path)
        .map_err(|e| format!("failed to open {}: {}", path.display(), e))?;
    let reader = BufReader::new(file);
    let mut lines = reader.lines();

    let header = match lines.next() {
        Some(line) => line?,
        None => return Err(format!("{}: empty incidence table", path.display()).into()),
    };
    let mut header_fields = header.split('\t');
    header_fields.next(); // gene label column
    let samples: Vec<String> = header_fields.map(|s| s.trim().to_string()).collect();
    if samples.is_empty() {
        return Err(format!("{}: header row has no sample columns", path.display()).into());
    }

    let mut genes = Vec::new();
    let mut values: Vec<u8> = Vec::new();
    for (idx, line) in lines.enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let lineno = idx + 2; // 1-based, after the header
        let mut fields = line.split('\t');
        let gene = fields.next().unwrap_or("").trim();
        if gene.is_empty() {
            return Err(format!("{}: line {}: missing gene label", path.display(), lineno).into());
        }
        let counts: Vec<&str> = fields.collect();
        if counts.len() != samples.len() {
            return Err(format!(
                "{}: line {}: expected {} sample columns, found {}",
                path.display(),
                lineno,
                samples.len(),
                counts.len()
            )
            .into());
        }
        for field in counts {
            let count: u32 = field.trim().parse().map_err(|_| {
                format!(
                    "{}: line {}: non-numeric count '{}'",
                    path.display(),
                    lineno,
                    field.trim()
                )
            })?;
            values.push(if count > 0 { 1 } else { 0 });
        }
        genes.push(gene.to_string());
    }
    if genes.is_empty() {
        return Err(format!("{}: no gene rows after the header", path.display()).into());
    }

    // File layout is genes x samples; analysis walks samples x genes.
    let by_gene = Array2::from_shape_vec((genes.len(), samples.len()), values)?;
    let presence = by_gene.t().to_owned();

    info!(
        "Loaded {}: {} genes x {} samples",
        path.display(),
        genes.len(),
        samples.len()
    );
    Ok(Incidence {
        genes,
        samples,
        presence,
    })
}
