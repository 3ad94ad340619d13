//! Mash-style pairwise distance edge lists.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::{info, warn};

/// One row of a `mash dist` table: two sequence labels, a distance estimate,
/// a p-value, and the shared-hash fraction the similarity matrix is built from.
#[derive(Debug, Clone)]
pub struct MashEdge {
    pub seq1: String,
    pub seq2: String,
    pub distance: f64,
    pub p_value: f64,
    /// Shared-hash ratio; NaN when the field failed to parse.
    pub shared_hashes: f64,
}

/// Parse a `shared/total` hash count into a ratio.
///
/// Returns NaN on anything that is not two integers joined by a slash, and on
/// a zero denominator. This is the only tolerated parse failure in the input
/// formats; every other malformed field is a hard error.
pub fn parse_fraction(token: &str) -> f64 {
    let mut parts = token.trim().splitn(2, '/');
    let numer = parts.next().and_then(|p| p.parse::<i64>().ok());
    let denom = parts.next().and_then(|p| p.parse::<i64>().ok());
    match (numer, denom) {
        (Some(_), Some(0)) => f64::NAN,
        (Some(a), Some(b)) => a as f64 / b as f64,
        _ => f64::NAN,
    }
}

/// Load a headerless 5-column mash edge list.
pub fn read_edges(path: &Path) -> Result<Vec<MashEdge>, Box<dyn std::error::Error>> {
    let file = File::open(path)
        .map_err(|e| format!("failed to open {}: {}", path.display(), e))?;
    let reader = BufReader::new(file);

    let mut edges = Vec::new();
    let mut bad_fractions = 0usize;
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let lineno = idx + 1;
        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() != 5 {
            return Err(format!(
                "{}: line {}: expected 5 tab-separated fields, found {}",
                path.display(),
                lineno,
                fields.len()
            )
            .into());
        }
        let distance: f64 = fields[2].trim().parse().map_err(|_| {
            format!(
                "{}: line {}: non-numeric distance '{}'",
                path.display(),
                lineno,
                fields[2].trim()
            )
        })?;
        let p_value: f64 = fields[3].trim().parse().map_err(|_| {
            format!(
                "{}: line {}: non-numeric p-value '{}'",
                path.display(),
                lineno,
                fields[3].trim()
            )
        })?;
        let shared_hashes = parse_fraction(fields[4]);
        if shared_hashes.is_nan() {
            bad_fractions += 1;
        }
        edges.push(MashEdge {
            seq1: fields[0].trim().to_string(),
            seq2: fields[1].trim().to_string(),
            distance,
            p_value,
            shared_hashes,
        });
    }
    if edges.is_empty() {
        return Err(format!("{}: no pairwise records", path.display()).into());
    }
    if bad_fractions > 0 {
        warn!(
            "{}: {} shared-hash fields failed to parse and were kept as NaN",
            path.display(),
            bad_fractions
        );
    }
    info!("Loaded {}: {} pairwise records", path.display(), edges.len());
    Ok(edges)
}
