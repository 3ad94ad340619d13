//! SVG figure rendering for curves, heatmaps and dendrograms.

use std::collections::HashMap;
use std::error::Error;
use std::path::Path;

use plotters::prelude::*;

use crate::cluster::Linkage;
use crate::matrix::SimilarityMatrix;
use crate::rarefaction::RarefactionResult;

const CURVE_WIDTH: u32 = 1000;
const CURVE_HEIGHT: u32 = 750;

/// Viridis-style gradient used by every heatmap. `t` is clamped to [0, 1];
/// NaN maps to the low end.
pub fn viridis(t: f64) -> RGBColor {
    const ANCHORS: [(u8, u8, u8); 5] = [
        (68, 1, 84),
        (59, 82, 139),
        (33, 145, 140),
        (94, 201, 98),
        (253, 231, 37),
    ];
    let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
    let scaled = t * (ANCHORS.len() - 1) as f64;
    let idx = (scaled.floor() as usize).min(ANCHORS.len() - 2);
    let frac = scaled - idx as f64;
    let (r0, g0, b0) = ANCHORS[idx];
    let (r1, g1, b1) = ANCHORS[idx + 1];
    let lerp = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * frac).round() as u8;
    RGBColor(lerp(r0, r1), lerp(g0, g1), lerp(b0, b1))
}

/// Single-pass gene accumulation curve, one marker per sample.
pub fn render_accumulation(curve: &[u64], output: &Path) -> Result<(), Box<dyn Error>> {
    if curve.is_empty() {
        return Err("accumulation curve is empty, nothing to plot".into());
    }
    let n = curve.len();
    let max_genes = curve.last().copied().unwrap_or(0).max(1) as f64;

    let root = SVGBackend::new(output, (CURVE_WIDTH, CURVE_HEIGHT)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Gene accumulation curve", ("sans-serif", 30))
        .margin(15)
        .x_label_area_size(50)
        .y_label_area_size(70)
        .build_cartesian_2d(0f64..(n as f64 + 1.0), 0f64..(max_genes * 1.05))?;

    chart
        .configure_mesh()
        .x_desc("Number of sequences sampled")
        .y_desc("Number of genes found")
        .label_style(("sans-serif", 18))
        .draw()?;

    let points: Vec<(f64, f64)> = curve
        .iter()
        .enumerate()
        .map(|(i, &count)| ((i + 1) as f64, count as f64))
        .collect();
    chart.draw_series(LineSeries::new(points.clone(), BLUE.stroke_width(2)))?;
    chart.draw_series(points.iter().map(|&(x, y)| Circle::new((x, y), 4, BLUE.filled())))?;

    root.present()?;
    Ok(())
}

/// Rarefaction overlay: one translucent black trace per permutation under the
/// mean curve in blue.
pub fn render_rarefaction(result: &RarefactionResult, output: &Path) -> Result<(), Box<dyn Error>> {
    if result.mean.is_empty() {
        return Err("rarefaction result is empty, nothing to plot".into());
    }
    let n = result.mean.len();
    let max_genes = result
        .curves
        .iter()
        .filter_map(|c| c.last())
        .copied()
        .max()
        .unwrap_or(0)
        .max(1) as f64;

    let root = SVGBackend::new(output, (CURVE_WIDTH, CURVE_HEIGHT)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            format!("Gene rarefaction curve ({} permutations)", result.curves.len()),
            ("sans-serif", 30),
        )
        .margin(15)
        .x_label_area_size(50)
        .y_label_area_size(70)
        .build_cartesian_2d(0f64..(n as f64 + 1.0), 0f64..(max_genes * 1.05))?;

    chart
        .configure_mesh()
        .x_desc("Number of sequences sampled")
        .y_desc("Average number of unique genes found")
        .label_style(("sans-serif", 18))
        .draw()?;

    for curve in &result.curves {
        let points: Vec<(f64, f64)> = curve
            .iter()
            .enumerate()
            .map(|(i, &count)| ((i + 1) as f64, count as f64))
            .collect();
        chart.draw_series(LineSeries::new(points, BLACK.mix(0.02).stroke_width(1)))?;
    }

    let mean_points: Vec<(f64, f64)> = result
        .mean
        .iter()
        .enumerate()
        .map(|(i, &value)| ((i + 1) as f64, value))
        .collect();
    chart.draw_series(LineSeries::new(mean_points.clone(), BLUE.stroke_width(2)))?;
    chart.draw_series(
        mean_points
            .iter()
            .map(|&(x, y)| Circle::new((x, y), 3, BLUE.filled())),
    )?;

    root.present()?;
    Ok(())
}

// Shared layout constants for the heatmap figures.
const MARGIN: i32 = 20;
const TITLE_HEIGHT: i32 = 50;
const LABEL_WIDTH: i32 = 150;
const LABEL_HEIGHT: i32 = 40;
const PANEL_SIZE: i32 = 640;
const COLORBAR_GAP: i32 = 50;
const COLORBAR_WIDTH: i32 = 28;
const COLORBAR_TEXT: i32 = 80;

/// Labelled similarity heatmap with a colorbar. Values are mapped on a fixed
/// 0..1 scale; similarity matrices carry 1.0 diagonals so the top of the
/// scale is always populated.
pub fn render_heatmap(
    matrix: &SimilarityMatrix,
    title: &str,
    output: &Path,
) -> Result<(), Box<dyn Error>> {
    if matrix.is_empty() {
        return Err("similarity matrix is empty, nothing to plot".into());
    }
    let width = (2 * MARGIN + LABEL_WIDTH + PANEL_SIZE + COLORBAR_GAP + COLORBAR_WIDTH + COLORBAR_TEXT) as u32;
    let height = (2 * MARGIN + TITLE_HEIGHT + PANEL_SIZE + LABEL_HEIGHT) as u32;

    let root = SVGBackend::new(output, (width, height)).into_drawing_area();
    root.fill(&WHITE)?;

    root.draw(&Text::new(
        title.to_string(),
        (MARGIN + LABEL_WIDTH, MARGIN + 10),
        ("sans-serif", 26).into_font().color(&BLACK),
    ))?;

    let x0 = MARGIN + LABEL_WIDTH;
    let y0 = MARGIN + TITLE_HEIGHT;
    draw_heatmap_panel(&root, matrix, x0, y0)?;
    draw_colorbar(&root, x0 + PANEL_SIZE + COLORBAR_GAP, y0)?;

    root.present()?;
    Ok(())
}

/// Clustered similarity heatmap: average-linkage dendrogram panel on the
/// left, rows and columns reordered to the dendrogram's leaf order.
pub fn render_mash_dendrogram(
    matrix: &SimilarityMatrix,
    linkage: &Linkage,
    output: &Path,
) -> Result<(), Box<dyn Error>> {
    if matrix.is_empty() {
        return Err("similarity matrix is empty, nothing to plot".into());
    }
    let mut order = linkage.leaf_order();
    order.reverse(); // flip vertically so the tree reads top-down
    let display = matrix.reordered(&order);

    let dendro_width = PANEL_SIZE / 3;
    let x_dendro = MARGIN;
    let x_labels = x_dendro + dendro_width + 10;
    let x0 = x_labels + LABEL_WIDTH;
    let y0 = MARGIN + TITLE_HEIGHT;
    let width =
        (x0 + PANEL_SIZE + COLORBAR_GAP + COLORBAR_WIDTH + COLORBAR_TEXT + MARGIN) as u32;
    let height = (2 * MARGIN + TITLE_HEIGHT + PANEL_SIZE + LABEL_HEIGHT) as u32;

    let root = SVGBackend::new(output, (width, height)).into_drawing_area();
    root.fill(&WHITE)?;

    root.draw(&Text::new(
        "Hierarchical clustering",
        (x_dendro, MARGIN + 10),
        ("sans-serif", 20).into_font().color(&BLACK),
    ))?;
    root.draw(&Text::new(
        "k-mer Jaccard index heatmap",
        (x0, MARGIN + 10),
        ("sans-serif", 20).into_font().color(&BLACK),
    ))?;

    draw_dendrogram(&root, linkage, &order, x_dendro, dendro_width, y0)?;
    // label column sits between the tree and the cells
    let n = display.len();
    let cell = PANEL_SIZE as f64 / n as f64;
    for (i, label) in display.labels.iter().enumerate() {
        let y = y0 as f64 + (i as f64 + 0.5) * cell;
        root.draw(&Text::new(
            label.clone(),
            (x_labels, y as i32 - 6),
            ("sans-serif", 12).into_font().color(&BLACK),
        ))?;
    }
    draw_heatmap_cells(&root, &display, x0, y0)?;
    draw_column_labels(&root, &display, x0, y0)?;
    draw_colorbar(&root, x0 + PANEL_SIZE + COLORBAR_GAP, y0)?;

    root.present()?;
    Ok(())
}

type Root<'a> = DrawingArea<SVGBackend<'a>, plotters::coord::Shift>;

fn draw_heatmap_panel(
    root: &Root,
    matrix: &SimilarityMatrix,
    x0: i32,
    y0: i32,
) -> Result<(), Box<dyn Error>> {
    let n = matrix.len();
    let cell = PANEL_SIZE as f64 / n as f64;
    for (i, label) in matrix.labels.iter().enumerate() {
        let y = y0 as f64 + (i as f64 + 0.5) * cell;
        root.draw(&Text::new(
            label.clone(),
            (MARGIN, y as i32 - 6),
            ("sans-serif", 12).into_font().color(&BLACK),
        ))?;
    }
    draw_heatmap_cells(root, matrix, x0, y0)?;
    draw_column_labels(root, matrix, x0, y0)?;
    Ok(())
}

fn draw_heatmap_cells(
    root: &Root,
    matrix: &SimilarityMatrix,
    x0: i32,
    y0: i32,
) -> Result<(), Box<dyn Error>> {
    let n = matrix.len();
    let cell = PANEL_SIZE as f64 / n as f64;
    for i in 0..n {
        for j in 0..n {
            let x_start = x0 as f64 + j as f64 * cell;
            let y_start = y0 as f64 + i as f64 * cell;
            root.draw(&Rectangle::new(
                [
                    (x_start as i32, y_start as i32),
                    ((x_start + cell).ceil() as i32, (y_start + cell).ceil() as i32),
                ],
                viridis(matrix.values[[i, j]]).filled(),
            ))?;
        }
    }
    Ok(())
}

fn draw_column_labels(
    root: &Root,
    matrix: &SimilarityMatrix,
    x0: i32,
    y0: i32,
) -> Result<(), Box<dyn Error>> {
    let n = matrix.len();
    let cell = PANEL_SIZE as f64 / n as f64;
    // thin the labels out when there are too many columns to read
    let interval = (n / 20).max(1);
    for (j, label) in matrix.labels.iter().enumerate() {
        if j % interval == 0 || j == n - 1 {
            let x = x0 as f64 + (j as f64 + 0.5) * cell;
            root.draw(&Text::new(
                label.clone(),
                (x as i32 - 10, y0 + PANEL_SIZE + 10),
                ("sans-serif", 11).into_font().color(&BLACK),
            ))?;
        }
    }
    Ok(())
}

fn draw_colorbar(root: &Root, x0: i32, y0: i32) -> Result<(), Box<dyn Error>> {
    let steps = 100;
    let seg = PANEL_SIZE as f64 / steps as f64;
    for step in 0..steps {
        let t = 1.0 - step as f64 / (steps - 1) as f64;
        let y_start = y0 as f64 + step as f64 * seg;
        root.draw(&Rectangle::new(
            [
                (x0, y_start as i32),
                (x0 + COLORBAR_WIDTH, (y_start + seg).ceil() as i32),
            ],
            viridis(t).filled(),
        ))?;
    }
    root.draw(&Text::new(
        "1.00",
        (x0, y0 - 16),
        ("sans-serif", 11).into_font().color(&BLACK),
    ))?;
    root.draw(&Text::new(
        "0.00",
        (x0, y0 + PANEL_SIZE + 6),
        ("sans-serif", 11).into_font().color(&BLACK),
    ))?;
    root.draw(&Text::new(
        "Similarity",
        (x0 + COLORBAR_WIDTH + 8, y0 + PANEL_SIZE / 2),
        ("sans-serif", 13).into_font().color(&BLACK),
    ))?;
    Ok(())
}

/// Draw the linkage tree growing leftwards from the heatmap rows, the leaf
/// at display row `i` anchored at that row's vertical center.
fn draw_dendrogram(
    root: &Root,
    linkage: &Linkage,
    display_order: &[usize],
    x_left: i32,
    width: i32,
    y0: i32,
) -> Result<(), Box<dyn Error>> {
    let n = linkage.n_leaves;
    let cell = PANEL_SIZE as f64 / n as f64;
    let max_height = linkage
        .merges
        .iter()
        .map(|m| m.height)
        .fold(0.0f64, f64::max)
        .max(1e-9);
    let x_right = (x_left + width) as f64;
    let x_at = |height: f64| x_right - height / max_height * width as f64;

    // cluster id -> (merge height, vertical center)
    let mut positions: HashMap<usize, (f64, f64)> = HashMap::new();
    for (row, &leaf) in display_order.iter().enumerate() {
        positions.insert(leaf, (0.0, y0 as f64 + (row as f64 + 0.5) * cell));
    }

    for (k, merge) in linkage.merges.iter().enumerate() {
        let (h_left, y_left) = positions[&merge.left];
        let (h_right, y_right) = positions[&merge.right];
        let x_merge = x_at(merge.height);
        let style = BLACK.stroke_width(1);
        root.draw(&PathElement::new(
            vec![
                (x_at(h_left) as i32, y_left as i32),
                (x_merge as i32, y_left as i32),
            ],
            style,
        ))?;
        root.draw(&PathElement::new(
            vec![
                (x_at(h_right) as i32, y_right as i32),
                (x_merge as i32, y_right as i32),
            ],
            style,
        ))?;
        root.draw(&PathElement::new(
            vec![
                (x_merge as i32, y_left as i32),
                (x_merge as i32, y_right as i32),
            ],
            style,
        ))?;
        positions.insert(n + k, (merge.height, (y_left + y_right) / 2.0));
    }
    Ok(())
}
