//! Core analysis routines for the panplot CLI: incidence-table and mash
//! edge-list parsing, Jaccard and shared-hash similarity matrices, gene
//! accumulation and rarefaction estimators, average-linkage clustering,
//! and SVG figure rendering.

pub mod cluster;
pub mod commands;
pub mod mash;
pub mod matrix;
pub mod plot;
pub mod rarefaction;
pub mod report;
pub mod table;
