//! scere-web — JSON API for the genome dashboard.
//! One handler per dashboard interaction:
//!   - gene-list upload and demo tables
//!   - 2D genome projection with GO-term coloring
//!   - 3D projection (categorical, quantitative, per-chromosome)
//!   - distance histogram and threshold network

pub mod handlers;
pub mod router;
pub mod state;
