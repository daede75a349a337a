//! Rows of the static tables loaded once at startup.

use serde::{Deserialize, Serialize};

/// One point of the folded-genome polyline. Consecutive rows of the
/// segment table form the 3D line; each row is tied to the locus it
/// belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentPoint {
    /// Primary SGDID of the locus this point belongs to. Absent for
    /// geometry that maps to no feature.
    pub sgdid: Option<String>,
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// Precomputed 3D distance between two loci. Undirected: `(a, b)` and
/// `(b, a)` describe the same pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistanceEdge {
    /// Primary SGDID of one endpoint.
    pub a: String,
    /// Primary SGDID of the other endpoint.
    pub b: String,
    /// Euclidean distance in model units.
    pub distance: f64,
}
