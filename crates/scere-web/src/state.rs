//! Shared application state: the immutable tables loaded once at
//! startup, passed by shared ownership into every handler.

use anyhow::Context;
use scere_common::{DistanceEdge, Locus, SegmentPoint};
use scere_config::Config;
use scere_db::LocusStore;
use scere_graph::{distance_histogram, DistanceHistogram};
use std::sync::Arc;
use tracing::info;

/// Read-only state shared by all handlers. Nothing here mutates after
/// load; per-request results are always freshly derived tables.
pub struct AppState {
    pub config: Config,
    pub store: LocusStore,
    /// Every feature, with names: the YORF → SGDID resolution table.
    pub features: Vec<Locus>,
    /// The folded-genome polyline.
    pub segments: Vec<SegmentPoint>,
    /// The full pairwise 3D distance table.
    pub edges: Vec<DistanceEdge>,
    /// GO term dropdown options.
    pub go_terms: Vec<String>,
    /// Distance distribution over the whole genome, for comparison
    /// against per-request gene lists.
    pub global_histogram: DistanceHistogram,
}

pub type SharedState = Arc<AppState>;

impl AppState {
    /// Open the store and load the static tables.
    pub fn load(config: Config) -> anyhow::Result<Self> {
        let store = LocusStore::new(&config.data.database);

        let features = store
            .all_features()
            .with_context(|| format!("loading features from {}", config.data.database.display()))?;
        info!(count = features.len(), "loaded feature table");

        let segments = scere_db::load_segments(&config.data.segments)?;
        info!(count = segments.len(), "loaded 3D segments");

        let edges = scere_db::load_distances(&config.data.distances)?;
        info!(count = edges.len(), "loaded pairwise distances");

        let go_terms = scere_db::load_go_terms(&config.data.go_terms)?;
        info!(count = go_terms.len(), "loaded GO term options");

        let distances: Vec<f64> = edges.iter().map(|edge| edge.distance).collect();
        let global_histogram = distance_histogram(&distances);

        Ok(Self {
            config,
            store,
            features,
            segments,
            edges,
            go_terms,
            global_histogram,
        })
    }
}
