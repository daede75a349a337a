//! Distance histogram and threshold network for a gene list.

use crate::state::SharedState;
use axum::extract::State;
use axum::Json;
use scere_common::ApiResult;
use scere_graph::{
    distance_histogram, elements, resolve_targets, select_edges, slider_bounds,
    threshold_subgraph, DistanceHistogram, Element, SubgraphMetrics,
};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

#[derive(Debug, Deserialize)]
pub struct NetworkRequest {
    pub genes: Vec<String>,
    /// Edges strictly below this distance form the network.
    pub threshold: f64,
}

#[derive(Debug, Serialize)]
pub struct NetworkResponse {
    /// Renderer input: nodes then edges.
    pub elements: Vec<Element>,
    /// Slider bounds over the selected edges.
    pub distance_min: Option<f64>,
    pub distance_max: Option<f64>,
    /// Distance distribution of the gene list.
    pub histogram: DistanceHistogram,
    /// Whole-genome distribution, for comparison.
    pub global_histogram: DistanceHistogram,
    pub metrics: SubgraphMetrics,
}

/// POST /api/network - edges among the gene list, their distance
/// distribution and the thresholded subgraph metrics.
pub async fn network(
    State(state): State<SharedState>,
    Json(request): Json<NetworkRequest>,
) -> ApiResult<Json<NetworkResponse>> {
    let targets = resolve_targets(&request.genes, &state.features);
    let ids: HashSet<String> = targets.iter().map(|locus| locus.sgdid.clone()).collect();

    let selected = select_edges(&state.edges, &ids);
    let bounds = slider_bounds(&selected);

    let distances: Vec<f64> = selected.iter().map(|edge| edge.distance).collect();
    let histogram = distance_histogram(&distances);
    let metrics = threshold_subgraph(&selected, request.threshold);

    tracing::debug!(
        targets = targets.len(),
        edges = selected.len(),
        threshold = request.threshold,
        "assembled network"
    );

    Ok(Json(NetworkResponse {
        elements: elements(&targets, &selected),
        distance_min: bounds.map(|(min, _)| min),
        distance_max: bounds.map(|(_, max)| max),
        histogram,
        global_histogram: state.global_histogram.clone(),
        metrics,
    }))
}
