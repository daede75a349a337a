//! Liveness, dropdown options and demo tables.

use crate::state::SharedState;
use axum::extract::State;
use axum::Json;
use scere_common::ApiResult;
use serde::Serialize;
use serde_json::{json, Value};
use std::path::Path;

pub async fn healthz() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// GET /api/go-terms - GO slim terms for the coloring dropdown.
pub async fn go_terms(State(state): State<SharedState>) -> Json<Vec<String>> {
    Json(state.go_terms.clone())
}

#[derive(Debug, Serialize)]
pub struct DemoTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

fn demo_table(path: &Path) -> ApiResult<Json<DemoTable>> {
    let table = scere_db::load_csv_table(path)?;
    Ok(Json(DemoTable {
        headers: table.headers,
        rows: table.rows,
    }))
}

/// GET /api/demo/genes - the bundled one-column YORF example list.
pub async fn demo_genes(State(state): State<SharedState>) -> ApiResult<Json<DemoTable>> {
    demo_table(&state.config.data.demo_genes)
}

/// GET /api/demo/quantitative - the bundled YORF + measurements table.
pub async fn demo_quantitative(State(state): State<SharedState>) -> ApiResult<Json<DemoTable>> {
    demo_table(&state.config.data.demo_quantitative)
}
