//! 2D and 3D genome projections of a gene list.

use crate::state::SharedState;
use axum::extract::State;
use axum::Json;
use scere_common::{ApiResult, Locus};
use scere_vis::palette::chromosome_palette;
use scere_vis::vis2d::{BACKGROUND_LEGEND, OTHER_LEGEND};
use scere_vis::{
    assign_legend, chromosome_repartition, chromosome_tracks, colorize, format_coordinates,
    merge_segments, quantify, ColorColumn, ColorScale, MergedSegment, TracePoint,
};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap, HashSet};

/// Tag set on loci whose feature name appears in the uploaded list.
const TARGETS_TAG: &str = "Targets";
/// Fallback when a GO term is requested without a color.
const DEFAULT_TERM_COLOR: &str = "red";

#[derive(Debug, Deserialize)]
pub struct ProjectionRequest {
    #[serde(default)]
    pub genes: Vec<String>,
    pub go_term: Option<String>,
    pub color: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct Projection2dResponse {
    /// Backbone tracks followed by the per-locus trace rows.
    pub points: Vec<TracePoint>,
    /// Legend label → color, including the fixed buckets.
    pub color_map: BTreeMap<String, String>,
    /// Target counts per chromosome, 1..=17.
    pub repartition: Vec<u32>,
}

#[derive(Debug, Serialize)]
pub struct Projection3dResponse {
    pub segments: Vec<MergedSegment>,
    /// One color per segment row.
    pub colors: Vec<String>,
}

/// Mark the loci named in the gene list: all of them get the target
/// tag, and those also carrying the requested GO term get the term
/// itself so it can outrank the plain target color.
fn tag_targets(loci: &mut [Locus], genes: &[String], term: Option<&str>) {
    let wanted: HashSet<&str> = genes.iter().map(String::as_str).collect();
    for locus in loci.iter_mut() {
        let is_target = locus
            .feature_name
            .as_deref()
            .is_some_and(|name| wanted.contains(name));
        if !is_target {
            continue;
        }
        locus.tag = Some(TARGETS_TAG.to_string());
        if let Some(term) = term {
            if locus.go_term.as_deref() == Some(term) {
                locus.tag = Some(term.to_string());
            }
        }
    }
}

/// Coloring plan shared by the 2D and 3D categorical projections:
/// with a gene list, color by tag (term first, targets last); without
/// one, color term carriers directly.
fn categorical_plan(
    request: &ProjectionRequest,
    target_color: &str,
) -> (ColorColumn, Vec<String>, Vec<String>) {
    let term_color = request
        .color
        .clone()
        .unwrap_or_else(|| DEFAULT_TERM_COLOR.to_string());

    if request.genes.is_empty() {
        match &request.go_term {
            Some(term) => (ColorColumn::GoTerm, vec![term.clone()], vec![term_color]),
            None => (ColorColumn::GoTerm, vec![], vec![]),
        }
    } else {
        let mut values = Vec::new();
        let mut colors = Vec::new();
        if let Some(term) = &request.go_term {
            values.push(term.clone());
            colors.push(term_color);
        }
        values.push(TARGETS_TAG.to_string());
        colors.push(target_color.to_string());
        (ColorColumn::Tag, values, colors)
    }
}

/// POST /api/projection/2d - sentinel-separated genome trace.
pub async fn projection_2d(
    State(state): State<SharedState>,
    Json(request): Json<ProjectionRequest>,
) -> ApiResult<Json<Projection2dResponse>> {
    let term = request.go_term.as_deref();
    let mut loci = state.store.features_annotated(term)?;
    tag_targets(&mut loci, &request.genes, term);

    let (column, values, colors) = categorical_plan(&request, "black");

    let spacing = state.config.layout.chromosome_spacing;
    let lengths = state.store.chromosome_lengths()?;
    let mut points = chromosome_tracks(&lengths, spacing);
    let locus_rows_at = points.len();
    points.extend(format_coordinates(&loci, spacing));
    assign_legend(&mut points[locus_rows_at..], &loci, column, &values);

    let mut color_map = BTreeMap::new();
    color_map.insert(OTHER_LEGEND.to_string(), "darkgrey".to_string());
    color_map.insert(BACKGROUND_LEGEND.to_string(), "lightgrey".to_string());
    for (value, color) in values.iter().zip(&colors) {
        color_map.insert(value.clone(), color.clone());
    }

    // Counted over the full feature table: a target without a GO slim
    // annotation still belongs in the per-chromosome tally.
    let wanted: HashSet<&str> = request.genes.iter().map(String::as_str).collect();
    let targets: Vec<Locus> = state
        .features
        .iter()
        .filter(|locus| {
            locus
                .feature_name
                .as_deref()
                .is_some_and(|name| wanted.contains(name))
        })
        .cloned()
        .collect();

    Ok(Json(Projection2dResponse {
        points,
        color_map,
        repartition: chromosome_repartition(&targets),
    }))
}

/// POST /api/projection/3d - colored folded-genome polyline.
pub async fn projection_3d(
    State(state): State<SharedState>,
    Json(request): Json<ProjectionRequest>,
) -> ApiResult<Json<Projection3dResponse>> {
    let term = request.go_term.as_deref();
    let (column, values, colors) = categorical_plan(&request, "blue");

    let loci = if request.genes.is_empty() {
        // Only term carriers resolve; everything else is absent.
        match term {
            Some(term) => state.store.features_with_go_term(term)?,
            None => Vec::new(),
        }
    } else {
        let mut loci = state.store.features_annotated(term)?;
        tag_targets(&mut loci, &request.genes, term);
        loci
    };

    let segments = merge_segments(&state.segments, &loci);
    let assigned = colorize(&segments, &loci, column, &values, &colors)?;

    Ok(Json(Projection3dResponse {
        segments,
        colors: assigned,
    }))
}

#[derive(Debug, Deserialize)]
pub struct QuantRow {
    pub yorf: String,
    pub value: f64,
}

#[derive(Debug, Deserialize)]
pub struct QuantitativeRequest {
    pub rows: Vec<QuantRow>,
    pub scale: String,
}

#[derive(Debug, Serialize)]
pub struct QuantitativeResponse {
    pub segments: Vec<MergedSegment>,
    /// One value per segment row; null where the row matched no
    /// uploaded gene.
    pub values: Vec<Option<f64>>,
    /// Color for the null rows.
    pub absent_color: &'static str,
    /// Charting color scale name, validated.
    pub scale: &'static str,
}

/// POST /api/projection/quantitative - continuous coloring from an
/// uploaded YORF → value table.
pub async fn projection_quantitative(
    State(state): State<SharedState>,
    Json(request): Json<QuantitativeRequest>,
) -> ApiResult<Json<QuantitativeResponse>> {
    let scale = ColorScale::parse(&request.scale)?;

    let loci = state.store.features_ordered()?;
    let segments = merge_segments(&state.segments, &loci);

    let uploaded: HashMap<String, f64> = request
        .rows
        .into_iter()
        .map(|row| (row.yorf, row.value))
        .collect();
    let values = quantify(&segments, &loci, &uploaded);

    Ok(Json(QuantitativeResponse {
        segments,
        values,
        absent_color: scere_vis::vis3d::ABSENT_COLOR,
        scale: scale.name(),
    }))
}

/// GET /api/chromosomes/3d - whole genome, one color per chromosome.
pub async fn chromosomes_3d(
    State(state): State<SharedState>,
) -> ApiResult<Json<Projection3dResponse>> {
    let loci = state.store.features_ordered()?;
    let segments = merge_segments(&state.segments, &loci);
    let (values, colors) = chromosome_palette();
    let assigned = colorize(&segments, &loci, ColorColumn::Chromosome, &values, &colors)?;

    Ok(Json(Projection3dResponse {
        segments,
        colors: assigned,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use scere_common::Strand;

    fn locus(name: &str, go_term: Option<&str>) -> Locus {
        Locus {
            sgdid: format!("S-{name}"),
            feature_name: Some(name.to_string()),
            standard_name: None,
            chromosome: 1,
            start: 1,
            stop: 2,
            strand: Strand::Watson,
            description: None,
            go_term: go_term.map(str::to_string),
            tag: None,
        }
    }

    #[test]
    fn targets_carrying_the_term_get_the_term_tag() {
        let mut loci = vec![
            locus("YAL001C", Some("transcription")),
            locus("YAL003W", Some("translation")),
            locus("YBR001C", Some("transcription")),
        ];
        let genes = vec!["YAL001C".to_string(), "YAL003W".to_string()];
        tag_targets(&mut loci, &genes, Some("transcription"));

        assert_eq!(loci[0].tag.as_deref(), Some("transcription"));
        assert_eq!(loci[1].tag.as_deref(), Some(TARGETS_TAG));
        // Carriers outside the gene list stay untagged.
        assert_eq!(loci[2].tag, None);
    }

    #[test]
    fn plan_without_genes_colors_term_carriers() {
        let request = ProjectionRequest {
            genes: vec![],
            go_term: Some("transcription".to_string()),
            color: Some("green".to_string()),
        };
        let (column, values, colors) = categorical_plan(&request, "black");
        assert_eq!(column, ColorColumn::GoTerm);
        assert_eq!(values, vec!["transcription"]);
        assert_eq!(colors, vec!["green"]);
    }

    #[test]
    fn plan_with_genes_puts_targets_last() {
        let request = ProjectionRequest {
            genes: vec!["YAL001C".to_string()],
            go_term: Some("transcription".to_string()),
            color: None,
        };
        let (column, values, colors) = categorical_plan(&request, "blue");
        assert_eq!(column, ColorColumn::Tag);
        assert_eq!(values, vec!["transcription", TARGETS_TAG]);
        assert_eq!(colors, vec![DEFAULT_TERM_COLOR, "blue"]);
    }

    #[test]
    fn plan_with_neither_matches_nothing() {
        let request = ProjectionRequest {
            genes: vec![],
            go_term: None,
            color: None,
        };
        let (_, values, colors) = categorical_plan(&request, "black");
        assert!(values.is_empty());
        assert!(colors.is_empty());
    }
}
