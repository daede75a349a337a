//! 3D colorizing: paint the folded-genome polyline from a locus table.
//!
//! The geometry is static; each request left-joins it with a fresh
//! locus table and derives one color per point. Coloring rules, in
//! order of precedence (highest last):
//!   1. every row starts at the unmatched color,
//!   2. each (value, color) pair recolors matching rows, later pairs
//!      overriding earlier ones,
//!   3. rows that resolved to no locus take the absent color.

use crate::column::ColorColumn;
use crate::error::{Result, VisError};
use scere_common::{Locus, SegmentPoint};
use serde::Serialize;
use std::collections::HashMap;

/// Color of rows no (value, color) pair matched.
pub const UNMATCHED_COLOR: &str = "darkgrey";
/// Color of rows whose segment resolved to no requested locus.
pub const ABSENT_COLOR: &str = "whitesmoke";

/// One polyline point joined with the locus table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MergedSegment {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub sgdid: Option<String>,
    pub feature_name: Option<String>,
    /// Index into the locus table, when the point's SGDID resolved.
    #[serde(skip)]
    pub locus: Option<usize>,
}

/// Left-join the segment polyline with a locus table on SGDID,
/// preserving the drawing order of the points.
pub fn merge_segments(points: &[SegmentPoint], loci: &[Locus]) -> Vec<MergedSegment> {
    let by_sgdid: HashMap<&str, usize> = loci
        .iter()
        .enumerate()
        .map(|(index, locus)| (locus.sgdid.as_str(), index))
        .collect();

    points
        .iter()
        .map(|point| {
            let locus = point
                .sgdid
                .as_deref()
                .and_then(|sgdid| by_sgdid.get(sgdid).copied());
            MergedSegment {
                x: point.x,
                y: point.y,
                z: point.z,
                sgdid: point.sgdid.clone(),
                feature_name: locus.and_then(|index| loci[index].feature_name.clone()),
                locus,
            }
        })
        .collect()
}

/// Derive one color per merged point. See the module doc for the
/// precedence rules.
pub fn colorize(
    segments: &[MergedSegment],
    loci: &[Locus],
    column: ColorColumn,
    values: &[String],
    colors: &[String],
) -> Result<Vec<String>> {
    if values.len() != colors.len() {
        return Err(VisError::MismatchedPalette {
            values: values.len(),
            colors: colors.len(),
        });
    }

    let mut assigned = vec![UNMATCHED_COLOR.to_string(); segments.len()];
    for (row, segment) in segments.iter().enumerate() {
        let Some(index) = segment.locus else {
            assigned[row] = ABSENT_COLOR.to_string();
            continue;
        };
        let cell = column.value_of(&loci[index]);
        for (value, color) in values.iter().zip(colors) {
            if cell.as_deref() == Some(value.as_str()) {
                assigned[row] = color.clone();
            }
        }
    }
    Ok(assigned)
}

/// Numeric color values for the quantitative projection: each point
/// takes the uploaded value of its locus's feature name, or none.
pub fn quantify(
    segments: &[MergedSegment],
    loci: &[Locus],
    values: &HashMap<String, f64>,
) -> Vec<Option<f64>> {
    segments
        .iter()
        .map(|segment| {
            segment
                .locus
                .and_then(|index| loci[index].feature_name.as_deref())
                .and_then(|name| values.get(name).copied())
        })
        .collect()
}

/// Continuous color scales the quantitative projection accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ColorScale {
    Rainbow,
    Picnic,
    Viridis,
    Plasma,
    Thermal,
}

impl ColorScale {
    pub fn parse(name: &str) -> Result<Self> {
        match name {
            "Rainbow" => Ok(ColorScale::Rainbow),
            "Picnic" => Ok(ColorScale::Picnic),
            "Viridis" => Ok(ColorScale::Viridis),
            "Plasma" => Ok(ColorScale::Plasma),
            "thermal" => Ok(ColorScale::Thermal),
            other => Err(VisError::UnknownColorScale(other.to_string())),
        }
    }

    /// Scale name as the charting side spells it.
    pub fn name(&self) -> &'static str {
        match self {
            ColorScale::Rainbow => "Rainbow",
            ColorScale::Picnic => "Picnic",
            ColorScale::Viridis => "Viridis",
            ColorScale::Plasma => "Plasma",
            ColorScale::Thermal => "thermal",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use scere_common::Strand;

    fn locus(sgdid: &str, name: &str, go_term: Option<&str>) -> Locus {
        Locus {
            sgdid: sgdid.to_string(),
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

    fn point(sgdid: Option<&str>, x: f64) -> SegmentPoint {
        SegmentPoint {
            sgdid: sgdid.map(str::to_string),
            x,
            y: 0.0,
            z: 0.0,
        }
    }

    #[test]
    fn merge_preserves_drawing_order() {
        let loci = vec![locus("S1", "YAL001C", None)];
        let points = vec![point(Some("S1"), 1.0), point(None, 2.0), point(Some("S9"), 3.0)];
        let merged = merge_segments(&points, &loci);
        assert_eq!(merged.len(), 3);
        assert_eq!(merged[0].locus, Some(0));
        assert_eq!(merged[0].feature_name.as_deref(), Some("YAL001C"));
        assert_eq!(merged[1].locus, None);
        // An SGDID absent from the locus table resolves to nothing.
        assert_eq!(merged[2].locus, None);
    }

    #[test]
    fn default_color_is_unmatched() {
        let loci = vec![locus("S1", "YAL001C", Some("transcription"))];
        let merged = merge_segments(&[point(Some("S1"), 1.0)], &loci);
        let colors = colorize(&merged, &loci, ColorColumn::GoTerm, &[], &[]).unwrap();
        assert_eq!(colors, vec![UNMATCHED_COLOR.to_string()]);
    }

    #[test]
    fn later_pair_wins_on_conflict() {
        let loci = vec![locus("S1", "YAL001C", Some("transcription"))];
        let merged = merge_segments(&[point(Some("S1"), 1.0)], &loci);
        let colors = colorize(
            &merged,
            &loci,
            ColorColumn::GoTerm,
            &["transcription".to_string(), "transcription".to_string()],
            &["red".to_string(), "green".to_string()],
        )
        .unwrap();
        assert_eq!(colors, vec!["green".to_string()]);
    }

    #[test]
    fn absent_color_overrides_everything() {
        let loci = vec![locus("S1", "YAL001C", Some("transcription"))];
        let merged = merge_segments(
            &[point(Some("S1"), 1.0), point(Some("S404"), 2.0), point(None, 3.0)],
            &loci,
        );
        let colors = colorize(
            &merged,
            &loci,
            ColorColumn::GoTerm,
            &["transcription".to_string()],
            &["red".to_string()],
        )
        .unwrap();
        assert_eq!(colors[0], "red");
        assert_eq!(colors[1], ABSENT_COLOR);
        assert_eq!(colors[2], ABSENT_COLOR);
    }

    #[test]
    fn mismatched_palette_is_rejected() {
        let loci = vec![locus("S1", "YAL001C", None)];
        let merged = merge_segments(&[point(Some("S1"), 1.0)], &loci);
        let err = colorize(
            &merged,
            &loci,
            ColorColumn::GoTerm,
            &["a".to_string()],
            &[],
        )
        .unwrap_err();
        assert!(matches!(err, VisError::MismatchedPalette { .. }));
    }

    #[test]
    fn quantify_joins_on_feature_name() {
        let loci = vec![locus("S1", "YAL001C", None), locus("S2", "YAL003W", None)];
        let merged = merge_segments(
            &[point(Some("S1"), 1.0), point(Some("S2"), 2.0), point(None, 3.0)],
            &loci,
        );
        let mut uploaded = HashMap::new();
        uploaded.insert("YAL001C".to_string(), 1.5);
        let values = quantify(&merged, &loci, &uploaded);
        assert_eq!(values, vec![Some(1.5), None, None]);
    }

    #[test]
    fn color_scales_parse_by_exact_name() {
        assert_eq!(ColorScale::parse("Viridis").unwrap(), ColorScale::Viridis);
        assert_eq!(ColorScale::parse("thermal").unwrap().name(), "thermal");
        assert!(matches!(
            ColorScale::parse("viridis").unwrap_err(),
            VisError::UnknownColorScale(_)
        ));
    }
}
