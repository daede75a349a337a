//! 2D layout: each chromosome is two horizontal tracks (Crick above,
//! Watson below), each locus a short line on its track.
//!
//! The line-drawing primitive connects consecutive points, so every
//! locus is emitted as three rows: (start, y), (stop, y) and a
//! sentinel row with no values that forces a pen-lift before the next
//! locus.

use crate::column::ColorColumn;
use scere_common::Locus;
use serde::Serialize;

/// Legend bucket for rows not matched by any requested value.
pub const OTHER_LEGEND: &str = "Other";
/// Legend bucket for the chromosome backbone.
pub const BACKGROUND_LEGEND: &str = "Background";

/// One row of the 2D trace. `x`/`y` of `None` are the pen-lift
/// sentinel and serialize as JSON nulls, which is what the charting
/// side expects between disjoint segments.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TracePoint {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub feature_name: Option<String>,
    pub legend: String,
    /// Index into the locus table this row was generated from;
    /// backbone rows have none.
    #[serde(skip)]
    pub locus: Option<usize>,
}

impl TracePoint {
    fn for_locus(x: Option<f64>, y: Option<f64>, index: usize, locus: &Locus) -> Self {
        Self {
            x,
            y,
            feature_name: locus.feature_name.clone(),
            legend: OTHER_LEGEND.to_string(),
            locus: Some(index),
        }
    }
}

/// Expand a locus table into drawable 2D rows.
///
/// Chromosomes are processed in ascending numeric order; within a
/// chromosome loci keep their table order. Each locus contributes
/// exactly three rows; a chromosome with no loci contributes nothing.
pub fn format_coordinates(loci: &[Locus], spacing: f64) -> Vec<TracePoint> {
    let max_chromosome = loci.iter().map(|locus| locus.chromosome).max().unwrap_or(0);
    let mut points = Vec::with_capacity(loci.len() * 3);

    for chromosome in 1..=max_chromosome {
        for (index, locus) in loci
            .iter()
            .enumerate()
            .filter(|(_, locus)| locus.chromosome == chromosome)
        {
            let y = (chromosome - 1) as f64 * spacing + locus.strand_offset();
            points.push(TracePoint::for_locus(Some(locus.start as f64), Some(y), index, locus));
            points.push(TracePoint::for_locus(Some(locus.stop as f64), Some(y), index, locus));
            points.push(TracePoint::for_locus(None, None, index, locus));
        }
    }
    points
}

/// Backbone tracks: for each chromosome, one line per strand track
/// from coordinate 0 to the chromosome length, sentinel-separated.
pub fn chromosome_tracks(lengths: &[u64], spacing: f64) -> Vec<TracePoint> {
    let mut points = Vec::with_capacity(lengths.len() * 6);
    for (index, length) in lengths.iter().enumerate() {
        let base = index as f64 * spacing;
        for offset in [0.2, -0.2] {
            let y = base + offset;
            for x in [Some(0.0), Some(*length as f64), None] {
                points.push(TracePoint {
                    x,
                    y: x.map(|_| y),
                    feature_name: None,
                    legend: BACKGROUND_LEGEND.to_string(),
                    locus: None,
                });
            }
        }
    }
    points
}

/// Assign legend labels: rows keep `Other` unless the inspected
/// column matches one of `values` (later values win); backbone rows
/// are never relabelled.
pub fn assign_legend(
    points: &mut [TracePoint],
    loci: &[Locus],
    column: ColorColumn,
    values: &[String],
) {
    for point in points.iter_mut() {
        let Some(index) = point.locus else { continue };
        let cell = column.value_of(&loci[index]);
        for value in values {
            if cell.as_deref() == Some(value.as_str()) {
                point.legend = value.clone();
            }
        }
    }
}

/// Locus counts per chromosome (1..=17), for the target-repartition
/// histogram.
pub fn chromosome_repartition(loci: &[Locus]) -> Vec<u32> {
    let mut counts = vec![0u32; 17];
    for locus in loci {
        let slot = locus.chromosome as usize;
        if (1..=counts.len()).contains(&slot) {
            counts[slot - 1] += 1;
        }
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use scere_common::Strand;

    fn locus(sgdid: &str, chromosome: u8, start: u64, stop: u64, strand: Strand) -> Locus {
        Locus {
            sgdid: sgdid.to_string(),
            feature_name: Some(format!("Y{sgdid}")),
            standard_name: None,
            chromosome,
            start,
            stop,
            strand,
            description: None,
            go_term: None,
            tag: None,
        }
    }

    #[test]
    fn three_rows_per_locus_with_sentinel_third() {
        let loci = vec![
            locus("A", 1, 100, 200, Strand::Watson),
            locus("B", 2, 300, 400, Strand::Crick),
            locus("C", 1, 500, 600, Strand::Crick),
        ];
        let points = format_coordinates(&loci, 6.0);
        assert_eq!(points.len(), loci.len() * 3);
        for (row, point) in points.iter().enumerate() {
            let sentinel = point.x.is_none() && point.y.is_none();
            assert_eq!(sentinel, row % 3 == 2, "row {row}");
        }
    }

    #[test]
    fn chromosomes_ascend_and_order_is_kept_within() {
        let loci = vec![
            locus("B2", 2, 50, 60, Strand::Watson),
            locus("A1", 1, 100, 200, Strand::Watson),
            locus("A2", 1, 10, 20, Strand::Watson),
        ];
        let points = format_coordinates(&loci, 6.0);
        // Chromosome 1 first, its loci in table order (A1 then A2).
        let xs: Vec<f64> = points.iter().filter_map(|point| point.x).collect();
        assert_eq!(xs, vec![100.0, 200.0, 10.0, 20.0, 50.0, 60.0]);
        // y never decreases across the chromosome groups.
        let ys: Vec<f64> = points.iter().filter_map(|point| point.y).collect();
        assert!(ys.windows(2).all(|pair| pair[1] >= pair[0] - 0.4));
    }

    #[test]
    fn strand_tracks_are_parallel() {
        let loci = vec![
            locus("W", 3, 1, 2, Strand::Watson),
            locus("C", 3, 3, 4, Strand::Crick),
        ];
        let points = format_coordinates(&loci, 6.0);
        assert_eq!(points[0].y, Some(2.0 * 6.0 - 0.2));
        assert_eq!(points[3].y, Some(2.0 * 6.0 + 0.2));
    }

    #[test]
    fn empty_chromosome_contributes_no_rows() {
        // Chromosome 2 has no loci; no sentinel-only rows appear.
        let loci = vec![
            locus("A", 1, 1, 2, Strand::Watson),
            locus("B", 3, 3, 4, Strand::Watson),
        ];
        let points = format_coordinates(&loci, 6.0);
        assert_eq!(points.len(), 6);
    }

    #[test]
    fn no_loci_no_rows() {
        assert!(format_coordinates(&[], 6.0).is_empty());
    }

    #[test]
    fn backbone_has_two_tracks_per_chromosome() {
        let points = chromosome_tracks(&[1000, 2000], 6.0);
        assert_eq!(points.len(), 12);
        assert!(points.iter().all(|point| point.legend == BACKGROUND_LEGEND));
        assert_eq!(points[0].y, Some(0.2));
        assert_eq!(points[3].y, Some(-0.2));
        assert_eq!(points[7].x, Some(2000.0));
    }

    #[test]
    fn later_legend_value_wins() {
        let mut loci = vec![locus("A", 1, 1, 2, Strand::Watson)];
        loci[0].tag = Some("Targets".to_string());
        let mut points = format_coordinates(&loci, 6.0);
        // "Targets" matches both requested values; the later one wins.
        assign_legend(
            &mut points,
            &loci,
            ColorColumn::Tag,
            &["Targets".to_string(), "Targets".to_string()],
        );
        assert!(points.iter().all(|point| point.legend == "Targets"));
    }

    #[test]
    fn unmatched_rows_stay_other() {
        let loci = vec![locus("A", 1, 1, 2, Strand::Watson)];
        let mut points = format_coordinates(&loci, 6.0);
        assign_legend(&mut points, &loci, ColorColumn::GoTerm, &["transcription".to_string()]);
        assert!(points.iter().all(|point| point.legend == OTHER_LEGEND));
    }

    #[test]
    fn repartition_counts_by_chromosome() {
        let loci = vec![
            locus("A", 1, 1, 2, Strand::Watson),
            locus("B", 1, 3, 4, Strand::Crick),
            locus("C", 17, 5, 6, Strand::Watson),
        ];
        let counts = chromosome_repartition(&loci);
        assert_eq!(counts[0], 2);
        assert_eq!(counts[16], 1);
        assert_eq!(counts.iter().sum::<u32>(), 3);
    }
}
