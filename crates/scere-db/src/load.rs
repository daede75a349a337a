//! Loaders for the static tables shipped beside the SQLite store, and
//! the generic CSV parser used for uploaded gene lists.

use crate::error::{DbError, Result};
use scere_common::{DistanceEdge, SegmentPoint};
use serde::Deserialize;
use std::io::Read;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct SegmentRecord {
    #[serde(rename = "Primary_SGDID")]
    sgdid: Option<String>,
    x: f64,
    y: f64,
    z: f64,
}

#[derive(Debug, Deserialize)]
struct DistanceRecord {
    #[serde(rename = "Primary_SGDID_bis")]
    a: String,
    #[serde(rename = "Primary_SGDID")]
    b: String,
    #[serde(rename = "3D_distances")]
    distance: f64,
}

fn open(path: &Path) -> Result<std::fs::File> {
    std::fs::File::open(path).map_err(|source| DbError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Load the folded-genome polyline (`Primary_SGDID,x,y,z`, one point
/// per row, row order is the drawing order).
pub fn load_segments(path: &Path) -> Result<Vec<SegmentPoint>> {
    segments_from_reader(open(path)?)
}

fn segments_from_reader(reader: impl Read) -> Result<Vec<SegmentPoint>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut points = Vec::new();
    for record in csv_reader.deserialize() {
        let record: SegmentRecord = record?;
        points.push(SegmentPoint {
            sgdid: record.sgdid.filter(|id| !id.is_empty()),
            x: record.x,
            y: record.y,
            z: record.z,
        });
    }
    Ok(points)
}

/// Load the pairwise 3D distance table
/// (`Primary_SGDID,Primary_SGDID_bis,3D_distances`).
pub fn load_distances(path: &Path) -> Result<Vec<DistanceEdge>> {
    distances_from_reader(open(path)?)
}

fn distances_from_reader(reader: impl Read) -> Result<Vec<DistanceEdge>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut edges = Vec::new();
    for record in csv_reader.deserialize() {
        let record: DistanceRecord = record?;
        edges.push(DistanceEdge {
            a: record.a,
            b: record.b,
            distance: record.distance,
        });
    }
    Ok(edges)
}

/// Load the GO term dropdown options (one-column CSV with header).
pub fn load_go_terms(path: &Path) -> Result<Vec<String>> {
    let table = CsvTable::parse_reader(open(path)?)?;
    Ok(table.first_column())
}

/// A parsed tabular upload: header row plus string cells.
#[derive(Debug, Clone, PartialEq)]
pub struct CsvTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl CsvTable {
    pub fn parse_reader(reader: impl Read) -> Result<Self> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let headers = csv_reader
            .headers()?
            .iter()
            .map(|header| header.trim().to_string())
            .collect();
        let mut rows = Vec::new();
        for record in csv_reader.records() {
            let record = record?;
            rows.push(record.iter().map(|cell| cell.trim().to_string()).collect());
        }
        Ok(Self { headers, rows })
    }

    /// Values of a named column; unknown names are a clear error
    /// rather than a silent mismatch.
    pub fn column(&self, name: &str) -> Result<Vec<String>> {
        let index = self
            .headers
            .iter()
            .position(|header| header == name)
            .ok_or_else(|| DbError::MissingColumn(name.to_string()))?;
        Ok(self
            .rows
            .iter()
            .filter_map(|row| row.get(index))
            .cloned()
            .collect())
    }

    /// Non-empty values of the first column (the gene-list schema).
    pub fn first_column(&self) -> Vec<String> {
        self.rows
            .iter()
            .filter_map(|row| row.first())
            .filter(|cell| !cell.is_empty())
            .cloned()
            .collect()
    }
}

/// Parse an uploaded CSV body.
pub fn parse_csv_table(text: &str) -> Result<CsvTable> {
    CsvTable::parse_reader(text.as_bytes())
}

/// Read and parse a CSV file from disk (demo tables).
pub fn load_csv_table(path: &Path) -> Result<CsvTable> {
    CsvTable::parse_reader(open(path)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segments_parse_with_missing_ids() {
        let text = "Primary_SGDID,x,y,z\nS000000001,1.0,2.0,3.0\n,4.0,5.0,6.0\n";
        let points = segments_from_reader(text.as_bytes()).unwrap();
        assert_eq!(points.len(), 2);
        assert_eq!(points[0].sgdid.as_deref(), Some("S000000001"));
        assert_eq!(points[1].sgdid, None);
        assert_eq!(points[1].z, 6.0);
    }

    #[test]
    fn distances_map_bis_to_source() {
        let text = "Primary_SGDID,Primary_SGDID_bis,3D_distances\nS000000001,S000000003,42.5\n";
        let edges = distances_from_reader(text.as_bytes()).unwrap();
        assert_eq!(edges.len(), 1);
        assert_eq!(edges[0].a, "S000000003");
        assert_eq!(edges[0].b, "S000000001");
        assert_eq!(edges[0].distance, 42.5);
    }

    #[test]
    fn csv_table_column_lookup_is_validated() {
        let table = parse_csv_table("YORF,expr\nYAL001C,1.5\nYAL003W,2.0\n").unwrap();
        assert_eq!(table.column("expr").unwrap(), vec!["1.5", "2.0"]);
        assert!(matches!(
            table.column("nope").unwrap_err(),
            DbError::MissingColumn(_)
        ));
        assert_eq!(table.first_column(), vec!["YAL001C", "YAL003W"]);
    }

    #[test]
    fn ragged_upload_is_an_error() {
        let err = parse_csv_table("YORF\nYAL001C,extra,cells\n").unwrap_err();
        assert!(matches!(err, DbError::Csv(_)));
    }
}
