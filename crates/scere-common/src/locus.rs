//! The locus record: one named genomic feature with coordinates.

use serde::{Deserialize, Serialize};

/// Reading strand of a locus.
///
/// The SGD dump encodes these as `"W"` (Watson) and `"C"` (Crick);
/// records with any other strand value are dropped by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strand {
    Watson,
    Crick,
}

impl Strand {
    /// Parse the single-letter SGD strand code.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "W" => Some(Strand::Watson),
            "C" => Some(Strand::Crick),
            _ => None,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Strand::Watson => "W",
            Strand::Crick => "C",
        }
    }
}

/// Chromosome id of the mitochondrial genome in the SGD dump.
pub const MITOCHONDRIAL: u8 = 17;

/// A genomic feature as returned by the locus store, after the fixed
/// post-filters: strand is Watson or Crick, the 2-micron plasmid is
/// gone and the chromosome id is numeric (1..=16, 17 mitochondrial).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Locus {
    /// Primary SGDID, the internal identifier.
    pub sgdid: String,
    /// Systematic feature name (YORF), when the query selects it.
    pub feature_name: Option<String>,
    /// Standard gene name, when the query selects it.
    pub standard_name: Option<String>,
    pub chromosome: u8,
    /// Start coordinate in base pairs.
    pub start: u64,
    /// Stop coordinate in base pairs.
    pub stop: u64,
    pub strand: Strand,
    pub description: Option<String>,
    /// GO slim term carried by the row, when the query joins the
    /// GO mapping.
    pub go_term: Option<String>,
    /// Per-request annotation set by the handlers (e.g. "Targets").
    /// Never comes from the store.
    pub tag: Option<String>,
}

impl Locus {
    /// y-offset sign of the strand track in the 2D layout: Crick runs
    /// above the chromosome line, Watson below.
    pub fn strand_offset(&self) -> f64 {
        match self.strand {
            Strand::Crick => 0.2,
            Strand::Watson => -0.2,
        }
    }
}
