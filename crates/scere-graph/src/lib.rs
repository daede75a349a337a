//! scere-graph — pairwise-distance filtering, histogram statistics and
//! the threshold network derived from a gene list.
//!
//! Gene lists arrive as external feature names (YORF); the distance
//! table is keyed by internal SGDIDs, so selection goes through the
//! locus table first. Every operation is a pure function of its
//! inputs.

pub mod assemble;
pub mod histogram;
pub mod metrics;

pub use assemble::{elements, resolve_targets, select_edges, slider_bounds, Element};
pub use histogram::{distance_histogram, DistanceHistogram, BIN_COUNT, RANGE_MAX};
pub use metrics::{threshold_subgraph, SubgraphMetrics};
