//! scere-vis — chart-ready reshaping of locus tables.
//!
//! Two transforms live here: the 2D coordinate formatter, which
//! expands per-locus coordinate spans into sentinel-separated polyline
//! traces, and the 3D segment colorizer, which paints the
//! folded-genome polyline from caller-supplied value/colour pairs.
//! Both are pure functions over in-memory tables.

pub mod column;
pub mod error;
pub mod palette;
pub mod vis2d;
pub mod vis3d;

pub use column::ColorColumn;
pub use error::{Result, VisError};
pub use vis2d::{assign_legend, chromosome_repartition, chromosome_tracks, format_coordinates, TracePoint};
pub use vis3d::{colorize, merge_segments, quantify, ColorScale, MergedSegment};
