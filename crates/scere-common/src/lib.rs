//! scere-common — shared domain types and error types.
//!
//! Everything that crosses crate boundaries lives here: the locus
//! record returned by the store, the static geometry and distance
//! tables loaded at startup, and the API-facing error type.

pub mod error;
pub mod locus;
pub mod tables;

pub use error::{ApiError, ApiResult};
pub use locus::{Locus, Strand};
pub use tables::{DistanceEdge, SegmentPoint};
