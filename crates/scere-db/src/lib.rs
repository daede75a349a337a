//! scere-db — read-only access to the SCERE SQLite store and loaders
//! for the static tables (3D segments, pairwise distances, GO terms).
//!
//! The store is an immutable file; a fresh read-only connection is
//! opened per query, so the accessor is freely shareable across
//! request handlers.

pub mod error;
pub mod load;
pub mod schema;
pub mod store;

pub use error::{DbError, Result};
pub use load::{
    load_csv_table, load_distances, load_go_terms, load_segments, parse_csv_table, CsvTable,
};
pub use store::LocusStore;
