//! The locus store: read-only queries against the SCERE SQLite file.
//!
//! Every query goes through [`LocusStore::query_loci`], which applies
//! the three fixed post-filters: keep only Watson/Crick strands, drop
//! the 2-micron plasmid, coerce the chromosome id to an integer.

use crate::error::{DbError, Result};
use crate::schema;
use rusqlite::types::Value;
use rusqlite::{params_from_iter, Connection, OpenFlags, Row, ToSql};
use scere_common::{Locus, Strand};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Handle on the SQLite store. Holds only the path; a fresh read-only
/// connection is opened per query, so the handle is cheap to share.
#[derive(Debug, Clone)]
pub struct LocusStore {
    path: PathBuf,
}

impl LocusStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self { path: path.as_ref().to_path_buf() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn connect(&self) -> Result<Connection> {
        let conn = Connection::open_with_flags(
            &self.path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;
        Ok(conn)
    }

    /// Run a read-only query whose projection includes the locus
    /// columns and map the rows through the fixed post-filters.
    /// Malformed SQL or a missing expected column propagates.
    pub fn query_loci(&self, sql: &str, params: &[&dyn ToSql]) -> Result<Vec<Locus>> {
        let conn = self.connect()?;
        let mut stmt = conn.prepare(sql)?;
        let mut rows = stmt.query(params_from_iter(params.iter()))?;
        let mut loci = Vec::new();
        while let Some(row) = rows.next()? {
            if let Some(locus) = locus_from_row(row)? {
                loci.push(locus);
            }
        }
        tracing::debug!(rows = loci.len(), "locus query mapped");
        Ok(loci)
    }

    /// Every feature with names and description (dashboard startup
    /// table, also the YORF → SGDID resolution table).
    pub fn all_features(&self) -> Result<Vec<Locus>> {
        self.query_loci(schema::SQL_ALL_FEATURES, &[])
    }

    /// Every feature in genome order, coordinates only.
    pub fn features_ordered(&self) -> Result<Vec<Locus>> {
        self.query_loci(schema::SQL_FEATURES_ORDERED, &[])
    }

    /// Features carrying the given GO slim term, in genome order.
    pub fn features_with_go_term(&self, term: &str) -> Result<Vec<Locus>> {
        self.query_loci(schema::SQL_FEATURES_WITH_TERM, &[&term as &dyn ToSql])
    }

    /// Every feature in genome order, with `go_term` set to `term` on
    /// exactly the features that carry it. Features without the term
    /// keep whichever term the grouped join picked, so equality
    /// against `term` identifies the carriers.
    pub fn features_annotated(&self, term: Option<&str>) -> Result<Vec<Locus>> {
        let mut loci = self.query_loci(schema::SQL_FEATURES_GO, &[])?;
        if let Some(term) = term {
            let carriers: HashSet<String> = self
                .features_with_go_term(term)?
                .into_iter()
                .map(|locus| locus.sgdid)
                .collect();
            for locus in &mut loci {
                if carriers.contains(&locus.sgdid) {
                    locus.go_term = Some(term.to_string());
                }
            }
        }
        Ok(loci)
    }

    /// Chromosome lengths in base pairs, chromosomes 1..=16 plus
    /// mitochondrial, in table order.
    pub fn chromosome_lengths(&self) -> Result<Vec<u64>> {
        let conn = self.connect()?;
        let mut stmt = conn.prepare(schema::SQL_CHROMOSOME_LENGTHS)?;
        let lengths = stmt
            .query_map([], |row| row.get::<_, i64>(0))?
            .collect::<rusqlite::Result<Vec<i64>>>()?;
        Ok(lengths.into_iter().map(|len| len.max(0) as u64).collect())
    }
}

/// Map one result row to a locus, or `None` when the fixed filters
/// drop the row (non-W/C strand, 2-micron plasmid).
fn locus_from_row(row: &Row<'_>) -> Result<Option<Locus>> {
    let strand_code = match required_text(row, schema::COL_STRAND)? {
        Some(code) => code,
        None => return Ok(None),
    };
    let strand = match Strand::from_code(&strand_code) {
        Some(strand) => strand,
        None => return Ok(None),
    };

    let chromosome = match chromosome_from_value(column_value(row, schema::COL_CHROMOSOME)?)? {
        Some(id) => id,
        None => return Ok(None),
    };

    let sgdid = required_text(row, schema::COL_SGDID)?
        .ok_or_else(|| DbError::MissingColumn(schema::COL_SGDID.to_string()))?;
    let start = coordinate(row, schema::COL_START)?;
    let stop = coordinate(row, schema::COL_STOP)?;

    Ok(Some(Locus {
        sgdid,
        feature_name: optional_text(row, schema::COL_FEATURE_NAME)?,
        standard_name: optional_text(row, schema::COL_STANDARD_NAME)?,
        chromosome,
        start,
        stop,
        strand,
        description: optional_text(row, schema::COL_DESCRIPTION)?,
        go_term: optional_text(row, schema::COL_GO_TERM)?,
        tag: None,
    }))
}

fn column_value(row: &Row<'_>, name: &str) -> Result<Value> {
    row.get::<_, Value>(name).map_err(|err| match err {
        rusqlite::Error::InvalidColumnName(col) => DbError::MissingColumn(col),
        other => DbError::Sqlite(other),
    })
}

/// Text value of a column the query must project.
fn required_text(row: &Row<'_>, name: &str) -> Result<Option<String>> {
    match column_value(row, name)? {
        Value::Null => Ok(None),
        Value::Text(text) => Ok(Some(text)),
        _ => Err(DbError::UnexpectedValue(name.to_string())),
    }
}

/// Text value of a column the query may omit.
fn optional_text(row: &Row<'_>, name: &str) -> Result<Option<String>> {
    match row.get::<_, Value>(name) {
        Ok(Value::Null) => Ok(None),
        Ok(Value::Text(text)) => Ok(Some(text)),
        Ok(Value::Integer(n)) => Ok(Some(n.to_string())),
        Ok(Value::Real(x)) => Ok(Some(x.to_string())),
        Ok(Value::Blob(_)) => Ok(None),
        Err(rusqlite::Error::InvalidColumnName(_)) => Ok(None),
        Err(err) => Err(err.into()),
    }
}

/// Coerce the chromosome field to an integer id. `None` means the row
/// is the 2-micron plasmid and must be dropped.
fn chromosome_from_value(value: Value) -> Result<Option<u8>> {
    match value {
        Value::Integer(n) if (1..=255).contains(&n) => Ok(Some(n as u8)),
        Value::Text(text) => {
            if text == schema::PLASMID_CHROMOSOME {
                return Ok(None);
            }
            text.trim()
                .parse::<u8>()
                .map(Some)
                .map_err(|_| DbError::BadChromosome(text))
        }
        other => Err(DbError::BadChromosome(format!("{other:?}"))),
    }
}

/// Base-pair coordinate, stored either as INTEGER or as numeric TEXT.
fn coordinate(row: &Row<'_>, name: &str) -> Result<u64> {
    match column_value(row, name)? {
        Value::Integer(n) if n >= 0 => Ok(n as u64),
        Value::Text(text) => text
            .trim()
            .parse::<u64>()
            .map_err(|_| DbError::UnexpectedValue(name.to_string())),
        _ => Err(DbError::UnexpectedValue(name.to_string())),
    }
}
