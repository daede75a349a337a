//! Categorical columns a request may color by.
//!
//! The original store exposes these as free-form column names; here
//! the lookup is an explicit match against the known schema so a typo
//! fails loudly instead of silently coloring nothing.

use crate::error::{Result, VisError};
use scere_common::Locus;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorColumn {
    /// The GO slim term carried by the locus.
    GoTerm,
    /// The chromosome id, compared as its decimal string.
    Chromosome,
    /// The per-request annotation set by the handler ("Targets" etc).
    Tag,
}

impl ColorColumn {
    pub fn parse(name: &str) -> Result<Self> {
        match name {
            "go_term" => Ok(ColorColumn::GoTerm),
            "chromosome" => Ok(ColorColumn::Chromosome),
            "tag" => Ok(ColorColumn::Tag),
            other => Err(VisError::UnknownColumn(other.to_string())),
        }
    }

    /// Value of this column for one locus.
    pub fn value_of(&self, locus: &Locus) -> Option<String> {
        match self {
            ColorColumn::GoTerm => locus.go_term.clone(),
            ColorColumn::Chromosome => Some(locus.chromosome.to_string()),
            ColorColumn::Tag => locus.tag.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_names_parse() {
        assert_eq!(ColorColumn::parse("go_term").unwrap(), ColorColumn::GoTerm);
        assert_eq!(ColorColumn::parse("tag").unwrap(), ColorColumn::Tag);
    }

    #[test]
    fn unknown_name_is_a_clear_error() {
        let err = ColorColumn::parse("GO_slim_term").unwrap_err();
        assert!(matches!(err, VisError::UnknownColumn(_)));
    }
}
