//! Column and table names of the SCERE store, plus the SQL literals
//! behind each accessor call site.

/// Main feature table of the SGD dump.
pub const TABLE_FEATURES: &str = "SGD_features";
/// GO slim annotation mapping.
pub const TABLE_GO_SLIM: &str = "go_slim_mapping";
/// One row per chromosome, 1..=16 plus mitochondrial.
pub const TABLE_CHROMOSOME_LENGTH: &str = "chromosome_length";

pub const COL_SGDID: &str = "Primary_SGDID";
pub const COL_STANDARD_NAME: &str = "Standard_gene_name";
pub const COL_FEATURE_NAME: &str = "Feature_name";
pub const COL_CHROMOSOME: &str = "Chromosome";
pub const COL_START: &str = "Start_coordinate";
pub const COL_STOP: &str = "Stop_coordinate";
pub const COL_STRAND: &str = "Strand";
pub const COL_DESCRIPTION: &str = "Description";
pub const COL_GO_TERM: &str = "GO_slim_term";

/// Chromosome value of the 2-micron plasmid, dropped by the fixed
/// post-filter.
pub const PLASMID_CHROMOSOME: &str = "2-micron";

/// Every feature with its names and description.
pub const SQL_ALL_FEATURES: &str = "\
SELECT Primary_SGDID, Standard_gene_name, Chromosome, Feature_name, Strand, \
       Stop_coordinate, Start_coordinate, Description
FROM SGD_features";

/// Every feature, in genome order.
pub const SQL_FEATURES_ORDERED: &str = "\
SELECT Primary_SGDID, Feature_name, Start_coordinate, Stop_coordinate, Chromosome, Strand
FROM SGD_features
ORDER BY Start_coordinate";

/// Every feature joined with one of its GO slim terms, in genome
/// order. The GROUP BY keeps one arbitrary term per feature.
pub const SQL_FEATURES_GO: &str = "\
SELECT Primary_SGDID, Feature_name, Start_coordinate, Stop_coordinate, Chromosome, Strand, GO_slim_term
FROM SGD_features, go_slim_mapping
WHERE SGDID == Primary_SGDID
GROUP BY SGDID
ORDER BY Start_coordinate";

/// Features carrying a specific GO slim term. The term is a bound
/// parameter; it reaches us from a user-facing dropdown and must not
/// be spliced into the SQL text.
pub const SQL_FEATURES_WITH_TERM: &str = "\
SELECT Primary_SGDID, Feature_name, Start_coordinate, Stop_coordinate, Chromosome, Strand, GO_slim_term
FROM SGD_features, go_slim_mapping
WHERE SGDID == Primary_SGDID
AND GO_slim_term == ?1
GROUP BY SGDID
ORDER BY Start_coordinate";

pub const SQL_CHROMOSOME_LENGTHS: &str = "\
SELECT length
FROM chromosome_length";
