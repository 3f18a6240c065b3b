//! Data access: gene-annotation records and expression matrices.

pub mod matrix;
pub mod records;

pub use matrix::ExpressionMatrix;
pub use records::{GENE_NAMES_COLUMN, GeneRecord, GeneTable, SEQUENCE_COLUMN};
