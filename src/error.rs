//! Error taxonomy shared by the data and chart layers.
//!
//! Every variant is a user-facing message scoped to the mode that produced
//! it. Nothing here terminates the process; the UI layer renders these as
//! inline labels.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExplorerError {
    /// The gene-annotation source is missing, unreadable, or lacks the
    /// required columns. Fatal to Search mode only.
    #[error("annotation data unavailable: {0}")]
    Source(String),

    /// An uploaded expression table is structurally broken. `row` is
    /// 1-based and counts the header line.
    #[error("row {row}: {message}")]
    Parse { row: usize, message: String },

    /// A gene was requested that the current matrix does not contain.
    /// Selections are drawn from the matrix's own key set, so this is
    /// defensive.
    #[error("gene '{0}' not found in the expression table")]
    NotFound(String),

    /// Nothing to chart (empty matrix or slice).
    #[error("{0}")]
    Empty(String),
}
