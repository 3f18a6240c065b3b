//! Gene-annotation records and the substring filter behind Search mode.
//!
//! The annotation table is an external spreadsheet export (CSV). Only two
//! columns are interpreted: `Gene Names` is searched, `Sequence` is later
//! rendered as a hyperlink by the view layer. All other columns pass
//! through untouched for display.

use std::path::Path;

use crate::error::ExplorerError;

/// Column holding the searchable name/alias list.
pub const GENE_NAMES_COLUMN: &str = "Gene Names";
/// Column holding the reference-sequence link target.
pub const SEQUENCE_COLUMN: &str = "Sequence";

/// One row of the annotation table. `values` runs parallel to
/// [`GeneTable::columns`]; short rows are padded with empty strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneRecord {
    pub values: Vec<String>,
}

impl GeneRecord {
    fn field(&self, index: usize) -> &str {
        self.values.get(index).map(String::as_str).unwrap_or("")
    }
}

/// The loaded annotation table. Immutable after load; Search mode reloads
/// it from disk on every query, so there is no cache to invalidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneTable {
    pub columns: Vec<String>,
    pub records: Vec<GeneRecord>,
    name_col: usize,
}

impl GeneTable {
    /// Read the annotation table from `path`.
    pub fn load(path: &Path) -> Result<Self, ExplorerError> {
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_path(path)
            .map_err(|e| ExplorerError::Source(format!("{}: {}", path.display(), e)))?;

        let columns: Vec<String> = reader
            .headers()
            .map_err(|e| ExplorerError::Source(e.to_string()))?
            .iter()
            .map(str::to_string)
            .collect();

        let mut table = Self::from_columns(columns)?;
        for row in reader.records() {
            let row = row.map_err(|e| ExplorerError::Source(e.to_string()))?;
            let mut values: Vec<String> = row.iter().map(str::to_string).collect();
            values.resize(table.columns.len(), String::new());
            table.records.push(GeneRecord { values });
        }

        log::info!(
            "loaded {} gene records from {}",
            table.records.len(),
            path.display()
        );
        Ok(table)
    }

    /// Build an empty table over `columns`, validating the required schema.
    pub fn from_columns(columns: Vec<String>) -> Result<Self, ExplorerError> {
        let name_col = columns
            .iter()
            .position(|c| c == GENE_NAMES_COLUMN)
            .ok_or_else(|| {
                ExplorerError::Source(format!("missing required column '{GENE_NAMES_COLUMN}'"))
            })?;
        if !columns.iter().any(|c| c == SEQUENCE_COLUMN) {
            return Err(ExplorerError::Source(format!(
                "missing required column '{SEQUENCE_COLUMN}'"
            )));
        }
        Ok(Self {
            columns,
            records: Vec::new(),
            name_col,
        })
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Case-insensitive substring filter over the `Gene Names` field.
    ///
    /// Records with an empty or missing field never match, even for the
    /// empty query (which otherwise matches everything). The result keeps
    /// the load order; no re-sorting.
    pub fn filter(&self, query: &str) -> Vec<&GeneRecord> {
        let needle = query.to_lowercase();
        self.records
            .iter()
            .filter(|record| {
                let field = record.field(self.name_col);
                !field.is_empty() && field.to_lowercase().contains(&needle)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(names: &[&str]) -> GeneTable {
        let mut table = GeneTable::from_columns(vec![
            GENE_NAMES_COLUMN.to_string(),
            SEQUENCE_COLUMN.to_string(),
        ])
        .unwrap();
        for (i, name) in names.iter().enumerate() {
            table.records.push(GeneRecord {
                values: vec![name.to_string(), format!("https://example.org/seq/{i}")],
            });
        }
        table
    }

    #[test]
    fn test_filter_is_case_insensitive_substring() {
        let t = table(&[
            "TSHR, thyroid stimulating hormone receptor",
            "PAX8, paired box 8",
            "DUOX2, dual oxidase 2",
        ]);
        let hits = t.filter("tshr");
        assert_eq!(hits.len(), 1);
        assert!(hits[0].values[0].starts_with("TSHR"));

        // substring in the middle of an alias
        let hits = t.filter("OXIDASE");
        assert_eq!(hits.len(), 1);
        assert!(hits[0].values[0].starts_with("DUOX2"));
    }

    #[test]
    fn test_empty_query_matches_all_non_empty_names() {
        let t = table(&["TSHR", "", "PAX8"]);
        let hits = t.filter("");
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].values[0], "TSHR");
        assert_eq!(hits[1].values[0], "PAX8");
    }

    #[test]
    fn test_missing_field_never_matches() {
        let mut t = table(&["TSHR"]);
        // a record whose row was shorter than the header
        t.records.push(GeneRecord { values: vec![] });
        assert_eq!(t.filter("").len(), 1);
        assert_eq!(t.filter("tsh").len(), 1);
    }

    #[test]
    fn test_filter_preserves_load_order() {
        let t = table(&["THRB", "TSHR", "THRA"]);
        let hits = t.filter("thr");
        let names: Vec<&str> = hits.iter().map(|r| r.values[0].as_str()).collect();
        assert_eq!(names, vec!["THRB", "THRA"]);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let t = table(&["TSHR", "PAX8", "TPO", "TSHB"]);
        let once = t.filter("tsh");

        let mut refiltered =
            GeneTable::from_columns(t.columns.clone()).unwrap();
        refiltered.records = once.iter().map(|r| (*r).clone()).collect();
        let twice = refiltered.filter("tsh");

        let a: Vec<&GeneRecord> = once;
        let b: Vec<GeneRecord> = twice.iter().map(|r| (*r).clone()).collect();
        assert_eq!(a.len(), b.len());
        for (x, y) in a.iter().zip(b.iter()) {
            assert_eq!(**x, *y);
        }
    }

    #[test]
    fn test_query_is_not_trimmed_or_tokenized() {
        let t = table(&["TSHR, thyroid stimulating hormone receptor"]);
        // pure substring semantics: the space is part of the needle
        assert_eq!(t.filter("stimulating hormone").len(), 1);
        assert_eq!(t.filter(" TSHR").len(), 0);
    }

    #[test]
    fn test_load_missing_file_is_source_error() {
        let err = GeneTable::load(Path::new("/nonexistent/annotations.csv")).unwrap_err();
        assert!(matches!(err, ExplorerError::Source(_)));
    }

    #[test]
    fn test_required_columns_are_validated() {
        let err = GeneTable::from_columns(vec!["Entry".to_string()]).unwrap_err();
        assert!(matches!(err, ExplorerError::Source(_)));

        let err = GeneTable::from_columns(vec![GENE_NAMES_COLUMN.to_string()]).unwrap_err();
        assert!(matches!(err, ExplorerError::Source(_)));
    }
}
