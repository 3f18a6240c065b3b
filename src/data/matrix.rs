//! The genes × samples expression table and its accessors.
//!
//! A matrix comes from exactly one of two places per view activation: the
//! built-in sample dataset, or a CSV upload parsed in full. An upload
//! replaces the previous matrix wholesale; there is no merging and no
//! persistence between sessions.

use once_cell::sync::Lazy;

use crate::error::ExplorerError;

/// Built-in demonstration dataset, matching the values shipped with the
/// original tool: five genes across four samples.
static SAMPLE_DATA: Lazy<ExpressionMatrix> = Lazy::new(|| ExpressionMatrix {
    genes: ["Gene1", "Gene2", "Gene3", "Gene4", "Gene5"]
        .iter()
        .map(|s| s.to_string())
        .collect(),
    samples: ["Sample1", "Sample2", "Sample3", "Sample4"]
        .iter()
        .map(|s| s.to_string())
        .collect(),
    values: vec![
        vec![1.2, 2.3, 1.8, 2.1],
        vec![3.4, 4.5, 3.9, 4.0],
        vec![2.1, 2.9, 2.7, 3.1],
        vec![4.3, 3.6, 4.1, 3.9],
        vec![1.5, 2.8, 1.9, 2.2],
    ],
});

/// Dense numeric table: one row per gene, one column per sample.
/// Invariant: every cell is a finite f64 and every row has exactly
/// `samples.len()` cells. The parser enforces both.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionMatrix {
    genes: Vec<String>,
    samples: Vec<String>,
    values: Vec<Vec<f64>>,
}

impl ExpressionMatrix {
    /// A fresh copy of the built-in sample dataset.
    pub fn sample() -> Self {
        SAMPLE_DATA.clone()
    }

    /// Parse an uploaded CSV: first column is the gene key, first row is
    /// the sample-name header, every remaining cell numeric. No partial
    /// recovery; the first structural problem aborts the parse.
    pub fn from_csv(bytes: &[u8]) -> Result<Self, ExplorerError> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(bytes);

        let headers = reader.headers().map_err(|e| ExplorerError::Parse {
            row: 1,
            message: e.to_string(),
        })?;
        if headers.len() < 2 {
            return Err(ExplorerError::Parse {
                row: 1,
                message: "header must name a gene-key column and at least one sample".to_string(),
            });
        }
        let samples: Vec<String> = headers.iter().skip(1).map(str::to_string).collect();
        if samples.iter().any(|s| s.is_empty()) {
            return Err(ExplorerError::Parse {
                row: 1,
                message: "empty sample name in header".to_string(),
            });
        }

        let mut genes = Vec::new();
        let mut values = Vec::new();
        for (i, row) in reader.records().enumerate() {
            let line = i + 2;
            let row = row.map_err(|e| ExplorerError::Parse {
                row: line,
                message: e.to_string(),
            })?;
            if row.len() != samples.len() + 1 {
                return Err(ExplorerError::Parse {
                    row: line,
                    message: format!("expected {} fields, found {}", samples.len() + 1, row.len()),
                });
            }
            let gene = row.get(0).unwrap_or("").to_string();
            if gene.is_empty() {
                return Err(ExplorerError::Parse {
                    row: line,
                    message: "empty gene key".to_string(),
                });
            }
            let mut cells = Vec::with_capacity(samples.len());
            for field in row.iter().skip(1) {
                let value: f64 = field.parse().map_err(|_| ExplorerError::Parse {
                    row: line,
                    message: format!("non-numeric cell '{field}'"),
                })?;
                if !value.is_finite() {
                    return Err(ExplorerError::Parse {
                        row: line,
                        message: format!("non-finite cell '{field}'"),
                    });
                }
                cells.push(value);
            }
            genes.push(gene);
            values.push(cells);
        }

        log::info!(
            "parsed expression table: {} genes x {} samples",
            genes.len(),
            samples.len()
        );
        Ok(Self {
            genes,
            samples,
            values,
        })
    }

    pub fn genes(&self) -> &[String] {
        &self.genes
    }

    pub fn samples(&self) -> &[String] {
        &self.samples
    }

    pub fn values(&self) -> &[Vec<f64>] {
        &self.values
    }

    pub fn is_empty(&self) -> bool {
        self.genes.is_empty() || self.samples.is_empty()
    }

    /// The expression values for one gene, in sample order.
    pub fn row(&self, gene: &str) -> Result<&[f64], ExplorerError> {
        self.genes
            .iter()
            .position(|g| g == gene)
            .map(|i| self.values[i].as_slice())
            .ok_or_else(|| ExplorerError::NotFound(gene.to_string()))
    }

    /// Submatrix holding the requested genes, in the order they were
    /// requested (the caller's selection order, not the table's).
    pub fn select(&self, selection: &[String]) -> Result<ExpressionMatrix, ExplorerError> {
        let mut genes = Vec::with_capacity(selection.len());
        let mut values = Vec::with_capacity(selection.len());
        for gene in selection {
            values.push(self.row(gene)?.to_vec());
            genes.push(gene.clone());
        }
        Ok(ExpressionMatrix {
            genes,
            samples: self.samples.clone(),
            values,
        })
    }

    /// Logical transpose: samples become row keys, genes become columns.
    /// The source is untouched.
    pub fn transpose(&self) -> ExpressionMatrix {
        let values = (0..self.samples.len())
            .map(|s| self.values.iter().map(|row| row[s]).collect())
            .collect();
        ExpressionMatrix {
            genes: self.samples.clone(),
            samples: self.genes.clone(),
            values,
        }
    }

    /// Observed (min, max) over every cell; None when the table is empty.
    pub fn value_range(&self) -> Option<(f64, f64)> {
        let mut cells = self.values.iter().flatten().copied();
        let first = cells.next()?;
        Some(cells.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_dataset_values() {
        let m = ExpressionMatrix::sample();
        assert_eq!(m.genes(), ["Gene1", "Gene2", "Gene3", "Gene4", "Gene5"]);
        assert_eq!(m.samples(), ["Sample1", "Sample2", "Sample3", "Sample4"]);
        assert_eq!(m.row("Gene1").unwrap(), [1.2, 2.3, 1.8, 2.1]);
        assert_eq!(m.row("Gene2").unwrap(), [3.4, 4.5, 3.9, 4.0]);
        assert_eq!(m.row("Gene3").unwrap(), [2.1, 2.9, 2.7, 3.1]);
        assert_eq!(m.row("Gene4").unwrap(), [4.3, 3.6, 4.1, 3.9]);
        assert_eq!(m.row("Gene5").unwrap(), [1.5, 2.8, 1.9, 2.2]);
    }

    #[test]
    fn test_parse_well_formed_csv() {
        let csv = b"Gene,S1,S2\nGeneA,1.5,2.5\nGeneB,0.25,4\n";
        let m = ExpressionMatrix::from_csv(csv).unwrap();
        assert_eq!(m.genes(), ["GeneA", "GeneB"]);
        assert_eq!(m.samples(), ["S1", "S2"]);
        assert_eq!(m.row("GeneB").unwrap(), [0.25, 4.0]);
    }

    #[test]
    fn test_parse_rejects_non_numeric_cell() {
        let csv = b"Gene,S1,S2\nGeneA,1.5,oops\n";
        let err = ExpressionMatrix::from_csv(csv).unwrap_err();
        match err {
            ExplorerError::Parse { row, message } => {
                assert_eq!(row, 2);
                assert!(message.contains("oops"));
            }
            other => panic!("expected Parse, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_rejects_non_finite_cell() {
        let csv = b"Gene,S1\nGeneA,NaN\n";
        assert!(matches!(
            ExpressionMatrix::from_csv(csv).unwrap_err(),
            ExplorerError::Parse { row: 2, .. }
        ));
        let csv = b"Gene,S1\nGeneA,inf\n";
        assert!(matches!(
            ExpressionMatrix::from_csv(csv).unwrap_err(),
            ExplorerError::Parse { row: 2, .. }
        ));
    }

    #[test]
    fn test_parse_rejects_ragged_row() {
        let csv = b"Gene,S1,S2\nGeneA,1.0\n";
        assert!(matches!(
            ExpressionMatrix::from_csv(csv).unwrap_err(),
            ExplorerError::Parse { row: 2, .. }
        ));
    }

    #[test]
    fn test_parse_rejects_missing_header() {
        let csv = b"Gene\nGeneA\n";
        assert!(matches!(
            ExpressionMatrix::from_csv(csv).unwrap_err(),
            ExplorerError::Parse { row: 1, .. }
        ));
    }

    #[test]
    fn test_upload_replaces_rather_than_merges() {
        // gene keys disjoint from the sample dataset
        let csv = b"Gene,A,B\nGeneX,1,2\nGeneY,3,4\n";
        let m = ExpressionMatrix::from_csv(csv).unwrap();
        assert_eq!(m.genes(), ["GeneX", "GeneY"]);
        assert!(m.row("Gene1").is_err());
    }

    #[test]
    fn test_row_not_found() {
        let m = ExpressionMatrix::sample();
        assert!(matches!(
            m.row("Gene42").unwrap_err(),
            ExplorerError::NotFound(g) if g == "Gene42"
        ));
    }

    #[test]
    fn test_select_follows_request_order() {
        let m = ExpressionMatrix::sample();
        let sub = m
            .select(&["Gene4".to_string(), "Gene1".to_string()])
            .unwrap();
        assert_eq!(sub.genes(), ["Gene4", "Gene1"]);
        assert_eq!(sub.values()[0], [4.3, 3.6, 4.1, 3.9]);
        assert_eq!(sub.values()[1], [1.2, 2.3, 1.8, 2.1]);
        assert_eq!(sub.samples(), m.samples());
    }

    #[test]
    fn test_transpose_roundtrip() {
        let m = ExpressionMatrix::sample();
        assert_eq!(m.transpose().transpose(), m);

        let t = m.transpose();
        assert_eq!(t.genes(), m.samples());
        assert_eq!(t.samples(), m.genes());
        // Sample2 row of the transpose = second column of the source
        assert_eq!(t.row("Sample2").unwrap(), [2.3, 4.5, 2.9, 3.6, 2.8]);
    }

    #[test]
    fn test_value_range_is_observed_min_max() {
        let m = ExpressionMatrix::sample();
        assert_eq!(m.value_range(), Some((1.2, 4.5)));

        let empty = ExpressionMatrix::from_csv(b"Gene,S1\n").unwrap();
        assert_eq!(empty.value_range(), None);
    }
}
