//! Heatmap over the transposed matrix: samples as rows, genes as columns.

use serde::Serialize;

use crate::data::ExpressionMatrix;
use crate::error::ExplorerError;

/// Declarative heatmap artifact. `values` has one row per sample; the
/// color-scale domain is the observed (min, max) of the whole table, not a
/// fixed range. Cells are annotated with their numeric value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeatmapSpec {
    pub row_labels: Vec<String>,
    pub col_labels: Vec<String>,
    pub values: Vec<Vec<f64>>,
    pub min: f64,
    pub max: f64,
}

pub fn heatmap(matrix: &ExpressionMatrix) -> Result<HeatmapSpec, ExplorerError> {
    let Some((min, max)) = matrix.value_range() else {
        return Err(ExplorerError::Empty(
            "the expression table has no values to draw".to_string(),
        ));
    };
    let flipped = matrix.transpose();
    Ok(HeatmapSpec {
        row_labels: flipped.genes().to_vec(),
        col_labels: flipped.samples().to_vec(),
        values: flipped.values().to_vec(),
        min,
        max,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heatmap_domain_is_observed_min_max() {
        let spec = heatmap(&ExpressionMatrix::sample()).unwrap();
        assert_eq!(spec.min, 1.2);
        assert_eq!(spec.max, 4.5);
    }

    #[test]
    fn test_heatmap_is_transposed() {
        let spec = heatmap(&ExpressionMatrix::sample()).unwrap();
        assert_eq!(spec.row_labels, ["Sample1", "Sample2", "Sample3", "Sample4"]);
        assert_eq!(spec.col_labels, ["Gene1", "Gene2", "Gene3", "Gene4", "Gene5"]);
        // Sample1 row = first column of the source matrix
        assert_eq!(spec.values[0], [1.2, 3.4, 2.1, 4.3, 1.5]);
    }

    #[test]
    fn test_heatmap_on_empty_table_reports_not_crashes() {
        let empty = ExpressionMatrix::from_csv(b"Gene,S1\n").unwrap();
        assert!(matches!(
            heatmap(&empty).unwrap_err(),
            ExplorerError::Empty(_)
        ));
    }
}
