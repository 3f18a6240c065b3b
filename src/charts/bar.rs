//! Bar chart: one bar per sample for a single selected gene.

use serde::Serialize;

use crate::data::ExpressionMatrix;
use crate::error::ExplorerError;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarChartSpec {
    pub gene: String,
    pub sample_labels: Vec<String>,
    pub values: Vec<f64>,
}

pub fn bar_chart(matrix: &ExpressionMatrix, gene: &str) -> Result<BarChartSpec, ExplorerError> {
    if matrix.is_empty() {
        return Err(ExplorerError::Empty(
            "the expression table has no values to draw".to_string(),
        ));
    }
    Ok(BarChartSpec {
        gene: gene.to_string(),
        sample_labels: matrix.samples().to_vec(),
        values: matrix.row(gene)?.to_vec(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_chart_for_one_gene() {
        let spec = bar_chart(&ExpressionMatrix::sample(), "Gene3").unwrap();
        assert_eq!(spec.gene, "Gene3");
        assert_eq!(spec.sample_labels, ["Sample1", "Sample2", "Sample3", "Sample4"]);
        assert_eq!(spec.values, [2.1, 2.9, 2.7, 3.1]);
    }

    #[test]
    fn test_bar_chart_unknown_gene() {
        assert!(matches!(
            bar_chart(&ExpressionMatrix::sample(), "Gene9").unwrap_err(),
            ExplorerError::NotFound(_)
        ));
    }

    #[test]
    fn test_bar_chart_empty_table() {
        let empty = ExpressionMatrix::from_csv(b"Gene,S1\n").unwrap();
        assert!(matches!(
            bar_chart(&empty, "GeneA").unwrap_err(),
            ExplorerError::Empty(_)
        ));
    }
}
