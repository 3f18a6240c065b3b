//! Box plot: one box per sample, summarizing that sample's expression
//! distribution across all genes. Operates on the transposed matrix, the
//! same orientation as the heatmap.

use serde::Serialize;

use super::stats::BoxStats;
use crate::data::ExpressionMatrix;
use crate::error::ExplorerError;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoxPlotSpec {
    pub sample_labels: Vec<String>,
    pub boxes: Vec<BoxStats>,
}

pub fn box_plot(matrix: &ExpressionMatrix) -> Result<BoxPlotSpec, ExplorerError> {
    if matrix.is_empty() {
        return Err(ExplorerError::Empty(
            "the expression table has no values to draw".to_string(),
        ));
    }
    let flipped = matrix.transpose();
    let mut boxes = Vec::with_capacity(flipped.genes().len());
    for row in flipped.values() {
        let stats = BoxStats::from_values(row).ok_or_else(|| {
            ExplorerError::Empty("a sample column has no values".to_string())
        })?;
        boxes.push(stats);
    }
    Ok(BoxPlotSpec {
        sample_labels: flipped.genes().to_vec(),
        boxes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_box_per_sample() {
        let spec = box_plot(&ExpressionMatrix::sample()).unwrap();
        assert_eq!(spec.sample_labels, ["Sample1", "Sample2", "Sample3", "Sample4"]);
        assert_eq!(spec.boxes.len(), 4);
        // Sample1 column is [1.2, 3.4, 2.1, 4.3, 1.5]; median 2.1
        assert_eq!(spec.boxes[0].median, 2.1);
        // Sample2 column is [2.3, 4.5, 2.9, 3.6, 2.8]; median 2.9
        assert_eq!(spec.boxes[1].median, 2.9);
    }

    #[test]
    fn test_empty_table_reports_not_crashes() {
        let empty = ExpressionMatrix::from_csv(b"Gene,S1\n").unwrap();
        assert!(matches!(
            box_plot(&empty).unwrap_err(),
            ExplorerError::Empty(_)
        ));
    }
}
