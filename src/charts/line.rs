//! Line chart: one line per selected gene across samples.

use serde::Serialize;

use crate::data::ExpressionMatrix;
use crate::error::ExplorerError;

/// Advisory shown when no gene is selected. Not an error.
pub const NO_SELECTION_ADVISORY: &str = "Please select at least one gene to visualize.";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineSeries {
    pub gene: String,
    pub values: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineChartSpec {
    pub sample_labels: Vec<String>,
    pub series: Vec<LineSeries>,
}

/// An empty selection is a normal outcome, not a failure: no artifact is
/// produced and the caller surfaces [`NO_SELECTION_ADVISORY`].
#[derive(Debug, Clone, PartialEq)]
pub enum LineChartOutcome {
    Chart(LineChartSpec),
    NoSelection,
}

pub fn line_chart(
    matrix: &ExpressionMatrix,
    selection: &[String],
) -> Result<LineChartOutcome, ExplorerError> {
    if selection.is_empty() {
        return Ok(LineChartOutcome::NoSelection);
    }
    if matrix.is_empty() {
        return Err(ExplorerError::Empty(
            "the expression table has no values to draw".to_string(),
        ));
    }
    let sub = matrix.select(selection)?;
    let series = sub
        .genes()
        .iter()
        .zip(sub.values())
        .map(|(gene, values)| LineSeries {
            gene: gene.clone(),
            values: values.clone(),
        })
        .collect();
    Ok(LineChartOutcome::Chart(LineChartSpec {
        sample_labels: sub.samples().to_vec(),
        series,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_chart_follows_selection_order() {
        let selection = vec!["Gene5".to_string(), "Gene2".to_string()];
        let outcome = line_chart(&ExpressionMatrix::sample(), &selection).unwrap();
        let LineChartOutcome::Chart(spec) = outcome else {
            panic!("expected a chart");
        };
        assert_eq!(spec.series.len(), 2);
        assert_eq!(spec.series[0].gene, "Gene5");
        assert_eq!(spec.series[0].values, [1.5, 2.8, 1.9, 2.2]);
        assert_eq!(spec.series[1].gene, "Gene2");
    }

    #[test]
    fn test_empty_selection_is_an_advisory_not_an_error() {
        let outcome = line_chart(&ExpressionMatrix::sample(), &[]).unwrap();
        assert_eq!(outcome, LineChartOutcome::NoSelection);
    }

    #[test]
    fn test_unknown_selection_is_defensive_not_found() {
        let selection = vec!["Gene9".to_string()];
        assert!(matches!(
            line_chart(&ExpressionMatrix::sample(), &selection).unwrap_err(),
            ExplorerError::NotFound(_)
        ));
    }
}
