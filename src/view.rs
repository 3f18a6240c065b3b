//! Mode dispatch: a pure `render` over explicit inputs.
//!
//! The egui shell owns the widgets; everything it displays for a mode comes
//! out of [`render`], which re-derives its data from source on every call.
//! Search re-reads the annotation file each time (no cache); Visualization
//! re-parses the upload bytes or re-clones the sample fixture. No mode
//! retains data across a switch.

use std::path::Path;

use crate::charts::{
    self, BarChartSpec, BoxPlotSpec, HeatmapSpec, LineChartOutcome,
};
use crate::content::{self, TextSection};
use crate::data::{ExpressionMatrix, GeneRecord, GeneTable, SEQUENCE_COLUMN};
use crate::error::ExplorerError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Background,
    Search,
    Visualization,
}

/// Everything a render pass reads. No ambient state: mode and all selection
/// inputs arrive as parameters.
pub struct ViewInputs<'a> {
    pub annotation_path: &'a Path,
    pub query: &'a str,
    pub upload: Option<&'a [u8]>,
    pub bar_gene: Option<&'a str>,
    pub line_genes: &'a [String],
}

pub enum ViewOutput {
    Background(BackgroundView),
    Search(SearchView),
    Visualization(VisualizationView),
}

pub struct BackgroundView {
    pub sections: &'static [TextSection],
}

/// A `Sequence` value wrapped for display: the stored string is both the
/// link target and the visible text. The record itself is not mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceLink {
    pub href: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellView {
    Text(String),
    Link(SequenceLink),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordsView {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<CellView>>,
}

pub enum SearchView {
    /// Nothing typed yet; the mode shows only its intro.
    EmptyQuery,
    /// The annotation source failed to load. Search mode only; the other
    /// modes are unaffected.
    Failed(ExplorerError),
    NoMatch,
    Results(RecordsView),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixSource {
    Sample,
    Upload,
}

#[derive(Debug)]
pub struct MatrixView {
    pub source: MatrixSource,
    pub matrix: ExpressionMatrix,
    pub heatmap: Result<HeatmapSpec, ExplorerError>,
    /// None only when the table has no genes to pick from.
    pub bar: Option<Result<BarChartSpec, ExplorerError>>,
    pub line: Result<LineChartOutcome, ExplorerError>,
    pub box_plot: Result<BoxPlotSpec, ExplorerError>,
}

pub struct VisualizationView {
    /// Err means the upload failed to parse: reported inline, nothing is
    /// drawn, and the sample dataset is NOT silently substituted.
    pub outcome: Result<MatrixView, ExplorerError>,
}

pub fn render(mode: Mode, inputs: &ViewInputs) -> ViewOutput {
    match mode {
        Mode::Background => ViewOutput::Background(BackgroundView {
            sections: content::BACKGROUND_SECTIONS,
        }),
        Mode::Search => ViewOutput::Search(render_search(inputs)),
        Mode::Visualization => ViewOutput::Visualization(render_visualization(inputs)),
    }
}

fn render_search(inputs: &ViewInputs) -> SearchView {
    if inputs.query.is_empty() {
        return SearchView::EmptyQuery;
    }
    let table = match GeneTable::load(inputs.annotation_path) {
        Ok(table) => table,
        Err(err) => {
            log::warn!("annotation load failed: {err}");
            return SearchView::Failed(err);
        }
    };
    let matches = table.filter(inputs.query);
    if matches.is_empty() {
        return SearchView::NoMatch;
    }
    SearchView::Results(linkify(&table, &matches))
}

/// Presentation-only transform: every cell becomes text except the
/// `Sequence` column, which is wrapped as a hyperlink whose href and label
/// are both the stored value.
fn linkify(table: &GeneTable, records: &[&GeneRecord]) -> RecordsView {
    let seq_col = table.column_index(SEQUENCE_COLUMN);
    let rows = records
        .iter()
        .map(|record| {
            record
                .values
                .iter()
                .enumerate()
                .map(|(i, value)| {
                    if Some(i) == seq_col && !value.is_empty() {
                        CellView::Link(SequenceLink {
                            href: value.clone(),
                            label: value.clone(),
                        })
                    } else {
                        CellView::Text(value.clone())
                    }
                })
                .collect()
        })
        .collect();
    RecordsView {
        columns: table.columns.clone(),
        rows,
    }
}

fn render_visualization(inputs: &ViewInputs) -> VisualizationView {
    let loaded = match inputs.upload {
        Some(bytes) => ExpressionMatrix::from_csv(bytes).map(|m| (MatrixSource::Upload, m)),
        None => Ok((MatrixSource::Sample, ExpressionMatrix::sample())),
    };
    let (source, matrix) = match loaded {
        Ok(loaded) => loaded,
        Err(err) => {
            log::warn!("expression upload rejected: {err}");
            return VisualizationView { outcome: Err(err) };
        }
    };

    // The bar chart defaults to the table's first gene, like the original
    // tool's selector.
    let bar_gene = inputs
        .bar_gene
        .or_else(|| matrix.genes().first().map(String::as_str))
        .map(str::to_string);
    let bar = bar_gene.map(|gene| charts::bar_chart(&matrix, &gene));

    let heatmap = charts::heatmap(&matrix);
    let line = charts::line_chart(&matrix, inputs.line_genes);
    let box_plot = charts::box_plot(&matrix);

    VisualizationView {
        outcome: Ok(MatrixView {
            source,
            matrix,
            heatmap,
            bar,
            line,
            box_plot,
        }),
    }
}
