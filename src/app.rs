//! Main application state and UI

use std::path::PathBuf;

use eframe::egui;
use egui_plot::{
    Bar, BarChart, BoxElem, BoxPlot, BoxSpread, Legend, Line, Plot, PlotPoints, Points,
};

use crate::charts::{
    BarChartSpec, BoxPlotSpec, HeatmapSpec, LineChartOutcome, LineChartSpec,
    NO_SELECTION_ADVISORY,
};
use crate::content;
use crate::view::{
    self, CellView, MatrixSource, MatrixView, Mode, RecordsView, SearchView, ViewInputs,
    ViewOutput, VisualizationView,
};

/// Default annotation source, relative to the working directory.
const DEFAULT_ANNOTATION_PATH: &str = "data/hypothyroidism.csv";
/// Environment override for the annotation source path.
const ANNOTATION_PATH_ENV: &str = "GENE_EXPLORER_DATA";
/// Illustrative image shown below the search bar when the file exists.
const SEARCH_IMAGE_PATH: &str = "assets/hypothyroidism.jpg";

/// An uploaded expression file held in memory for the session.
struct UploadedFile {
    file_name: String,
    bytes: Vec<u8>,
}

/// Application state
pub struct GeneExplorerApp {
    mode: Mode,

    // Search mode state
    query: String,
    annotation_path: PathBuf,
    search: Option<SearchView>,

    // Visualization mode state
    upload: Option<UploadedFile>,
    upload_read_error: Option<String>,
    bar_gene: Option<String>,
    line_genes: Vec<String>,
    visualization: Option<VisualizationView>,

    // Export
    export_error: Option<String>,
}

impl Default for GeneExplorerApp {
    fn default() -> Self {
        let annotation_path = std::env::var(ANNOTATION_PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_ANNOTATION_PATH));
        Self {
            mode: Mode::Background,
            query: String::new(),
            annotation_path,
            search: None,
            upload: None,
            upload_read_error: None,
            bar_gene: None,
            line_genes: Vec::new(),
            visualization: None,
            export_error: None,
        }
    }
}

impl GeneExplorerApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        egui_extras::install_image_loaders(&cc.egui_ctx);
        Self::default()
    }

    fn inputs(&self) -> ViewInputs<'_> {
        ViewInputs {
            annotation_path: &self.annotation_path,
            query: &self.query,
            upload: self.upload.as_ref().map(|u| u.bytes.as_slice()),
            bar_gene: self.bar_gene.as_deref(),
            line_genes: &self.line_genes,
        }
    }

    /// Re-derive the Search output. Reads the annotation file fresh.
    fn refresh_search(&mut self) {
        let output = view::render(Mode::Search, &self.inputs());
        if let ViewOutput::Search(search) = output {
            self.search = Some(search);
        }
    }

    /// Re-derive the Visualization output from the upload or the sample.
    fn refresh_visualization(&mut self) {
        let output = view::render(Mode::Visualization, &self.inputs());
        if let ViewOutput::Visualization(visualization) = output {
            self.visualization = Some(visualization);
        }
    }

    /// Nothing survives a mode switch; the entered mode re-derives its
    /// data on the next frame.
    fn on_mode_change(&mut self) {
        self.search = None;
        self.visualization = None;
    }

    fn load_expression_file(&mut self) {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("CSV", &["csv"])
            .pick_file()
        {
            match std::fs::read(&path) {
                Ok(bytes) => {
                    let file_name = path
                        .file_name()
                        .map(|n| n.to_string_lossy().to_string())
                        .unwrap_or_else(|| "unknown".to_string());
                    self.upload = Some(UploadedFile { file_name, bytes });
                    self.upload_read_error = None;
                    // selections belong to the previous table
                    self.bar_gene = None;
                    self.line_genes.clear();
                    self.refresh_visualization();
                }
                Err(e) => {
                    self.upload_read_error = Some(format!("Failed to read file: {}", e));
                }
            }
        }
    }

    fn clear_upload(&mut self) {
        self.upload = None;
        self.upload_read_error = None;
        self.bar_gene = None;
        self.line_genes.clear();
        self.refresh_visualization();
    }

    fn choose_annotation_file(&mut self) {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("CSV", &["csv"])
            .pick_file()
        {
            self.annotation_path = path;
            self.search = None;
        }
    }

    fn chart_export_json(&self) -> Result<String, String> {
        let Some(view) = &self.visualization else {
            return Err("Nothing to export yet".to_string());
        };
        let Ok(mv) = &view.outcome else {
            return Err("Nothing to export: the last upload failed to parse".to_string());
        };
        let line_chart = match &mv.line {
            Ok(LineChartOutcome::Chart(spec)) => Some(spec),
            _ => None,
        };
        let export = ChartExport {
            heatmap: mv.heatmap.as_ref().ok(),
            bar_chart: mv.bar.as_ref().and_then(|r| r.as_ref().ok()),
            line_chart,
            box_plot: mv.box_plot.as_ref().ok(),
        };
        serde_json::to_string_pretty(&export).map_err(|e| format!("Failed to serialize: {}", e))
    }

    fn export_chart_data(&mut self) {
        let json = match self.chart_export_json() {
            Ok(json) => json,
            Err(message) => {
                self.export_error = Some(message);
                return;
            }
        };
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("JSON", &["json"])
            .set_file_name("chart_data.json")
            .save_file()
        {
            match std::fs::write(&path, json) {
                Ok(()) => self.export_error = None,
                Err(e) => self.export_error = Some(format!("Failed to write file: {}", e)),
            }
        }
    }
}

impl eframe::App for GeneExplorerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Re-derive the active mode's output if a switch or an
        // invalidation cleared it.
        match self.mode {
            Mode::Search if self.search.is_none() => self.refresh_search(),
            Mode::Visualization if self.visualization.is_none() => self.refresh_visualization(),
            _ => {}
        }

        // Top menu bar
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Upload Expression CSV...").clicked() {
                        self.load_expression_file();
                        ui.close_menu();
                    }
                    let has_upload = self.upload.is_some();
                    if ui
                        .add_enabled(has_upload, egui::Button::new("Use Sample Dataset"))
                        .clicked()
                    {
                        self.clear_upload();
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Choose Annotation File...").clicked() {
                        self.choose_annotation_file();
                        ui.close_menu();
                    }
                    ui.separator();
                    let can_export = self.visualization.is_some();
                    if ui
                        .add_enabled(can_export, egui::Button::new("Save Chart Data..."))
                        .clicked()
                    {
                        self.export_chart_data();
                        ui.close_menu();
                    }
                });
            });
        });

        // Mode selector
        egui::TopBottomPanel::top("mode_bar").show(ctx, |ui| {
            ui.heading(content::APP_TITLE);
            ui.separator();
            let previous = self.mode;
            ui.horizontal(|ui| {
                ui.selectable_value(&mut self.mode, Mode::Background, "Scientific Background");
                ui.selectable_value(&mut self.mode, Mode::Search, "Hypothyroidism Gene Search");
                ui.selectable_value(
                    &mut self.mode,
                    Mode::Visualization,
                    "Gene Expression Visualization",
                );
            });
            if self.mode != previous {
                self.on_mode_change();
            }
        });

        // Status bar
        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if let Some(ref err) = self.export_error {
                    ui.colored_label(egui::Color32::RED, err);
                    ui.separator();
                }
                let mut parts = vec![format!("Annotations: {}", self.annotation_path.display())];
                if let Some(view) = &self.visualization {
                    if let Ok(mv) = &view.outcome {
                        parts.push(format!(
                            "Expression: {} genes x {} samples",
                            mv.matrix.genes().len(),
                            mv.matrix.samples().len()
                        ));
                    }
                }
                if let Some(SearchView::Results(results)) = &self.search {
                    parts.push(format!("{} matching record(s)", results.rows.len()));
                }
                ui.label(parts.join(" | "));
            });
        });

        // Main content
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                match self.mode {
                    Mode::Background => self.show_background(ui),
                    Mode::Search => self.show_search(ui),
                    Mode::Visualization => self.show_visualization(ui),
                }

                ui.add_space(10.0);
                ui.separator();
                ui.group(|ui| {
                    ui.heading("About");
                    ui.label(content::ABOUT);
                });
            });
        });
    }
}

impl GeneExplorerApp {
    fn show_background(&mut self, ui: &mut egui::Ui) {
        ui.heading("Scientific Background");
        ui.separator();
        if let ViewOutput::Background(view) = view::render(Mode::Background, &self.inputs()) {
            for section in view.sections {
                ui.add_space(5.0);
                ui.heading(section.heading);
                ui.label(section.body);
            }
        }
    }

    fn show_search(&mut self, ui: &mut egui::Ui) {
        ui.heading("Hypothyroidism Gene Search");
        ui.separator();
        ui.label(content::SEARCH_INTRO);
        ui.add_space(10.0);

        ui.heading("Search for Gene Information");
        ui.horizontal(|ui| {
            ui.label("Enter Gene Name:");
            let response = ui.text_edit_singleline(&mut self.query);
            if response.changed() {
                self.refresh_search();
            }
        });

        if std::path::Path::new(SEARCH_IMAGE_PATH).exists() {
            ui.add_space(5.0);
            ui.add(egui::Image::from_uri(format!("file://{SEARCH_IMAGE_PATH}")).max_width(400.0));
            ui.colored_label(egui::Color32::GRAY, content::SEARCH_IMAGE_CAPTION);
        }

        ui.add_space(10.0);
        match &self.search {
            None | Some(SearchView::EmptyQuery) => {}
            Some(SearchView::Failed(err)) => {
                ui.colored_label(egui::Color32::RED, format!("Error: {}", err));
            }
            Some(SearchView::NoMatch) => {
                ui.colored_label(egui::Color32::GRAY, content::NO_MATCH_MESSAGE);
            }
            Some(SearchView::Results(results)) => {
                ui.heading("Search Results");
                draw_records_table(ui, results);
            }
        }
    }

    fn show_visualization(&mut self, ui: &mut egui::Ui) {
        ui.heading("Gene Expression Visualization Tool");
        ui.separator();
        ui.label(content::VISUALIZATION_INTRO);
        ui.add_space(10.0);

        // --- Data source ---
        ui.group(|ui| {
            ui.horizontal(|ui| {
                ui.heading("Gene Expression Data");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if self.upload.is_some() && ui.button("Use Sample Dataset").clicked() {
                        self.clear_upload();
                    }
                    if ui.button("Upload CSV").clicked() {
                        self.load_expression_file();
                    }
                });
            });
            ui.label("First column: gene name. First row: sample names. All other cells numeric.");

            if let Some(ref error) = self.upload_read_error {
                ui.colored_label(egui::Color32::RED, format!("Error: {}", error));
            }
            if let Some(ref upload) = self.upload {
                ui.colored_label(
                    egui::Color32::from_rgb(100, 200, 100),
                    format!("File: {}", upload.file_name),
                );
            } else {
                ui.colored_label(egui::Color32::GRAY, "Using the built-in sample dataset");
            }
        });

        ui.add_space(10.0);

        // Draw from the cached render output; selection changes are
        // applied after the borrow ends.
        let mut bar_pick: Option<String> = None;
        let mut line_toggle: Option<String> = None;

        if let Some(view) = &self.visualization {
            match &view.outcome {
                Err(err) => {
                    ui.colored_label(egui::Color32::RED, format!("Error: {}", err));
                    ui.colored_label(
                        egui::Color32::GRAY,
                        "Fix the file and upload it again; nothing is drawn until then.",
                    );
                }
                Ok(mv) => {
                    self.show_matrix_view(ui, mv, &mut bar_pick, &mut line_toggle);
                }
            }
        }

        if let Some(gene) = bar_pick {
            self.bar_gene = Some(gene);
            self.refresh_visualization();
        }
        if let Some(gene) = line_toggle {
            if let Some(pos) = self.line_genes.iter().position(|g| *g == gene) {
                self.line_genes.remove(pos);
            } else {
                self.line_genes.push(gene);
            }
            self.refresh_visualization();
        }
    }

    fn show_matrix_view(
        &self,
        ui: &mut egui::Ui,
        mv: &MatrixView,
        bar_pick: &mut Option<String>,
        line_toggle: &mut Option<String>,
    ) {
        // Dataset preview
        draw_matrix_table(ui, mv);

        // Heatmap
        ui.add_space(10.0);
        ui.heading("Gene Expression Heatmap");
        ui.label(content::HEATMAP_CAPTION);
        match &mv.heatmap {
            Ok(spec) => draw_heatmap(ui, spec),
            Err(err) => {
                ui.colored_label(egui::Color32::GRAY, format!("{}", err));
            }
        }

        // Bar plot
        ui.add_space(10.0);
        ui.heading("Gene Expression Bar Plot");
        ui.label(content::BAR_CAPTION);
        if let Some(bar) = &mv.bar {
            ui.horizontal(|ui| {
                ui.label("Select Gene for Bar Plot:");
                let current = self
                    .bar_gene
                    .clone()
                    .or_else(|| mv.matrix.genes().first().cloned())
                    .unwrap_or_default();
                let mut selected = current.clone();
                egui::ComboBox::from_id_salt("bar_gene_selector")
                    .selected_text(&selected)
                    .show_ui(ui, |ui| {
                        for gene in mv.matrix.genes() {
                            ui.selectable_value(&mut selected, gene.clone(), gene);
                        }
                    });
                if selected != current {
                    *bar_pick = Some(selected);
                }
            });
            match bar {
                Ok(spec) => draw_bar_chart(ui, spec),
                Err(err) => {
                    ui.colored_label(egui::Color32::GRAY, format!("{}", err));
                }
            }
        } else {
            ui.colored_label(egui::Color32::GRAY, "No genes available to plot.");
        }

        // Line plot
        ui.add_space(10.0);
        ui.heading("Gene Expression Line Plot");
        ui.label(content::LINE_CAPTION);
        ui.horizontal_wrapped(|ui| {
            ui.label("Select Genes for Line Plot:");
            for gene in mv.matrix.genes() {
                let mut checked = self.line_genes.contains(gene);
                if ui.checkbox(&mut checked, gene).changed() {
                    *line_toggle = Some(gene.clone());
                }
            }
        });
        match &mv.line {
            Ok(LineChartOutcome::Chart(spec)) => draw_line_chart(ui, spec),
            Ok(LineChartOutcome::NoSelection) => {
                ui.colored_label(egui::Color32::YELLOW, NO_SELECTION_ADVISORY);
            }
            Err(err) => {
                ui.colored_label(egui::Color32::GRAY, format!("{}", err));
            }
        }

        // Box plot
        ui.add_space(10.0);
        ui.heading("Gene Expression Distribution (Box Plot)");
        ui.label(content::BOX_CAPTION);
        match &mv.box_plot {
            Ok(spec) => draw_box_plot(ui, spec),
            Err(err) => {
                ui.colored_label(egui::Color32::GRAY, format!("{}", err));
            }
        }

        if mv.source == MatrixSource::Upload {
            ui.add_space(5.0);
            ui.colored_label(
                egui::Color32::GRAY,
                "Charts reflect the uploaded table; the previous dataset was replaced entirely.",
            );
        }
    }
}

/// Search results as a striped grid; the Sequence column renders as a
/// clickable hyperlink whose target and text are the stored value.
fn draw_records_table(ui: &mut egui::Ui, results: &RecordsView) {
    egui::ScrollArea::horizontal()
        .id_salt("records_scroll")
        .show(ui, |ui| {
            egui::Grid::new("records_grid")
                .striped(true)
                .min_col_width(60.0)
                .show(ui, |ui| {
                    for column in &results.columns {
                        ui.strong(column);
                    }
                    ui.end_row();

                    for row in &results.rows {
                        for cell in row {
                            match cell {
                                CellView::Text(value) => {
                                    ui.label(value);
                                }
                                CellView::Link(link) => {
                                    ui.hyperlink_to(&link.label, &link.href);
                                }
                            }
                        }
                        ui.end_row();
                    }
                });
        });
}

/// Dataset preview: gene rows, sample columns.
fn draw_matrix_table(ui: &mut egui::Ui, mv: &MatrixView) {
    egui::ScrollArea::horizontal()
        .id_salt("matrix_scroll")
        .show(ui, |ui| {
            egui::Grid::new("matrix_grid")
                .striped(true)
                .min_col_width(60.0)
                .show(ui, |ui| {
                    ui.strong("Gene");
                    for sample in mv.matrix.samples() {
                        ui.strong(sample);
                    }
                    ui.end_row();

                    for (gene, values) in mv.matrix.genes().iter().zip(mv.matrix.values()) {
                        ui.label(gene);
                        for value in values {
                            ui.label(format!("{}", value));
                        }
                        ui.end_row();
                    }
                });
        });
}

/// Painted heatmap grid: samples as rows, genes as columns, each cell
/// annotated with its value and colored on the diverging scale over the
/// observed range.
fn draw_heatmap(ui: &mut egui::Ui, spec: &HeatmapSpec) {
    let cell_w: f32 = 84.0;
    let cell_h: f32 = 30.0;
    let label_width: f32 = 90.0;
    let header_height: f32 = 20.0;

    let num_cols = spec.col_labels.len();
    let num_rows = spec.row_labels.len();
    let total_width = label_width + num_cols as f32 * cell_w;
    let total_height = header_height + num_rows as f32 * cell_h;

    egui::ScrollArea::horizontal()
        .id_salt("heatmap_scroll")
        .show(ui, |ui| {
            let (response, painter) =
                ui.allocate_painter(egui::vec2(total_width, total_height), egui::Sense::hover());
            let origin = response.rect.min;

            // --- Gene names across the top ---
            for (col, label) in spec.col_labels.iter().enumerate() {
                let x = origin.x + label_width + col as f32 * cell_w + cell_w / 2.0;
                painter.text(
                    egui::pos2(x, origin.y + header_height / 2.0),
                    egui::Align2::CENTER_CENTER,
                    label,
                    egui::FontId::proportional(11.0),
                    egui::Color32::LIGHT_GRAY,
                );
            }

            // --- Row labels (samples) ---
            let grid_y = origin.y + header_height;
            for (row, label) in spec.row_labels.iter().enumerate() {
                let y = grid_y + row as f32 * cell_h + cell_h / 2.0;
                painter.text(
                    egui::pos2(origin.x + label_width - 5.0, y),
                    egui::Align2::RIGHT_CENTER,
                    label,
                    egui::FontId::proportional(11.0),
                    egui::Color32::LIGHT_GRAY,
                );
            }

            // --- Cells ---
            let mut hovered: Option<(usize, usize)> = None;
            for (row, values) in spec.values.iter().enumerate() {
                for (col, value) in values.iter().enumerate() {
                    let cell_rect = egui::Rect::from_min_size(
                        egui::pos2(
                            origin.x + label_width + col as f32 * cell_w,
                            grid_y + row as f32 * cell_h,
                        ),
                        egui::vec2(cell_w - 1.0, cell_h - 1.0),
                    );
                    let color = diverging_color(*value, spec.min, spec.max);
                    painter.rect_filled(cell_rect, 1.0, color);
                    painter.text(
                        cell_rect.center(),
                        egui::Align2::CENTER_CENTER,
                        format!("{value:.1}"),
                        egui::FontId::monospace(10.0),
                        annotation_color(color),
                    );

                    if let Some(pointer_pos) = response.hover_pos() {
                        if cell_rect.contains(pointer_pos) {
                            hovered = Some((row, col));
                            painter.rect_stroke(
                                cell_rect,
                                1.0,
                                egui::Stroke::new(1.5, egui::Color32::WHITE),
                                egui::StrokeKind::Outside,
                            );
                        }
                    }
                }
            }

            if let Some((row, col)) = hovered {
                let value = spec.values[row][col];
                response.clone().on_hover_text(format!(
                    "{} / {}: {}",
                    spec.row_labels[row], spec.col_labels[col], value
                ));
            }
        });

    // Color-scale legend over the observed range
    ui.add_space(5.0);
    ui.horizontal(|ui| {
        ui.label("Scale:");
        let mid = (spec.min + spec.max) / 2.0;
        for value in [spec.min, mid, spec.max] {
            let color = diverging_color(value, spec.min, spec.max);
            let (rect, _) = ui.allocate_exact_size(egui::vec2(15.0, 15.0), egui::Sense::hover());
            ui.painter().rect_filled(rect, 2.0, color);
            ui.label(format!("{value:.1}"));
            ui.add_space(8.0);
        }
    });
}

fn draw_bar_chart(ui: &mut egui::Ui, spec: &BarChartSpec) {
    let bars: Vec<Bar> = spec
        .values
        .iter()
        .enumerate()
        .map(|(i, v)| Bar::new(i as f64, *v).width(0.6))
        .collect();
    let labels = spec.sample_labels.clone();
    Plot::new("bar_plot")
        .height(260.0)
        .legend(Legend::default())
        .x_axis_formatter(move |mark, _range| axis_label(&labels, mark.value))
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars).name(&spec.gene));
        });
}

fn draw_line_chart(ui: &mut egui::Ui, spec: &LineChartSpec) {
    let labels = spec.sample_labels.clone();
    Plot::new("line_plot")
        .height(260.0)
        .legend(Legend::default())
        .x_axis_formatter(move |mark, _range| axis_label(&labels, mark.value))
        .show(ui, |plot_ui| {
            for series in &spec.series {
                let points: PlotPoints = series
                    .values
                    .iter()
                    .enumerate()
                    .map(|(i, v)| [i as f64, *v])
                    .collect();
                plot_ui.line(Line::new(points).name(&series.gene));
            }
        });
}

fn draw_box_plot(ui: &mut egui::Ui, spec: &BoxPlotSpec) {
    let elems: Vec<BoxElem> = spec
        .boxes
        .iter()
        .enumerate()
        .map(|(i, stats)| {
            BoxElem::new(
                i as f64,
                BoxSpread::new(
                    stats.whisker_low,
                    stats.q1,
                    stats.median,
                    stats.q3,
                    stats.whisker_high,
                ),
            )
            .name(&spec.sample_labels[i])
            .box_width(0.5)
        })
        .collect();
    let outliers: Vec<[f64; 2]> = spec
        .boxes
        .iter()
        .enumerate()
        .flat_map(|(i, stats)| stats.outliers.iter().map(move |v| [i as f64, *v]))
        .collect();
    let labels = spec.sample_labels.clone();
    Plot::new("box_plot")
        .height(260.0)
        .x_axis_formatter(move |mark, _range| axis_label(&labels, mark.value))
        .show(ui, |plot_ui| {
            plot_ui.box_plot(BoxPlot::new(elems));
            if !outliers.is_empty() {
                plot_ui.points(
                    Points::new(PlotPoints::from(outliers))
                        .radius(2.5)
                        .color(egui::Color32::LIGHT_RED),
                );
            }
        });
}

/// Integer plot positions map to sample names; everything else is blank.
fn axis_label(labels: &[String], value: f64) -> String {
    let idx = value.round();
    if (value - idx).abs() > 0.05 || idx < 0.0 {
        return String::new();
    }
    labels.get(idx as usize).cloned().unwrap_or_default()
}

/// Map a value in [min, max] onto the diverging color scale. A degenerate
/// range lands on the midpoint.
fn diverging_color(value: f64, min: f64, max: f64) -> egui::Color32 {
    let t = if max > min {
        ((value - min) / (max - min)).clamp(0.0, 1.0)
    } else {
        0.5
    };
    let (r, g, b) = diverging_from_t(t);
    egui::Color32::from_rgb(r as u8, g as u8, b as u8)
}

/// 3-stop gradient: cool blue -> near-white -> warm red. Returns (r, g, b)
/// as f64.
fn diverging_from_t(t: f64) -> (f64, f64, f64) {
    let blue = (59.0f64, 76.0f64, 192.0f64);
    let white = (221.0f64, 221.0f64, 221.0f64);
    let red = (180.0f64, 4.0f64, 38.0f64);

    if t <= 0.5 {
        let s = t * 2.0;
        (
            blue.0 + (white.0 - blue.0) * s,
            blue.1 + (white.1 - blue.1) * s,
            blue.2 + (white.2 - blue.2) * s,
        )
    } else {
        let s = (t - 0.5) * 2.0;
        (
            white.0 + (red.0 - white.0) * s,
            white.1 + (red.1 - white.1) * s,
            white.2 + (red.2 - white.2) * s,
        )
    }
}

/// Annotation text color readable against the cell fill.
fn annotation_color(fill: egui::Color32) -> egui::Color32 {
    let luma = 0.299 * fill.r() as f64 + 0.587 * fill.g() as f64 + 0.114 * fill.b() as f64;
    if luma < 140.0 {
        egui::Color32::WHITE
    } else {
        egui::Color32::from_rgb(30, 30, 30)
    }
}

#[derive(serde::Serialize)]
struct ChartExport<'a> {
    heatmap: Option<&'a HeatmapSpec>,
    bar_chart: Option<&'a BarChartSpec>,
    line_chart: Option<&'a LineChartSpec>,
    box_plot: Option<&'a BoxPlotSpec>,
}
