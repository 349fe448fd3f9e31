//! Chart Viewer Widget
//! Right side scrollable panel with the three summary charts and a preview of
//! the filtered rows.

use crate::charts::{truncate_label, ChartPlotter};
use crate::data::{filter_by_year, Paper, PaperTable, YearRange};
use crate::stats::{Summary, DEFAULT_TOP_N};
use egui::{Color32, RichText, ScrollArea};

/// Rows shown in the sample preview.
pub const PREVIEW_ROWS: usize = 20;

const CHART_HEIGHT: f32 = 260.0;
const CHART_SPACING: f32 = 15.0;
const PREVIEW_TEXT_CHARS: usize = 60;

/// Current view: summaries and preview for one year range.
pub struct ChartViewer {
    pub range: YearRange,
    pub summary: Summary,
    pub preview: Vec<Paper>,
}

impl ChartViewer {
    /// Filter `table` to `range` and aggregate the result.
    pub fn compute(table: &PaperTable, range: YearRange) -> Self {
        let filtered = filter_by_year(table, range);
        Self {
            range,
            summary: Summary::compute(&filtered, DEFAULT_TOP_N),
            preview: filtered.head(PREVIEW_ROWS).to_vec(),
        }
    }

    /// Draw the header, charts and preview table.
    pub fn show(&self, ui: &mut egui::Ui) {
        ui.label(RichText::new("📊 CORD-19 Data Explorer").size(22.0).strong());
        ui.label("Interactive exploration of COVID-19 research papers using the metadata dataset.");
        ui.label(format!(
            "Showing data for {} papers between {} and {}.",
            self.summary.papers, self.range.lo, self.range.hi
        ));
        ui.add_space(CHART_SPACING);

        ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                Self::section(ui, "📈 Publications per Year");
                ChartPlotter::draw_yearly_counts(ui, &self.summary.yearly_counts, CHART_HEIGHT);
                ui.add_space(CHART_SPACING);

                Self::section(ui, &format!("📊 Top {DEFAULT_TOP_N} Journals"));
                ChartPlotter::draw_top_journals(ui, &self.summary.top_journals, CHART_HEIGHT);
                ui.add_space(CHART_SPACING);

                Self::section(ui, "📝 Average Abstract Word Count per Year");
                ChartPlotter::draw_yearly_means(
                    ui,
                    &self.summary.yearly_mean_word_count,
                    CHART_HEIGHT,
                );
                ui.add_space(CHART_SPACING);

                Self::section(ui, "🔍 Sample Data Preview");
                self.draw_preview(ui);
            });
    }

    fn section(ui: &mut egui::Ui, title: &str) {
        ui.label(RichText::new(title).size(16.0).strong());
        ui.add_space(4.0);
    }

    fn draw_preview(&self, ui: &mut egui::Ui) {
        if self.preview.is_empty() {
            ui.label(RichText::new("No rows").color(Color32::GRAY));
            return;
        }

        egui::Frame::none()
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .rounding(5.0)
            .inner_margin(8.0)
            .show(ui, |ui| {
                ScrollArea::horizontal().id_salt("preview_scroll").show(ui, |ui| {
                    egui::Grid::new("preview_table")
                        .striped(true)
                        .spacing([12.0, 4.0])
                        .show(ui, |ui| {
                            for header in [
                                "title",
                                "abstract",
                                "publish_time",
                                "authors",
                                "journal",
                                "source_x",
                                "year",
                                "abstract_word_count",
                            ] {
                                ui.label(RichText::new(header).strong().size(11.0));
                            }
                            ui.end_row();

                            for paper in &self.preview {
                                for cell in preview_cells(paper) {
                                    ui.label(RichText::new(cell).size(11.0));
                                }
                                ui.end_row();
                            }
                        });
                });
            });
    }
}

/// Display strings for one preview row, long text cut short.
fn preview_cells(paper: &Paper) -> [String; 8] {
    [
        truncate_label(&paper.title, PREVIEW_TEXT_CHARS),
        truncate_label(&paper.abstract_text, PREVIEW_TEXT_CHARS),
        paper.publish_time.to_string(),
        paper
            .authors
            .as_deref()
            .map(|a| truncate_label(a, PREVIEW_TEXT_CHARS))
            .unwrap_or_default(),
        truncate_label(&paper.journal, PREVIEW_TEXT_CHARS),
        paper.source_x.clone().unwrap_or_default(),
        paper.year.to_string(),
        paper.abstract_word_count.to_string(),
    ]
}
