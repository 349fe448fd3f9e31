//! Chart Plotter Module
//! Creates interactive visualizations using egui_plot.

use crate::stats::{JournalCount, YearCount, YearMean};
use egui::{Color32, RichText};
use egui_plot::{Bar, BarChart, Line, Plot, PlotPoints, Points};

/// Series colors
pub const COUNT_COLOR: Color32 = Color32::from_rgb(52, 152, 219); // Blue
pub const JOURNAL_COLOR: Color32 = Color32::from_rgb(46, 204, 113); // Green
pub const WORD_COUNT_COLOR: Color32 = Color32::from_rgb(243, 156, 18); // Orange

/// Longest journal name shown on an axis before it is cut.
pub const MAX_LABEL_CHARS: usize = 24;

/// Shorten `text` to at most `max` characters, marking the cut with an ellipsis.
pub fn truncate_label(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let kept: String = text.chars().take(max.saturating_sub(1)).collect();
        format!("{kept}…")
    }
}

/// Creates the three explorer charts using egui_plot.
pub struct ChartPlotter;

impl ChartPlotter {
    /// Placeholder shown when the selected range holds no papers.
    fn draw_empty(ui: &mut egui::Ui, height: f32) {
        ui.allocate_ui(egui::vec2(ui.available_width(), height), |ui| {
            ui.centered_and_justified(|ui| {
                ui.label(RichText::new("No papers in range").color(Color32::GRAY));
            });
        });
    }

    /// Line chart of papers per year.
    pub fn draw_yearly_counts(ui: &mut egui::Ui, counts: &[YearCount], height: f32) {
        let points: Vec<[f64; 2]> = counts
            .iter()
            .map(|c| [c.year as f64, c.count as f64])
            .collect();
        Self::draw_year_line(
            ui,
            "pub_trends",
            "Number of Papers",
            "Papers",
            &points,
            COUNT_COLOR,
            height,
        );
    }

    /// Line chart of mean abstract word count per year.
    pub fn draw_yearly_means(ui: &mut egui::Ui, means: &[YearMean], height: f32) {
        let points: Vec<[f64; 2]> = means.iter().map(|m| [m.year as f64, m.mean]).collect();
        Self::draw_year_line(
            ui,
            "avg_wordcount",
            "Average Word Count",
            "Mean words",
            &points,
            WORD_COUNT_COLOR,
            height,
        );
    }

    /// Year-indexed line with point markers.
    fn draw_year_line(
        ui: &mut egui::Ui,
        id: &str,
        y_label: &str,
        series_name: &str,
        points: &[[f64; 2]],
        color: Color32,
        height: f32,
    ) {
        if points.is_empty() {
            Self::draw_empty(ui, height);
            return;
        }

        Plot::new(id)
            .height(height)
            .allow_zoom(false)
            .allow_drag(false)
            .allow_scroll(false)
            .x_axis_label("Year")
            .y_axis_label(y_label)
            .include_y(0.0)
            // Whole years only
            .x_axis_formatter(|mark, _range| {
                if mark.value.fract() == 0.0 {
                    format!("{}", mark.value as i64)
                } else {
                    String::new()
                }
            })
            .show(ui, |plot_ui| {
                plot_ui.line(
                    Line::new(PlotPoints::from_iter(points.iter().copied()))
                        .color(color)
                        .width(2.0)
                        .name(series_name),
                );
                plot_ui.points(
                    Points::new(PlotPoints::from_iter(points.iter().copied()))
                        .radius(4.0)
                        .color(color),
                );
            });
    }

    /// Bar chart of the top journals, most papers first.
    pub fn draw_top_journals(ui: &mut egui::Ui, journals: &[JournalCount], height: f32) {
        if journals.is_empty() {
            Self::draw_empty(ui, height);
            return;
        }

        let x_labels: Vec<String> = journals
            .iter()
            .map(|j| truncate_label(&j.journal, MAX_LABEL_CHARS))
            .collect();

        let bars: Vec<Bar> = journals
            .iter()
            .enumerate()
            .map(|(i, j)| {
                Bar::new(i as f64, j.count as f64)
                    .width(0.6)
                    .name(&j.journal)
                    .fill(JOURNAL_COLOR)
            })
            .collect();

        Plot::new("top_journals")
            .height(height)
            .allow_zoom(false)
            .allow_drag(false)
            .allow_scroll(false)
            .x_axis_label("Journal")
            .y_axis_label("Number of Papers")
            .include_y(0.0)
            .x_axis_formatter(move |mark, _range| {
                let v = mark.value;
                if v < 0.0 || v.fract() != 0.0 {
                    return String::new();
                }
                x_labels.get(v as usize).cloned().unwrap_or_default()
            })
            .show(ui, |plot_ui| {
                plot_ui.bar_chart(BarChart::new(bars).color(JOURNAL_COLOR).name("Papers"));
            });
    }
}
