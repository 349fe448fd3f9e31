//! Paper Explorer Main Application
//! Main window with the year-range control panel and the chart viewer.

use crate::charts::{ChartKind, StaticChartRenderer};
use crate::data::{PaperTable, DEFAULT_YEAR_RANGE};
use crate::gui::{ChartViewer, ControlPanel, ControlPanelAction};
use egui::SidePanel;
use tracing::{error, info};

/// Main application window.
pub struct ExplorerApp {
    table: &'static PaperTable,
    control_panel: ControlPanel,
    chart_viewer: ChartViewer,
}

impl ExplorerApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, table: &'static PaperTable) -> Self {
        let bounds = table.year_bounds().unwrap_or(DEFAULT_YEAR_RANGE);
        let control_panel = ControlPanel::new(bounds, table.len());
        let chart_viewer = ChartViewer::compute(table, control_panel.range);
        Self {
            table,
            control_panel,
            chart_viewer,
        }
    }

    /// Re-run filter and aggregation for the current range.
    fn handle_range_changed(&mut self) {
        self.chart_viewer = ChartViewer::compute(self.table, self.control_panel.range);
        self.control_panel.set_status("Ready");
    }

    /// Save the currently shown charts as PNG files into a picked folder.
    fn handle_save_charts(&mut self) {
        let Some(dir) = rfd::FileDialog::new().pick_folder() else {
            return; // User cancelled
        };

        let mut saved = 0;
        for kind in ChartKind::ALL {
            match StaticChartRenderer::save_chart(kind, &self.chart_viewer.summary, &dir) {
                Ok(_) => saved += 1,
                Err(e) => {
                    error!(chart = kind.file_name(), error = %e, "failed to save chart");
                    self.control_panel
                        .set_status(&format!("Error: {}", e));
                    return;
                }
            }
        }

        info!(dir = %dir.display(), saved, "exported charts");
        self.control_panel
            .set_status(&format!("Saved {} charts to {}", saved, dir.display()));
    }
}

impl eframe::App for ExplorerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Left panel - Control Panel
        SidePanel::left("control_panel")
            .min_width(280.0)
            .max_width(340.0)
            .show(ctx, |ui| {
                let action = self.control_panel.show(ui);

                match action {
                    ControlPanelAction::RangeChanged => self.handle_range_changed(),
                    ControlPanelAction::SaveCharts => self.handle_save_charts(),
                    ControlPanelAction::None => {}
                }
            });

        // Central panel - Chart Viewer
        egui::CentralPanel::default().show(ctx, |ui| {
            self.chart_viewer.show(ui);
        });
    }
}
