//! GUI module - User interface components

mod app;
mod chart_viewer;
mod control_panel;

pub use app::ExplorerApp;
pub use chart_viewer::{ChartViewer, PREVIEW_ROWS};
pub use control_panel::{ControlPanel, ControlPanelAction};

use crate::data::PaperTable;
use eframe::egui;

/// Open the explorer window and block until it is closed.
pub fn run_explorer(table: &'static PaperTable) -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1300.0, 900.0])
            .with_min_inner_size([900.0, 600.0])
            .with_title("Paper Explorer"),
        ..Default::default()
    };

    eframe::run_native(
        "Paper Explorer",
        options,
        Box::new(move |cc| Ok(Box::new(ExplorerApp::new(cc, table)))),
    )
}
