//! Control Panel Widget
//! Left side panel with the year-range control and chart export.

use crate::data::YearRange;
use egui::{Color32, RichText};

/// Left side control panel.
pub struct ControlPanel {
    /// Smallest and largest year in the cleaned table.
    pub bounds: (i32, i32),
    pub range: YearRange,
    pub total_papers: usize,
    pub status: String,
}

impl ControlPanel {
    pub fn new(bounds: (i32, i32), total_papers: usize) -> Self {
        Self {
            bounds,
            range: YearRange::default_within(bounds),
            total_papers,
            status: "Ready".to_string(),
        }
    }

    /// Draw the control panel
    pub fn show(&mut self, ui: &mut egui::Ui) -> ControlPanelAction {
        let mut action = ControlPanelAction::None;

        // Title
        ui.vertical_centered(|ui| {
            ui.add_space(5.0);
            ui.label(
                RichText::new("📊 Paper Explorer")
                    .size(22.0)
                    .color(Color32::from_rgb(100, 149, 237)),
            );
            ui.label(
                RichText::new(format!("{} cleaned papers", self.total_papers))
                    .size(11.0)
                    .color(Color32::GRAY),
            );
        });
        ui.add_space(10.0);
        ui.separator();
        ui.add_space(5.0);

        // ===== Year Range Section =====
        ui.label(RichText::new("📅 Select year range").size(14.0).strong());
        ui.add_space(5.0);

        let (min, max) = self.bounds;
        let before = self.range;
        let mut lo = self.range.lo;
        let mut hi = self.range.hi;

        egui::Frame::none()
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .rounding(5.0)
            .inner_margin(8.0)
            .show(ui, |ui| {
                ui.add(egui::Slider::new(&mut lo, min..=max).text("From"));
                ui.add(egui::Slider::new(&mut hi, min..=max).text("To"));
            });

        // Dragging one handle past the other drags both
        if lo != before.lo && lo > hi {
            hi = lo;
        } else if hi != before.hi && hi < lo {
            lo = hi;
        }
        self.range = YearRange::new(lo, hi);

        if self.range != before {
            action = ControlPanelAction::RangeChanged;
        }

        ui.add_space(5.0);
        if ui.small_button("Reset").clicked() {
            self.range = YearRange::default_within(self.bounds);
            if self.range != before {
                action = ControlPanelAction::RangeChanged;
            }
        }

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Action Buttons =====
        ui.vertical_centered(|ui| {
            let button = egui::Button::new(RichText::new("💾 Save charts").size(14.0))
                .min_size(egui::vec2(150.0, 30.0));
            if ui.add(button).clicked() {
                action = ControlPanelAction::SaveCharts;
            }
        });

        ui.add_space(10.0);

        let status_color = if self.status.contains("Error") {
            Color32::from_rgb(220, 53, 69)
        } else if self.status.contains("Saved") {
            Color32::from_rgb(40, 167, 69)
        } else {
            Color32::GRAY
        };
        ui.label(RichText::new(&self.status).size(11.0).color(status_color));

        action
    }

    pub fn set_status(&mut self, status: &str) {
        self.status = status.to_string();
    }
}

/// Actions triggered by control panel
#[derive(Debug, Clone, PartialEq)]
pub enum ControlPanelAction {
    None,
    RangeChanged,
    SaveCharts,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_clamped_default_range() {
        let panel = ControlPanel::new((2017, 2023), 10);
        assert_eq!(panel.range, YearRange::new(2017, 2021));
        assert_eq!(panel.status, "Ready");
    }
}
