//! Charts module - Chart rendering

mod plotter;
mod renderer;

pub use plotter::{truncate_label, ChartPlotter, MAX_LABEL_CHARS};
pub use renderer::{ChartKind, RenderError, StaticChartRenderer};
