//! Static Chart Renderer
//! Draws the three summary charts into in-memory bitmaps with plotters and
//! encodes them as PNG.
//!
//! Layout of every image:
//! 1. Title centered at the top
//! 2. Plot area with labelled axes
//! 3. Year charts: line + point markers; journal chart: vertical bars with
//!    rotated labels

use crate::charts::plotter::{truncate_label, MAX_LABEL_CHARS};
use crate::data::DEFAULT_YEAR_RANGE;
use crate::stats::{JournalCount, Summary};
use image::{ImageFormat, RgbImage};
use plotters::coord::Shift;
use plotters::drawing::DrawingAreaErrorKind;
use plotters::prelude::*;
use plotters::style::FontTransform;
use std::io::Cursor;
use std::ops::Range;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

// Colors (match the interactive palette)
const BLUE: RGBColor = RGBColor(52, 152, 219);
const GREEN: RGBColor = RGBColor(46, 204, 113);
const ORANGE: RGBColor = RGBColor(243, 156, 18);

const FONT: &str = "sans-serif";

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Drawing failed: {0}")]
    Draw(String),
    #[error("Bitmap buffer does not match {0}x{1}")]
    Buffer(u32, u32),
    #[error("PNG encoding failed: {0}")]
    Image(#[from] image::ImageError),
    #[error("Failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

fn draw_err<E: std::error::Error + Send + Sync>(e: DrawingAreaErrorKind<E>) -> RenderError {
    RenderError::Draw(e.to_string())
}

/// The three charts, each saved under a fixed file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    PublicationTrends,
    TopJournals,
    AbstractWordCount,
}

impl ChartKind {
    pub const ALL: [ChartKind; 3] = [
        ChartKind::PublicationTrends,
        ChartKind::TopJournals,
        ChartKind::AbstractWordCount,
    ];

    pub fn file_name(self) -> &'static str {
        match self {
            ChartKind::PublicationTrends => "pub_trends.png",
            ChartKind::TopJournals => "top_journals.png",
            ChartKind::AbstractWordCount => "avg_abstract_wordcount.png",
        }
    }

    /// Pixel size, 10x5 in (10x6 for the bar chart) at 150 DPI.
    pub fn size(self) -> (u32, u32) {
        match self {
            ChartKind::TopJournals => (1500, 900),
            _ => (1500, 750),
        }
    }
}

pub struct StaticChartRenderer;

impl StaticChartRenderer {
    /// Render one chart of `summary` to PNG bytes.
    pub fn render_to_bytes(kind: ChartKind, summary: &Summary) -> Result<Vec<u8>, RenderError> {
        let (width, height) = kind.size();
        let mut buffer = vec![0u8; (width * height * 3) as usize];

        {
            let root = BitMapBackend::with_buffer(&mut buffer, (width, height)).into_drawing_area();
            root.fill(&WHITE).map_err(draw_err)?;

            match kind {
                ChartKind::PublicationTrends => {
                    let points: Vec<(i32, f64)> = summary
                        .yearly_counts
                        .iter()
                        .map(|c| (c.year, c.count as f64))
                        .collect();
                    Self::draw_year_line(
                        &root,
                        "Publication Trends per Year",
                        "Number of Papers",
                        &points,
                        BLUE,
                    )?;
                }
                ChartKind::TopJournals => {
                    let title = format!(
                        "Top {} Journals by Number of Publications",
                        summary.top_journals.len()
                    );
                    Self::draw_journal_bars(&root, &title, &summary.top_journals, GREEN)?;
                }
                ChartKind::AbstractWordCount => {
                    let points: Vec<(i32, f64)> = summary
                        .yearly_mean_word_count
                        .iter()
                        .map(|m| (m.year, m.mean))
                        .collect();
                    Self::draw_year_line(
                        &root,
                        "Average Abstract Word Count per Year",
                        "Average Word Count",
                        &points,
                        ORANGE,
                    )?;
                }
            }

            root.present().map_err(draw_err)?;
        }

        Self::encode_png(buffer, width, height)
    }

    /// Render `kind` and write it into `dir` under its fixed file name.
    pub fn save_chart(kind: ChartKind, summary: &Summary, dir: &Path) -> Result<PathBuf, RenderError> {
        let bytes = Self::render_to_bytes(kind, summary)?;
        let path = dir.join(kind.file_name());
        std::fs::write(&path, bytes).map_err(|source| RenderError::Io {
            path: path.clone(),
            source,
        })?;
        info!(path = %path.display(), "saved chart");
        Ok(path)
    }

    fn draw_year_line(
        root: &DrawingArea<BitMapBackend, Shift>,
        title: &str,
        y_desc: &str,
        points: &[(i32, f64)],
        color: RGBColor,
    ) -> Result<(), RenderError> {
        let x_range = Self::year_axis(points);
        let y_max = Self::value_axis_max(points.iter().map(|&(_, v)| v));

        let mut chart = ChartBuilder::on(root)
            .caption(title, (FONT, 32))
            .margin(25)
            .x_label_area_size(55)
            .y_label_area_size(80)
            .build_cartesian_2d(x_range, 0f64..y_max)
            .map_err(draw_err)?;

        chart
            .configure_mesh()
            .x_desc("Year")
            .y_desc(y_desc)
            .axis_desc_style((FONT, 20))
            .label_style((FONT, 16))
            .x_label_formatter(&|year| year.to_string())
            .draw()
            .map_err(draw_err)?;

        chart
            .draw_series(LineSeries::new(
                points.iter().copied(),
                color.stroke_width(3),
            ))
            .map_err(draw_err)?;

        chart
            .draw_series(
                points
                    .iter()
                    .map(|&(year, value)| Circle::new((year, value), 6, color.filled())),
            )
            .map_err(draw_err)?;

        Ok(())
    }

    fn draw_journal_bars(
        root: &DrawingArea<BitMapBackend, Shift>,
        title: &str,
        journals: &[JournalCount],
        color: RGBColor,
    ) -> Result<(), RenderError> {
        let n = (journals.len() as u32).max(1);
        let y_max = Self::value_axis_max(journals.iter().map(|j| j.count as f64));
        let labels: Vec<String> = journals
            .iter()
            .map(|j| truncate_label(&j.journal, MAX_LABEL_CHARS))
            .collect();

        let mut chart = ChartBuilder::on(root)
            .caption(title, (FONT, 32))
            .margin(25)
            .x_label_area_size(220)
            .y_label_area_size(80)
            .build_cartesian_2d((0u32..n).into_segmented(), 0f64..y_max)
            .map_err(draw_err)?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_desc("Journal")
            .y_desc("Number of Papers")
            .axis_desc_style((FONT, 20))
            .y_label_style((FONT, 16))
            .x_labels(n as usize)
            .x_label_style((FONT, 15).into_font().transform(FontTransform::Rotate90))
            .x_label_formatter(&|value| match value {
                SegmentValue::CenterOf(i) | SegmentValue::Exact(i) => {
                    labels.get(*i as usize).cloned().unwrap_or_default()
                }
                SegmentValue::Last => String::new(),
            })
            .draw()
            .map_err(draw_err)?;

        chart
            .draw_series(
                Histogram::vertical(&chart)
                    .style(color.filled())
                    .margin(12)
                    .data(
                        journals
                            .iter()
                            .enumerate()
                            .map(|(i, j)| (i as u32, j.count as f64)),
                    ),
            )
            .map_err(draw_err)?;

        Ok(())
    }

    fn encode_png(buffer: Vec<u8>, width: u32, height: u32) -> Result<Vec<u8>, RenderError> {
        let img = RgbImage::from_raw(width, height, buffer)
            .ok_or(RenderError::Buffer(width, height))?;
        let mut bytes = Vec::new();
        img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
        Ok(bytes)
    }

    /// X range padded by one year on each side.
    fn year_axis(points: &[(i32, f64)]) -> Range<i32> {
        let min = points.iter().map(|&(y, _)| y).min();
        let max = points.iter().map(|&(y, _)| y).max();
        match (min, max) {
            (Some(min), Some(max)) => (min - 1)..(max + 1),
            _ => DEFAULT_YEAR_RANGE.0..DEFAULT_YEAR_RANGE.1,
        }
    }

    /// Upper bound of the value axis with 10% headroom.
    fn value_axis_max(values: impl Iterator<Item = f64>) -> f64 {
        let max = values.fold(0.0_f64, f64::max);
        if max > 0.0 {
            max * 1.1
        } else {
            1.0
        }
    }
}
