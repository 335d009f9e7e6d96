//! Line chart rendering from a plain chart configuration.
//!
//! Widgets describe a chart with [`ChartConfig`] and hand it to [`LineChart`],
//! which owns axis bounds, tick labels and scaling.

use std::str::FromStr;

use ratatui::{
    prelude::*,
    symbols::Marker,
    widgets::{Axis, Chart, Dataset, GraphType, LegendPosition},
};
use serde::{Deserialize, Serialize};

const FIXED_WIDTH: u16 = 48;
const FIXED_HEIGHT: u16 = 12;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DatasetConfig {
    pub label: String,
    pub values: Vec<f64>,
    pub fill: bool,
    pub stroke_color: String,
    pub stroke_width: u16,
}

impl DatasetConfig {
    /// Terminal cells cannot shade the region under a line, so a filled
    /// dataset is drawn as bars from the axis up to each point, covering
    /// the same area.
    pub fn graph_type(&self) -> GraphType {
        if self.fill {
            GraphType::Bar
        } else {
            GraphType::Line
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    pub labels: Vec<String>,
    pub datasets: Vec<DatasetConfig>,
    pub responsive: bool,
}

impl ChartConfig {
    /// Y bounds covering every value, always including zero, with a little
    /// headroom above the highest point.
    pub fn y_bounds(&self) -> [f64; 2] {
        let values = self
            .datasets
            .iter()
            .flat_map(|dataset| dataset.values.iter().copied())
            .filter(|value| value.is_finite());
        let (low, high) = values.fold((0.0_f64, 0.0_f64), |(low, high), value| {
            (low.min(value), high.max(value))
        });
        if high - low < f64::EPSILON {
            return [low, low + 1.0];
        }
        [low, high + (high - low) * 0.1]
    }

    pub fn x_bounds(&self) -> [f64; 2] {
        let points = self
            .datasets
            .iter()
            .map(|dataset| dataset.values.len())
            .chain(std::iter::once(self.labels.len()))
            .max()
            .unwrap_or(0);
        [0.0, points.saturating_sub(1).max(1) as f64]
    }
}

/// Parses `rgb(r, g, b)`, `rgba(r, g, b, a)` or anything ratatui's own color
/// parser understands. Alpha is ignored.
pub fn parse_color(raw: &str) -> Option<Color> {
    let trimmed = raw.trim();
    let channels = trimmed
        .strip_prefix("rgba(")
        .or_else(|| trimmed.strip_prefix("rgb("))
        .and_then(|rest| rest.strip_suffix(')'));
    match channels {
        Some(channels) => {
            let rgb = channels
                .split(',')
                .take(3)
                .map(|c| c.trim().parse::<u8>().ok())
                .collect::<Option<Vec<_>>>()?;
            match rgb.as_slice() {
                [r, g, b] => Some(Color::Rgb(*r, *g, *b)),
                _ => None,
            }
        }
        None => Color::from_str(trimmed).ok(),
    }
}

fn marker_for(width: u16) -> Marker {
    if width > 1 {
        Marker::HalfBlock
    } else {
        Marker::Braille
    }
}

fn format_tick(value: f64) -> String {
    format!("{value:.0}")
}

pub struct LineChart<'a> {
    config: &'a ChartConfig,
    axis_style: Style,
}

impl<'a> LineChart<'a> {
    pub fn new(config: &'a ChartConfig) -> Self {
        Self {
            config,
            axis_style: Style::default().fg(Color::Gray),
        }
    }

    pub fn axis_style(mut self, style: Style) -> Self {
        self.axis_style = style;
        self
    }

    /// A responsive chart fills the area it is given; otherwise it keeps a
    /// fixed size anchored at the top left.
    pub fn chart_area(&self, area: Rect) -> Rect {
        if self.config.responsive {
            area
        } else {
            Rect {
                width: area.width.min(FIXED_WIDTH),
                height: area.height.min(FIXED_HEIGHT),
                ..area
            }
        }
    }
}

impl Widget for LineChart<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let area = self.chart_area(area);
        if area.is_empty() {
            return;
        }

        let points: Vec<Vec<(f64, f64)>> = self
            .config
            .datasets
            .iter()
            .map(|dataset| {
                dataset
                    .values
                    .iter()
                    .enumerate()
                    .map(|(i, value)| (i as f64, *value))
                    .collect()
            })
            .collect();

        let datasets = self
            .config
            .datasets
            .iter()
            .zip(points.iter())
            .map(|(dataset, data)| {
                let color = parse_color(&dataset.stroke_color).unwrap_or(Color::Cyan);
                Dataset::default()
                    .name(dataset.label.as_str())
                    .marker(marker_for(dataset.stroke_width))
                    .graph_type(dataset.graph_type())
                    .style(Style::default().fg(color))
                    .data(data)
            })
            .collect::<Vec<_>>();

        let [y_low, y_high] = self.config.y_bounds();
        let x_axis = Axis::default()
            .style(self.axis_style)
            .bounds(self.config.x_bounds())
            .labels(self.config.labels.iter().map(String::as_str));
        let y_axis = Axis::default()
            .style(self.axis_style)
            .bounds([y_low, y_high])
            .labels([
                format_tick(y_low),
                format_tick((y_low + y_high) / 2.0),
                format_tick(y_high),
            ]);

        Chart::new(datasets)
            .x_axis(x_axis)
            .y_axis(y_axis)
            .legend_position(Some(LegendPosition::TopLeft))
            .hidden_legend_constraints((Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)))
            .render(area, buf);
    }
}
