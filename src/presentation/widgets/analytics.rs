use ratatui::prelude::*;

use super::{
    card::card_block,
    chart::{ChartConfig, DatasetConfig, LineChart},
};
use crate::{domain::AnalyticsSeries, presentation::config::Theme};

const STROKE_COLOR: &str = "rgba(75, 192, 192, 1)";
const STROKE_WIDTH: u16 = 2;

/// Productivity line chart. Owns only the literal series and line styling;
/// scaling and axes belong to [`LineChart`].
pub struct AnalyticsCard<'a> {
    title: &'a str,
    config: ChartConfig,
    theme: Theme,
}

impl<'a> AnalyticsCard<'a> {
    pub const MIN_HEIGHT: u16 = 10;

    pub fn new(
        title: &'a str,
        dataset_label: &str,
        series: &AnalyticsSeries,
        theme: Theme,
    ) -> Self {
        let config = ChartConfig {
            labels: series.labels(),
            datasets: vec![DatasetConfig {
                label: dataset_label.to_string(),
                values: series.values(),
                fill: false,
                stroke_color: STROKE_COLOR.to_string(),
                stroke_width: STROKE_WIDTH,
            }],
            responsive: true,
        };
        Self {
            title,
            config,
            theme,
        }
    }

    pub fn config(&self) -> &ChartConfig {
        &self.config
    }
}

impl Widget for AnalyticsCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let block = card_block(self.title, self.theme);
        let inner = block.inner(area);
        block.render(area, buf);
        LineChart::new(&self.config)
            .axis_style(Style::default().fg(self.theme.muted))
            .render(inner, buf);
    }
}
