use ratatui::{prelude::*, widgets::Paragraph};
use unicode_width::UnicodeWidthStr;

use super::{card::card_block, progress::ProgressBar};
use crate::{domain::SkillEntry, presentation::config::Theme};

const MIN_BAR_WIDTH: u16 = 8;

pub struct SkillsCard<'a> {
    entries: &'a [SkillEntry],
    theme: Theme,
}

impl<'a> SkillsCard<'a> {
    pub const TITLE: &'static str = "Developed Areas";

    pub fn new(entries: &'a [SkillEntry], theme: Theme) -> Self {
        Self { entries, theme }
    }

    pub fn height(entries: &[SkillEntry]) -> u16 {
        let rows = u16::try_from(entries.len()).unwrap_or(u16::MAX);
        rows.saturating_add(2)
    }

    fn label_width(&self) -> u16 {
        let widest = self
            .entries
            .iter()
            .map(|entry| entry.name.width())
            .max()
            .unwrap_or(0);
        u16::try_from(widest).unwrap_or(u16::MAX).saturating_add(1)
    }

    /// The progress bar for each entry, in input order.
    pub fn bars(&self) -> Vec<ProgressBar> {
        self.entries
            .iter()
            .map(|entry| ProgressBar::new(entry.mastery, self.theme.progress))
            .collect()
    }

    /// One single-line row per entry that fits in `inner`.
    pub fn row_areas(&self, inner: Rect) -> Vec<Rect> {
        inner.rows().take(self.entries.len()).collect()
    }
}

impl Widget for SkillsCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let block = card_block(Self::TITLE, self.theme);
        let inner = block.inner(area);
        block.render(area, buf);

        let label_width = self
            .label_width()
            .min(inner.width.saturating_sub(MIN_BAR_WIDTH));
        let rows = self.row_areas(inner);
        for ((entry, bar), row) in self.entries.iter().zip(self.bars()).zip(rows) {
            let [label, gauge] =
                Layout::horizontal([Constraint::Length(label_width), Constraint::Min(0)])
                    .areas(row);
            Paragraph::new(&*entry.name).render(label, buf);
            bar.render(gauge, buf);
        }
    }
}
