//! Dashboard composition
//!
//! The screen is a three-column grid (narrow, wide, narrow). Which widgets
//! go into which column is fixed per [`LayoutVariant`] and listed by
//! [`composition`].

use ratatui::{
    layout::Flex,
    prelude::*,
    widgets::{Paragraph, Wrap},
};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use super::{
    config::Theme,
    widgets::{
        AnalyticsCard, MeetingsCard, NotificationsCard, ProfileCard, ProfileIdentityCard,
        ProfileProgressCard, SkillsCard, TaskSummaryCard, TrackersCard,
    },
};
use crate::domain::DashboardContent;

pub const MIN_WIDTH: u16 = 60;
pub const MIN_HEIGHT: u16 = 20;

#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum LayoutVariant {
    /// Profile card with its own progress bar, no notifications.
    #[default]
    Compact,
    /// Separate identity and progress cards, plus notifications.
    Extended,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum Column {
    Left,
    Center,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum WidgetId {
    Profile,
    ProfileIdentity,
    ProfileProgress,
    TaskSummary,
    Trackers,
    Analytics,
    Meetings,
    Notifications,
    Skills,
}

const COMPACT_LEFT: &[WidgetId] = &[WidgetId::Profile, WidgetId::TaskSummary, WidgetId::Trackers];
const EXTENDED_LEFT: &[WidgetId] = &[
    WidgetId::ProfileIdentity,
    WidgetId::ProfileProgress,
    WidgetId::TaskSummary,
    WidgetId::Trackers,
];
const CENTER: &[WidgetId] = &[WidgetId::Analytics, WidgetId::Meetings];
const COMPACT_RIGHT: &[WidgetId] = &[WidgetId::Skills];
const EXTENDED_RIGHT: &[WidgetId] = &[WidgetId::Skills, WidgetId::Notifications];

/// Widgets per column, top to bottom, for a layout variant.
pub fn composition(variant: LayoutVariant) -> [(Column, &'static [WidgetId]); 3] {
    match variant {
        LayoutVariant::Compact => [
            (Column::Left, COMPACT_LEFT),
            (Column::Center, CENTER),
            (Column::Right, COMPACT_RIGHT),
        ],
        LayoutVariant::Extended => [
            (Column::Left, EXTENDED_LEFT),
            (Column::Center, CENTER),
            (Column::Right, EXTENDED_RIGHT),
        ],
    }
}

/// Where a widget ends up on screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Placement {
    pub column: Column,
    pub widget: WidgetId,
    pub area: Rect,
}

pub struct Dashboard<'a> {
    content: &'a DashboardContent,
    variant: LayoutVariant,
    theme: Theme,
}

impl<'a> Dashboard<'a> {
    pub fn new(content: &'a DashboardContent, variant: LayoutVariant, theme: Theme) -> Self {
        Self {
            content,
            variant,
            theme,
        }
    }

    pub fn fits(area: Rect) -> bool {
        area.width >= MIN_WIDTH && area.height >= MIN_HEIGHT
    }

    fn constraint(&self, widget: WidgetId) -> Constraint {
        let content = self.content;
        match widget {
            WidgetId::Profile => Constraint::Length(ProfileCard::HEIGHT),
            WidgetId::ProfileIdentity => Constraint::Length(ProfileIdentityCard::HEIGHT),
            WidgetId::ProfileProgress => Constraint::Length(ProfileProgressCard::HEIGHT),
            WidgetId::TaskSummary => Constraint::Length(TaskSummaryCard::HEIGHT),
            WidgetId::Trackers => Constraint::Length(TrackersCard::HEIGHT),
            WidgetId::Analytics => Constraint::Min(AnalyticsCard::MIN_HEIGHT),
            WidgetId::Meetings => Constraint::Length(MeetingsCard::height(&content.meetings)),
            WidgetId::Notifications => {
                Constraint::Length(NotificationsCard::height(&content.notifications))
            }
            WidgetId::Skills => Constraint::Length(SkillsCard::height(&content.skills)),
        }
    }

    /// Constraints for one column. Fixed-height cards are cut short before
    /// the chart drops below [`AnalyticsCard::MIN_HEIGHT`].
    fn column_constraints(&self, widgets: &[WidgetId], height: u16) -> Vec<Constraint> {
        let reserved = if widgets.contains(&WidgetId::Analytics) {
            AnalyticsCard::MIN_HEIGHT
        } else {
            0
        };
        let mut budget = height.saturating_sub(reserved);
        widgets
            .iter()
            .map(|id| match self.constraint(*id) {
                Constraint::Length(length) => {
                    let length = length.min(budget);
                    budget -= length;
                    Constraint::Length(length)
                }
                other => other,
            })
            .collect()
    }

    /// Areas of every widget in composition order. Empty when `area` is
    /// below the minimum size.
    pub fn placements(&self, area: Rect) -> Vec<Placement> {
        if !Self::fits(area) {
            return Vec::new();
        }

        let columns = Layout::horizontal([
            Constraint::Ratio(1, 4),
            Constraint::Ratio(2, 4),
            Constraint::Ratio(1, 4),
        ])
        .spacing(1)
        .split(area);

        composition(self.variant)
            .into_iter()
            .zip(columns.iter())
            .flat_map(|((column, widgets), column_area)| {
                let constraints = self.column_constraints(widgets, column_area.height);
                let areas = Layout::vertical(constraints)
                    .flex(Flex::Start)
                    .split(*column_area);
                widgets
                    .iter()
                    .zip(areas.iter())
                    .map(move |(widget, area)| Placement {
                        column,
                        widget: *widget,
                        area: *area,
                    })
                    .collect::<Vec<_>>()
            })
            .collect()
    }

    fn render_widget(&self, widget: WidgetId, area: Rect, buf: &mut Buffer) {
        let content = self.content;
        let theme = self.theme;
        match widget {
            WidgetId::Profile => ProfileCard::new(&content.profile, theme).render(area, buf),
            WidgetId::ProfileIdentity => {
                ProfileIdentityCard::new(&content.profile, theme).render(area, buf)
            }
            WidgetId::ProfileProgress => {
                ProfileProgressCard::new(&content.profile, theme).render(area, buf)
            }
            WidgetId::TaskSummary => {
                TaskSummaryCard::new(&content.task_summary, theme).render(area, buf)
            }
            WidgetId::Trackers => TrackersCard::new(&content.trackers, theme).render(area, buf),
            WidgetId::Analytics => AnalyticsCard::new(
                &content.analytics_title,
                &content.analytics_label,
                &content.analytics,
                theme,
            )
            .render(area, buf),
            WidgetId::Meetings => MeetingsCard::new(&content.meetings, theme).render(area, buf),
            WidgetId::Notifications => {
                NotificationsCard::new(&content.notifications, theme).render(area, buf)
            }
            WidgetId::Skills => SkillsCard::new(&content.skills, theme).render(area, buf),
        }
    }
}

impl Widget for Dashboard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        if !Self::fits(area) {
            Paragraph::new(format!(
                "Terminal too small: {}x{} (need {MIN_WIDTH}x{MIN_HEIGHT})",
                area.width, area.height
            ))
            .style(Style::default().fg(self.theme.muted))
            .wrap(Wrap { trim: true })
            .render(area, buf);
            return;
        }

        for placement in self.placements(area) {
            self.render_widget(placement.widget, placement.area, buf);
        }
    }
}
