//! The built-in dashboard content.

use std::borrow::Cow;

use super::{
    AnalyticsSeries, Avatar, MeetingEntry, NotificationEntry, Percentage, Profile, SkillEntry,
    TaskSummary, TrackerStatus,
};

/// Everything the dashboard shows. Nothing here changes after construction.
#[derive(Clone, Debug, PartialEq)]
pub struct DashboardContent {
    pub profile: Profile,
    pub task_summary: TaskSummary,
    pub trackers: TrackerStatus,
    pub analytics_title: Cow<'static, str>,
    pub analytics_label: Cow<'static, str>,
    pub analytics: AnalyticsSeries,
    pub meetings: Vec<MeetingEntry>,
    pub notifications: Vec<NotificationEntry>,
    pub skills: Vec<SkillEntry>,
}

impl Default for DashboardContent {
    fn default() -> Self {
        Self {
            profile: Profile {
                name: Cow::Borrowed("Kristin Watson"),
                title: Cow::Borrowed("Design Manager at XYZ Corp"),
                avatar: Avatar::new("https://via.placeholder.com/60", "Kristin Watson"),
                progress_label: Cow::Borrowed("Task Progress"),
                progress: Percentage::new(83),
            },
            task_summary: TaskSummary {
                completion: Percentage::new(83),
                caption: Cow::Borrowed("Tasks Completed"),
            },
            trackers: TrackerStatus {
                label: Cow::Borrowed("Trackers connected:"),
                active_connections: 3,
            },
            analytics_title: Cow::Borrowed("Focusing"),
            analytics_label: Cow::Borrowed("Focus Levels"),
            analytics: AnalyticsSeries::new([
                ("Aug", 40.0),
                ("Sep", 50.0),
                ("Oct", 60.0),
                ("Nov", 80.0),
            ]),
            meetings: vec![MeetingEntry::new(
                "Quick Daily Meeting",
                "Tue, 11 Jul - 8:15 am",
                "Zoom",
            )],
            notifications: vec![
                NotificationEntry::new(
                    "New Message",
                    "You have a new message from John Doe.",
                    "10 mins ago",
                ),
                NotificationEntry::new(
                    "Task Reminder",
                    "Don't forget to complete the weekly report.",
                    "1 hour ago",
                ),
            ],
            skills: vec![
                SkillEntry::new("Sport Skills", 71),
                SkillEntry::new("Blogging", 92),
            ],
        }
    }
}
