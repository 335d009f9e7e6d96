//! Domain layer
//!
//! Immutable display records the dashboard is built from:
//! - Clamped percentages
//! - Profile, tracker, meeting, notification and skill records
//! - The analytics series
//! - The built-in dashboard content
//! - Text layout helpers

pub mod content;
pub mod percentage;
pub mod records;
pub mod series;
pub mod text;

pub use content::DashboardContent;
pub use percentage::Percentage;
pub use records::{
    Avatar, MeetingEntry, NotificationEntry, Profile, SkillEntry, TaskSummary, TrackerStatus,
};
pub use series::AnalyticsSeries;
