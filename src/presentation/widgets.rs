//! Dashboard widgets
//!
//! Every card is a plain struct built from borrowed display records and
//! rendered through [`ratatui::widgets::Widget`]. None of them keep state.

pub mod analytics;
pub mod badge;
pub mod card;
pub mod chart;
pub mod meetings;
pub mod notifications;
pub mod profile_card;
pub mod progress;
pub mod shrink_text;
pub mod skills;
pub mod task_summary;
pub mod trackers;

pub use analytics::AnalyticsCard;
pub use meetings::MeetingsCard;
pub use notifications::NotificationsCard;
pub use profile_card::{ProfileCard, ProfileIdentityCard, ProfileProgressCard};
pub use progress::ProgressBar;
pub use skills::SkillsCard;
pub use task_summary::TaskSummaryCard;
pub use trackers::TrackersCard;
