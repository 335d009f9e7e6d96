use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use super::Percentage;

/// An avatar image reference. Terminals cannot draw the image, so the alt
/// text is what ends up on screen.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Avatar {
    pub src: Cow<'static, str>,
    pub alt: Cow<'static, str>,
}

impl Avatar {
    pub fn new(src: impl Into<Cow<'static, str>>, alt: impl Into<Cow<'static, str>>) -> Self {
        Self {
            src: src.into(),
            alt: alt.into(),
        }
    }

    /// Up to two uppercase initials taken from the alt text.
    pub fn initials(&self) -> String {
        self.alt
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: Cow<'static, str>,
    pub title: Cow<'static, str>,
    pub avatar: Avatar,
    pub progress_label: Cow<'static, str>,
    pub progress: Percentage,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskSummary {
    pub completion: Percentage,
    pub caption: Cow<'static, str>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackerStatus {
    pub label: Cow<'static, str>,
    pub active_connections: u32,
}

impl TrackerStatus {
    pub fn badge_label(&self) -> String {
        match self.active_connections {
            1 => String::from("1 active connection"),
            n => format!("{n} active connections"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeetingEntry {
    pub title: Cow<'static, str>,
    pub scheduled_at: Cow<'static, str>,
    pub platform: Cow<'static, str>,
}

impl MeetingEntry {
    pub fn new(
        title: impl Into<Cow<'static, str>>,
        scheduled_at: impl Into<Cow<'static, str>>,
        platform: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            title: title.into(),
            scheduled_at: scheduled_at.into(),
            platform: platform.into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationEntry {
    pub title: Cow<'static, str>,
    pub message: Cow<'static, str>,
    pub received: Cow<'static, str>,
}

impl NotificationEntry {
    pub fn new(
        title: impl Into<Cow<'static, str>>,
        message: impl Into<Cow<'static, str>>,
        received: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            received: received.into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillEntry {
    pub name: Cow<'static, str>,
    pub mastery: Percentage,
}

impl SkillEntry {
    pub fn new(name: impl Into<Cow<'static, str>>, mastery: impl Into<f64>) -> Self {
        Self {
            name: name.into(),
            mastery: Percentage::new(mastery),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_avatar_initials() {
        let avatar = Avatar::new("https://via.placeholder.com/60", "Kristin Watson");
        assert_eq!(avatar.initials(), "KW");
    }

    #[test]
    fn test_avatar_initials_single_word_and_empty() {
        assert_eq!(Avatar::new("", "kristin").initials(), "K");
        assert_eq!(Avatar::new("", "").initials(), "");
        assert_eq!(Avatar::new("", "Anna Maria Lopez").initials(), "AM");
    }

    #[test]
    fn test_tracker_badge_label() {
        let mut status = TrackerStatus {
            label: Cow::Borrowed("Trackers connected:"),
            active_connections: 3,
        };
        assert_eq!(status.badge_label(), "3 active connections");
        status.active_connections = 1;
        assert_eq!(status.badge_label(), "1 active connection");
        status.active_connections = 0;
        assert_eq!(status.badge_label(), "0 active connections");
    }

    #[test]
    fn test_skill_entry_clamps_mastery() {
        assert_eq!(SkillEntry::new("Blogging", 140).mastery, Percentage::MAX);
        assert_eq!(SkillEntry::new("Blogging", -1).mastery, Percentage::MIN);
    }
}
