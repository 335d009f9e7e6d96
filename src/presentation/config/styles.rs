use std::collections::HashMap;

use std::str::FromStr;

use derive_deref::{Deref, DerefMut};
use ratatui::style::Color;
use serde::{de::Deserializer, Deserialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

/// Named colors a user may override in the config file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum StyleKey {
    Accent,
    Muted,
    Progress,
    TrackerBadge,
    MeetingBadge,
    Summary,
}

impl StyleKey {
    pub fn default_color(self) -> Color {
        match self {
            StyleKey::Accent => Color::Cyan,
            StyleKey::Muted => Color::Gray,
            StyleKey::Progress => Color::LightMagenta,
            StyleKey::TrackerBadge => Color::LightGreen,
            StyleKey::MeetingBadge => Color::LightBlue,
            StyleKey::Summary => Color::Magenta,
        }
    }
}

#[derive(Clone, Debug, Default, Deref, DerefMut)]
pub struct Styles(pub HashMap<StyleKey, Color>);

impl<'de> Deserialize<'de> for Styles {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let parsed_map = HashMap::<String, Color>::deserialize(deserializer)?;

        let styles = parsed_map
            .into_iter()
            .map(|(key, color)| {
                StyleKey::from_str(&key)
                    .map(|key| (key, color))
                    .map_err(|_| serde::de::Error::custom(format!("Unknown style `{key}`")))
            })
            .collect::<Result<HashMap<_, _>, D::Error>>()?;

        Ok(Styles(styles))
    }
}

impl Styles {
    pub fn color(&self, key: StyleKey) -> Color {
        self.0.get(&key).copied().unwrap_or_else(|| key.default_color())
    }

    pub fn theme(&self) -> Theme {
        Theme {
            accent: self.color(StyleKey::Accent),
            muted: self.color(StyleKey::Muted),
            progress: self.color(StyleKey::Progress),
            tracker_badge: self.color(StyleKey::TrackerBadge),
            meeting_badge: self.color(StyleKey::MeetingBadge),
            summary: self.color(StyleKey::Summary),
        }
    }

    /// Fills every key missing here from `defaults`.
    pub fn merge_defaults(&mut self, defaults: &Styles) {
        for key in StyleKey::iter() {
            if let Some(color) = defaults.get(&key) {
                self.entry(key).or_insert(*color);
            }
        }
    }
}

/// Resolved colors handed to the widgets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    pub accent: Color,
    pub muted: Color,
    pub progress: Color,
    pub tracker_badge: Color,
    pub meeting_badge: Color,
    pub summary: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Styles::default().theme()
    }
}
