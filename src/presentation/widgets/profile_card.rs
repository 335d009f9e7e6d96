use ratatui::{prelude::*, widgets::Paragraph};
use unicode_width::UnicodeWidthStr;

use super::{card::card_block, progress::ProgressBar};
use crate::{
    domain::{Avatar, Profile},
    presentation::config::Theme,
};

/// Avatar placeholder. The image itself cannot be shown in a terminal, so
/// the initials stand in for it.
fn avatar_span(avatar: &Avatar, theme: Theme) -> Span<'static> {
    let initials = avatar.initials();
    let initials = if initials.is_empty() {
        String::from("?")
    } else {
        initials
    };
    Span::styled(
        format!(" {initials} "),
        Style::default().fg(Color::Black).bg(theme.accent).bold(),
    )
}

fn identity_text<'a>(profile: &'a Profile, theme: Theme) -> Text<'a> {
    let avatar = avatar_span(&profile.avatar, theme);
    let indent = " ".repeat(avatar.content.width() + 1);
    Text::from(vec![
        Line::from(vec![
            avatar,
            Span::raw(" "),
            Span::styled(&*profile.name, Style::default().bold()),
        ]),
        Line::from(vec![
            Span::raw(indent),
            Span::styled(&*profile.title, Style::default().fg(theme.muted)),
        ]),
    ])
}

/// Identity and task progress in a single card.
pub struct ProfileCard<'a> {
    profile: &'a Profile,
    theme: Theme,
}

impl<'a> ProfileCard<'a> {
    pub const TITLE: &'static str = "Profile";
    pub const HEIGHT: u16 = 7;

    pub fn new(profile: &'a Profile, theme: Theme) -> Self {
        Self { profile, theme }
    }

    pub fn progress_bar(&self) -> ProgressBar {
        ProgressBar::new(self.profile.progress, self.theme.progress)
    }
}

impl Widget for ProfileCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let block = card_block(Self::TITLE, self.theme);
        let inner = block.inner(area);
        block.render(area, buf);

        let [identity, _, label, bar] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(inner);

        Paragraph::new(identity_text(self.profile, self.theme)).render(identity, buf);
        Paragraph::new(Span::styled(
            &*self.profile.progress_label,
            Style::default().bold(),
        ))
        .render(label, buf);
        self.progress_bar().render(bar, buf);
    }
}

/// Avatar, name and title only.
pub struct ProfileIdentityCard<'a> {
    profile: &'a Profile,
    theme: Theme,
}

impl<'a> ProfileIdentityCard<'a> {
    pub const TITLE: &'static str = "Profile";
    pub const HEIGHT: u16 = 4;

    pub fn new(profile: &'a Profile, theme: Theme) -> Self {
        Self { profile, theme }
    }
}

impl Widget for ProfileIdentityCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let block = card_block(Self::TITLE, self.theme);
        Paragraph::new(identity_text(self.profile, self.theme))
            .block(block)
            .render(area, buf);
    }
}

/// The profile's task progress on its own, titled with the progress label.
pub struct ProfileProgressCard<'a> {
    profile: &'a Profile,
    theme: Theme,
}

impl<'a> ProfileProgressCard<'a> {
    pub const HEIGHT: u16 = 3;

    pub fn new(profile: &'a Profile, theme: Theme) -> Self {
        Self { profile, theme }
    }

    pub fn progress_bar(&self) -> ProgressBar {
        ProgressBar::new(self.profile.progress, self.theme.progress)
    }
}

impl Widget for ProfileProgressCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let block = card_block(&self.profile.progress_label, self.theme);
        let inner = block.inner(area);
        block.render(area, buf);
        self.progress_bar().render(inner, buf);
    }
}
