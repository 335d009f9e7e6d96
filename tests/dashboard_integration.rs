use pretty_assertions::assert_eq;
use rstest::*;
use statboard::{
    composition,
    infrastructure::headless::HeadlessTerminal,
    presentation::{config::Theme, layout::MIN_WIDTH},
    Dashboard, DashboardContent, LayoutVariant, WidgetId,
};

fn render(variant: LayoutVariant, width: u16, height: u16) -> color_eyre::Result<String> {
    let content = DashboardContent::default();
    let mut terminal = HeadlessTerminal::new(width, height)?;
    terminal.draw(|f| {
        f.render_widget(Dashboard::new(&content, variant, Theme::default()), f.area())
    })?;
    Ok(terminal.contents())
}

fn title(widget: WidgetId) -> &'static str {
    match widget {
        WidgetId::Profile | WidgetId::ProfileIdentity => " Profile ",
        WidgetId::ProfileProgress => " Task Progress ",
        WidgetId::TaskSummary => " Summary ",
        WidgetId::Trackers => " Integrations ",
        WidgetId::Analytics => " Focusing ",
        WidgetId::Meetings => " Upcoming Meetings ",
        WidgetId::Notifications => " Notifications ",
        WidgetId::Skills => " Developed Areas ",
    }
}

#[rstest]
fn test_every_widget_rendered_once(
    #[values(LayoutVariant::Compact, LayoutVariant::Extended)] variant: LayoutVariant,
) -> color_eyre::Result<()> {
    let screen = render(variant, 140, 40)?;
    for (_, widgets) in composition(variant) {
        for widget in widgets {
            assert_eq!(
                screen.matches(title(*widget)).count(),
                1,
                "{widget} in {variant}:\n{screen}"
            );
        }
    }
    Ok(())
}

#[test]
fn test_compact_layout_contents() -> color_eyre::Result<()> {
    let screen = render(LayoutVariant::Compact, 140, 40)?;
    for expected in [
        "Kristin Watson",
        "Design Manager at XYZ Corp",
        "Task Progress",
        "Tasks Completed",
        "Trackers connected:",
        "3 active connections",
        "Focus Levels",
        "Quick Daily Meeting",
        "Tue, 11 Jul - 8:15 am",
        "Zoom",
        "Sport Skills",
        "71%",
        "Blogging",
        "92%",
    ] {
        assert!(screen.contains(expected), "missing {expected}:\n{screen}");
    }
    assert!(!screen.contains("Notifications"));
    Ok(())
}

#[test]
fn test_extended_layout_contents() -> color_eyre::Result<()> {
    let screen = render(LayoutVariant::Extended, 160, 40)?;
    for expected in ["New Message", "10 mins ago", "Task Reminder", "1 hour ago"] {
        assert!(screen.contains(expected), "missing {expected}:\n{screen}");
    }
    Ok(())
}

#[test]
fn test_columns_are_left_to_right() -> color_eyre::Result<()> {
    let screen = render(LayoutVariant::Compact, 140, 40)?;
    let first_line = screen.lines().next().unwrap_or_default();
    let profile = first_line.find(" Profile ");
    let focusing = first_line.find(" Focusing ");
    let skills = first_line.find(" Developed Areas ");
    assert!(profile < focusing, "{first_line}");
    assert!(focusing < skills, "{first_line}");
    Ok(())
}

#[rstest]
fn test_render_is_idempotent(
    #[values(LayoutVariant::Compact, LayoutVariant::Extended)] variant: LayoutVariant,
) -> color_eyre::Result<()> {
    assert_eq!(render(variant, 120, 36)?, render(variant, 120, 36)?);
    Ok(())
}

#[test]
fn test_narrow_terminal_shows_size_hint() -> color_eyre::Result<()> {
    let screen = render(LayoutVariant::Compact, MIN_WIDTH - 1, 30)?;
    assert!(screen.contains("Terminal too small"));
    assert!(!screen.contains("Kristin Watson"));
    Ok(())
}
