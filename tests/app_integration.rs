use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use pretty_assertions::assert_eq;
use statboard::{
    infrastructure::{config::Config, tui::Event},
    Action, App, LayoutVariant,
};

fn default_app() -> color_eyre::Result<App> {
    let dir = std::env::temp_dir().join(format!("statboard-app-{}", std::process::id()));
    std::fs::create_dir_all(&dir)?;
    let config = Config::load_from(&dir, &dir)?;
    Ok(App::new(config, 1.0, 4.0))
}

#[test]
fn test_default_quit_keys() -> color_eyre::Result<()> {
    let app = default_app()?;
    for key in [
        KeyEvent::new(KeyCode::Char('q'), KeyModifiers::empty()),
        KeyEvent::new(KeyCode::Esc, KeyModifiers::empty()),
        KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
    ] {
        assert_eq!(app.action_for(&Event::Key(key)), Some(Action::Quit));
    }
    Ok(())
}

#[test]
fn test_snapshot_of_default_layout() -> color_eyre::Result<()> {
    let app = default_app()?;
    assert_eq!(app.layout, LayoutVariant::Compact);

    let snapshot = app.snapshot(120, 36)?;
    assert_eq!(snapshot.split('\n').count(), 36);
    assert!(snapshot.contains("Kristin Watson"));
    assert!(snapshot.contains("83%"));
    assert!(snapshot.lines().all(|line| !line.ends_with(' ')));
    Ok(())
}
