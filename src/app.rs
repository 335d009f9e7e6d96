use color_eyre::eyre::Result;
use ratatui::prelude::Rect;
use tokio::sync::mpsc;

use crate::{
    action::Action,
    domain::DashboardContent,
    infrastructure::{config::Config, headless::HeadlessTerminal, tui},
    presentation::layout::{Dashboard, LayoutVariant},
};

pub struct App {
    pub config: Config,
    pub tick_rate: f64,
    pub frame_rate: f64,
    pub layout: LayoutVariant,
    pub content: DashboardContent,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: Config, tick_rate: f64, frame_rate: f64) -> Self {
        let layout = config.layout;
        Self {
            config,
            tick_rate,
            frame_rate,
            layout,
            content: DashboardContent::default(),
            should_quit: false,
        }
    }

    pub fn with_layout(mut self, layout: LayoutVariant) -> Self {
        self.layout = layout;
        self
    }

    pub fn dashboard(&self) -> Dashboard<'_> {
        Dashboard::new(&self.content, self.layout, self.config.styles.theme())
    }

    pub fn draw(&self, f: &mut tui::Frame<'_>) {
        f.render_widget(self.dashboard(), f.area());
    }

    /// Maps a terminal event to the action it triggers, if any.
    pub fn action_for(&self, event: &tui::Event) -> Option<Action> {
        match event {
            tui::Event::Quit => Some(Action::Quit),
            tui::Event::Tick => Some(Action::Tick),
            tui::Event::Render => Some(Action::Render),
            tui::Event::Resize(x, y) => Some(Action::Resize(*x, *y)),
            tui::Event::Error => Some(Action::Error(String::from("terminal input failed"))),
            tui::Event::Closed => Some(Action::Quit),
            tui::Event::Key(key) => {
                let action = self.config.keybindings.action_for(key).cloned();
                if let Some(action) = &action {
                    log::info!("Got action: {action:?}");
                }
                action
            }
            _ => None,
        }
    }

    /// Renders one frame into an in-memory terminal and returns it as text.
    pub fn snapshot(&self, width: u16, height: u16) -> Result<String> {
        let mut terminal = HeadlessTerminal::new(width, height)?;
        terminal.draw(|f| self.draw(f))?;
        Ok(terminal.contents())
    }

    pub async fn run(&mut self) -> Result<()> {
        let (action_tx, mut action_rx) = mpsc::unbounded_channel();

        let mut tui = tui::Tui::new()?
            .tick_rate(self.tick_rate)
            .frame_rate(self.frame_rate);
        tui.enter()?;
        tracing::info!(layout = %self.layout, "dashboard started");

        loop {
            if let Some(e) = tui.next().await {
                if let Some(action) = self.action_for(&e) {
                    action_tx.send(action)?;
                }
            }

            while let Ok(action) = action_rx.try_recv() {
                if action != Action::Tick && action != Action::Render {
                    log::debug!("{action:?}");
                }
                match action {
                    Action::Quit => self.should_quit = true,
                    Action::Resize(w, h) => {
                        tui.resize(Rect::new(0, 0, w, h))?;
                        tui.draw(|f| self.draw(f))?;
                    }
                    Action::Render => {
                        tui.draw(|f| self.draw(f))?;
                    }
                    Action::Error(ref message) => {
                        tracing::error!("{message}");
                    }
                    Action::Tick => {}
                }
            }
            if self.should_quit {
                tui.stop()?;
                break;
            }
        }
        tui.exit()?;
        Ok(())
    }
}
