use color_eyre::eyre::Result;
use ratatui::{backend::TestBackend, Terminal};

use crate::presentation::snapshot::buffer_to_string;

/// An in-memory terminal used for `--snapshot` output and tests.
pub struct HeadlessTerminal {
    term: Terminal<TestBackend>,
    pub draws: usize,
}

impl HeadlessTerminal {
    pub fn new(width: u16, height: u16) -> Result<Self> {
        let backend = TestBackend::new(width, height);
        let term = Terminal::new(backend)?;
        Ok(Self { term, draws: 0 })
    }

    pub fn draw<F>(&mut self, f: F) -> Result<()>
    where
        F: FnOnce(&mut ratatui::Frame<'_>),
    {
        self.term.draw(f)?;
        self.draws += 1;
        Ok(())
    }

    pub fn resize(&mut self, area: ratatui::prelude::Rect) -> Result<()> {
        self.term.backend_mut().resize(area.width, area.height);
        Ok(())
    }

    pub fn buffer(&self) -> &ratatui::buffer::Buffer {
        self.term.backend().buffer()
    }

    /// The last drawn frame as plain text.
    pub fn contents(&self) -> String {
        buffer_to_string(self.buffer())
    }
}
