use color_eyre::eyre::Result;
use ratatui::Frame;

use crate::{
    core::state::AppState, infrastructure::tui::event_source::SharedTui,
    presentation::components::Components,
};

/// Draws the whole screen from state
#[derive(Debug, Default)]
pub struct Renderer {
    components: Components,
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn render(&mut self, tui: &SharedTui, state: &AppState) -> Result<()> {
        let mut guard = tui.lock().await;
        let mut draw = |f: &mut Frame<'_>| self.components.render(f, state);
        guard.draw(&mut draw)?;
        Ok(())
    }
}
