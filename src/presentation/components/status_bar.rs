//! Status bar component
//!
//! Key hints for the current surface and the latest status message.

use ratatui::prelude::*;

use crate::{core::state::AppState, presentation::widgets::status_bar::StatusBarWidget};

pub const HOME_HINTS: &str =
    "↑↓ section  ←→ move  enter select  w watch  g layout  r refresh  o open  q quit";
pub const PLAYER_HINTS: &str =
    "←→ channel  space toggle  o open  O open all  g layout  r refresh  esc back  q quit";
pub const PICKER_HINTS: &str = "↑↓ choose  enter apply  esc close";

#[derive(Debug, Clone, Default)]
pub struct StatusBarComponent;

impl StatusBarComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn hints(state: &AppState) -> &'static str {
        if state.ui.is_picking_layout() {
            PICKER_HINTS
        } else if state.player.is_open {
            PLAYER_HINTS
        } else {
            HOME_HINTS
        }
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        frame.render_widget(
            StatusBarWidget {
                hints: Self::hints(state),
                message: state.system.status_message().map(String::as_str),
                loading: state.system.is_loading && state.catalog.is_detecting(),
                styles: &state.config.config.styles,
            },
            area,
        );
    }
}
