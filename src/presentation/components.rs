//! Component collection
//!
//! Components are stateless renderers that receive state as parameters.

use ratatui::prelude::*;

use crate::{
    core::state::AppState,
    presentation::widgets::{grid::centered_rect, layout_picker::LayoutPickerWidget},
};

pub mod home;
pub mod player;
pub mod status_bar;

pub use home::HomeComponent;
pub use player::PlayerComponent;
pub use status_bar::StatusBarComponent;

/// Collection of all components
#[derive(Debug, Default)]
pub struct Components {
    pub home: HomeComponent,
    pub player: PlayerComponent,
    pub status_bar: StatusBarComponent,
}

impl Components {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render the whole screen
    ///
    /// The player replaces the home view while open; the layout picker
    /// floats above either.
    pub fn render(&mut self, frame: &mut Frame, state: &AppState) {
        let area = frame.area();

        let [main, status] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(2)]).areas(area);

        if state.player.is_open {
            self.player.view(state, frame, main);
        } else {
            self.home.view(state, frame, main);
        }

        if state.ui.is_picking_layout() {
            let popup =
                centered_rect(main, LayoutPickerWidget::WIDTH, LayoutPickerWidget::HEIGHT);
            frame.render_widget(
                LayoutPickerWidget {
                    current: state.player.layout,
                    cursor: state.ui.picker.cursor,
                    styles: &state.config.config.styles,
                },
                popup,
            );
        }

        self.status_bar.view(state, frame, status);
    }
}
