//! Reusable UI widgets
//!
//! Widgets are plain ratatui `Widget`s built from borrowed state.

pub mod channel_badge;
pub mod grid;
pub mod hero;
pub mod layout_picker;
pub mod navbar;
pub mod player_pane;
pub mod status_bar;
pub mod stream_card;
