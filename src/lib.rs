//! # multiwatch
//!
//! A terminal multi-watch board for YouTube live channels, built with Ratatui.
//! It guesses which channels of a fixed list are live, shows them on a home
//! view, and arranges the chosen ones in a 1/2/4/6/9 pane player grid that can
//! hand streams to an external video player.
//!
//! ## Architecture Overview
//!
//! The crate follows the Elm architecture:
//!
//! - **Model** (`core::state`): application state
//! - **Message** (`core::msg`, `core::raw_msg`): events that can change the state
//! - **Update** (`core::update`): state transitions, returning commands
//! - **Command** (`core::cmd`): side effects (probing, launching players, timers)
//! - **View** (`presentation`): stateless rendering of the current state
//!
//! ## Example Usage
//!
//! ```rust
//! use multiwatch::{
//!     core::msg::{catalog::CatalogMsg, Msg},
//!     domain::channel::Channel,
//!     update, AppState,
//! };
//!
//! # fn main() -> Result<(), config::ConfigError> {
//! let state = AppState::new_with_channels(vec![
//!     Channel::new("UC1", "Alpha"),
//!     Channel::new("UC2", "Bravo"),
//! ])?;
//!
//! // Skip detection and treat every channel as live
//! let (state, _commands) = update(Msg::Catalog(CatalogMsg::MarkAllLive), state);
//!
//! assert_eq!(state.catalog.live_count(), 2);
//! assert_eq!(state.player.title(), "Alpha, Bravo");
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`core`] - State, messages, update and command execution
//! - [`domain`] - Channels, layouts and the active set
//! - [`infrastructure`] - Terminal, config, CLI and background services
//! - [`integration`] - Runtime and event loop
//! - [`presentation`] - Components, widgets, styles and keybindings
//! - [`utils`] - Logging, panic handling and paths

pub mod core;
pub mod domain;
pub mod infrastructure;
pub mod integration;
pub mod presentation;
pub mod utils;

#[cfg(test)]
pub mod test_helpers;

// Re-exports for convenience
pub use crate::core::{
    cmd::Cmd, msg::Msg, raw_msg::RawMsg, state::AppState, translator::translate_raw_to_domain,
    update::update,
};
pub use integration::runtime::{Runtime, RuntimeStats};

/// Result type used throughout the library
pub type Result<T> = color_eyre::eyre::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
