//! Presentation layer
//!
//! - Stateless components rendering `AppState`
//! - Reusable widgets
//! - Configuration (styles, keybindings)

pub mod components;
pub mod config;
pub mod widgets;
