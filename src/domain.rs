//! Domain logic
//!
//! This module contains pure, I/O-free types:
//! - Channel registry and provider URLs
//! - Player layouts
//! - Active channel bookkeeping for player slots
//! - Text fitting utilities

pub mod active;
pub mod channel;
pub mod layout;
pub mod text;
