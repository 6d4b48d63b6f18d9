//! Infrastructure layer
//!
//! This module handles external integrations and services:
//! - TUI foundation
//! - CLI argument processing
//! - Configuration loading
//! - Live probing over HTTP
//! - External player processes

pub mod cli;
pub mod config;
pub mod live_probe;
pub mod player_launcher;
pub mod tui;
