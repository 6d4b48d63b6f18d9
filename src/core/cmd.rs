use serde::{Deserialize, Serialize};

use crate::domain::channel::Channel;

/// UI (TUI) specific sub-commands executed by the host/runtime
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TuiCommand {
    Resize { width: u16, height: u16 },
}

/// Elm-like command definitions
/// Represents side effects (network probes, process spawning, timers, etc.)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cmd {
    /// Probe every channel for liveness; results come back tagged with `generation`
    ProbeChannels {
        generation: u64,
        channels: Vec<Channel>,
    },
    /// Hand channels to the external player, one process each
    LaunchPlayer { channels: Vec<Channel> },
    /// Clear the status message after `delay_ms` unless it was replaced meanwhile
    ClearStatusAfter { serial: u64, delay_ms: u64 },

    // UI-related commands
    Tui(TuiCommand),
    /// Request a render; coalesced by AppRunner
    RequestRender,
}
