use crossterm::event::KeyEvent;
use serde::{Deserialize, Serialize};

use crate::domain::channel::LiveChannel;

/// Raw messages from external sources (input, network, child processes)
/// These represent unprocessed external events that need to be translated to domain events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RawMsg {
    // System events
    Tick,
    Resize(u16, u16),
    Quit,
    Resume,

    // User input (raw keyboard events)
    Key(KeyEvent),

    // Live probe finished one pass
    ProbeCompleted {
        generation: u64,
        results: Vec<LiveChannel>,
    },

    // Timer fired for a transient status message
    ClearStatus(u64),

    // External player process
    PlayerLaunched { name: String },
    PlayerLaunchFailed { name: String, error: String },

    // Terminal or runtime failure
    Error(String),
}

impl RawMsg {
    /// Helper to exclude frequent messages during debugging
    pub fn is_frequent(&self) -> bool {
        matches!(self, RawMsg::Tick)
    }
}
