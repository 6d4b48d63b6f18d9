use serde::{Deserialize, Serialize};

use crate::domain::{channel::ChannelId, layout::Layout};

/// Messages for the multi-pane player
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PlayerMsg {
    /// Open the player seeded with these channels (empty keeps the current set)
    Open(Vec<ChannelId>),
    Close,
    Toggle(ChannelId),
    SetLayout(Layout),
    CursorNext,
    CursorPrev,
    OpenExternally(ChannelId),
    OpenAllExternally,
}
