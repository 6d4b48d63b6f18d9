use std::fmt;

use derive_deref::Deref;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};

pub const EMBED_BASE: &str = "https://www.youtube.com/embed/live_stream";
const CHANNEL_BASE: &str = "https://www.youtube.com/channel";

// RFC 3986 unreserved characters stay as-is
const ID_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Opaque identifier of an external channel
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Deref, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChannelId(String);

impl ChannelId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn encoded(&self) -> String {
        utf8_percent_encode(&self.0, ID_ENCODE_SET).to_string()
    }

    /// URL probed by the live detection heuristic
    pub fn embed_url(&self) -> String {
        self.embed_url_at(EMBED_BASE)
    }

    pub fn embed_url_at(&self, base: &str) -> String {
        format!("{base}?channel={}", self.encoded())
    }

    /// URL shown in a player pane
    pub fn player_embed_url(&self) -> String {
        format!("{}&autoplay=1&mute=1", self.embed_url())
    }

    /// URL handed to an external player
    pub fn watch_url(&self) -> String {
        format!("{CHANNEL_BASE}/{}/live", self.encoded())
    }
}

impl fmt::Display for ChannelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ChannelId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Channel {
    pub id: ChannelId,
    pub name: String,
}

impl Channel {
    pub fn new(id: impl Into<ChannelId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    /// Up to two upper-cased initials, one per word
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect()
    }

    pub fn display_title(&self) -> String {
        self.name.to_uppercase()
    }
}

/// A channel annotated with the result of one detection pass
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiveChannel {
    pub channel: Channel,
    pub live: bool,
}

impl LiveChannel {
    pub fn new(channel: Channel, live: bool) -> Self {
        Self { channel, live }
    }
}

/// Fixed, ordered list of channels known at start-up
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChannelRegistry {
    channels: Vec<Channel>,
}

impl ChannelRegistry {
    pub fn new(channels: impl IntoIterator<Item = Channel>) -> Self {
        let mut unique: Vec<Channel> = Vec::new();
        for channel in channels {
            if unique.iter().any(|c| c.id == channel.id) {
                log::warn!("Duplicate channel id ignored: {}", channel.id);
                continue;
            }
            unique.push(channel);
        }
        Self { channels: unique }
    }

    pub fn get(&self, id: &ChannelId) -> Option<&Channel> {
        self.channels.iter().find(|c| &c.id == id)
    }

    pub fn contains(&self, id: &ChannelId) -> bool {
        self.get(id).is_some()
    }

    pub fn position(&self, id: &ChannelId) -> Option<usize> {
        self.channels.iter().position(|c| &c.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Channel> {
        self.channels.iter()
    }

    pub fn get_index(&self, index: usize) -> Option<&Channel> {
        self.channels.get(index)
    }

    pub fn as_slice(&self) -> &[Channel] {
        &self.channels
    }

    pub fn len(&self) -> usize {
        self.channels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }
}
