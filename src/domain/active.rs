use crate::domain::{
    channel::{Channel, ChannelId},
    layout::Layout,
};

/// Outcome of toggling a channel in the player
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Toggled {
    Added,
    Removed,
    /// The set was full; the last slot now holds the toggled channel
    Replaced(Channel),
}

/// Channels assigned to player slots, in slot order
///
/// The set never holds more than `capacity` channels and never holds the
/// same channel twice.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActiveChannels {
    channels: Vec<Channel>,
}

impl ActiveChannels {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the first `layout.size()` channels, skipping duplicates
    pub fn from_channels<'a>(
        channels: impl IntoIterator<Item = &'a Channel>,
        layout: Layout,
    ) -> Self {
        let mut active = Self::new();
        active.fill_from(channels, layout);
        active
    }

    /// Append channels that are not active yet until the layout is full
    pub fn fill_from<'a>(&mut self, channels: impl IntoIterator<Item = &'a Channel>, layout: Layout) {
        for channel in channels {
            if self.channels.len() >= layout.size() {
                break;
            }
            if !self.contains(&channel.id) {
                self.channels.push(channel.clone());
            }
        }
    }

    pub fn toggle(&mut self, channel: &Channel, layout: Layout) -> Toggled {
        if let Some(index) = self.index_of(&channel.id) {
            self.channels.remove(index);
            return Toggled::Removed;
        }

        if self.channels.len() >= layout.size() {
            let last = layout.size() - 1;
            self.channels.truncate(layout.size());
            let replaced = std::mem::replace(&mut self.channels[last], channel.clone());
            Toggled::Replaced(replaced)
        } else {
            self.channels.push(channel.clone());
            Toggled::Added
        }
    }

    /// Drop trailing channels that no longer fit in `layout`
    pub fn truncate(&mut self, layout: Layout) {
        self.channels.truncate(layout.size());
    }

    pub fn clear(&mut self) {
        self.channels.clear();
    }

    pub fn contains(&self, id: &ChannelId) -> bool {
        self.index_of(id).is_some()
    }

    pub fn index_of(&self, id: &ChannelId) -> Option<usize> {
        self.channels.iter().position(|c| &c.id == id)
    }

    pub fn get(&self, slot: usize) -> Option<&Channel> {
        self.channels.get(slot)
    }

    /// One entry per slot of `layout`, `None` for empty slots
    pub fn slots(&self, layout: Layout) -> Vec<Option<&Channel>> {
        (0..layout.size()).map(|i| self.channels.get(i)).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Channel> {
        self.channels.iter()
    }

    pub fn len(&self) -> usize {
        self.channels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }

    /// Names joined with ", "
    pub fn title(&self) -> String {
        self.channels
            .iter()
            .map(|c| c.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}
