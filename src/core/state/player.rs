use crate::{
    core::{cmd::Cmd, msg::player::PlayerMsg, state::catalog::CatalogState},
    domain::{
        active::{ActiveChannels, Toggled},
        channel::{Channel, ChannelId},
        layout::Layout,
    },
};

/// Multi-pane player state
#[derive(Debug, Clone, Default)]
pub struct PlayerState {
    pub layout: Layout,
    pub active: ActiveChannels,
    pub is_open: bool,
    /// Index into the registry for the channel bar
    pub cursor: usize,
}

impl PlayerState {
    pub fn new(layout: Layout) -> Self {
        Self {
            layout,
            ..Default::default()
        }
    }

    /// Seed the active set with the first live channels
    pub fn reset_active(&mut self, live: &[Channel]) {
        self.active = ActiveChannels::from_channels(live, self.layout);
    }

    pub fn title(&self) -> String {
        self.active.title()
    }

    pub fn focused_channel<'a>(&self, catalog: &'a CatalogState) -> Option<&'a Channel> {
        catalog.registry.get_index(self.cursor)
    }

    pub fn update(&mut self, msg: PlayerMsg, catalog: &CatalogState) -> Vec<Cmd> {
        match msg {
            PlayerMsg::Open(ids) => {
                let initial: Vec<&Channel> =
                    ids.iter().filter_map(|id| catalog.registry.get(id)).collect();
                if !initial.is_empty() {
                    self.active = ActiveChannels::from_channels(initial, self.layout);
                    self.active.fill_from(&catalog.live, self.layout);
                }
                self.is_open = true;
                self.cursor = self
                    .active
                    .get(0)
                    .and_then(|c| catalog.registry.position(&c.id))
                    .unwrap_or(0);
                log::info!("Player opened: {}", self.title());
                vec![Cmd::RequestRender]
            }

            PlayerMsg::Close => {
                self.is_open = false;
                vec![Cmd::RequestRender]
            }

            PlayerMsg::Toggle(id) => self.toggle(&id, catalog),

            PlayerMsg::SetLayout(layout) => {
                self.layout = layout;
                self.active.truncate(layout);
                vec![Cmd::RequestRender]
            }

            PlayerMsg::CursorNext => {
                let len = catalog.registry.len();
                if len > 0 {
                    self.cursor = (self.cursor + 1) % len;
                }
                vec![]
            }

            PlayerMsg::CursorPrev => {
                let len = catalog.registry.len();
                if len > 0 {
                    self.cursor = (self.cursor + len - 1) % len;
                }
                vec![]
            }

            PlayerMsg::OpenExternally(id) => match catalog.registry.get(&id) {
                Some(channel) => vec![Cmd::LaunchPlayer {
                    channels: vec![channel.clone()],
                }],
                None => vec![],
            },

            PlayerMsg::OpenAllExternally => {
                if self.active.is_empty() {
                    vec![]
                } else {
                    vec![Cmd::LaunchPlayer {
                        channels: self.active.iter().cloned().collect(),
                    }]
                }
            }
        }
    }

    fn toggle(&mut self, id: &ChannelId, catalog: &CatalogState) -> Vec<Cmd> {
        let Some(channel) = catalog.registry.get(id) else {
            return vec![];
        };
        // Offline channels cannot be put on screen
        if !catalog.is_live(id) {
            return vec![];
        }

        match self.active.toggle(channel, self.layout) {
            Toggled::Replaced(old) => {
                log::debug!(
                    "Slot {} now shows {} instead of {}",
                    self.layout.size(),
                    channel.name,
                    old.name
                );
            }
            outcome => log::debug!("Toggled {}: {outcome:?}", channel.name),
        }
        vec![Cmd::RequestRender]
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{core::msg::catalog::CatalogMsg, domain::channel::ChannelRegistry};

    fn catalog(live: &[&str]) -> CatalogState {
        let mut catalog = CatalogState::new(ChannelRegistry::new(
            ["a", "b", "c", "d", "e", "f"]
                .iter()
                .map(|id| Channel::new(*id, id.to_uppercase())),
        ));
        catalog.update(CatalogMsg::MarkAllLive);
        catalog.live.retain(|c| live.contains(&c.id.as_str()));
        catalog
    }

    fn active_ids(player: &PlayerState) -> Vec<&str> {
        player.active.iter().map(|c| c.id.as_str()).collect()
    }

    #[test]
    fn test_open_fills_remaining_slots_with_live() {
        let catalog = catalog(&["a", "b", "c", "d", "e"]);
        let mut player = PlayerState::new(Layout::Quad);

        player.update(PlayerMsg::Open(vec!["c".into()]), &catalog);

        assert!(player.is_open);
        assert_eq!(active_ids(&player), vec!["c", "a", "b", "d"]);
        assert_eq!(player.title(), "C, A, B, D");
        assert_eq!(player.cursor, 2);
    }

    #[test]
    fn test_open_with_empty_initial_keeps_active() {
        let catalog = catalog(&["a", "b", "c"]);
        let mut player = PlayerState::new(Layout::Double);
        player.reset_active(&catalog.live);

        player.update(PlayerMsg::Open(vec![]), &catalog);

        assert!(player.is_open);
        assert_eq!(active_ids(&player), vec!["a", "b"]);
    }

    #[test]
    fn test_open_ignores_unknown_ids() {
        let catalog = catalog(&["a", "b"]);
        let mut player = PlayerState::new(Layout::Double);
        player.reset_active(&catalog.live);

        player.update(PlayerMsg::Open(vec!["zzz".into()]), &catalog);

        assert_eq!(active_ids(&player), vec!["a", "b"]);
    }

    #[test]
    fn test_close_keeps_active_set() {
        let catalog = catalog(&["a", "b"]);
        let mut player = PlayerState::new(Layout::Quad);
        player.update(PlayerMsg::Open(vec!["a".into()]), &catalog);
        player.update(PlayerMsg::Close, &catalog);

        assert!(!player.is_open);
        assert_eq!(active_ids(&player), vec!["a", "b"]);
    }

    #[test]
    fn test_toggle_offline_channel_is_ignored() {
        let catalog = catalog(&["a"]);
        let mut player = PlayerState::new(Layout::Quad);
        player.reset_active(&catalog.live);

        let cmds = player.update(PlayerMsg::Toggle("b".into()), &catalog);

        assert!(cmds.is_empty());
        assert_eq!(active_ids(&player), vec!["a"]);
    }

    #[test]
    fn test_toggle_remove_add_and_overwrite() {
        let catalog = catalog(&["a", "b", "c"]);
        let mut player = PlayerState::new(Layout::Double);
        player.reset_active(&catalog.live);
        assert_eq!(active_ids(&player), vec!["a", "b"]);

        player.update(PlayerMsg::Toggle("c".into()), &catalog);
        assert_eq!(active_ids(&player), vec!["a", "c"]);

        player.update(PlayerMsg::Toggle("a".into()), &catalog);
        assert_eq!(active_ids(&player), vec!["c"]);

        player.update(PlayerMsg::Toggle("b".into()), &catalog);
        assert_eq!(active_ids(&player), vec!["c", "b"]);
    }

    #[test]
    fn test_set_layout_truncates_active() {
        let catalog = catalog(&["a", "b", "c", "d", "e", "f"]);
        let mut player = PlayerState::new(Layout::Six);
        player.reset_active(&catalog.live);
        assert_eq!(player.active.len(), 6);

        player.update(PlayerMsg::SetLayout(Layout::Double), &catalog);
        assert_eq!(player.layout, Layout::Double);
        assert_eq!(active_ids(&player), vec!["a", "b"]);

        player.update(PlayerMsg::SetLayout(Layout::Nine), &catalog);
        assert_eq!(player.active.len(), 2);
    }

    #[test]
    fn test_cursor_wraps() {
        let catalog = catalog(&["a"]);
        let mut player = PlayerState::new(Layout::Quad);

        player.update(PlayerMsg::CursorPrev, &catalog);
        assert_eq!(player.cursor, 5);
        player.update(PlayerMsg::CursorNext, &catalog);
        assert_eq!(player.cursor, 0);
        assert_eq!(
            player.focused_channel(&catalog).map(|c| c.id.as_str()),
            Some("a")
        );
    }

    #[test]
    fn test_open_externally() {
        let catalog = catalog(&["a", "b"]);
        let mut player = PlayerState::new(Layout::Double);
        player.reset_active(&catalog.live);

        let cmds = player.update(PlayerMsg::OpenExternally("b".into()), &catalog);
        assert_eq!(
            cmds,
            vec![Cmd::LaunchPlayer {
                channels: vec![Channel::new("b", "B")]
            }]
        );

        let cmds = player.update(PlayerMsg::OpenAllExternally, &catalog);
        assert_eq!(
            cmds,
            vec![Cmd::LaunchPlayer {
                channels: vec![Channel::new("a", "A"), Channel::new("b", "B")]
            }]
        );

        assert!(player
            .update(PlayerMsg::OpenExternally("zzz".into()), &catalog)
            .is_empty());
    }
}
