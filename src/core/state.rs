pub mod catalog;
pub mod player;
pub mod system;
pub mod ui;

use config::ConfigError;

use crate::{
    domain::channel::{Channel, ChannelRegistry},
    infrastructure::config::Config,
};

use catalog::CatalogState;
use player::PlayerState;
use system::SystemState;
use ui::UiState;

/// Unified application state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub catalog: CatalogState,
    pub player: PlayerState,
    pub ui: UiState,
    pub system: SystemState,
    pub config: ConfigState,
}

/// Configuration state - holds all user-configurable settings
#[derive(Debug, Clone, Default)]
pub struct ConfigState {
    /// Current configuration loaded from file
    pub config: Config,
}

impl AppState {
    /// Initialize AppState from configuration (registry, default layout, keybindings)
    pub fn new_with_config(config: Config) -> Self {
        let registry = ChannelRegistry::new(config.channels.clone());
        Self {
            catalog: CatalogState::new(registry),
            player: PlayerState::new(config.player.default_layout),
            config: ConfigState { config },
            ..Default::default()
        }
    }

    /// Initialize AppState with an explicit channel list over the built-in
    /// configuration (keybindings, styles, probe and player settings)
    pub fn new_with_channels(channels: Vec<Channel>) -> Result<Self, ConfigError> {
        Ok(Self::new_with_config(Config {
            channels,
            ..Config::from_defaults()?
        }))
    }

    pub fn channel_count(&self) -> usize {
        self.catalog.registry.len()
    }
}
