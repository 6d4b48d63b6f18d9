use std::{path::Path, time::Duration};

use config::ConfigError;
use serde::Deserialize;

use crate::{
    domain::{channel::Channel, layout::Layout},
    presentation::config::{keybindings, styles},
    utils,
};

const CONFIG: &str = include_str!("../../.config/config.json5");

pub const DEFAULT_PROBE_ENDPOINT: &str = crate::domain::channel::EMBED_BASE;
pub const DEFAULT_PROBE_TIMEOUT_MS: u64 = 5000;
/// Replaced by the channel's watch URL when launching the external player
pub const URL_PLACEHOLDER: &str = "{url}";

#[derive(Clone, Debug, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub _data_dir: std::path::PathBuf,
    #[serde(default)]
    pub _config_dir: std::path::PathBuf,
}

/// Live probe settings
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ProbeConfig {
    /// Embed endpoint; `?channel=<id>` is appended
    pub endpoint: String,
    pub timeout_ms: u64,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_PROBE_ENDPOINT.to_string(),
            timeout_ms: DEFAULT_PROBE_TIMEOUT_MS,
        }
    }
}

impl ProbeConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

/// Multi-pane player settings
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    pub default_layout: Layout,
    /// External player argv; `{url}` is substituted, or the URL is appended
    pub command: Vec<String>,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            default_layout: Layout::default(),
            command: vec![
                "mpv".to_string(),
                "--mute=yes".to_string(),
                URL_PLACEHOLDER.to_string(),
            ],
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default, flatten)]
    pub config: AppConfig,
    #[serde(default)]
    pub keybindings: keybindings::KeyBindings,
    #[serde(default)]
    pub styles: styles::Styles,
    #[serde(default)]
    pub channels: Vec<Channel>,
    #[serde(default)]
    pub probe: ProbeConfig,
    #[serde(default)]
    pub player: PlayerConfig,
}

impl Config {
    /// Load user configuration from the config directory over the built-in defaults
    pub fn new() -> Result<Self, ConfigError> {
        Self::load_from(&utils::get_config_dir())
    }

    /// Built-in configuration only
    pub fn from_defaults() -> Result<Self, ConfigError> {
        let mut cfg: Config = json5::from_str(CONFIG)
            .map_err(|e| ConfigError::Message(format!("Failed to load default config: {e}")))?;
        cfg.config._data_dir = utils::get_data_dir();
        cfg.config._config_dir = utils::get_config_dir();
        Ok(cfg)
    }

    pub fn load_from(config_dir: &Path) -> Result<Self, ConfigError> {
        let default_config = Self::from_defaults()?;
        let data_dir = utils::get_data_dir();
        let mut builder = config::Config::builder()
            .set_default("_data_dir", data_dir.to_string_lossy().as_ref())?
            .set_default("_config_dir", config_dir.to_string_lossy().as_ref())?;

        let config_files = [
            ("config.json5", config::FileFormat::Json5),
            ("config.json", config::FileFormat::Json),
            ("config.yaml", config::FileFormat::Yaml),
            ("config.toml", config::FileFormat::Toml),
            ("config.ini", config::FileFormat::Ini),
        ];
        let mut found_config = false;
        for (file, format) in &config_files {
            builder = builder.add_source(
                config::File::from(config_dir.join(file))
                    .format(*format)
                    .required(false),
            );
            if config_dir.join(file).exists() {
                found_config = true
            }
        }
        if !found_config {
            log::info!(
                "No configuration file in {}, using defaults",
                config_dir.display()
            );
        }

        let mut cfg: Self = builder.build()?.try_deserialize()?;

        // Merge default keybindings into user config (flat mapping)
        for (key, action) in default_config.keybindings.iter() {
            cfg.keybindings.entry(*key).or_insert(*action);
        }
        for (style_key, style) in default_config.styles.iter() {
            cfg.styles.entry(style_key.clone()).or_insert(*style);
        }

        if cfg.channels.is_empty() {
            cfg.channels.clone_from(&default_config.channels);
        }

        if cfg.player.command.is_empty() {
            return Err(ConfigError::Message(String::from(
                "player.command must not be empty",
            )));
        }

        Ok(cfg)
    }
}

#[cfg(test)]
mod tests {
    use std::{fs, path::PathBuf};

    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::presentation::config::keybindings::Action;

    /// Scratch config directory removed on drop
    struct ScratchDir(PathBuf);

    impl ScratchDir {
        fn new(name: &str) -> Self {
            let dir = std::env::temp_dir().join(format!(
                "multiwatch-config-{name}-{}",
                std::process::id()
            ));
            let _ = fs::remove_dir_all(&dir);
            fs::create_dir_all(&dir).unwrap();
            Self(dir)
        }

        fn write(&self, file: &str, contents: &str) {
            fs::write(self.0.join(file), contents).unwrap();
        }
    }

    impl Drop for ScratchDir {
        fn drop(&mut self) {
            let _ = fs::remove_dir_all(&self.0);
        }
    }

    #[test]
    fn test_defaults() -> color_eyre::Result<()> {
        let cfg = Config::from_defaults()?;

        assert_eq!(cfg.channels.len(), 19);
        assert_eq!(cfg.channels[0].name, "RonnyBons");
        assert_eq!(cfg.probe, ProbeConfig::default());
        assert_eq!(cfg.player, PlayerConfig::default());
        assert_eq!(
            cfg.keybindings
                .action_for(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE)),
            Some(Action::Quit)
        );
        assert!(cfg.styles.contains_key("live"));
        Ok(())
    }

    #[test]
    fn test_missing_config_file_uses_defaults() -> color_eyre::Result<()> {
        let dir = ScratchDir::new("empty");
        let cfg = Config::load_from(&dir.0)?;

        assert_eq!(cfg.channels.len(), 19);
        assert_eq!(cfg.player.default_layout, Layout::Quad);
        assert_eq!(cfg.probe.timeout(), Duration::from_millis(5000));
        assert!(!cfg.keybindings.is_empty());
        Ok(())
    }

    #[test]
    fn test_user_config_overrides() -> color_eyre::Result<()> {
        let dir = ScratchDir::new("user");
        dir.write(
            "config.json5",
            r#"{
              "keybindings": { "<x>": "Quit" },
              "channels": [{ "id": "UCabc", "name": "Only One" }],
              "probe": { "timeout_ms": 250 },
              "player": { "default_layout": 9 },
            }"#,
        );

        let cfg = Config::load_from(&dir.0)?;

        assert_eq!(cfg.channels, vec![Channel::new("UCabc", "Only One")]);
        assert_eq!(cfg.probe.timeout_ms, 250);
        assert_eq!(cfg.probe.endpoint, DEFAULT_PROBE_ENDPOINT);
        assert_eq!(cfg.player.default_layout, Layout::Nine);
        assert_eq!(cfg.player.command, PlayerConfig::default().command);
        // User binding added, defaults still present
        assert_eq!(
            cfg.keybindings
                .action_for(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE)),
            Some(Action::Quit)
        );
        assert_eq!(
            cfg.keybindings
                .action_for(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE)),
            Some(Action::Quit)
        );
        Ok(())
    }

    #[test]
    fn test_invalid_layout_is_rejected() {
        let dir = ScratchDir::new("bad-layout");
        dir.write("config.json5", r#"{ "player": { "default_layout": 3 } }"#);

        assert!(Config::load_from(&dir.0).is_err());
    }

    #[test]
    fn test_empty_player_command_is_rejected() {
        let dir = ScratchDir::new("bad-command");
        dir.write("config.json5", r#"{ "player": { "command": [] } }"#);

        assert!(Config::load_from(&dir.0).is_err());
    }
}
