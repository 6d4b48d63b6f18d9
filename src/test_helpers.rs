use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::buffer::Buffer;

use crate::{
    core::{
        cmd::Cmd,
        msg::{catalog::CatalogMsg, Msg},
        raw_msg::RawMsg,
        state::AppState,
        translator::translate_raw_to_domain,
        update::update,
    },
    domain::channel::{Channel, LiveChannel},
    infrastructure::config::Config,
};

/// Buffer rows as strings, trailing blanks trimmed
pub fn buffer_lines(buf: &Buffer) -> Vec<String> {
    let area = buf.area;
    (area.top()..area.bottom())
        .map(|y| {
            (area.left()..area.right())
                .map(|x| buf[(x, y)].symbol())
                .collect::<String>()
                .trim_end()
                .to_string()
        })
        .collect()
}

/// Whole buffer as one string, rows joined by newlines
pub fn buffer_text(buf: &Buffer) -> String {
    buffer_lines(buf).join("\n")
}

/// Drives AppState through translate + update the way the runtime does,
/// without executing commands
pub struct AppTestHelper {
    pub state: AppState,
    /// Commands produced so far, in order
    pub commands: Vec<Cmd>,
}

impl AppTestHelper {
    /// Default configuration with the given channels
    pub fn with_channels(channels: &[(&str, &str)]) -> Self {
        let defaults = Config::from_defaults().unwrap_or_default();
        let config = Config {
            channels: channels
                .iter()
                .map(|(id, name)| Channel::new(*id, *name))
                .collect(),
            ..defaults
        };
        Self {
            state: AppState::new_with_config(config),
            commands: vec![],
        }
    }

    pub fn send(&mut self, msg: Msg) -> &mut Self {
        let (state, cmds) = update(msg, self.state.clone());
        self.state = state;
        self.commands.extend(cmds);
        self
    }

    pub fn raw(&mut self, raw: RawMsg) -> &mut Self {
        for msg in translate_raw_to_domain(raw, &self.state) {
            self.send(msg);
        }
        self
    }

    pub fn key(&mut self, code: KeyCode) -> &mut Self {
        self.raw(RawMsg::Key(KeyEvent::new(code, KeyModifiers::NONE)))
    }

    pub fn char(&mut self, c: char) -> &mut Self {
        self.key(KeyCode::Char(c))
    }

    /// Run a full detection pass where exactly `live` ids answer
    pub fn detect(&mut self, live: &[&str]) -> &mut Self {
        self.send(Msg::Catalog(CatalogMsg::StartDetection));
        let generation = self
            .commands
            .iter()
            .rev()
            .find_map(|cmd| match cmd {
                Cmd::ProbeChannels { generation, .. } => Some(*generation),
                _ => None,
            })
            .unwrap_or_default();
        let results = self
            .state
            .catalog
            .registry
            .iter()
            .map(|c| LiveChannel::new(c.clone(), live.contains(&c.id.as_str())))
            .collect();
        self.raw(RawMsg::ProbeCompleted {
            generation,
            results,
        })
    }

    pub fn active_ids(&self) -> Vec<&str> {
        self.state
            .player
            .active
            .iter()
            .map(|c| c.id.as_str())
            .collect()
    }
}
