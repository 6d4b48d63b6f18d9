#![allow(dead_code)]

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use multiwatch::{
    core::msg::{catalog::CatalogMsg, Msg},
    domain::channel::{Channel, LiveChannel},
    infrastructure::{config::Config, tui::Event},
    AppState, Cmd, RawMsg, Runtime,
};

pub fn channels() -> Vec<Channel> {
    vec![
        Channel::new("UC-a", "Alpha"),
        Channel::new("UC-b", "Bravo"),
        Channel::new("UC-c", "Charlie"),
        Channel::new("UC-d", "Delta"),
        Channel::new("UC-e", "Echo"),
    ]
}

pub fn config() -> Config {
    Config {
        channels: channels(),
        ..Config::from_defaults().expect("embedded config parses")
    }
}

pub fn runtime() -> Runtime {
    Runtime::new(AppState::new_with_config(config()))
}

pub fn key(c: char) -> RawMsg {
    RawMsg::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE))
}

pub fn code(code: KeyCode) -> RawMsg {
    RawMsg::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

pub fn key_event(c: char) -> Event {
    Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE))
}

/// Feed raw messages one by one and run every resulting message
pub fn press(runtime: &mut Runtime, raws: impl IntoIterator<Item = RawMsg>) {
    for raw in raws {
        runtime.send_raw_msg(raw);
        runtime.process_all_messages();
    }
}

/// Start a detection pass and answer it with `live` ids
pub fn detect(runtime: &mut Runtime, live: &[&str]) {
    let generation = start_detection(runtime);
    complete_detection(runtime, generation, live);
}

pub fn start_detection(runtime: &mut Runtime) -> u64 {
    runtime.send_msg(Msg::Catalog(CatalogMsg::StartDetection));
    runtime.process_all_messages();
    runtime
        .pending_commands()
        .into_iter()
        .find_map(|cmd| match cmd {
            Cmd::ProbeChannels { generation, .. } => Some(generation),
            _ => None,
        })
        .expect("StartDetection emits ProbeChannels")
}

pub fn complete_detection(runtime: &mut Runtime, generation: u64, live: &[&str]) {
    let results = runtime
        .state()
        .catalog
        .registry
        .iter()
        .map(|c| LiveChannel::new(c.clone(), live.contains(&c.id.as_str())))
        .collect();
    runtime.send_raw_msg(RawMsg::ProbeCompleted {
        generation,
        results,
    });
    runtime.process_all_messages();
}

pub fn active_ids(runtime: &Runtime) -> Vec<String> {
    runtime
        .state()
        .player
        .active
        .iter()
        .map(|c| c.id.as_str().to_string())
        .collect()
}
