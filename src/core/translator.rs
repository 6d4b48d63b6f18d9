use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::{
    core::{
        msg::{catalog::CatalogMsg, player::PlayerMsg, system::SystemMsg, ui::UiMsg, Msg},
        raw_msg::RawMsg,
        state::{
            ui::{HeroButton, HomeSection},
            AppState,
        },
    },
    domain::{channel::Channel, layout::Layout},
    presentation::config::keybindings::Action,
};

/// Translates raw external events into domain messages
/// This function is pure and contains no side effects
pub fn translate_raw_to_domain(raw: RawMsg, state: &AppState) -> Vec<Msg> {
    match raw {
        // System events - direct mapping
        RawMsg::Quit => vec![Msg::System(SystemMsg::Quit)],
        RawMsg::Resume => vec![Msg::System(SystemMsg::Resume)],
        RawMsg::Resize(width, height) => vec![Msg::System(SystemMsg::Resize(width, height))],

        // User input - translate based on context and key bindings
        RawMsg::Key(key) => translate_key_event(key, state),

        // Service results
        RawMsg::ProbeCompleted {
            generation,
            results,
        } => vec![Msg::Catalog(CatalogMsg::DetectionCompleted {
            generation,
            results,
        })],
        RawMsg::ClearStatus(serial) => {
            vec![Msg::System(SystemMsg::ClearStatusIfCurrent(serial))]
        }
        RawMsg::PlayerLaunched { name } => vec![Msg::System(
            SystemMsg::TransientStatusMessage(format!("Opened {name} in external player")),
        )],
        RawMsg::PlayerLaunchFailed { name, error } => vec![Msg::System(SystemMsg::ShowError(
            format!("Could not open {name}: {error}"),
        ))],

        RawMsg::Error(error) => vec![Msg::System(SystemMsg::ShowError(error))],

        // Ignore frequent system events in domain layer
        RawMsg::Tick => vec![],
    }
}

/// Translates keyboard input to domain events based on current application state
fn translate_key_event(key: KeyEvent, state: &AppState) -> Vec<Msg> {
    // Handle global key bindings first
    match key {
        KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => return vec![Msg::System(SystemMsg::Quit)],

        KeyEvent {
            code: KeyCode::Char('z'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => return vec![Msg::System(SystemMsg::Suspend)],

        _ => {}
    }

    let Some(action) = state.config.config.keybindings.action_for(key) else {
        return vec![]; // No matching keybinding found
    };

    if action == Action::Quit {
        return vec![Msg::System(SystemMsg::Quit)];
    }
    if action == Action::Suspend {
        return vec![Msg::System(SystemMsg::Suspend)];
    }

    // The topmost surface owns the key
    if state.ui.is_picking_layout() {
        translate_picker_action(action, state)
    } else if state.player.is_open {
        translate_player_action(action, state)
    } else {
        translate_home_action(action, state)
    }
}

fn translate_picker_action(action: Action, state: &AppState) -> Vec<Msg> {
    match action {
        Action::Back | Action::LayoutPicker => vec![Msg::Ui(UiMsg::CloseLayoutPicker)],
        Action::Up | Action::Left => vec![Msg::Ui(UiMsg::PickerPrev)],
        Action::Down | Action::Right => vec![Msg::Ui(UiMsg::PickerNext)],
        Action::Activate | Action::Toggle => vec![Msg::Player(PlayerMsg::SetLayout(
            state.ui.picker.selected(),
        ))],
        _ => vec![],
    }
}

fn translate_player_action(action: Action, state: &AppState) -> Vec<Msg> {
    match action {
        Action::Back => vec![Msg::Player(PlayerMsg::Close)],
        Action::Left | Action::Up => vec![Msg::Player(PlayerMsg::CursorPrev)],
        Action::Right | Action::Down => vec![Msg::Player(PlayerMsg::CursorNext)],
        Action::Toggle | Action::Activate => {
            match state.player.focused_channel(&state.catalog) {
                Some(channel) if state.catalog.is_live(&channel.id) => {
                    vec![Msg::Player(PlayerMsg::Toggle(channel.id.clone()))]
                }
                Some(channel) => offline_notice(channel),
                None => vec![],
            }
        }
        Action::OpenExternal => state
            .player
            .focused_channel(&state.catalog)
            .map(|c| vec![Msg::Player(PlayerMsg::OpenExternally(c.id.clone()))])
            .unwrap_or_default(),
        Action::OpenAllExternal => vec![Msg::Player(PlayerMsg::OpenAllExternally)],
        Action::LayoutPicker => vec![Msg::Ui(UiMsg::OpenLayoutPicker)],
        Action::Refresh => vec![Msg::Catalog(CatalogMsg::StartDetection)],
        _ => vec![],
    }
}

fn translate_home_action(action: Action, state: &AppState) -> Vec<Msg> {
    match action {
        Action::Up => vec![Msg::Ui(UiMsg::FocusPrevSection)],
        Action::Down => vec![Msg::Ui(UiMsg::FocusNextSection)],
        Action::Left => vec![Msg::Ui(UiMsg::MoveLeft)],
        Action::Right => vec![Msg::Ui(UiMsg::MoveRight)],
        Action::Activate => translate_home_activate(state),
        Action::Watch => watch_hero(state),
        Action::Info => vec![Msg::Ui(UiMsg::FocusLiveGrid)],
        Action::Refresh => vec![Msg::Catalog(CatalogMsg::StartDetection)],
        Action::LayoutPicker => vec![Msg::Ui(UiMsg::OpenLayoutPicker)],
        Action::OpenExternal => home_focused_channel(state)
            .map(|c| vec![Msg::Player(PlayerMsg::OpenExternally(c.id.clone()))])
            .unwrap_or_default(),
        Action::Layout1 => set_layout(Layout::Single),
        Action::Layout2 => set_layout(Layout::Double),
        Action::Layout4 => set_layout(Layout::Quad),
        Action::Layout6 => set_layout(Layout::Six),
        Action::Layout9 => set_layout(Layout::Nine),
        _ => vec![],
    }
}

fn translate_home_activate(state: &AppState) -> Vec<Msg> {
    let focus = &state.ui.focus;
    match focus.section {
        HomeSection::Hero => match focus.hero_button {
            HeroButton::Watch => watch_hero(state),
            HeroButton::Info => vec![Msg::Ui(UiMsg::FocusLiveGrid)],
        },
        HomeSection::Live => state
            .catalog
            .live
            .get(focus.live_index)
            .map(open_with)
            .unwrap_or_default(),
        HomeSection::All => match state.catalog.registry.get_index(focus.all_index) {
            Some(channel) if state.catalog.is_live(&channel.id) => open_with(channel),
            Some(channel) => offline_notice(channel),
            None => vec![],
        },
    }
}

/// Channel under the home focus, if any
fn home_focused_channel(state: &AppState) -> Option<&Channel> {
    let focus = &state.ui.focus;
    match focus.section {
        HomeSection::Hero => state.ui.hero.as_ref(),
        HomeSection::Live => state.catalog.live.get(focus.live_index),
        HomeSection::All => state.catalog.registry.get_index(focus.all_index),
    }
}

fn watch_hero(state: &AppState) -> Vec<Msg> {
    match state.ui.hero.as_ref().or_else(|| state.catalog.live.first()) {
        Some(channel) => open_with(channel),
        None => vec![Msg::System(SystemMsg::TransientStatusMessage(
            "No live channels to watch".to_string(),
        ))],
    }
}

fn open_with(channel: &Channel) -> Vec<Msg> {
    vec![Msg::Player(PlayerMsg::Open(vec![channel.id.clone()]))]
}

fn offline_notice(channel: &Channel) -> Vec<Msg> {
    vec![Msg::System(SystemMsg::TransientStatusMessage(format!(
        "{} is offline",
        channel.name
    )))]
}

fn set_layout(layout: Layout) -> Vec<Msg> {
    vec![Msg::Player(PlayerMsg::SetLayout(layout))]
}
