use crate::{
    core::cmd::Cmd,
    core::msg::{
        catalog::CatalogMsg, player::PlayerMsg, system::SystemMsg, ui::UiMsg, Msg,
    },
    core::state::AppState,
    domain::text::pluralize,
};

pub const DETECTING_STATUS: &str = "Checking live status of all channels...";

/// Elm-like update function
/// Returns new state and list of commands from current state and message
pub fn update(msg: Msg, mut state: AppState) -> (AppState, Vec<Cmd>) {
    match msg {
        // System messages (delegated to SystemState)
        Msg::System(system_msg) => {
            let commands = state.system.update(system_msg);
            (state, commands)
        }

        Msg::Catalog(catalog_msg) => update_catalog(catalog_msg, state),

        Msg::Player(player_msg) => {
            let closes_picker = matches!(player_msg, PlayerMsg::SetLayout(_));
            let mut commands = state.player.update(player_msg, &state.catalog);
            if closes_picker {
                commands.extend(state.ui.update(
                    UiMsg::CloseLayoutPicker,
                    &state.catalog,
                    state.player.layout,
                ));
            }
            (state, commands)
        }

        Msg::Ui(ui_msg) => {
            let commands = state.ui.update(ui_msg, &state.catalog, state.player.layout);
            (state, commands)
        }
    }
}

fn update_catalog(msg: CatalogMsg, mut state: AppState) -> (AppState, Vec<Cmd>) {
    let starts_pass = matches!(msg, CatalogMsg::StartDetection);
    let skips_probe = matches!(msg, CatalogMsg::MarkAllLive);
    let shown_before = state.catalog.completed_generation();

    let mut commands = state.catalog.update(msg);

    if starts_pass {
        commands.extend(state.system.update(SystemMsg::SetLoading(true)));
        commands.extend(
            state
                .system
                .update(SystemMsg::UpdateStatusMessage(DETECTING_STATUS.to_string())),
        );
    } else if skips_probe || state.catalog.completed_generation() != shown_before {
        commands.extend(on_live_changed(&mut state));
    }

    (state, commands)
}

/// Propagate a new live list to the hero, focus and (closed) player
fn on_live_changed(state: &mut AppState) -> Vec<Cmd> {
    state.ui.hero = state.catalog.live.first().cloned();
    state.ui.clamp_focus(&state.catalog);
    if !state.player.is_open {
        state.player.reset_active(&state.catalog.live);
    }

    let found = format!(
        "{} found",
        pluralize(state.catalog.live_count(), "channel", "channels")
    );
    let mut commands = state.system.update(SystemMsg::SetLoading(false));
    commands.extend(state.system.update(SystemMsg::TransientStatusMessage(found)));
    commands.push(Cmd::RequestRender);
    commands
}
