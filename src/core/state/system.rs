use crate::core::{
    cmd::{Cmd, TuiCommand},
    msg::system::SystemMsg,
};

/// How long a transient status message stays on screen
pub const TRANSIENT_STATUS_MS: u64 = 3000;

/// System-related state
#[derive(Debug, Clone)]
pub struct SystemState {
    pub should_quit: bool,
    pub should_suspend: bool,
    pub status_message: Option<String>,
    /// Bumped on every status change so delayed clears can tell if they are stale
    pub status_serial: u64,
    pub is_loading: bool,
    pub terminal_size: Option<(u16, u16)>,
}

impl Default for SystemState {
    fn default() -> Self {
        Self {
            should_quit: false,
            should_suspend: false,
            status_message: None,
            status_serial: 0,
            is_loading: true,
            terminal_size: None,
        }
    }
}

impl SystemState {
    pub fn status_message(&self) -> Option<&String> {
        self.status_message.as_ref()
    }

    fn set_status(&mut self, message: Option<String>) {
        self.status_message = message;
        self.status_serial += 1;
    }

    /// System-specific update function
    /// Returns: Generated commands
    pub fn update(&mut self, msg: SystemMsg) -> Vec<Cmd> {
        match msg {
            // System control
            SystemMsg::Quit => {
                self.should_quit = true;
                vec![]
            }

            SystemMsg::Suspend => {
                self.should_suspend = true;
                vec![]
            }

            SystemMsg::Resume => {
                self.should_suspend = false;
                vec![Cmd::RequestRender]
            }

            SystemMsg::Resize(width, height) => {
                self.terminal_size = Some((width, height));
                vec![Cmd::Tui(TuiCommand::Resize { width, height })]
            }

            // Status management
            SystemMsg::UpdateStatusMessage(message) => {
                self.set_status(Some(message));
                vec![]
            }

            SystemMsg::TransientStatusMessage(message) => {
                self.set_status(Some(message));
                vec![Cmd::ClearStatusAfter {
                    serial: self.status_serial,
                    delay_ms: TRANSIENT_STATUS_MS,
                }]
            }

            SystemMsg::ClearStatusIfCurrent(serial) => {
                if serial == self.status_serial {
                    self.set_status(None);
                }
                vec![]
            }

            SystemMsg::SetLoading(loading) => {
                self.is_loading = loading;
                vec![]
            }

            SystemMsg::ShowError(error) => {
                self.set_status(Some(format!("Error: {error}")));
                vec![]
            }
        }
    }
}
