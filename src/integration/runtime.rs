use std::{collections::VecDeque, mem};

use tokio::sync::mpsc;

use crate::{
    core::{
        cmd::{Cmd, TuiCommand},
        cmd_executor::CmdExecutor,
        msg::Msg,
        raw_msg::RawMsg,
        state::AppState,
        translator::translate_raw_to_domain,
        update::update,
    },
    infrastructure::{live_probe::ProbeOperation, player_launcher::PlayerOperation},
};

const NO_EXECUTOR: &str = "No command executor available. Use new_with_executor() to configure.";

/// Owns the state and drives translate -> update -> execute
pub struct Runtime {
    state: AppState,
    msg_queue: VecDeque<Msg>,
    raw_msg_queue: VecDeque<RawMsg>,
    cmd_queue: VecDeque<Cmd>,
    raw_msg_tx: mpsc::UnboundedSender<RawMsg>,
    raw_msg_rx: mpsc::UnboundedReceiver<RawMsg>,
    cmd_executor: Option<CmdExecutor>,
}

impl Runtime {
    /// Create a runtime without side effects; commands stay queued
    pub fn new(initial_state: AppState) -> Self {
        let (raw_msg_tx, raw_msg_rx) = mpsc::unbounded_channel();
        Self {
            state: initial_state,
            msg_queue: VecDeque::new(),
            raw_msg_queue: VecDeque::new(),
            cmd_queue: VecDeque::new(),
            raw_msg_tx,
            raw_msg_rx,
            cmd_executor: None,
        }
    }

    /// Create a runtime whose executor reports timers back into this runtime
    pub fn new_with_executor(initial_state: AppState) -> Self {
        let mut runtime = Self::new(initial_state);
        runtime.cmd_executor = Some(CmdExecutor::new(runtime.raw_msg_tx.clone()));
        runtime
    }

    fn executor_mut(&mut self) -> Result<&mut CmdExecutor, String> {
        self.cmd_executor.as_mut().ok_or_else(|| NO_EXECUTOR.to_string())
    }

    pub fn add_probe_sender(
        &mut self,
        sender: mpsc::UnboundedSender<ProbeOperation>,
    ) -> Result<(), String> {
        self.executor_mut()?.set_probe_sender(sender);
        Ok(())
    }

    pub fn add_player_sender(
        &mut self,
        sender: mpsc::UnboundedSender<PlayerOperation>,
    ) -> Result<(), String> {
        self.executor_mut()?.set_player_sender(sender);
        Ok(())
    }

    /// Add TUI command sender support to existing executor
    pub fn add_tui_sender(
        &mut self,
        sender: mpsc::UnboundedSender<TuiCommand>,
    ) -> Result<(), String> {
        self.executor_mut()?.set_tui_sender(sender);
        Ok(())
    }

    /// Add render request sender for orchestrated rendering in AppRunner
    pub fn add_render_request_sender(
        &mut self,
        sender: mpsc::UnboundedSender<()>,
    ) -> Result<(), String> {
        self.executor_mut()?.set_render_request_sender(sender);
        Ok(())
    }

    /// Get current state (read-only)
    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn send_msg(&mut self, msg: Msg) {
        self.msg_queue.push_back(msg);
    }

    pub fn send_raw_msg(&mut self, raw_msg: RawMsg) {
        self.raw_msg_queue.push_back(raw_msg);
    }

    /// Sender for background services
    pub fn get_raw_sender(&self) -> mpsc::UnboundedSender<RawMsg> {
        self.raw_msg_tx.clone()
    }

    /// Drain commands produced so far
    pub fn pending_commands(&mut self) -> Vec<Cmd> {
        self.cmd_queue.drain(..).collect()
    }

    /// Execute all pending commands using the command executor
    pub fn execute_pending_commands(&mut self) -> Result<Vec<String>, String> {
        let commands = self.pending_commands();
        let Some(executor) = self.cmd_executor.as_ref() else {
            return Err(NO_EXECUTOR.to_string());
        };
        if commands.is_empty() {
            return Ok(vec![]);
        }
        executor
            .execute_commands(&commands)
            .map_err(|e| format!("Command execution failed: {e}"))
    }

    /// Process a single domain message
    pub fn process_message(&mut self, msg: Msg) -> Vec<Cmd> {
        let (new_state, commands) = update(msg, mem::take(&mut self.state));
        self.state = new_state;
        self.cmd_queue.extend(commands.iter().cloned());
        commands
    }

    /// Translate queued and received raw messages, then run every domain message
    pub fn process_all_messages(&mut self) -> Vec<Cmd> {
        while let Ok(raw_msg) = self.raw_msg_rx.try_recv() {
            self.raw_msg_queue.push_back(raw_msg);
        }

        let mut all_commands = Vec::new();
        while let Some(raw_msg) = self.raw_msg_queue.pop_front() {
            if !raw_msg.is_frequent() {
                log::trace!("RawMsg: {raw_msg:?}");
            }
            // Translate against the state as of this message
            for msg in translate_raw_to_domain(raw_msg, &self.state) {
                all_commands.extend(self.process_message(msg));
            }
        }
        while let Some(msg) = self.msg_queue.pop_front() {
            all_commands.extend(self.process_message(msg));
        }
        all_commands
    }

    /// Process all messages and execute commands in one step
    pub fn run_update_cycle(&mut self) -> Result<Vec<String>, String> {
        self.process_all_messages();
        self.execute_pending_commands()
    }

    pub fn get_stats(&self) -> RuntimeStats {
        RuntimeStats {
            queued_messages: self.msg_queue.len() + self.raw_msg_queue.len(),
            queued_commands: self.cmd_queue.len(),
            channel_count: self.state.channel_count(),
            live_count: self.state.catalog.live_count(),
            active_count: self.state.player.active.len(),
            is_player_open: self.state.player.is_open,
            has_executor: self.cmd_executor.is_some(),
            has_probe_support: self
                .cmd_executor
                .as_ref()
                .is_some_and(|executor| executor.get_stats().has_probe_sender),
        }
    }
}

/// Runtime statistics
#[derive(Debug, Clone)]
pub struct RuntimeStats {
    pub queued_messages: usize,
    pub queued_commands: usize,
    pub channel_count: usize,
    pub live_count: usize,
    pub active_count: usize,
    pub is_player_open: bool,
    pub has_executor: bool,
    pub has_probe_support: bool,
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        core::msg::{catalog::CatalogMsg, system::SystemMsg},
        domain::channel::{Channel, LiveChannel},
    };

    fn create_test_runtime() -> Runtime {
        Runtime::new(AppState::new_with_channels(vec![
            Channel::new("a", "Alpha"),
            Channel::new("b", "Bravo"),
            Channel::new("c", "Charlie"),
        ])
        .unwrap())
    }

    fn key(c: char) -> RawMsg {
        RawMsg::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE))
    }

    #[test]
    fn test_runtime_creation() {
        let runtime = create_test_runtime();
        let stats = runtime.get_stats();

        assert_eq!(stats.queued_messages, 0);
        assert_eq!(stats.queued_commands, 0);
        assert_eq!(stats.channel_count, 3);
        assert!(!stats.has_executor);
        assert!(!stats.is_player_open);
    }

    #[test]
    fn test_send_message_is_processed() {
        let mut runtime = create_test_runtime();

        runtime.send_msg(Msg::System(SystemMsg::Quit));
        assert_eq!(runtime.get_stats().queued_messages, 1);

        let commands = runtime.process_all_messages();
        assert!(commands.is_empty());
        assert!(runtime.state().system.should_quit);
        assert_eq!(runtime.get_stats().queued_messages, 0);
    }

    #[test]
    fn test_detection_round_trip_through_raw_sender() {
        let mut runtime = create_test_runtime();

        let commands = runtime.process_message(Msg::Catalog(CatalogMsg::StartDetection));
        let generation = match commands.as_slice() {
            [Cmd::ProbeChannels { generation, .. }] => *generation,
            other => panic!("Expected ProbeChannels, got {other:?}"),
        };

        // A background service answers through the raw sender
        let results = runtime
            .state()
            .catalog
            .registry
            .iter()
            .map(|c| LiveChannel::new(c.clone(), c.id.as_str() != "b"))
            .collect();
        runtime
            .get_raw_sender()
            .send(RawMsg::ProbeCompleted {
                generation,
                results,
            })
            .unwrap();
        runtime.process_all_messages();

        assert_eq!(runtime.get_stats().live_count, 2);
        assert_eq!(runtime.get_stats().active_count, 2);
    }

    #[test]
    fn test_raw_messages_are_translated_in_order() {
        let mut runtime = create_test_runtime();
        runtime.process_message(Msg::Catalog(CatalogMsg::MarkAllLive));

        // Open the player, then toggle the focused channel off
        runtime.send_raw_msg(key('w'));
        runtime.send_raw_msg(RawMsg::Key(KeyEvent::new(
            KeyCode::Char(' '),
            KeyModifiers::NONE,
        )));
        runtime.process_all_messages();

        assert!(runtime.state().player.is_open);
        let active: Vec<_> = runtime
            .state()
            .player
            .active
            .iter()
            .map(|c| c.id.as_str())
            .collect();
        assert_eq!(active, vec!["b", "c"]);
    }

    #[test]
    fn test_execute_without_executor_fails() {
        let mut runtime = create_test_runtime();
        runtime.send_raw_msg(key('q'));

        assert!(runtime.run_update_cycle().is_err());
        assert!(runtime.state().system.should_quit);
        assert!(runtime.add_probe_sender(mpsc::unbounded_channel().0).is_err());
    }

    #[tokio::test]
    async fn test_run_update_cycle_routes_probe_command() {
        let mut runtime = Runtime::new_with_executor(AppState::new_with_channels(vec![
            Channel::new("a", "Alpha"),
        ])
        .unwrap());
        let (probe_tx, mut probe_rx) = mpsc::unbounded_channel();
        runtime.add_probe_sender(probe_tx).unwrap();
        assert!(runtime.get_stats().has_probe_support);

        runtime.send_raw_msg(key('r'));
        let log = runtime.run_update_cycle().unwrap();

        assert!(log.iter().any(|line| line.contains("ProbeChannels")));
        match probe_rx.try_recv() {
            Ok(ProbeOperation::Probe { generation, channels }) => {
                assert_eq!(generation, 1);
                assert_eq!(channels.len(), 1);
            }
            other => panic!("Expected a probe operation, got {other:?}"),
        }
    }
}
