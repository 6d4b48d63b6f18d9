use std::time::Duration;

use color_eyre::eyre::Result;
use tokio::{runtime::Handle, sync::mpsc};

use crate::{
    core::{
        cmd::{Cmd, TuiCommand},
        raw_msg::RawMsg,
    },
    infrastructure::{live_probe::ProbeOperation, player_launcher::PlayerOperation},
};

/// Command executor that routes Elm commands to background services
#[derive(Clone, Default)]
pub struct CmdExecutor {
    raw_sender: Option<mpsc::UnboundedSender<RawMsg>>,
    probe_sender: Option<mpsc::UnboundedSender<ProbeOperation>>,
    player_sender: Option<mpsc::UnboundedSender<PlayerOperation>>,
    tui_sender: Option<mpsc::UnboundedSender<TuiCommand>>,
    render_req_sender: Option<mpsc::UnboundedSender<()>>,
}

impl CmdExecutor {
    /// Create a new command executor; timers report back through `raw_sender`
    pub fn new(raw_sender: mpsc::UnboundedSender<RawMsg>) -> Self {
        Self {
            raw_sender: Some(raw_sender),
            ..Default::default()
        }
    }

    /// Inject the live probe service sender
    pub fn set_probe_sender(&mut self, sender: mpsc::UnboundedSender<ProbeOperation>) {
        self.probe_sender = Some(sender);
    }

    /// Inject the external player service sender
    pub fn set_player_sender(&mut self, sender: mpsc::UnboundedSender<PlayerOperation>) {
        self.player_sender = Some(sender);
    }

    /// Inject TUI command sender for executing TuiCommand asynchronously.
    pub fn set_tui_sender(&mut self, sender: mpsc::UnboundedSender<TuiCommand>) {
        self.tui_sender = Some(sender);
    }

    /// Inject render request sender for AppRunner-orchestrated rendering.
    pub fn set_render_request_sender(&mut self, sender: mpsc::UnboundedSender<()>) {
        self.render_req_sender = Some(sender);
    }

    /// Execute a single command
    pub fn execute_command(&self, cmd: &Cmd) -> Result<()> {
        match cmd {
            Cmd::ProbeChannels {
                generation,
                channels,
            } => {
                if let Some(sender) = &self.probe_sender {
                    sender.send(ProbeOperation::Probe {
                        generation: *generation,
                        channels: channels.clone(),
                    })?;
                } else {
                    log::warn!("ProbeChannels ignored: LiveProbeService not available");
                }
            }

            Cmd::LaunchPlayer { channels } => {
                if let Some(sender) = &self.player_sender {
                    sender.send(PlayerOperation::Launch {
                        channels: channels.clone(),
                    })?;
                } else {
                    log::warn!("LaunchPlayer ignored: PlayerLauncher not available");
                }
            }

            Cmd::ClearStatusAfter { serial, delay_ms } => {
                let Some(raw_tx) = self.raw_sender.clone() else {
                    log::warn!("ClearStatusAfter ignored: no raw message sender");
                    return Ok(());
                };
                let Ok(handle) = Handle::try_current() else {
                    log::warn!("ClearStatusAfter ignored: no async runtime");
                    return Ok(());
                };
                let (serial, delay) = (*serial, Duration::from_millis(*delay_ms));
                handle.spawn(async move {
                    tokio::time::sleep(delay).await;
                    let _ = raw_tx.send(RawMsg::ClearStatus(serial));
                });
            }

            Cmd::RequestRender => {
                if let Some(rtx) = &self.render_req_sender {
                    let _ = rtx.send(());
                }
            }

            Cmd::Tui(tui_cmd) => match tui_cmd {
                TuiCommand::Resize { width, height } => {
                    if let Some(tx) = &self.tui_sender {
                        let _ = tx.send(TuiCommand::Resize {
                            width: *width,
                            height: *height,
                        });
                    } else {
                        log::warn!(
                            "CmdExecutor: TUI sender not configured; dropping Resize command {width}x{height}"
                        );
                    }
                }
            },
        }

        Ok(())
    }

    /// Execute multiple commands
    pub fn execute_commands(&self, commands: &[Cmd]) -> Result<Vec<String>> {
        let mut execution_log = Vec::new();

        for cmd in commands {
            match self.execute_command(cmd) {
                Ok(()) => {
                    execution_log.push(format!("✓ Executed: {}", cmd.name()));
                }
                Err(e) => {
                    let error_msg = format!("✗ Failed to execute {}: {e}", cmd.name());
                    log::error!("{error_msg}");
                    execution_log.push(error_msg);
                }
            }
        }

        Ok(execution_log)
    }

    /// Get execution statistics
    pub fn get_stats(&self) -> CmdExecutorStats {
        CmdExecutorStats {
            has_probe_sender: self.probe_sender.is_some(),
            has_player_sender: self.player_sender.is_some(),
            is_probe_sender_closed: self.probe_sender.as_ref().map(|s| s.is_closed()),
        }
    }
}

/// Command executor statistics
#[derive(Debug, Clone)]
pub struct CmdExecutorStats {
    pub has_probe_sender: bool,
    pub has_player_sender: bool,
    pub is_probe_sender_closed: Option<bool>,
}

/// Extension trait for Cmd to get human-readable names
trait CmdName {
    fn name(&self) -> String;
}

impl CmdName for Cmd {
    fn name(&self) -> String {
        match self {
            Cmd::ProbeChannels { generation, .. } => format!("ProbeChannels({generation})"),
            Cmd::LaunchPlayer { channels } => format!("LaunchPlayer({})", channels.len()),
            Cmd::ClearStatusAfter { .. } => "ClearStatusAfter".to_string(),
            Cmd::RequestRender => "RequestRender".to_string(),
            Cmd::Tui(TuiCommand::Resize { .. }) => "Tui(Resize)".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::channel::Channel;
    use pretty_assertions::assert_eq;

    fn create_test_executor() -> (CmdExecutor, mpsc::UnboundedReceiver<RawMsg>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (CmdExecutor::new(tx), rx)
    }

    #[test]
    fn test_probe_without_service_is_dropped() {
        let (executor, mut rx) = create_test_executor();
        let cmd = Cmd::ProbeChannels {
            generation: 1,
            channels: vec![Channel::new("a", "A")],
        };

        executor.execute_command(&cmd).unwrap();

        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_probe_routed_to_service() {
        let (mut executor, _rx) = create_test_executor();
        let (probe_tx, mut probe_rx) = mpsc::unbounded_channel();
        executor.set_probe_sender(probe_tx);

        executor
            .execute_command(&Cmd::ProbeChannels {
                generation: 4,
                channels: vec![Channel::new("a", "A")],
            })
            .unwrap();

        match probe_rx.try_recv().unwrap() {
            ProbeOperation::Probe {
                generation,
                channels,
            } => {
                assert_eq!(generation, 4);
                assert_eq!(channels, vec![Channel::new("a", "A")]);
            }
        }
    }

    #[test]
    fn test_launch_routed_to_player_service() {
        let (mut executor, _rx) = create_test_executor();
        let (player_tx, mut player_rx) = mpsc::unbounded_channel();
        executor.set_player_sender(player_tx);

        executor
            .execute_command(&Cmd::LaunchPlayer {
                channels: vec![Channel::new("b", "B")],
            })
            .unwrap();

        assert!(matches!(
            player_rx.try_recv().unwrap(),
            PlayerOperation::Launch { channels } if channels.len() == 1
        ));
    }

    #[tokio::test]
    async fn test_clear_status_after_delay() {
        let (executor, mut rx) = create_test_executor();

        executor
            .execute_command(&Cmd::ClearStatusAfter {
                serial: 9,
                delay_ms: 10,
            })
            .unwrap();

        assert!(rx.try_recv().is_err());
        let msg = tokio::time::timeout(Duration::from_secs(2), rx.recv())
            .await
            .unwrap();
        assert_eq!(msg, Some(RawMsg::ClearStatus(9)));
    }

    #[test]
    fn test_clear_status_without_runtime_is_dropped() {
        let (executor, mut rx) = create_test_executor();
        executor
            .execute_command(&Cmd::ClearStatusAfter {
                serial: 1,
                delay_ms: 0,
            })
            .unwrap();
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_render_and_resize_routed_to_runner() {
        let (mut executor, _rx) = create_test_executor();
        let (tui_tx, mut tui_rx) = mpsc::unbounded_channel::<TuiCommand>();
        executor.set_tui_sender(tui_tx);
        let (render_tx, mut render_rx) = mpsc::unbounded_channel::<()>();
        executor.set_render_request_sender(render_tx);

        let log = executor
            .execute_commands(&[
                Cmd::RequestRender,
                Cmd::Tui(TuiCommand::Resize {
                    width: 100,
                    height: 50,
                }),
            ])
            .unwrap();

        assert_eq!(log.len(), 2);
        assert!(log[0].contains("✓ Executed: RequestRender"));
        assert!(log[1].contains("✓ Executed: Tui(Resize)"));

        render_rx.try_recv().unwrap();
        assert_eq!(
            tui_rx.try_recv().unwrap(),
            TuiCommand::Resize {
                width: 100,
                height: 50
            }
        );
    }

    #[test]
    fn test_closed_service_reports_failure() {
        let (mut executor, _rx) = create_test_executor();
        let (probe_tx, probe_rx) = mpsc::unbounded_channel();
        executor.set_probe_sender(probe_tx);
        drop(probe_rx);

        let log = executor
            .execute_commands(&[Cmd::ProbeChannels {
                generation: 1,
                channels: vec![],
            }])
            .unwrap();

        assert!(log[0].starts_with("✗ Failed to execute ProbeChannels(1)"));
        assert_eq!(executor.get_stats().is_probe_sender_closed, Some(true));
    }
}
