use std::process::Stdio;

use color_eyre::eyre::{eyre, Result};
use tokio::{process::Command, sync::mpsc};
use tokio_util::sync::CancellationToken;

use crate::{
    core::raw_msg::RawMsg, domain::channel::Channel, infrastructure::config::URL_PLACEHOLDER,
};

/// Work accepted by [`PlayerLauncher`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerOperation {
    Launch { channels: Vec<Channel> },
}

/// Build the argv for one channel: `{url}` is replaced, or the URL is appended
pub fn build_command(template: &[String], url: &str) -> Result<(String, Vec<String>)> {
    let (program, args) = template
        .split_first()
        .ok_or_else(|| eyre!("player command is empty"))?;

    let mut substituted = false;
    let mut args: Vec<String> = args
        .iter()
        .map(|arg| {
            if arg.contains(URL_PLACEHOLDER) {
                substituted = true;
                arg.replace(URL_PLACEHOLDER, url)
            } else {
                arg.clone()
            }
        })
        .collect();
    if !substituted {
        args.push(url.to_string());
    }
    Ok((program.clone(), args))
}

/// Spawns the configured external player, one detached process per channel
pub struct PlayerLauncher {
    command: Vec<String>,
    op_rx: mpsc::UnboundedReceiver<PlayerOperation>,
    cancel_token: CancellationToken,
    raw_tx: mpsc::UnboundedSender<RawMsg>,
}

pub type NewPlayerLauncher = (
    mpsc::UnboundedSender<PlayerOperation>,
    CancellationToken,
    PlayerLauncher,
);

impl PlayerLauncher {
    pub fn new(command: Vec<String>, raw_tx: mpsc::UnboundedSender<RawMsg>) -> NewPlayerLauncher {
        let (op_tx, op_rx) = mpsc::unbounded_channel();
        let cancel_token = CancellationToken::new();

        (
            op_tx,
            cancel_token.clone(),
            Self {
                command,
                op_rx,
                cancel_token,
                raw_tx,
            },
        )
    }

    pub fn run(mut self) {
        tokio::spawn(async move {
            loop {
                tokio::select! {
                    result = self.op_rx.recv() => match result {
                        Some(PlayerOperation::Launch { channels }) => {
                            for channel in &channels {
                                self.launch(channel);
                            }
                        }
                        None => break,
                    },
                    _ = self.cancel_token.cancelled() => {
                        log::info!("PlayerLauncher received cancellation signal");
                        break;
                    }
                }
            }
        });
    }

    /// Launch failures are reported, never fatal
    fn launch(&self, channel: &Channel) {
        let msg = match self.spawn(channel) {
            Ok(()) => RawMsg::PlayerLaunched {
                name: channel.name.clone(),
            },
            Err(e) => {
                log::warn!("Failed to launch player for {}: {e}", channel.name);
                RawMsg::PlayerLaunchFailed {
                    name: channel.name.clone(),
                    error: e.to_string(),
                }
            }
        };
        let _ = self.raw_tx.send(msg);
    }

    fn spawn(&self, channel: &Channel) -> Result<()> {
        let (program, args) = build_command(&self.command, &channel.id.watch_url())?;
        log::info!("Launching {program} {args:?}");

        // The player must not draw over the TUI
        let mut child = Command::new(&program)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| eyre!("{program}: {e}"))?;

        // Reap the child so it never lingers as a zombie
        let name = channel.name.clone();
        tokio::spawn(async move {
            match child.wait().await {
                Ok(status) => log::debug!("Player for {name} exited with {status}"),
                Err(e) => log::warn!("Player for {name} could not be awaited: {e}"),
            }
        });
        Ok(())
    }
}
