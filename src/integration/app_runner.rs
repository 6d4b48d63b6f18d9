use std::sync::Arc;

use color_eyre::eyre::{eyre, Result};
use ratatui::prelude::Rect;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::{
    core::{cmd::TuiCommand, msg::Msg, raw_msg::RawMsg, state::AppState},
    infrastructure::{
        config::Config,
        live_probe::LiveProbeService,
        player_launcher::PlayerLauncher,
        tui::{
            event_source::{EventSource, SharedTui},
            Event,
        },
    },
    integration::{coalescer::Coalescer, renderer::Renderer, runtime::Runtime},
};

/// Drives the loop: terminal events and service reports in, update, render
pub struct AppRunner {
    runtime: Runtime,
    tui: SharedTui,
    events: EventSource,
    renderer: Renderer,
    coalescer: Coalescer,
    render_req_rx: mpsc::UnboundedReceiver<()>,
    tui_cmd_rx: mpsc::UnboundedReceiver<TuiCommand>,
    // For service termination
    service_tokens: Vec<CancellationToken>,
}

impl AppRunner {
    /// Runner reading events from `tui`, with the live probe and external
    /// player services started. Must be called inside a tokio runtime.
    pub fn new(config: Config, tui: SharedTui) -> Result<Self> {
        let events = EventSource::tui(Arc::clone(&tui));
        let mut runner = Self::new_with_events(config.clone(), tui, events)?;
        runner.start_services(&config)?;
        Ok(runner)
    }

    /// Runner without background services; commands for them are dropped
    pub fn new_with_events(config: Config, tui: SharedTui, events: EventSource) -> Result<Self> {
        let mut runtime = Runtime::new_with_executor(AppState::new_with_config(config));

        let (render_req_tx, render_req_rx) = mpsc::unbounded_channel();
        let (tui_cmd_tx, tui_cmd_rx) = mpsc::unbounded_channel();
        runtime.add_render_request_sender(render_req_tx).map_err(|e| eyre!(e))?;
        runtime.add_tui_sender(tui_cmd_tx).map_err(|e| eyre!(e))?;

        Ok(Self {
            runtime,
            tui,
            events,
            renderer: Renderer::new(),
            coalescer: Coalescer::new(),
            render_req_rx,
            tui_cmd_rx,
            service_tokens: vec![],
        })
    }

    fn start_services(&mut self, config: &Config) -> Result<()> {
        let raw_tx = self.runtime.get_raw_sender();

        let (probe_tx, probe_token, probe_service) =
            LiveProbeService::new(&config.probe, raw_tx.clone())?;
        probe_service.run();
        self.runtime.add_probe_sender(probe_tx).map_err(|e| eyre!(e))?;

        let (player_tx, player_token, launcher) =
            PlayerLauncher::new(config.player.command.clone(), raw_tx);
        launcher.run();
        self.runtime.add_player_sender(player_tx).map_err(|e| eyre!(e))?;

        self.service_tokens.extend([probe_token, player_token]);
        Ok(())
    }

    pub fn runtime(&self) -> &Runtime {
        &self.runtime
    }

    /// Queue a domain message for the first update cycle
    pub fn send_msg(&mut self, msg: Msg) {
        self.runtime.send_msg(msg);
    }

    pub async fn run(&mut self) -> Result<()> {
        self.tui.lock().await.enter()?;
        self.update_cycle();
        self.apply_tui_commands().await?;
        self.coalescer.take_render();
        self.render().await?;

        loop {
            let Some(event) = self.events.next().await else {
                log::info!("Event source exhausted");
                break;
            };
            self.handle_event(event);
            self.update_cycle();
            self.apply_tui_commands().await?;

            if self.runtime.state().system.should_suspend {
                self.suspend().await?;
            }
            if self.runtime.state().system.should_quit {
                break;
            }
            if self.coalescer.take_render() {
                self.render().await?;
            }
        }

        self.shutdown().await
    }

    fn handle_event(&mut self, event: Event) {
        match event {
            Event::Quit | Event::Closed => self.runtime.send_raw_msg(RawMsg::Quit),
            Event::Error => self
                .runtime
                .send_raw_msg(RawMsg::Error("Terminal input error".to_string())),
            Event::Tick => self.runtime.send_raw_msg(RawMsg::Tick),
            Event::Render => self.coalescer.frame_tick(),
            Event::Resize(w, h) => self.coalescer.resize(w, h),
            Event::Key(key) => self.runtime.send_raw_msg(RawMsg::Key(key)),
            Event::Init | Event::FocusGained | Event::FocusLost => {}
        }
    }

    fn update_cycle(&mut self) {
        if let Some((w, h)) = self.coalescer.take_resize() {
            self.runtime.send_raw_msg(RawMsg::Resize(w, h));
        }
        match self.runtime.run_update_cycle() {
            Ok(log) => log.iter().for_each(|line| log::trace!("{line}")),
            Err(e) => {
                log::error!("Runtime error: {e}");
                self.runtime
                    .send_raw_msg(RawMsg::Error(format!("Runtime error: {e}")));
            }
        }
        while self.render_req_rx.try_recv().is_ok() {
            self.coalescer.request_render();
        }
    }

    async fn apply_tui_commands(&mut self) -> Result<()> {
        while let Ok(cmd) = self.tui_cmd_rx.try_recv() {
            match cmd {
                TuiCommand::Resize { width, height } => {
                    self.tui
                        .lock()
                        .await
                        .resize(Rect::new(0, 0, width, height))?;
                    self.coalescer.request_render();
                }
            }
        }
        Ok(())
    }

    async fn suspend(&mut self) -> Result<()> {
        log::info!("Suspending");
        {
            let mut tui = self.tui.lock().await;
            tui.suspend()?;
            tui.resume()?;
        }
        log::info!("Resumed");
        self.runtime.send_raw_msg(RawMsg::Resume);
        self.update_cycle();
        Ok(())
    }

    async fn render(&mut self) -> Result<()> {
        self.renderer.render(&self.tui, self.runtime.state()).await
    }

    async fn shutdown(&mut self) -> Result<()> {
        for token in &self.service_tokens {
            token.cancel();
        }
        self.tui.lock().await.exit()
    }
}
