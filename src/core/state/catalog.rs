use crate::{
    core::{cmd::Cmd, msg::catalog::CatalogMsg},
    domain::channel::{Channel, ChannelId, ChannelRegistry, LiveChannel},
};

/// Progress of live detection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Detection {
    #[default]
    NotStarted,
    Running {
        generation: u64,
    },
    Completed {
        generation: u64,
        /// Nothing answered, so every channel was assumed live
        fallback: bool,
    },
    /// Probing disabled; every channel is assumed live
    Skipped,
}

/// Channel registry plus the outcome of the latest detection pass
#[derive(Debug, Clone, Default)]
pub struct CatalogState {
    pub registry: ChannelRegistry,
    /// Channels guessed live, in registry order
    pub live: Vec<Channel>,
    pub detection: Detection,
    generation: u64,
}

impl CatalogState {
    pub fn new(registry: ChannelRegistry) -> Self {
        Self {
            registry,
            ..Default::default()
        }
    }

    pub fn is_live(&self, id: &ChannelId) -> bool {
        self.live.iter().any(|c| &c.id == id)
    }

    pub fn live_count(&self) -> usize {
        self.live.len()
    }

    pub fn is_detecting(&self) -> bool {
        matches!(self.detection, Detection::Running { .. })
    }

    /// Generation of the pass whose results are currently shown
    pub fn completed_generation(&self) -> Option<u64> {
        match self.detection {
            Detection::Completed { generation, .. } => Some(generation),
            _ => None,
        }
    }

    /// Registry channels with their current liveness guess
    pub fn annotated(&self) -> Vec<LiveChannel> {
        self.registry
            .iter()
            .map(|c| LiveChannel::new(c.clone(), self.is_live(&c.id)))
            .collect()
    }

    pub fn update(&mut self, msg: CatalogMsg) -> Vec<Cmd> {
        match msg {
            CatalogMsg::StartDetection => {
                self.generation += 1;
                self.detection = Detection::Running {
                    generation: self.generation,
                };
                vec![Cmd::ProbeChannels {
                    generation: self.generation,
                    channels: self.registry.as_slice().to_vec(),
                }]
            }

            CatalogMsg::DetectionCompleted {
                generation,
                results,
            } => {
                if generation != self.generation {
                    log::debug!(
                        "Ignoring stale detection results (generation {generation}, latest {})",
                        self.generation
                    );
                    return vec![];
                }
                self.apply_results(generation, results);
                vec![]
            }

            CatalogMsg::MarkAllLive => {
                self.live = self.registry.as_slice().to_vec();
                self.detection = Detection::Skipped;
                vec![]
            }
        }
    }

    fn apply_results(&mut self, generation: u64, results: Vec<LiveChannel>) {
        // Keep registry order regardless of the order results arrived in
        let live: Vec<Channel> = self
            .registry
            .iter()
            .filter(|c| results.iter().any(|r| r.live && r.channel.id == c.id))
            .cloned()
            .collect();

        let fallback = live.is_empty();
        self.live = if fallback {
            log::warn!("No channel answered the live probe; assuming all are live");
            self.registry.as_slice().to_vec()
        } else {
            live
        };
        self.detection = Detection::Completed {
            generation,
            fallback,
        };
        log::info!(
            "Detection pass {generation} finished: {} of {} live",
            self.live.len(),
            self.registry.len()
        );
    }
}
