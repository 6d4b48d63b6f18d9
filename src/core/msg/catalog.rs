use serde::{Deserialize, Serialize};

use crate::domain::channel::LiveChannel;

/// Messages driving live detection passes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CatalogMsg {
    /// Begin a new detection pass over the whole registry
    StartDetection,
    /// Results of the pass tagged `generation`
    DetectionCompleted {
        generation: u64,
        results: Vec<LiveChannel>,
    },
    /// Skip probing and treat every channel as live
    MarkAllLive,
}
