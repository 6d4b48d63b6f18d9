use std::{collections::VecDeque, sync::Arc};

use tokio::sync::Mutex;

use crate::infrastructure::tui::{Event, TuiLike};

pub type SharedTui = Arc<Mutex<dyn TuiLike + Send>>;

/// Where the runner pulls terminal events from
pub enum EventSource {
    /// Events come from the terminal itself
    Tui(SharedTui),
    /// Scripted events, drained once
    Scripted(VecDeque<Event>),
}

impl EventSource {
    pub fn tui(tui: SharedTui) -> Self {
        EventSource::Tui(tui)
    }

    pub fn scripted(events: impl IntoIterator<Item = Event>) -> Self {
        EventSource::Scripted(events.into_iter().collect())
    }

    pub async fn next(&mut self) -> Option<Event> {
        match self {
            EventSource::Tui(tui) => {
                let mut guard = tui.lock().await;
                guard.next().await
            }
            EventSource::Scripted(queue) => queue.pop_front(),
        }
    }
}
