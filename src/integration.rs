//! Wiring between the Elm core, background services and the terminal
//!
//! - `Runtime`: message queues, translate -> update -> execute
//! - `AppRunner`: the event loop
//! - `Renderer`/`Coalescer`: drawing and render/resize coalescing

pub mod app_runner;
pub mod coalescer;
pub mod renderer;
pub mod runtime;
