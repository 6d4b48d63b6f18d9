use clap::Parser;

use crate::{domain::layout::Layout, utils::version};

#[derive(Parser, Debug)]
#[command(author, version = version(), about)]
pub struct Cli {
    #[arg(
        short,
        long,
        value_name = "FLOAT",
        help = "Tick rate, i.e. number of ticks per second",
        default_value_t = 4.0
    )]
    pub tick_rate: f64,

    #[arg(
        short,
        long,
        value_name = "FLOAT",
        help = "Frame rate, i.e. number of frames per second",
        default_value_t = 30.0
    )]
    pub frame_rate: f64,

    #[arg(
        short,
        long,
        value_name = "N",
        value_parser = parse_layout,
        help = "Number of panes in the player (1, 2, 4, 6 or 9)"
    )]
    pub layout: Option<Layout>,

    #[arg(long, help = "Skip live detection and treat every channel as live")]
    pub no_probe: bool,
}

fn parse_layout(raw: &str) -> Result<Layout, String> {
    let size: usize = raw
        .parse()
        .map_err(|_| format!("`{raw}` is not a number"))?;
    Layout::try_from(size).map_err(|e| e.to_string())
}
