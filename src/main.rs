mod apples;
mod board;
mod config;
mod game;
mod navigator;
mod sim;
mod snake;
mod term;

use std::time::Duration;

use anyhow::Result;
use clap::Parser;

use crate::config::GameConfig;
use crate::game::{ControlMode, SnakeGame};

pub type BoardInt = u16;
pub type Coords = (BoardInt, BoardInt);

#[derive(Parser)]
#[command(name = "autosnake", version, about = "Self-playing terminal snake with wormhole gaps")]
struct Cli {
    /// Steer with the arrow keys instead of the autopilot
    #[arg(long)]
    manual: bool,

    /// Milliseconds between two simulation ticks
    #[arg(long, default_value_t = 200)]
    delay_ms: u64,

    /// Use a randomly generated apple sequence instead of the built-in one
    #[arg(long)]
    random_apples: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = GameConfig::default();
    config.tick_delay = Duration::from_millis(cli.delay_ms);
    if cli.random_apples {
        config.randomize_targets();
    }

    let mode = if cli.manual { ControlMode::Manual } else { ControlMode::Auto };
    SnakeGame::new(config).run(mode)
}
