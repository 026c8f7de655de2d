use std::error::Error;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

mod app;
mod config;
mod game;
mod io;
mod ui;

pub use config::{
    BOARD_H, BOARD_W, CELL_W, FOOD_POINTS, INITIAL_SNAKE_LEN, INITIAL_TICK_MS, MIN_PANE_WIDTH,
    MIN_TICK_MS, PLAY_H, PLAY_W, SPAWN_ATTEMPTS, TICK_STEP_MS,
};
pub use game::Game;

use game::GameMode;

#[derive(Parser)]
#[command(name = "serpent")]
pub struct Args {
    /// Boundary policy: walls end the run, wrap passes through.
    #[arg(long, value_enum, default_value = "walls")]
    pub mode: ModeArg,

    /// Seed for food placement; random when omitted.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Profile file path (defaults to ~/.serpent/profile.yaml).
    #[arg(long)]
    pub profile: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ModeArg {
    Walls,
    Wrap,
}

impl From<ModeArg> for GameMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Walls => GameMode::Walls,
            ModeArg::Wrap => GameMode::PassThrough,
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    app::run(args)
}
