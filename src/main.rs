use anyhow::{Context, Result};
use clap::Parser;
use grid_snake::game::{FoodSource, GameConfig, RandomFood};
use grid_snake::modes::HumanMode;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "grid_snake")]
#[command(version, about = "Snake on a square grid, in the terminal")]
struct Cli {
    /// JSON file with game settings; flags below override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Side length of the play area, in canvas units
    #[arg(long)]
    canvas_size: Option<u32>,

    /// Side length of one cell, in canvas units
    #[arg(long)]
    tile_size: Option<u32>,

    /// Milliseconds between two ticks
    #[arg(long)]
    tick_ms: Option<u64>,

    /// Seed for food placement, for reproducible games
    #[arg(long)]
    seed: Option<u64>,

    /// Write logs to this file (filter with RUST_LOG)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Cli {
    fn game_config(&self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => GameConfig::load(path)?,
            None => GameConfig::default(),
        };

        if let Some(canvas_size) = self.canvas_size {
            config.canvas_size = canvas_size;
        }
        if let Some(tile_size) = self.tile_size {
            config.tile_size = tile_size;
        }
        if let Some(tick_ms) = self.tick_ms {
            config.tick_interval_ms = tick_ms;
        }

        config.validate().context("Invalid game configuration")?;
        Ok(config)
    }

    fn food_source(&self) -> Box<dyn FoodSource> {
        match self.seed {
            Some(seed) => Box::new(RandomFood::seeded(seed)),
            None => Box::new(RandomFood::from_entropy()),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_file.as_deref())?;

    let config = cli.game_config()?;
    tracing::info!(
        grid = config.grid_dimension(),
        tick_ms = config.tick_interval_ms,
        "starting game"
    );

    let mut human_mode = HumanMode::new(config, cli.food_source())?;
    human_mode.run().await?;

    Ok(())
}

/// The terminal owns stdout/stderr, so logs only go to a file when asked for
fn init_tracing(log_file: Option<&Path>) -> Result<()> {
    let Some(path) = log_file else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .finish();

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        eprintln!("tracing subscriber already set");
    }
    Ok(())
}
