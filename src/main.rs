use anyhow::Result;
use arcade_snake::game::GameConfig;
use arcade_snake::modes::TerminalMode;
use clap::{Parser, ValueEnum};
use log::info;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "arcade_snake")]
#[command(version, about = "Classic Snake in a native window or the terminal")]
struct Cli {
    /// Where to draw the game (defaults to the window when built with it)
    #[arg(long)]
    frontend: Option<Frontend>,

    /// JSON file with game settings; flags below override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Window width in pixels
    #[arg(long)]
    width: Option<u32>,

    /// Window height in pixels
    #[arg(long)]
    height: Option<u32>,

    /// Grid cell size in pixels
    #[arg(long)]
    cell_size: Option<u32>,

    /// Milliseconds per game step
    #[arg(long)]
    tick_ms: Option<u64>,

    /// Starting snake length
    #[arg(long)]
    initial_length: Option<usize>,

    /// Seed for food placement
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Frontend {
    /// Native SDL2 window
    Window,
    /// Text rendering in the current terminal
    Terminal,
}

impl Cli {
    fn game_config(&self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => GameConfig::load(path)?,
            None => GameConfig::default(),
        };

        if let Some(width) = self.width {
            config.window_width = width;
        }
        if let Some(height) = self.height {
            config.window_height = height;
        }
        if let Some(cell_size) = self.cell_size {
            config.cell_size = cell_size;
        }
        if let Some(tick_ms) = self.tick_ms {
            config.tick_ms = tick_ms;
        }
        if let Some(initial_length) = self.initial_length {
            config.initial_length = initial_length;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }

        config.validate()?;
        Ok(config)
    }

    fn frontend(&self) -> Frontend {
        self.frontend.unwrap_or(if cfg!(feature = "window") {
            Frontend::Window
        } else {
            Frontend::Terminal
        })
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let config = cli.game_config()?;
    let frontend = cli.frontend();

    info!(
        "starting {:?} frontend: {}x{} px, {} px cells",
        frontend, config.window_width, config.window_height, config.cell_size
    );

    // Errors are reported once, by anyhow's `Error: ...` on return
    run(frontend, config).await
}

async fn run(frontend: Frontend, config: GameConfig) -> Result<()> {
    match frontend {
        Frontend::Terminal => TerminalMode::new(config).run().await,
        #[cfg(feature = "window")]
        Frontend::Window => arcade_snake::modes::WindowMode::new(config).run(),
        #[cfg(not(feature = "window"))]
        Frontend::Window => {
            anyhow::bail!("this build has no window support; rebuild with --features window")
        }
    }
}
