use anyhow::Context;
use chess_board::app::App;
use chess_board::config::{Config, Variant};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "chess_board")]
#[command(about = "Draw a chessboard and report which piece gets clicked")]
struct Cli {
    /// Config file (defaults to ./chess.toml when present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Which view to run
    #[arg(long, value_enum)]
    variant: Option<Variant>,

    /// Directory holding shaders/ and textures/
    #[arg(long)]
    assets: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = Config::load(cli.config.as_deref()).context("failed to load configuration")?;
    if let Some(variant) = cli.variant {
        config.variant = variant;
    }
    if let Some(assets) = cli.assets {
        config.assets.root = assets;
    }

    log::info!("starting {:?} view, assets in {}", config.variant, config.assets.root.display());

    App::run(config)
}
