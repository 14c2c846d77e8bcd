//! Tile Crawl: a tiny tile-based 2D game prototype
//!
//! A skeleton walks a tile map while ninjas close in. Potions heal the
//! player and make it a little faster.
//!
//! Controls: arrow keys or WASD to move, left click to inspect a tile.

mod assets;
mod config;
mod error;
mod game;
mod input;

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use macroquad::prelude::*;

use assets::Assets;
use config::{Config, DEFAULT_CONFIG_PATH};
use game::{draw_game, Game, Tilemap, Viewport};
use input::FrameInput;

#[derive(Parser, Debug)]
#[command(name = "tile-crawl")]
#[command(about = "A tiny tile-based 2D game prototype")]
struct Opts {
    /// Path to a RON config file
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,
    /// Tilemap JSON to load instead of the configured one
    #[arg(long)]
    map: Option<PathBuf>,
    /// Skip tilemap loading and drawing
    #[arg(long)]
    no_tiles: bool,
    /// Write the effective config to this path and exit
    #[arg(long)]
    dump_config: Option<PathBuf>,
}

fn init_logging() {
    #[cfg(not(target_arch = "wasm32"))]
    {
        // window_conf and main both call this; only the first one wins
        let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
            .try_init();
    }
}

/// Parse the command line and load the config it points at
fn load_settings() -> anyhow::Result<(Opts, Config)> {
    let opts = Opts::parse();
    let mut config = Config::load(&opts.config)
        .with_context(|| format!("when loading config file at {:?}", opts.config))?;
    if let Some(map) = &opts.map {
        config.paths.tilemap = map.clone();
    }
    if opts.no_tiles {
        config.features.tiles = false;
    }
    Ok((opts, config))
}

fn window_conf() -> Conf {
    init_logging();
    let window = load_settings()
        .map(|(_, config)| config.window)
        .unwrap_or_default();
    Conf {
        window_title: window.title,
        window_width: (window.screen_width * window.scale) as i32,
        window_height: (window.screen_height * window.scale) as i32,
        window_resizable: window.resizable,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    crashlog::setup!(crashlog::cargo_metadata!().capitalized(), false);

    init_logging();

    if let Err(e) = run().await {
        log::error!("{:#}", e);
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let (opts, config) = load_settings()?;
    if let Some(path) = &opts.dump_config {
        config
            .save(path)
            .with_context(|| format!("when writing config to {:?}", path))?;
        log::info!("Wrote config to {:?}", path);
        return Ok(());
    }

    let assets = Assets::load(&config.paths).await;

    let mut game = Game::new(config.clone());
    if config.features.tiles {
        match Tilemap::load(&config.paths.tilemap) {
            Ok(map) => {
                let size = map.pixel_size();
                log::info!(
                    "Loaded tilemap {:?} ({} layers, {}x{} px)",
                    config.paths.tilemap,
                    map.layers.len(),
                    size.x,
                    size.y
                );
                game = game.with_tilemap(map);
            }
            Err(e) => log::warn!("No tilemap: {}", e),
        }
    }

    let logical = vec2(
        config.window.screen_width as f32,
        config.window.screen_height as f32,
    );
    let frame_time = 1.0 / config.gameplay.ticks_per_second.max(1) as f64;
    let mut accumulator = 0.0;
    let mut pending = FrameInput::default();

    log::info!("=== {} ===", config.window.title);

    loop {
        let viewport = Viewport::fit(logical, vec2(screen_width(), screen_height()));

        // Fixed-rate ticks so movement speed does not depend on refresh rate.
        // Key releases and clicks wait in `pending` until a tick consumes them.
        accumulator += get_frame_time() as f64;
        let mut polled = FrameInput::poll();
        polled.click = polled
            .click
            .map(|p| viewport.to_logical(p))
            .filter(|p| viewport.contains_logical(*p));
        pending.absorb(polled);
        while accumulator >= frame_time {
            accumulator -= frame_time;
            game.update(&pending);
            pending = pending.held_only();
        }
        debug_assert!(game.positions_finite());
        // Don't spiral after a long stall
        accumulator = accumulator.min(frame_time * 4.0);

        draw_game(&game, &assets, &viewport);

        next_frame().await;
    }
}
