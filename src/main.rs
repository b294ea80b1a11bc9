//! Exercise motion detection: webcam frame differencing with a live status overlay.

use anyhow::Result;
use clap::Parser;
use exercise_motion::{app::ExerciseApp, cli::Args, config::Config};
use log::{info, warn};
use std::sync::atomic::Ordering;

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Initialize logger
    if args.debug {
        env_logger::init_from_env(env_logger::Env::new().default_filter_or("debug"));
    } else {
        env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
    }

    info!("Exercise Motion Detection");

    // Load configuration if provided
    let config = match &args.config {
        Some(config_path) => {
            info!("Loading configuration from: {}", config_path);
            match Config::from_file(config_path).and_then(|cfg| cfg.validate().map(|()| cfg)) {
                Ok(cfg) => cfg,
                Err(e) => {
                    warn!("Failed to load config file: {}. Using defaults.", e);
                    Config::default()
                }
            }
        }
        None => Config::default(),
    };

    let mut app = ExerciseApp::new(args.app_config(&config))?;

    let stop = app.stop_handle();
    ctrlc::set_handler(move || stop.store(true, Ordering::SeqCst))?;

    app.run()?;

    Ok(())
}
