//! Command-line arguments and their merge with the configuration file.

use crate::{
    app::{AppConfig, GuiMode, VideoSource},
    config::Config,
};
use clap::Parser;

#[derive(Parser, Debug, Clone, PartialEq)]
#[command(
    author,
    version,
    about = "Webcam motion detection that reports whether you are exercising or resting",
    long_about = None
)]
pub struct Args {
    /// Camera index to use
    #[arg(long, conflicts_with = "video")]
    pub cam: Option<i32>,

    /// Video file to process instead of a camera
    #[arg(short, long)]
    pub video: Option<String>,

    /// Motion score above which the status switches to exercising
    #[arg(short, long)]
    pub threshold: Option<i32>,

    /// GUI display mode (window, none)
    #[arg(short, long)]
    pub gui: Option<String>,

    /// Stop after processing this many frames
    #[arg(long)]
    pub max_frames: Option<u64>,

    /// Path to configuration file (YAML format)
    #[arg(short = 'C', long)]
    pub config: Option<String>,

    /// Enable debug output
    #[arg(short, long)]
    pub debug: bool,
}

impl Args {
    /// Apply command-line overrides on top of the loaded configuration
    #[must_use]
    pub fn app_config(&self, config: &Config) -> AppConfig {
        let mut app_config = AppConfig::from_config(config);

        if let Some(path) = &self.video {
            app_config.video_source = VideoSource::File(path.clone());
        } else if let Some(index) = self.cam {
            app_config.video_source = VideoSource::Camera(index);
        }
        if let Some(threshold) = self.threshold {
            app_config.threshold = threshold;
        }
        if let Some(gui) = &self.gui {
            app_config.gui_mode = GuiMode::from_name(gui);
        }
        app_config.max_frames = self.max_frames;

        app_config
    }
}
