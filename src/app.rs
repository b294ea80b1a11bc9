//! Capture loop: camera in, status overlay out.

use crate::{
    config::Config,
    constants::{KEY_ESCAPE, KEY_QUIT_LOWER, KEY_QUIT_UPPER, TRACKBAR_NAME},
    error::{Error, Result},
    motion_detector::{DetectionParams, MotionDetector, MotionReading},
    overlay::draw_overlay,
    stats::SessionStats,
};
use log::{debug, error, info, warn};
use opencv::{
    core::Mat,
    highgui::{self, WINDOW_AUTOSIZE},
    prelude::*,
    videoio::{self, VideoCapture, CAP_PROP_BUFFERSIZE},
};
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc, Mutex, MutexGuard,
};
use std::time::Instant;

/// Main application configuration
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Camera index or video file path
    pub video_source: VideoSource,
    /// GUI display mode
    pub gui_mode: GuiMode,
    /// Initial motion threshold
    pub threshold: i32,
    /// Differencing parameters
    pub params: DetectionParams,
    /// Window title
    pub window_name: String,
    /// Upper bound of the threshold slider
    pub trackbar_max: i32,
    /// Key polling delay in milliseconds
    pub wait_key_ms: i32,
    /// Capture buffer size for cameras (0 keeps the backend default)
    pub buffer_size: i32,
    /// Stop after this many frames
    pub max_frames: Option<u64>,
}

/// Video source type
#[derive(Debug, Clone, PartialEq)]
pub enum VideoSource {
    /// Webcam index
    Camera(i32),
    /// Video file path
    File(String),
}

/// GUI display mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuiMode {
    /// Show the annotated frame with a threshold slider
    Window,
    /// No GUI (headless)
    None,
}

impl GuiMode {
    /// Parse a mode name, falling back to `Window` for unknown names
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "none" | "headless" => Self::None,
            "window" | "all" => Self::Window,
            other => {
                warn!("Unknown GUI mode '{}', using window", other);
                Self::Window
            }
        }
    }
}

impl AppConfig {
    /// Build the application settings from a configuration file
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self {
            video_source: VideoSource::Camera(config.camera.index),
            gui_mode: if config.display.gui { GuiMode::Window } else { GuiMode::None },
            threshold: config.detection.threshold,
            params: config.detection.params(),
            window_name: config.display.window_name.clone(),
            trackbar_max: config.display.trackbar_max,
            wait_key_ms: config.display.wait_key_ms,
            buffer_size: config.camera.buffer_size,
            max_frames: None,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

/// Whether a `wait_key` result asks the loop to stop
#[must_use]
pub fn is_quit_key(key: i32) -> bool {
    matches!(key, KEY_QUIT_LOWER | KEY_QUIT_UPPER | KEY_ESCAPE)
}

/// Main application struct
pub struct ExerciseApp {
    config: AppConfig,
    detector: Arc<Mutex<MotionDetector>>,
    video_capture: VideoCapture,
    stats: SessionStats,
    stop_requested: Arc<AtomicBool>,
}

impl ExerciseApp {
    /// Open the video source and set up the window
    ///
    /// # Errors
    ///
    /// Returns `Error::Camera` if the source cannot be opened, or an `OpenCV`
    /// error if window creation fails
    pub fn new(config: AppConfig) -> Result<Self> {
        info!("Initializing exercise motion detection");

        let detector = Arc::new(Mutex::new(MotionDetector::with_params(config.threshold, config.params)?));
        let video_capture = open_video_source(&config)?;

        if config.gui_mode == GuiMode::Window {
            create_window(&config, &detector)?;
        }

        Ok(Self {
            config,
            detector,
            video_capture,
            stats: SessionStats::new(),
            stop_requested: Arc::new(AtomicBool::new(false)),
        })
    }

    /// Shared handle to the detector, e.g. for adjusting the threshold
    #[must_use]
    pub fn detector(&self) -> Arc<Mutex<MotionDetector>> {
        Arc::clone(&self.detector)
    }

    /// Flag that ends the capture loop at the next frame once set.
    ///
    /// Headless runs have no key polling, so this is how a signal handler
    /// asks for a clean shutdown.
    #[must_use]
    pub fn stop_handle(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.stop_requested)
    }

    #[must_use]
    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }

    /// Run the capture loop until the user quits or frames run out.
    ///
    /// The capture device is released and windows are closed on every exit
    /// path.
    pub fn run(&mut self) -> Result<()> {
        if self.config.gui_mode == GuiMode::Window {
            info!("Press 'q' to quit");
        } else {
            info!("Press Ctrl-C to quit");
        }

        let start_time = Instant::now();
        let outcome = self.capture_loop();
        let shutdown = self.shutdown();

        let elapsed = start_time.elapsed().as_secs_f64();
        if elapsed > 0.0 && self.stats.frames_processed > 0 {
            #[allow(clippy::cast_precision_loss)]
            let fps = self.stats.frames_processed as f64 / elapsed;
            info!("Average FPS: {:.1}", fps);
        }
        info!("Session summary: {}", self.stats.summary());

        outcome.and(shutdown)
    }

    fn capture_loop(&mut self) -> Result<()> {
        let mut frame = Mat::default();

        loop {
            if self.stop_requested.load(Ordering::SeqCst) {
                info!("Stop requested, exiting...");
                break;
            }

            if let Some(max_frames) = self.config.max_frames {
                if self.stats.frames_processed >= max_frames {
                    info!("Processed {} frames, stopping", max_frames);
                    break;
                }
            }

            if !self.video_capture.read(&mut frame)? || frame.empty() {
                match self.config.video_source {
                    VideoSource::File(_) => info!("End of video file reached"),
                    VideoSource::Camera(_) => error!("Blank frame grabbed"),
                }
                break;
            }

            let (reading, threshold) = {
                let mut detector = self.lock_detector()?;
                let reading = detector.process(&frame)?;
                (reading, detector.threshold())
            };
            self.report(&reading);

            if self.config.gui_mode == GuiMode::Window {
                draw_overlay(&mut frame, &reading, threshold)?;
                highgui::imshow(&self.config.window_name, &frame)?;

                let key = highgui::wait_key(self.config.wait_key_ms)?;
                if is_quit_key(key) {
                    info!("Exiting...");
                    break;
                }
            }
        }

        Ok(())
    }

    fn report(&mut self, reading: &MotionReading) {
        if let Some(status) = self.stats.record(reading) {
            info!("Status: {} (motion score {})", status, reading.score);
        } else if self.config.gui_mode == GuiMode::None {
            debug!("Frame {}: motion score {}", self.stats.frames_processed, reading.score);
        }
    }

    fn lock_detector(&self) -> Result<MutexGuard<'_, MotionDetector>> {
        self.detector
            .lock()
            .map_err(|_| Error::MotionDetectionError("Motion detector lock poisoned".to_string()))
    }

    fn shutdown(&mut self) -> Result<()> {
        info!("Releasing video source");
        self.video_capture.release()?;
        if self.config.gui_mode == GuiMode::Window {
            highgui::destroy_all_windows()?;
        }
        Ok(())
    }
}

fn open_video_source(config: &AppConfig) -> Result<VideoCapture> {
    match &config.video_source {
        VideoSource::Camera(index) => {
            info!("Opening camera {}", index);
            let mut cap = VideoCapture::new(*index, videoio::CAP_ANY)?;
            if !cap.is_opened()? {
                return Err(Error::Camera(format!("Could not open camera {index}")));
            }

            // Reduce buffer size for lower latency
            if config.buffer_size > 0 && !cap.set(CAP_PROP_BUFFERSIZE, f64::from(config.buffer_size))? {
                debug!("Camera backend ignored buffer size request");
            }
            Ok(cap)
        }
        VideoSource::File(path) => {
            info!("Opening video file: {}", path);
            let cap = VideoCapture::from_file(path, videoio::CAP_ANY)?;
            if !cap.is_opened()? {
                return Err(Error::Camera(format!("Failed to open video file: {path}")));
            }
            Ok(cap)
        }
    }
}

fn create_window(config: &AppConfig, detector: &Arc<Mutex<MotionDetector>>) -> Result<()> {
    highgui::named_window(&config.window_name, WINDOW_AUTOSIZE)?;

    let handle = Arc::clone(detector);
    highgui::create_trackbar(
        TRACKBAR_NAME,
        &config.window_name,
        None,
        config.trackbar_max,
        Some(Box::new(move |position: i32| match handle.lock() {
            Ok(mut detector) => {
                detector.set_threshold(position);
                debug!("Threshold set to {}", position);
            }
            Err(_) => warn!("Motion detector unavailable, threshold not updated"),
        })),
    )?;

    let initial = config.threshold.clamp(0, config.trackbar_max);
    if initial != config.threshold {
        warn!(
            "Threshold {} is outside the slider range, using {}",
            config.threshold, initial
        );
    }
    highgui::set_trackbar_pos(TRACKBAR_NAME, &config.window_name, initial)?;

    Ok(())
}
