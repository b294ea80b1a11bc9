//! Webcam motion detection that tells exercising from resting.
//!
//! Frames are converted to grayscale and differenced against the previous
//! frame. Pixels that changed by more than a fixed delta form a binary mask,
//! which is smoothed with a small Gaussian blur; the count of remaining
//! non-zero pixels is the motion score. A score above a user-adjustable
//! threshold is reported as "Exercising", anything else as "Resting".
//!
//! `OpenCV` does the heavy lifting: capture, color conversion, thresholding,
//! blur, text rendering and the threshold slider.
//!
//! # Examples
//!
//! ## Scoring frames
//!
//! ```no_run
//! use exercise_motion::motion_detector::MotionDetector;
//! use opencv::{core::Mat, prelude::*, videoio};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut detector = MotionDetector::new(1500);
//! let mut cap = videoio::VideoCapture::new(0, videoio::CAP_ANY)?;
//! let mut frame = Mat::default();
//!
//! while cap.read(&mut frame)? && !frame.empty() {
//!     let reading = detector.process(&frame)?;
//!     if reading.is_active {
//!         println!("Exercising (score {})", reading.score);
//!     }
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Running the full application
//!
//! ```no_run
//! use exercise_motion::app::{AppConfig, ExerciseApp};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut app = ExerciseApp::new(AppConfig::default())?;
//! app.run()?;
//! # Ok(())
//! # }
//! ```

/// Frame-differencing motion detector
pub mod motion_detector;

/// Status overlay rendering
pub mod overlay;

/// Session statistics
pub mod stats;

/// Main application module
pub mod app;

/// Command-line arguments
pub mod cli;

/// Error types and result handling
pub mod error;

/// Constants used throughout the application
pub mod constants;

/// Configuration management
pub mod config;

pub use error::{Error, Result};
