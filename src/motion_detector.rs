//! Frame-differencing motion detector.
//!
//! Each frame is converted to grayscale and compared against the previous
//! one. Pixels whose intensity changed by more than a fixed delta are marked
//! in a binary mask, the mask is smoothed with a small Gaussian kernel, and
//! the number of non-zero pixels that remain is the motion score. A score
//! above the configured threshold means the person in view is exercising.

use crate::{
    constants::{DEFAULT_BLUR_KERNEL, DEFAULT_MOTION_THRESHOLD, DEFAULT_PIXEL_DELTA, MASK_ON_VALUE},
    Error, Result,
};
use log::{debug, warn};
use opencv::{
    core::{self, Mat, Size, BORDER_DEFAULT, CV_8U},
    imgproc,
    prelude::*,
};

/// Result of scoring one frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MotionReading {
    /// Whether the score exceeded the threshold
    pub is_active: bool,
    /// Number of changed pixels after smoothing
    pub score: i32,
}

/// Tunable parameters of the differencing pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetectionParams {
    /// Pixels whose absolute difference is greater than this become "on"
    pub pixel_delta: u8,
    /// Side length of the Gaussian kernel applied to the binary mask
    pub blur_kernel: i32,
}

impl Default for DetectionParams {
    fn default() -> Self {
        Self {
            pixel_delta: DEFAULT_PIXEL_DELTA,
            blur_kernel: DEFAULT_BLUR_KERNEL,
        }
    }
}

impl DetectionParams {
    /// Check that the blur kernel is usable by `GaussianBlur`
    ///
    /// # Errors
    ///
    /// Returns an error if the kernel size is not a positive odd number
    pub fn validate(&self) -> Result<()> {
        if self.blur_kernel <= 0 || self.blur_kernel % 2 == 0 {
            return Err(Error::InvalidInput(format!(
                "Blur kernel size must be odd and greater than 0, got {}",
                self.blur_kernel
            )));
        }
        Ok(())
    }
}

/// Stateful frame-to-frame motion scorer
pub struct MotionDetector {
    threshold: i32,
    params: DetectionParams,
    previous: Option<Mat>,
    // Scratch buffers reused across calls
    gray: Mat,
    diff: Mat,
    mask: Mat,
    smoothed: Mat,
}

impl Default for MotionDetector {
    fn default() -> Self {
        Self::new(DEFAULT_MOTION_THRESHOLD)
    }
}

impl MotionDetector {
    /// Create a detector with the default differencing parameters
    #[must_use]
    pub fn new(threshold: i32) -> Self {
        Self {
            threshold,
            params: DetectionParams::default(),
            previous: None,
            gray: Mat::default(),
            diff: Mat::default(),
            mask: Mat::default(),
            smoothed: Mat::default(),
        }
    }

    /// Create a detector with custom differencing parameters
    ///
    /// # Errors
    ///
    /// Returns an error if `params` fails validation
    pub fn with_params(threshold: i32, params: DetectionParams) -> Result<Self> {
        params.validate()?;
        let mut detector = Self::new(threshold);
        detector.params = params;
        Ok(detector)
    }

    /// Score `frame` against the previous frame and update history.
    ///
    /// The first call after construction or [`reset`](Self::reset) only
    /// stores the frame and reports a score of zero. A frame whose size
    /// differs from the stored one is treated the same way.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for empty frames, frames that are not 8-bit,
    /// or frames with a channel count other than 1, 3 or 4. Rejected frames
    /// leave the stored history untouched.
    pub fn process(&mut self, frame: &Mat) -> Result<MotionReading> {
        if frame.empty() {
            return Err(Error::InvalidInput("Cannot process an empty frame".to_string()));
        }
        if frame.depth() != CV_8U {
            return Err(Error::InvalidInput(format!(
                "Expected an 8-bit frame, got depth {}",
                frame.depth()
            )));
        }

        to_grayscale(frame, &mut self.gray)?;
        let size = self.gray.size()?;

        let Some(previous) = self
            .previous
            .as_ref()
            .filter(|prev| prev.size().is_ok_and(|s| s == size))
        else {
            if self.previous.is_some() {
                warn!(
                    "Frame size changed to {}x{}, restarting motion history",
                    size.width, size.height
                );
            }
            self.previous = Some(std::mem::take(&mut self.gray));
            return Ok(MotionReading::default());
        };

        core::absdiff(previous, &self.gray, &mut self.diff)?;
        imgproc::threshold(
            &self.diff,
            &mut self.mask,
            f64::from(self.params.pixel_delta),
            MASK_ON_VALUE,
            imgproc::THRESH_BINARY,
        )?;
        imgproc::gaussian_blur(
            &self.mask,
            &mut self.smoothed,
            Size::new(self.params.blur_kernel, self.params.blur_kernel),
            0.0,
            0.0,
            BORDER_DEFAULT,
        )?;
        let score = core::count_non_zero(&self.smoothed)?;

        // The old history buffer becomes next call's grayscale scratch space
        if let Some(previous) = self.previous.as_mut() {
            std::mem::swap(previous, &mut self.gray);
        }

        let reading = MotionReading {
            is_active: score > self.threshold,
            score,
        };
        debug!("Motion score {} (threshold {}), active: {}", score, self.threshold, reading.is_active);
        Ok(reading)
    }

    /// Forget the stored frame so the next call re-seeds history
    pub fn reset(&mut self) {
        self.previous = None;
    }

    pub fn set_threshold(&mut self, threshold: i32) {
        self.threshold = threshold;
    }

    #[must_use]
    pub fn threshold(&self) -> i32 {
        self.threshold
    }

    #[must_use]
    pub fn params(&self) -> DetectionParams {
        self.params
    }

    /// Whether a previous frame is stored
    #[must_use]
    pub fn has_history(&self) -> bool {
        self.previous.is_some()
    }
}

/// Convert a 1, 3 (BGR) or 4 (BGRA) channel frame to single-channel grayscale
///
/// # Errors
///
/// Returns an error for other channel counts or if the conversion fails
pub fn to_grayscale(frame: &Mat, gray: &mut Mat) -> Result<()> {
    match frame.channels() {
        1 => frame.copy_to(gray)?,
        3 => imgproc::cvt_color(frame, gray, imgproc::COLOR_BGR2GRAY, 0)?,
        4 => imgproc::cvt_color(frame, gray, imgproc::COLOR_BGRA2GRAY, 0)?,
        channels => {
            return Err(Error::InvalidInput(format!(
                "Unsupported channel count: {channels}"
            )))
        }
    }
    Ok(())
}
