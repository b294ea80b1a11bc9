//! Status overlay drawn on top of the displayed camera frame.

use crate::{
    constants::{
        OVERLAY_DETAIL_SCALE, OVERLAY_LEFT_MARGIN, OVERLAY_SCORE_Y, OVERLAY_STATUS_SCALE, OVERLAY_STATUS_Y,
        OVERLAY_THRESHOLD_Y,
    },
    motion_detector::MotionReading,
    Result,
};
use opencv::{
    core::{Mat, Point, Scalar},
    imgproc::{self, FONT_HERSHEY_SIMPLEX, LINE_8},
};
use std::fmt;

/// Activity classification derived from a motion reading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityStatus {
    /// Motion score is above the threshold
    Exercising,
    /// Motion score is at or below the threshold
    Resting,
}

impl ActivityStatus {
    #[must_use]
    pub fn from_reading(reading: &MotionReading) -> Self {
        if reading.is_active {
            Self::Exercising
        } else {
            Self::Resting
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Exercising => "Exercising",
            Self::Resting => "Resting",
        }
    }

    /// Text color in BGR order: red while exercising, green while resting
    #[must_use]
    pub fn color(self) -> Scalar {
        match self {
            Self::Exercising => Scalar::new(0.0, 0.0, 255.0, 0.0),
            Self::Resting => Scalar::new(0.0, 255.0, 0.0, 0.0),
        }
    }
}

impl fmt::Display for ActivityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Draw status, motion score and threshold onto `frame`
///
/// # Errors
///
/// Returns an error if `OpenCV` fails to render the text
pub fn draw_overlay(frame: &mut Mat, reading: &MotionReading, threshold: i32) -> Result<()> {
    let status = ActivityStatus::from_reading(reading);
    let white = Scalar::new(255.0, 255.0, 255.0, 0.0);

    let lines = [
        (format!("Status: {status}"), OVERLAY_STATUS_Y, OVERLAY_STATUS_SCALE, status.color(), 2),
        (format!("Motion score: {}", reading.score), OVERLAY_SCORE_Y, OVERLAY_DETAIL_SCALE, white, 1),
        (format!("Threshold: {threshold}"), OVERLAY_THRESHOLD_Y, OVERLAY_DETAIL_SCALE, white, 1),
    ];

    for (text, y, scale, color, thickness) in lines {
        imgproc::put_text(
            frame,
            &text,
            Point::new(OVERLAY_LEFT_MARGIN, y),
            FONT_HERSHEY_SIMPLEX,
            scale,
            color,
            thickness,
            LINE_8,
            false,
        )?;
    }

    Ok(())
}
