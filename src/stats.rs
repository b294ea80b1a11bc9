//! Running statistics over a capture session.

use crate::{motion_detector::MotionReading, overlay::ActivityStatus};

/// Counters accumulated from every processed frame
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionStats {
    /// Number of readings recorded
    pub frames_processed: u64,
    /// Number of readings classified as exercising
    pub active_frames: u64,
    /// Highest motion score seen
    pub peak_score: i32,
    /// Number of Resting/Exercising switches
    pub transitions: u64,
    last_status: Option<ActivityStatus>,
}

impl SessionStats {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a reading. Returns the new status if it differs from the last one.
    pub fn record(&mut self, reading: &MotionReading) -> Option<ActivityStatus> {
        self.frames_processed += 1;
        if reading.is_active {
            self.active_frames += 1;
        }
        self.peak_score = self.peak_score.max(reading.score);

        let status = ActivityStatus::from_reading(reading);
        match self.last_status.replace(status) {
            Some(previous) if previous != status => {
                self.transitions += 1;
                Some(status)
            }
            _ => None,
        }
    }

    /// Fraction of frames classified as exercising
    #[must_use]
    #[allow(clippy::cast_precision_loss)] // Frame counts stay far below 2^52
    pub fn active_ratio(&self) -> f64 {
        if self.frames_processed == 0 {
            return 0.0;
        }
        self.active_frames as f64 / self.frames_processed as f64
    }

    #[must_use]
    pub fn last_status(&self) -> Option<ActivityStatus> {
        self.last_status
    }

    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "{} frames, {} exercising ({:.1}%), peak motion score {}, {} status changes",
            self.frames_processed,
            self.active_frames,
            self.active_ratio() * 100.0,
            self.peak_score,
            self.transitions
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reading(is_active: bool, score: i32) -> MotionReading {
        MotionReading { is_active, score }
    }

    #[test]
    fn test_empty_stats() {
        let stats = SessionStats::new();
        assert_eq!(stats.active_ratio(), 0.0);
        assert_eq!(stats.last_status(), None);
        assert!(stats.summary().starts_with("0 frames"));
    }

    #[test]
    fn test_record_counts_and_transitions() {
        let mut stats = SessionStats::new();

        // First reading sets the status without counting a change
        assert_eq!(stats.record(&reading(false, 0)), None);
        assert_eq!(stats.record(&reading(false, 40)), None);
        assert_eq!(stats.record(&reading(true, 2500)), Some(ActivityStatus::Exercising));
        assert_eq!(stats.record(&reading(true, 1800)), None);
        assert_eq!(stats.record(&reading(false, 100)), Some(ActivityStatus::Resting));

        assert_eq!(stats.frames_processed, 5);
        assert_eq!(stats.active_frames, 2);
        assert_eq!(stats.peak_score, 2500);
        assert_eq!(stats.transitions, 2);
        assert!((stats.active_ratio() - 0.4).abs() < 1e-10);
        assert_eq!(stats.last_status(), Some(ActivityStatus::Resting));
    }

    #[test]
    fn test_first_active_reading_is_not_a_transition() {
        let mut stats = SessionStats::new();
        assert_eq!(stats.record(&reading(true, 3000)), None);
        assert_eq!(stats.transitions, 0);
    }
}
