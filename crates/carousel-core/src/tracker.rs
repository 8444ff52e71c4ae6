//! Drag velocity tracking.
//!
//! Pointer recognizers usually report only the running translation. The
//! tracker keeps a short history of samples so a release can be projected
//! forward, which lets a quick flick commit a card change even when the
//! finger travelled less than the threshold.

use crate::drag::GestureSample;
use std::collections::VecDeque;
use std::time::Duration;

const HISTORY_LIMIT: Duration = Duration::from_millis(150);
const DECELERATION: f64 = 0.997;

#[derive(Debug, Clone, Copy)]
struct Event {
    translation: f64,
    timestamp: Duration,
}

#[derive(Debug, Default)]
pub struct SwipeTracker {
    history: VecDeque<Event>,
    translation: f64,
}

impl SwipeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the translation since drag start at `timestamp`.
    pub fn push(&mut self, translation: f64, timestamp: Duration) {
        if let Some(last) = self.history.back()
            && timestamp < last.timestamp
        {
            log::trace!(
                "ignoring drag sample at {timestamp:?}, earlier than {:?}",
                last.timestamp
            );
            return;
        }

        self.history.push_back(Event {
            translation,
            timestamp,
        });
        self.translation = translation;
        self.trim_history();
    }

    pub fn translation(&self) -> f64 {
        self.translation
    }

    /// Velocity over the retained history, in pixels per second.
    pub fn velocity(&self) -> f64 {
        let (Some(first), Some(last)) = (self.history.front(), self.history.back()) else {
            return 0.0;
        };

        let total_time = (last.timestamp - first.timestamp).as_secs_f64();
        if total_time == 0.0 {
            return 0.0;
        }

        (last.translation - first.translation) / total_time
    }

    /// Translation at which the gesture would come to rest if released now.
    pub fn projected_end(&self) -> f64 {
        self.translation - self.velocity() / (1000.0 * DECELERATION.ln())
    }

    pub fn sample(&self) -> GestureSample {
        GestureSample::new(self.translation, self.projected_end())
    }

    pub fn reset(&mut self) {
        self.history.clear();
        self.translation = 0.0;
    }

    fn trim_history(&mut self) {
        let Some(&Event { timestamp, .. }) = self.history.back() else {
            return;
        };

        while let Some(first) = self.history.front() {
            if timestamp <= first.timestamp + HISTORY_LIMIT {
                break;
            }
            self.history.pop_front();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_idle_tracker_projects_in_place() {
        let mut tracker = SwipeTracker::new();
        assert_eq!(tracker.velocity(), 0.0);
        assert_eq!(tracker.sample(), GestureSample::new(0.0, 0.0));

        tracker.push(40.0, ms(10));
        assert_eq!(tracker.velocity(), 0.0);
        assert_eq!(tracker.projected_end(), 40.0);
    }

    #[test]
    fn test_velocity_and_projection() {
        let mut tracker = SwipeTracker::new();
        tracker.push(0.0, ms(0));
        tracker.push(10.0, ms(50));
        tracker.push(100.0, ms(100));

        assert!((tracker.velocity() - 1000.0).abs() < 1e-9);
        // ln(0.997) is negative, so a rightward fling projects further right.
        assert!(tracker.projected_end() > 100.0 + 300.0);
    }

    #[test]
    fn test_old_samples_are_trimmed() {
        let mut tracker = SwipeTracker::new();
        tracker.push(0.0, ms(0));
        tracker.push(200.0, ms(100));
        tracker.push(200.0, ms(400));

        // Only the sample at 400ms is within the window.
        assert_eq!(tracker.velocity(), 0.0);
    }

    #[test]
    fn test_out_of_order_sample_is_ignored() {
        let mut tracker = SwipeTracker::new();
        tracker.push(10.0, ms(20));
        tracker.push(90.0, ms(10));
        assert_eq!(tracker.translation(), 10.0);
    }

    #[test]
    fn test_reset() {
        let mut tracker = SwipeTracker::new();
        tracker.push(0.0, ms(0));
        tracker.push(80.0, ms(16));
        tracker.reset();
        assert_eq!(tracker.translation(), 0.0);
        assert_eq!(tracker.velocity(), 0.0);
    }
}
