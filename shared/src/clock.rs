use crate::constants::MAX_FRAME_DELTA;

// Frames closer together than this fraction of the target interval are dropped.
const FRAME_TOLERANCE: f64 = 0.9;

/// One accepted animation frame, in seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tick {
    pub elapsed: f64,
    pub delta: f64,
}

/// Turns host animation-frame timestamps (milliseconds) into elapsed time and
/// a bounded per-frame step.
#[derive(Debug, Clone)]
pub struct FrameClock {
    start_ms: Option<f64>,
    last_ms: Option<f64>,
    min_interval_ms: f64,
    max_delta: f64,
    skipped: u64,
}

impl FrameClock {
    /// `fps_limit` of 0 means every frame is accepted.
    pub fn new(fps_limit: u32) -> Self {
        let min_interval_ms = if fps_limit == 0 {
            0.0
        } else {
            1000.0 / fps_limit as f64 * FRAME_TOLERANCE
        };
        Self {
            start_ms: None,
            last_ms: None,
            min_interval_ms,
            max_delta: MAX_FRAME_DELTA,
            skipped: 0,
        }
    }

    pub fn with_max_delta(mut self, max_delta: f64) -> Self {
        self.max_delta = max_delta.max(0.0);
        self
    }

    /// Returns `None` when the frame should not be drawn: it arrived too soon
    /// for the fps limit, or its timestamp is unusable.
    pub fn tick(&mut self, now_ms: f64) -> Option<Tick> {
        if !now_ms.is_finite() {
            self.skipped += 1;
            return None;
        }

        let (start, last) = match (self.start_ms, self.last_ms) {
            (Some(start), Some(last)) => (start, last),
            _ => {
                self.start_ms = Some(now_ms);
                self.last_ms = Some(now_ms);
                return Some(Tick { elapsed: 0.0, delta: 0.0 });
            }
        };

        let since_last = now_ms - last;
        if since_last < 0.0 || since_last < self.min_interval_ms {
            self.skipped += 1;
            return None;
        }

        self.last_ms = Some(now_ms);
        Some(Tick {
            elapsed: (now_ms - start) / 1000.0,
            delta: (since_last / 1000.0).min(self.max_delta),
        })
    }

    pub fn skipped(&self) -> u64 {
        self.skipped
    }

    pub fn reset(&mut self) {
        self.start_ms = None;
        self.last_ms = None;
        self.skipped = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_frame_starts_the_clock() {
        let mut clock = FrameClock::new(60);
        assert_eq!(clock.tick(1234.0), Some(Tick { elapsed: 0.0, delta: 0.0 }));
        let tick = clock.tick(1234.0 + 20.0).unwrap();
        assert!((tick.elapsed - 0.02).abs() < 1e-9);
        assert!((tick.delta - 0.02).abs() < 1e-9);
    }

    #[test]
    fn test_fps_limit_drops_early_frames() {
        let mut clock = FrameClock::new(60);
        clock.tick(0.0);
        // 144 Hz display
        assert!(clock.tick(7.0).is_none());
        assert!(clock.tick(16.7).is_some());
        assert_eq!(clock.skipped(), 1);
    }

    #[test]
    fn test_late_frame_is_clamped_but_elapsed_jumps() {
        let mut clock = FrameClock::new(60);
        clock.tick(0.0);
        let tick = clock.tick(5000.0).unwrap();
        assert_eq!(tick.delta, MAX_FRAME_DELTA);
        assert!((tick.elapsed - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_bad_timestamps_are_skipped() {
        let mut clock = FrameClock::new(0);
        clock.tick(100.0);
        assert!(clock.tick(50.0).is_none());
        assert!(clock.tick(f64::NAN).is_none());
        assert_eq!(clock.skipped(), 2);
        clock.reset();
        assert_eq!(clock.skipped(), 0);
        assert_eq!(clock.tick(10.0).map(|t| t.elapsed), Some(0.0));
    }
}
