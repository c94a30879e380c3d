//! Frame pacing with a fixed rate cap

use std::time::{Duration, Instant};

use crate::consts::TARGET_FPS;

/// Lets through at most one frame per interval.
///
/// There is no accumulator: after a stall the limiter fires once and then
/// resumes the normal cadence, so the simulation never runs catch-up ticks.
#[derive(Debug, Clone)]
pub struct FrameLimiter {
    /// Time between frames
    pub interval: Duration,
    /// Earliest instant the next frame may start
    next_frame: Option<Instant>,
    /// Frames let through so far
    pub frames: u64,
}

impl Default for FrameLimiter {
    fn default() -> Self {
        Self::new(TARGET_FPS)
    }
}

impl FrameLimiter {
    /// Limiter for `fps` frames per second (0 is treated as 1)
    pub fn new(fps: u32) -> Self {
        Self {
            interval: Duration::from_secs_f64(1.0 / fps.max(1) as f64),
            next_frame: None,
            frames: 0,
        }
    }

    /// Returns true if a frame should run at `now`, and schedules the next one
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.next_frame {
            Some(deadline) if now < deadline => false,
            Some(deadline) => {
                let next = deadline + self.interval;
                // Fell more than a frame behind: restart the cadence from now
                self.next_frame = Some(if next <= now { now + self.interval } else { next });
                self.frames += 1;
                true
            }
            None => {
                self.next_frame = Some(now + self.interval);
                self.frames += 1;
                true
            }
        }
    }

    /// When the next frame is due (`None` before the first frame)
    pub fn deadline(&self) -> Option<Instant> {
        self.next_frame
    }
}
