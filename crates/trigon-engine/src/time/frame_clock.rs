use std::time::{Duration, Instant};

/// Frame timing snapshot.
#[derive(Debug, Copy, Clone)]
pub struct FrameTime {
    /// Seconds since the previous tick (clamped).
    pub dt: f32,

    /// Monotonic timestamp taken at the tick.
    pub now: Instant,

    /// Monotonic frame counter, starting at 0.
    pub frame_index: u64,
}

impl FrameTime {
    /// Instantaneous frames per second derived from `dt`.
    pub fn fps(&self) -> f32 {
        if self.dt > 0.0 { 1.0 / self.dt } else { 0.0 }
    }
}

/// Frame clock producing `FrameTime` snapshots.
///
/// Delta time is clamped so a debugger pause or a minimized window does not
/// produce a huge step, and a tight loop never produces zero.
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Instant,
    frame_index: u64,
    dt_min: Duration,
    dt_max: Duration,
}

impl FrameClock {
    /// Creates a clock clamped to [100us, 250ms].
    pub fn new() -> Self {
        Self::with_clamps(Duration::from_micros(100), Duration::from_millis(250))
    }

    pub fn with_clamps(dt_min: Duration, dt_max: Duration) -> Self {
        debug_assert!(dt_min <= dt_max);
        Self {
            last: Instant::now(),
            frame_index: 0,
            dt_min,
            dt_max,
        }
    }

    /// Advances the clock and returns a new `FrameTime`.
    pub fn tick(&mut self) -> FrameTime {
        let now = Instant::now();
        let dt = now
            .saturating_duration_since(self.last)
            .clamp(self.dt_min, self.dt_max);

        self.last = now;

        let ft = FrameTime {
            dt: dt.as_secs_f32(),
            now,
            frame_index: self.frame_index,
        };

        self.frame_index = self.frame_index.wrapping_add(1);

        ft
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_index_counts_from_zero() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.tick().frame_index, 0);
        assert_eq!(clock.tick().frame_index, 1);
        assert_eq!(clock.tick().frame_index, 2);
    }

    #[test]
    fn dt_is_clamped_up() {
        let min = Duration::from_millis(5);
        let mut clock = FrameClock::with_clamps(min, Duration::from_secs(1));
        let ft = clock.tick();
        assert!(ft.dt >= min.as_secs_f32());
    }

    #[test]
    fn dt_is_clamped_down() {
        let max = Duration::from_millis(1);
        let mut clock = FrameClock::with_clamps(Duration::ZERO, max);
        std::thread::sleep(Duration::from_millis(10));
        let ft = clock.tick();
        assert!(ft.dt <= max.as_secs_f32());
    }

    #[test]
    fn fps_is_inverse_of_dt() {
        let ft = FrameTime { dt: 0.5, now: Instant::now(), frame_index: 0 };
        assert_eq!(ft.fps(), 2.0);
        let ft = FrameTime { dt: 0.0, ..ft };
        assert_eq!(ft.fps(), 0.0);
    }
}
