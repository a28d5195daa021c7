/// Fixed timestep accumulator.
/// Turns variable frame times into whole clock ticks so playback speed does
/// not depend on the frame rate.
#[derive(Debug, Clone)]
pub struct FixedTimestep {
    /// Real seconds per tick.
    dt: f64,
    /// Accumulated real time not yet consumed by ticks.
    accumulator: f64,
    /// Maximum ticks returned per frame.
    max_steps: u32,
}

impl FixedTimestep {
    pub fn new(dt: f64) -> Self {
        Self::with_max_steps(dt, 10)
    }

    pub fn with_max_steps(dt: f64, max_steps: u32) -> Self {
        Self {
            dt,
            accumulator: 0.0,
            max_steps: max_steps.max(1),
        }
    }

    /// Add frame time to the accumulator. Returns the number of ticks to run.
    /// A non-positive or non-finite tick length never steps.
    pub fn accumulate(&mut self, frame_dt: f64) -> u32 {
        if !(self.dt > 0.0 && self.dt.is_finite()) {
            return 0;
        }
        self.accumulator += frame_dt.max(0.0);
        // Cap so a stalled tab does not replay minutes of ticks at once.
        self.accumulator = self.accumulator.min(self.dt * self.max_steps as f64);
        let steps = (self.accumulator / self.dt) as u32;
        self.accumulator -= steps as f64 * self.dt;
        steps
    }

    /// Fraction of a tick left over (0.0 to 1.0).
    pub fn alpha(&self) -> f64 {
        self.accumulator / self.dt
    }

    /// Real seconds per tick.
    pub fn dt(&self) -> f64 {
        self.dt
    }

    /// Drop any partial tick.
    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }
}

impl Default for FixedTimestep {
    fn default() -> Self {
        Self::new(1.0 / 60.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TICK: f64 = 1.0 / 60.0;

    #[test]
    fn one_second_of_vsync_frames_is_sixty_ticks() {
        let mut ts = FixedTimestep::new(TICK);
        let ticks: u32 = (0..60).map(|_| ts.accumulate(TICK)).sum();
        assert_eq!(ticks, 60);
    }

    #[test]
    fn high_refresh_frames_carry_the_remainder() {
        // 144 Hz display driving a 60 Hz clock.
        let mut ts = FixedTimestep::new(TICK);
        let ticks: u32 = (0..144).map(|_| ts.accumulate(1.0 / 144.0)).sum();
        assert!((59..=60).contains(&ticks), "ticks = {ticks}");
        assert!(ts.alpha() < 1.0);
    }

    #[test]
    fn leftover_is_exposed_as_alpha() {
        let mut ts = FixedTimestep::new(0.01);
        assert_eq!(ts.accumulate(0.004), 0);
        assert_eq!(ts.accumulate(0.004), 0);
        assert_eq!(ts.accumulate(0.004), 1);
        assert!((ts.alpha() - 0.2).abs() < 1e-9, "alpha = {}", ts.alpha());
        ts.reset();
        assert_eq!(ts.alpha(), 0.0);
    }

    #[test]
    fn stalled_frame_is_capped() {
        let mut ts = FixedTimestep::with_max_steps(TICK, 4);
        assert_eq!(ts.accumulate(2.5), 4);
        // The excess is dropped, not replayed next frame.
        assert_eq!(ts.accumulate(0.0), 0);
    }

    #[test]
    fn negative_frame_time_is_ignored() {
        let mut ts = FixedTimestep::default();
        assert_eq!(ts.accumulate(-1.0), 0);
        assert_eq!(ts.alpha(), 0.0);
    }

    #[test]
    fn non_positive_tick_never_steps() {
        for dt in [0.0, -TICK, f64::NAN] {
            let mut ts = FixedTimestep::new(dt);
            assert_eq!(ts.accumulate(1.0), 0, "dt = {dt}");
        }
    }
}
