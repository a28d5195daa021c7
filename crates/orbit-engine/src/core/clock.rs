/// Playback clock for simulated time.
///
/// Owned by the host and passed by reference; the host's tick handler is the
/// only writer. Observers pull a [`ClockSnapshot`] once per frame.
#[derive(Debug, Clone, PartialEq)]
pub struct SimClock {
    /// Elapsed simulated seconds from the trajectory's first epoch.
    time: f64,
    /// Speed exponent, see [`factor`].
    rate_exponent: i32,
    running: bool,
    /// Upper bound of `time`, in simulated seconds.
    time_span_end: f64,
}

/// Consistent copy of the clock state for observers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClockSnapshot {
    pub time: f64,
    pub rate_exponent: i32,
    pub running: bool,
    pub time_span_end: f64,
}

/// Outcome of one [`SimClock::advance`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// Paused; time unchanged.
    Idle,
    /// Moved inside the span.
    Advanced,
    /// Would have left the span; time clamped and the clock paused.
    HitBoundary,
}

/// Speed multiplier for a rate exponent.
///
/// `10^e` for `e >= 0`, `-10^(|e|-1)` for `e < 0`: exponent -1 plays backwards
/// at ×1, -2 at ×10 and so on. Not symmetric with the forward branch.
/// Defined for every `i32`; extreme exponents saturate to ±infinity.
pub fn factor(exponent: i32) -> f64 {
    if exponent >= 0 {
        10f64.powi(exponent)
    } else {
        // |i32::MIN| - 1 == i32::MAX, so this never overflows.
        let magnitude = (exponent.unsigned_abs() - 1).min(i32::MAX as u32) as i32;
        -(10f64.powi(magnitude))
    }
}

/// UI label for a rate exponent, e.g. `"100x"` or `"-10x"`.
pub fn rate_label(exponent: i32) -> String {
    format!("{}x", factor(exponent))
}

impl SimClock {
    /// Paused at 0 with a ×1 rate and an empty span.
    pub fn new() -> Self {
        Self {
            time: 0.0,
            rate_exponent: 0,
            running: false,
            time_span_end: 0.0,
        }
    }

    /// Paused at 0 with the given span end.
    pub fn with_span(time_span_end: f64) -> Self {
        let mut clock = Self::new();
        clock.set_time_span_end(time_span_end);
        clock
    }

    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn rate_exponent(&self) -> i32 {
        self.rate_exponent
    }

    /// Current speed multiplier.
    pub fn rate(&self) -> f64 {
        factor(self.rate_exponent)
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn time_span_end(&self) -> f64 {
        self.time_span_end
    }

    pub fn snapshot(&self) -> ClockSnapshot {
        ClockSnapshot {
            time: self.time,
            rate_exponent: self.rate_exponent,
            running: self.running,
            time_span_end: self.time_span_end,
        }
    }

    pub fn toggle_running(&mut self) {
        self.running = !self.running;
    }

    /// Pause without toggling.
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Back to time 0. Running state is unchanged.
    pub fn reset_time(&mut self) {
        self.time = 0.0;
    }

    pub fn increase_rate(&mut self) {
        self.rate_exponent = self.rate_exponent.saturating_add(1);
    }

    pub fn decrease_rate(&mut self) {
        self.rate_exponent = self.rate_exponent.saturating_sub(1);
    }

    pub fn reset_rate(&mut self) {
        self.rate_exponent = 0;
    }

    pub fn set_rate_exponent(&mut self, exponent: i32) {
        self.rate_exponent = exponent;
    }

    /// Direct seek. Not clamped here; callers pass a time inside `[0, time_span_end]`.
    pub fn set_time(&mut self, time: f64) {
        self.time = time;
    }

    /// Scenario configuration, normally set once at load.
    pub fn set_time_span_end(&mut self, time_span_end: f64) {
        self.time_span_end = time_span_end.max(0.0);
    }

    /// One tick of `tick_seconds` real time. While running, moves time by
    /// `tick_seconds * rate()`, clamped to `[0, time_span_end]`; pauses if the
    /// step would overshoot either end.
    pub fn advance(&mut self, tick_seconds: f64) -> Tick {
        if !self.running {
            return Tick::Idle;
        }

        // 0 × infinite rate: no movement.
        let step = tick_seconds * self.rate();
        let step = if step.is_nan() { 0.0 } else { step };
        let unclamped = self.time + step;
        let new_time = unclamped.clamp(0.0, self.time_span_end);
        self.time = new_time;

        if unclamped != new_time {
            self.running = false;
            log::info!("clock paused at boundary t={new_time}s");
            Tick::HitBoundary
        } else {
            Tick::Advanced
        }
    }
}

impl Default for SimClock {
    fn default() -> Self {
        Self::new()
    }
}
