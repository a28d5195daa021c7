use orbit_engine::{
    load_sources, ClockCommand, ClockSnapshot, CommandQueue, Diagnostics, FixedTimestep,
    NamedSource, PlaybackConfig, PositionSource, Result, Scenario, SimClock,
};

/// Playback runner that wires the clock to the body sources.
///
/// The wasm exports keep one runner in a `thread_local!` and forward to it.
/// The runner is the only writer of its clock: UI commands are queued and
/// applied at the start of the next frame.
pub struct PlaybackRunner {
    config: PlaybackConfig,
    clock: SimClock,
    timestep: FixedTimestep,
    commands: CommandQueue,
    sources: Vec<NamedSource>,
    /// Flat xyz per body in meters, refreshed every frame.
    positions: Vec<f64>,
    diagnostics: Diagnostics,
    loaded: bool,
}

impl PlaybackRunner {
    pub fn new(config: PlaybackConfig) -> Self {
        let timestep = FixedTimestep::with_max_steps(config.tick_seconds, config.max_steps_per_frame);
        let mut clock = SimClock::new();
        clock.set_rate_exponent(config.initial_rate_exponent);
        Self {
            config,
            clock,
            timestep,
            commands: CommandQueue::new(),
            sources: Vec::new(),
            positions: Vec::new(),
            diagnostics: Diagnostics::default(),
            loaded: false,
        }
    }

    /// Replace the loaded scenario. On error the previous scenario stays loaded.
    pub fn load_scenario(&mut self, scenario: &Scenario) -> Result<()> {
        let span = scenario.time_span_end(&self.config.authoritative_trajectory)?;
        let sources = load_sources(scenario, &self.config)?;

        self.sources = sources;
        self.clock = SimClock::with_span(span);
        self.clock.set_rate_exponent(self.config.initial_rate_exponent);
        self.timestep.reset();
        self.commands.drain();
        self.diagnostics = Diagnostics::default();
        self.positions = vec![0.0; self.sources.len() * 3];
        self.loaded = true;
        self.sample_positions();

        log::info!(
            "scenario loaded: {} bodies, span {span}s from {:?}",
            self.sources.len(),
            self.config.authoritative_trajectory
        );
        Ok(())
    }

    /// Parse and load a scenario JSON string.
    pub fn load_scenario_json(&mut self, json: &str) -> Result<()> {
        let scenario = Scenario::from_json(json)?;
        self.load_scenario(&scenario)
    }

    /// Queue a clock command for the next frame.
    pub fn push_command(&mut self, command: ClockCommand) {
        self.commands.push(command);
    }

    /// Run one rendered frame: apply queued commands, advance the clock by whole
    /// ticks, then sample every body once. Returns the number of ticks run.
    pub fn frame(&mut self, dt: f64) -> u32 {
        if !self.loaded {
            return 0;
        }

        self.commands.apply_all(&mut self.clock);

        let steps = self.timestep.accumulate(dt);
        for _ in 0..steps {
            self.clock.advance(self.timestep.dt());
        }

        self.sample_positions();
        steps
    }

    fn sample_positions(&mut self) {
        let time = self.clock.time();
        for (i, named) in self.sources.iter().enumerate() {
            let sample = named.source.position_at(time);
            self.diagnostics.record(&sample);
            self.positions[i * 3..i * 3 + 3].copy_from_slice(&sample.position.to_array());
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn config(&self) -> &PlaybackConfig {
        &self.config
    }

    pub fn clock(&self) -> &SimClock {
        &self.clock
    }

    pub fn snapshot(&self) -> ClockSnapshot {
        self.clock.snapshot()
    }

    pub fn diagnostics(&self) -> Diagnostics {
        self.diagnostics
    }

    pub fn body_count(&self) -> usize {
        self.sources.len()
    }

    pub fn body_name(&self, index: usize) -> Option<&str> {
        self.sources.get(index).map(|s| s.name.as_str())
    }

    /// Body positions from the latest frame, xyz per body in scenario order.
    pub fn positions(&self) -> &[f64] {
        &self.positions
    }

    // ---- Pointer accessors for direct memory reads ----

    pub fn positions_ptr(&self) -> *const f64 {
        self.positions.as_ptr()
    }

    /// Sample points of a sampled body as flat xyz, for path lines.
    /// `None` for unknown names; empty for analytic bodies.
    pub fn path(&self, name: &str) -> Option<Vec<f64>> {
        self.sources
            .iter()
            .find(|s| s.name == name)
            .map(|s| s.source.path().iter().flat_map(|v| v.to_array()).collect())
    }
}

impl Default for PlaybackRunner {
    fn default() -> Self {
        Self::new(PlaybackConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCENARIO: &str = r#"{
        "trajectories": {
            "S/C": {
                "epochs": [0.0, 1.0, 2.0],
                "vectors": [[1, 0, 0], [0, 1, 0], [0, 0, 1]]
            }
        },
        "planets": {
            "mars": { "planet": "mars", "start_jd": 2451545.0 }
        }
    }"#;

    fn loaded() -> PlaybackRunner {
        let mut runner = PlaybackRunner::default();
        runner.load_scenario_json(SCENARIO).unwrap();
        runner
    }

    #[test]
    fn load_sets_span_and_initial_positions() {
        let runner = loaded();
        assert_eq!(runner.clock().time_span_end(), 172800.0);
        assert_eq!(runner.body_count(), 2);
        assert_eq!(runner.body_name(0), Some("S/C"));
        assert_eq!(runner.body_name(1), Some("mars"));
        let p = runner.positions();
        assert_eq!(p.len(), 6);
        assert!((p[0] - 1000.0).abs() < 1e-6);
        assert!(p[1].abs() < 1e-6 && p[2].abs() < 1e-6);
    }

    #[test]
    fn unloaded_runner_ignores_frames() {
        let mut runner = PlaybackRunner::default();
        assert_eq!(runner.frame(1.0), 0);
        assert!(runner.positions().is_empty());
    }

    #[test]
    fn frame_applies_commands_then_ticks() {
        let mut runner = loaded();
        runner.push_command(ClockCommand::ToggleRunning);
        for _ in 0..5 {
            runner.push_command(ClockCommand::IncreaseRate);
        }
        // One tick at ×100000.
        let steps = runner.frame(1.0 / 60.0);
        assert_eq!(steps, 1);
        let expected = 100000.0 / 60.0;
        assert!((runner.clock().time() - expected).abs() < 1e-6);
        assert!(runner.snapshot().running);
    }

    #[test]
    fn playback_runs_to_the_end_and_pauses() {
        let mut runner = loaded();
        runner.push_command(ClockCommand::ToggleRunning);
        for _ in 0..6 {
            runner.push_command(ClockCommand::IncreaseRate);
        }
        let mut frames = 0;
        loop {
            runner.frame(1.0 / 60.0);
            frames += 1;
            if !runner.clock().is_running() {
                break;
            }
            assert!(frames < 10_000);
        }
        assert_eq!(runner.clock().time(), 172800.0);
        // Spacecraft at its last sample: source z becomes render y.
        let p = runner.positions();
        assert!(p[0].abs() < 1e-6);
        assert!((p[1] - 1000.0).abs() < 1e-6);
        assert_eq!(runner.diagnostics().out_of_domain, 0);
    }

    #[test]
    fn extreme_initial_rate_pauses_at_start() {
        let config = PlaybackConfig::from_json(r#"{ "initial_rate_exponent": -2147483648 }"#).unwrap();
        let mut runner = PlaybackRunner::new(config);
        runner.load_scenario_json(SCENARIO).unwrap();
        runner.push_command(ClockCommand::Seek(1000.0));
        runner.push_command(ClockCommand::ToggleRunning);
        assert_eq!(runner.frame(1.0 / 60.0), 1);
        assert_eq!(runner.clock().time(), 0.0);
        assert!(!runner.clock().is_running());
    }

    #[test]
    fn failed_load_keeps_previous_scenario() {
        let mut runner = loaded();
        let bad = r#"{ "trajectories": { "lander": { "epochs": [0, 1], "vectors": [[0,0,0],[1,1,1]] } } }"#;
        assert!(runner.load_scenario_json(bad).is_err());
        assert_eq!(runner.body_count(), 2);
        assert!(runner.is_loaded());
    }

    #[test]
    fn paths() {
        let runner = loaded();
        let path = runner.path("S/C").unwrap();
        assert_eq!(path.len(), 9);
        assert_eq!(&path[3..6], &[0.0, 0.0, 1000.0]);
        assert_eq!(runner.path("mars"), Some(Vec::new()));
        assert_eq!(runner.path("pluto"), None);
    }
}
