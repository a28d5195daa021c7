use crate::core::clock::SimClock;

/// Clock operations the UI layer can request (play/pause, rate, seek).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ClockCommand {
    ToggleRunning,
    Stop,
    IncreaseRate,
    DecreaseRate,
    ResetRate,
    ResetTime,
    /// Absolute seek in simulated seconds. Clamped to the span before it
    /// reaches the clock.
    Seek(f64),
}

impl ClockCommand {
    /// Apply to the clock.
    pub fn apply(self, clock: &mut SimClock) {
        match self {
            ClockCommand::ToggleRunning => clock.toggle_running(),
            ClockCommand::Stop => clock.stop(),
            ClockCommand::IncreaseRate => clock.increase_rate(),
            ClockCommand::DecreaseRate => clock.decrease_rate(),
            ClockCommand::ResetRate => clock.reset_rate(),
            ClockCommand::ResetTime => clock.reset_time(),
            ClockCommand::Seek(t) => {
                let t = if t.is_finite() { t } else { 0.0 };
                clock.set_time(t.clamp(0.0, clock.time_span_end()));
            }
        }
    }
}

/// A queue of clock commands.
/// JS writes commands into the queue; the frame handler applies and drains
/// them before ticking, so the clock keeps a single writer.
pub struct CommandQueue {
    commands: Vec<ClockCommand>,
}

impl CommandQueue {
    pub fn new() -> Self {
        Self {
            commands: Vec::with_capacity(8),
        }
    }

    /// Push a command (called from JS via wasm-bindgen).
    pub fn push(&mut self, command: ClockCommand) {
        self.commands.push(command);
    }

    /// Apply all pending commands in arrival order and clear the queue.
    /// Returns how many were applied.
    pub fn apply_all(&mut self, clock: &mut SimClock) -> usize {
        let count = self.commands.len();
        for command in self.commands.drain(..) {
            command.apply(clock);
        }
        count
    }

    /// Drain all pending commands without applying them.
    pub fn drain(&mut self) -> Vec<ClockCommand> {
        std::mem::take(&mut self.commands)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ClockCommand> {
        self.commands.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }
}

impl Default for CommandQueue {
    fn default() -> Self {
        Self::new()
    }
}
