//! Capture button state and the pre-shot countdown.

/// Seconds counted down before the shot.
pub const COUNTDOWN_START: u32 = 3;
/// Delay between countdown ticks.
pub const COUNTDOWN_INTERVAL_MS: u32 = 1000;

/// Flags tracked across the widget's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CaptureState {
    started: bool,
    capturing: bool,
    filters_initialized: bool,
}

impl CaptureState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    pub fn is_capturing(&self) -> bool {
        self.capturing
    }

    pub fn filters_initialized(&self) -> bool {
        self.filters_initialized
    }

    /// Mark the widget started. Returns `false` if it already was.
    pub fn start(&mut self) -> bool {
        !std::mem::replace(&mut self.started, true)
    }

    /// Begin a countdown unless one is already running.
    pub fn request_capture(&mut self) -> Option<Countdown> {
        if self.capturing {
            return None;
        }
        self.capturing = true;
        Some(Countdown::new(COUNTDOWN_START))
    }

    /// Record that the frame was taken.
    ///
    /// Returns `true` on the first capture, when the filter and crop
    /// toolbar has to be built.
    pub fn finish_capture(&mut self) -> bool {
        self.capturing = false;
        !std::mem::replace(&mut self.filters_initialized, true)
    }
}

/// What the timer label should show after a tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CountdownStep {
    /// Still counting; show the label and tick again later.
    Waiting(String),
    /// Take the picture now.
    Done,
}

impl CountdownStep {
    pub fn label(&self) -> &str {
        match self {
            CountdownStep::Waiting(label) => label,
            CountdownStep::Done => "done",
        }
    }
}

/// A countdown from `n` to zero, one tick per interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    remaining: u32,
    finished: bool,
}

impl Countdown {
    pub fn new(from: u32) -> Self {
        Self {
            remaining: from,
            finished: false,
        }
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Advance one step. Ticking after `Done` keeps returning `Done`.
    pub fn tick(&mut self) -> CountdownStep {
        if self.remaining == 0 {
            self.finished = true;
            return CountdownStep::Done;
        }
        let label = format!("Be Ready! {}", self.remaining);
        self.remaining -= 1;
        CountdownStep::Waiting(label)
    }
}
