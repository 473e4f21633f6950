use chrono::Local;

use crate::countdown::Countdown;
use crate::schedule::{self, Segment, Side};
use crate::util;

pub const IDLE_BANNER: &str = "Ready. Press s to begin.";
pub const IDLE_PROMPT: &str =
    "This session follows the exact sequence. Bot acts as opposing side.";
pub const COMPLETE_BANNER: &str = "Session complete";
pub const COMPLETE_PROMPT: &str = "Debate practice complete. Great job!";

/// Where the session is in its lifecycle.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Running { index: usize },
    Complete,
}

/// One appended line of the in-session event log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    /// Local wall-clock `HH:MM:SS`, absent when timestamps are disabled.
    pub timestamp: Option<String>,
    pub message: String,
}

impl LogEntry {
    pub fn line(&self) -> String {
        match &self.timestamp {
            Some(ts) => format!("[{}] {}", ts, self.message),
            None => self.message.clone(),
        }
    }
}

/// The session controller: owns all mutable session state and routes every
/// mutation through its commands. The presentation layer only reads.
///
/// Phase transitions: Idle -> Running(0) on `start`; Running(i) ->
/// Running(i+1) when a countdown expires with a next segment; Running(last)
/// -> Complete when it expires without one; any phase -> Idle on `reset`.
#[derive(Debug)]
pub struct Session {
    phase: Phase,
    countdown: Option<Countdown>,
    selected_side: Side,
    log: Vec<LogEntry>,
    log_timestamps: bool,
}

impl Session {
    pub fn new(selected_side: Side, log_timestamps: bool) -> Self {
        Self {
            phase: Phase::Idle,
            countdown: None,
            selected_side,
            log: Vec::new(),
            log_timestamps,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_idle(&self) -> bool {
        self.phase == Phase::Idle
    }

    pub fn is_running(&self) -> bool {
        matches!(self.phase, Phase::Running { .. })
    }

    pub fn is_complete(&self) -> bool {
        self.phase == Phase::Complete
    }

    pub fn selected_side(&self) -> Side {
        self.selected_side
    }

    pub fn log(&self) -> &[LogEntry] {
        &self.log
    }

    pub fn current_segment(&self) -> Option<&'static Segment> {
        match self.phase {
            Phase::Running { index } => schedule::segment(index),
            _ => None,
        }
    }

    pub fn seconds_remaining(&self) -> u32 {
        self.countdown.as_ref().map_or(0, Countdown::remaining_secs)
    }

    /// Remaining time as a zero-padded `MM:SS` clock. Idle and Complete both
    /// read `00:00`.
    pub fn clock(&self) -> String {
        util::format_mmss(self.seconds_remaining())
    }

    pub fn progress_percent(&self) -> f64 {
        match self.phase {
            Phase::Idle => 0.0,
            Phase::Running { .. } => self
                .countdown
                .as_ref()
                .map_or(0.0, Countdown::progress_percent),
            Phase::Complete => 100.0,
        }
    }

    /// Headline text for the current phase: the segment name while running,
    /// otherwise the idle or completion banner.
    pub fn segment_label(&self) -> &'static str {
        match self.phase {
            Phase::Idle => IDLE_BANNER,
            Phase::Running { .. } => self.current_segment().map_or("", |seg| seg.name),
            Phase::Complete => COMPLETE_BANNER,
        }
    }

    pub fn current_prompt(&self) -> &'static str {
        match self.phase {
            Phase::Idle => IDLE_PROMPT,
            Phase::Running { .. } => self.current_segment().map_or("", |seg| seg.kind.prompt()),
            Phase::Complete => COMPLETE_PROMPT,
        }
    }

    /// Begins a run at segment 0. Accepted from Idle or Complete; a running
    /// session ignores it so a second start cannot double the tick rate.
    pub fn start(&mut self) {
        if self.is_running() {
            return;
        }
        self.load_segment(0);
        self.push_log(format!("Session started. Side: {}", self.selected_side));
    }

    /// One second elapses. Only meaningful while running; Idle and Complete
    /// swallow stray ticks. At zero the expired countdown is dropped and the
    /// next segment (if any) is loaded and re-armed in the same call, so no
    /// tick can observe a half-finished transition.
    pub fn tick(&mut self) {
        let index = match self.phase {
            Phase::Running { index } => index,
            _ => return,
        };

        let expired = match self.countdown.as_mut() {
            Some(countdown) => {
                countdown.tick();
                countdown.is_expired()
            }
            None => return,
        };
        if !expired {
            return;
        }

        self.countdown = None;
        let next = index + 1;
        if schedule::segment(next).is_some() {
            self.load_segment(next);
        } else {
            self.phase = Phase::Complete;
        }
    }

    /// Back to Idle from any phase: countdown cancelled, log cleared, side
    /// selection unlocked.
    pub fn reset(&mut self) {
        self.countdown = None;
        self.phase = Phase::Idle;
        self.log.clear();
    }

    /// Toggles the selected side. Side selection is locked outside Idle;
    /// the active segment's own `side` field decides whose turn it is.
    pub fn switch_side(&mut self) {
        if !self.is_idle() {
            return;
        }
        self.selected_side = self.selected_side.toggled();
        self.push_log(format!("Switched side to: {}", self.selected_side));
    }

    /// Sets the selected side directly. Locked outside Idle, like
    /// `switch_side`.
    pub fn set_side(&mut self, side: Side) {
        if !self.is_idle() {
            return;
        }
        self.selected_side = side;
        self.push_log(format!("Side set to: {}", self.selected_side));
    }

    fn load_segment(&mut self, index: usize) {
        let Some(seg) = schedule::segment(index) else {
            return;
        };
        self.phase = Phase::Running { index };
        self.countdown = Some(Countdown::arm(seg.duration_secs()));
        self.push_log(format!("Starting: {} ({})", seg.name, seg.side_label()));
    }

    fn push_log(&mut self, message: String) {
        let timestamp = self
            .log_timestamps
            .then(|| Local::now().format("%H:%M:%S").to_string());
        self.log.push(LogEntry { timestamp, message });
    }
}
