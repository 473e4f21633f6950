use crate::util;

/// A cancellable one-second countdown over a fixed total.
///
/// The session owns at most one of these inside an `Option`: arming a new
/// segment replaces the previous handle and cancellation takes it, so two
/// live countdowns cannot coexist and the tick rate cannot double.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Countdown {
    total_secs: u32,
    remaining_secs: u32,
}

impl Countdown {
    pub fn arm(total_secs: u32) -> Self {
        Self {
            total_secs,
            remaining_secs: total_secs,
        }
    }

    /// One second elapses. Saturates at zero.
    pub fn tick(&mut self) {
        self.remaining_secs = self.remaining_secs.saturating_sub(1);
    }

    pub fn is_expired(&self) -> bool {
        self.remaining_secs == 0
    }

    pub fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }

    pub fn total_secs(&self) -> u32 {
        self.total_secs
    }

    pub fn progress_percent(&self) -> f64 {
        util::progress_percent(self.total_secs, self.remaining_secs)
    }
}
