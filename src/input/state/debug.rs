use std::time::{Duration, Instant};

/// Default gap between two pointer log lines.
pub const POINTER_LOG_INTERVAL: Duration = Duration::from_millis(150);

/// Verbose event logging switch plus the pointer log throttle.
///
/// Owned by [`InputState`](super::InputState); nothing here affects drawing.
#[derive(Debug, Clone)]
pub struct DebugLog {
    enabled: bool,
    interval: Duration,
    last_pointer_log: Option<Instant>,
}

impl Default for DebugLog {
    fn default() -> Self {
        Self::new(false, POINTER_LOG_INTERVAL)
    }
}

impl DebugLog {
    pub fn new(enabled: bool, interval: Duration) -> Self {
        Self {
            enabled,
            interval,
            last_pointer_log: None,
        }
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Returns true if a pointer line may be logged at `now`, and records it.
    pub fn should_log_pointer(&mut self, now: Instant) -> bool {
        if !self.enabled {
            return false;
        }
        match self.last_pointer_log {
            Some(last) if now.saturating_duration_since(last) < self.interval => false,
            _ => {
                self.last_pointer_log = Some(now);
                true
            }
        }
    }
}
