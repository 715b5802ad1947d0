//! Time-based id generation.

use chrono::Utc;

/// Hands out ids built from the current Unix time in milliseconds.
///
/// Ids are strictly increasing within one generator even when the clock
/// stalls or steps backwards, and never collide with ids the caller
/// reports as taken.
#[derive(Debug, Clone)]
pub struct IdGenerator {
    clock: fn() -> i64,
    last: i64,
}

fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

impl IdGenerator {
    /// Creates a generator reading the system clock.
    pub fn new() -> Self {
        Self::with_clock(now_millis)
    }

    /// Creates a generator reading timestamps from `clock`.
    pub fn with_clock(clock: fn() -> i64) -> Self {
        Self {
            clock,
            last: i64::MIN,
        }
    }

    /// Returns `<prefix><millis>`, bumping the stamp past `last` and past
    /// any id for which `taken` returns `true`.
    pub fn next_id(&mut self, prefix: &str, taken: impl Fn(&str) -> bool) -> String {
        let mut stamp = (self.clock)().max(self.last.saturating_add(1));
        loop {
            let id = format!("{prefix}{stamp}");
            if !taken(&id) {
                self.last = stamp;
                return id;
            }
            stamp += 1;
        }
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}
