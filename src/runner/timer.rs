use chrono::{DateTime, Utc};

/// The single rest countdown; at most one exists at a time.
///
/// Expiry is detected by wall-clock comparison against `started_at`, never by
/// counting ticks, so missed ticks only delay the display, not the state.
#[derive(Debug, Clone, PartialEq)]
pub struct RestTimer {
    pub exercise_id: i64,
    pub set_idx: usize,
    pub started_at: DateTime<Utc>,
    pub target_ms: i64,
    pub remaining_ms: i64,
    pub running: bool,
}

impl RestTimer {
    pub fn arm(exercise_id: i64, set_idx: usize, rest_secs: f64, now: DateTime<Utc>) -> Self {
        let target_ms = (rest_secs * 1000.0).round() as i64;
        Self {
            exercise_id,
            set_idx,
            started_at: now,
            target_ms,
            remaining_ms: target_ms,
            running: true,
        }
    }

    pub fn matches(&self, exercise_id: i64, set_idx: usize) -> bool {
        self.exercise_id == exercise_id && self.set_idx == set_idx
    }

    /// Recompute the remaining time. Returns `true` exactly once, on the tick
    /// that observes expiry while the timer is still running.
    pub fn tick(&mut self, now: DateTime<Utc>) -> bool {
        let remaining = self.target_ms - (now - self.started_at).num_milliseconds();
        if remaining <= 0 {
            self.remaining_ms = 0;
            if self.running {
                self.running = false;
                return true;
            }
            return false;
        }
        self.remaining_ms = remaining;
        false
    }
}

/// Parse a prescribed rest duration into seconds.
///
/// Accepts "mm:ss" and bare numbers with optional trailing text ("60s",
/// "90 seg", "1,5"). Empty or unparseable input means no rest.
pub fn parse_rest_seconds(rest: Option<&str>) -> f64 {
    let Some(raw) = rest else { return 0.0 };
    let raw = raw.trim();
    if raw.is_empty() {
        return 0.0;
    }

    if let Some((min, sec)) = raw.split_once(':') {
        let min: i64 = min.trim().parse().unwrap_or(0);
        let sec: i64 = sec.trim().parse().unwrap_or(0);
        return (min * 60 + sec) as f64;
    }

    // First numeric token, comma accepted as decimal separator.
    let start = match raw.find(|c: char| c.is_ascii_digit()) {
        Some(i) => i,
        None => return 0.0,
    };
    let token: String = raw[start..]
        .chars()
        .take_while(|c| c.is_ascii_digit() || *c == '.' || *c == ',')
        .map(|c| if c == ',' { '.' } else { c })
        .collect();
    token.parse().unwrap_or(0.0)
}
