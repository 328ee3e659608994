//! Count-up animation state shared by the stat, skill-percent and visitor
//! counters.
//!
//! Each step adds a fixed increment. While the running value is below the
//! target the displayed value is its floor; the step that reaches or passes
//! the target displays the exact target and finishes the count.

#[cfg(test)]
#[path = "counter_test.rs"]
mod counter_test;

/// Outcome of one [`CountUp::step`]: the value to display, and whether the
/// animation is over.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tick {
    Running(i64),
    Finished(i64),
}

impl Tick {
    #[must_use]
    pub fn value(self) -> i64 {
        match self {
            Self::Running(v) | Self::Finished(v) => v,
        }
    }

    #[must_use]
    pub fn is_finished(self) -> bool {
        matches!(self, Self::Finished(_))
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CountUp {
    target: i64,
    increment: f64,
    current: f64,
    finished: bool,
}

impl CountUp {
    /// Count from zero to `target` in `steps` equal increments.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn new(target: i64, steps: f64) -> Self {
        let steps = if steps.is_finite() { steps.max(1.0) } else { 1.0 };
        Self { target, increment: target as f64 / steps, current: 0.0, finished: false }
    }

    /// Count to `target` over `duration_ms`, one step per `frame_ms`.
    #[must_use]
    pub fn over(target: i64, duration_ms: f64, frame_ms: f64) -> Self {
        Self::new(target, duration_ms / frame_ms)
    }

    /// Advance one increment. Once finished, keeps returning the target.
    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
    pub fn step(&mut self) -> Tick {
        if self.finished {
            return Tick::Finished(self.target);
        }
        self.current += self.increment;
        if self.current < self.target as f64 {
            Tick::Running(self.current.floor() as i64)
        } else {
            self.finished = true;
            Tick::Finished(self.target)
        }
    }
}

/// Parse the leading integer of an attribute value the way browsers'
/// `parseInt` does: optional whitespace and sign, then digits; anything after
/// the digits is ignored. `"150+"` is `150`, `"abc"` is `None`. A digit run
/// too large for `i64` saturates at `i64::MAX` (or `i64::MIN` when negative).
#[must_use]
pub fn parse_leading_int(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = digits.bytes().take_while(u8::is_ascii_digit).count();
    if end == 0 {
        return None;
    }
    let value = digits[..end]
        .bytes()
        .try_fold(0i64, |acc, d| {
            let d = i64::from(d - b'0');
            if negative { acc.checked_mul(10)?.checked_sub(d) } else { acc.checked_mul(10)?.checked_add(d) }
        })
        .unwrap_or(if negative { i64::MIN } else { i64::MAX });
    Some(value)
}
