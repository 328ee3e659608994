//! Decorative visitor counter. There is no backend; the total is a fixed
//! base plus a small random bump so it looks alive between reloads.

#[cfg(test)]
#[path = "visitors_test.rs"]
mod visitors_test;

use super::counter::CountUp;

/// `base + floor(roll * jitter)` for a `roll` in `[0, 1)`. Out-of-range rolls
/// are clamped so the total never exceeds `base + jitter - 1`.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn visitor_total(base: u32, jitter: u32, roll: f64) -> u32 {
    let roll = if roll.is_nan() { 0.0 } else { roll.clamp(0.0, 1.0) };
    let bump = (roll * f64::from(jitter)).floor() as u32;
    base.saturating_add(bump.min(jitter.saturating_sub(1)))
}

#[must_use]
pub fn visitor_counter(total: u32, steps: u32) -> CountUp {
    CountUp::new(i64::from(total), f64::from(steps))
}
