//! Skill bar widths and the percentage count-up shown beside each bar.

#[cfg(test)]
#[path = "progress_test.rs"]
mod progress_test;

use serde::Deserialize;

use super::counter::CountUp;

/// Percent counters always take one hundred increments.
pub const PERCENT_STEPS: f64 = 100.0;

/// A progress bar element and the width it animates to.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillBar {
    pub selector: String,
    pub width_percent: u8,
}

impl SkillBar {
    pub fn new(selector: impl Into<String>, width_percent: u8) -> Self {
        Self { selector: selector.into(), width_percent: width_percent.min(100) }
    }

    /// Value for the bar's `width` style property.
    #[must_use]
    pub fn width_css(&self) -> String {
        format!("{}%", self.width_percent.min(100))
    }
}

#[must_use]
pub fn default_skill_bars() -> Vec<SkillBar> {
    vec![
        SkillBar::new(".js-progress", 90),
        SkillBar::new(".py-progress", 85),
        SkillBar::new(".react-progress", 80),
        SkillBar::new(".node-progress", 75),
        SkillBar::new(".design-progress", 70),
        SkillBar::new(".devops-progress", 65),
    ]
}

#[must_use]
pub fn percent_counter(target: i64) -> CountUp {
    CountUp::new(target, PERCENT_STEPS)
}

/// Delay between percent increments so the count spans `duration_ms`.
/// Non-positive targets finish on the first tick, so no delay is needed.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
pub fn percent_interval_ms(target: i64, duration_ms: f64) -> u32 {
    if target <= 0 {
        return 0;
    }
    (duration_ms / target as f64).round().clamp(0.0, f64::from(u32::MAX)) as u32
}

#[must_use]
pub fn format_percent(value: i64) -> String {
    format!("{value}%")
}
