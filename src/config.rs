//! Page tunables.
//!
//! Every field has a default, so a page may supply any subset as JSON in
//! `<script type="application/json" id="site-config">`. Without that element
//! the defaults apply.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::state::progress::{SkillBar, default_skill_bars};

pub const CONFIG_ELEMENT_ID: &str = "site-config";

pub const DEFAULT_BACK_TO_TOP_THRESHOLD_PX: f64 = 300.0;
pub const DEFAULT_STAT_DURATION_MS: f64 = 2000.0;
pub const DEFAULT_FRAME_MS: f64 = 16.0;
pub const DEFAULT_STAT_VISIBILITY: f64 = 0.5;
pub const DEFAULT_SKILLS_VISIBILITY: f64 = 0.3;
pub const DEFAULT_SKILL_DURATION_MS: f64 = 1500.0;
pub const DEFAULT_VISITOR_BASE: u32 = 1247;
pub const DEFAULT_VISITOR_JITTER: u32 = 50;
pub const DEFAULT_VISITOR_STEPS: u32 = 50;
pub const DEFAULT_VISITOR_INTERVAL_MS: u32 = 30;
pub const DEFAULT_FADE_STAGGER_MS: u32 = 100;

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteConfig {
    pub back_to_top_threshold_px: f64,
    pub stat_duration_ms: f64,
    pub frame_ms: f64,
    /// Fraction of a stat counter that must be visible to start it.
    pub stat_visibility: f64,
    /// Fraction of `#skills` that must be visible to start the bars.
    pub skills_visibility: f64,
    pub skill_duration_ms: f64,
    pub skill_bars: Vec<SkillBar>,
    pub visitor_base: u32,
    pub visitor_jitter: u32,
    pub visitor_steps: u32,
    pub visitor_interval_ms: u32,
    pub fade_stagger_ms: u32,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            back_to_top_threshold_px: DEFAULT_BACK_TO_TOP_THRESHOLD_PX,
            stat_duration_ms: DEFAULT_STAT_DURATION_MS,
            frame_ms: DEFAULT_FRAME_MS,
            stat_visibility: DEFAULT_STAT_VISIBILITY,
            skills_visibility: DEFAULT_SKILLS_VISIBILITY,
            skill_duration_ms: DEFAULT_SKILL_DURATION_MS,
            skill_bars: default_skill_bars(),
            visitor_base: DEFAULT_VISITOR_BASE,
            visitor_jitter: DEFAULT_VISITOR_JITTER,
            visitor_steps: DEFAULT_VISITOR_STEPS,
            visitor_interval_ms: DEFAULT_VISITOR_INTERVAL_MS,
            fade_stagger_ms: DEFAULT_FADE_STAGGER_MS,
        }
    }
}

impl SiteConfig {
    /// Parse a (possibly partial) JSON config and sanitize it.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<Self>(raw).map(Self::sanitized)
    }

    /// Read `#site-config` from the page. Absent element means defaults; a
    /// malformed one is logged and also yields defaults.
    #[must_use]
    pub fn from_page() -> Self {
        #[cfg(feature = "hydrate")]
        {
            let Some(raw) = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
                .and_then(|el| el.text_content())
            else {
                return Self::default();
            };
            match Self::from_json(&raw) {
                Ok(config) => config,
                Err(e) => {
                    log::warn!("ignoring malformed #{CONFIG_ELEMENT_ID}: {e}");
                    Self::default()
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Self::default()
        }
    }

    /// Replace values the animations cannot run with by their defaults and
    /// clamp visibility fractions into `[0, 1]`.
    #[must_use]
    pub fn sanitized(mut self) -> Self {
        fn positive_or(value: f64, default: f64) -> f64 {
            if value.is_finite() && value > 0.0 { value } else { default }
        }

        self.back_to_top_threshold_px = if self.back_to_top_threshold_px.is_finite() {
            self.back_to_top_threshold_px.max(0.0)
        } else {
            DEFAULT_BACK_TO_TOP_THRESHOLD_PX
        };
        self.stat_duration_ms = positive_or(self.stat_duration_ms, DEFAULT_STAT_DURATION_MS);
        self.frame_ms = positive_or(self.frame_ms, DEFAULT_FRAME_MS);
        self.skill_duration_ms = positive_or(self.skill_duration_ms, DEFAULT_SKILL_DURATION_MS);
        self.stat_visibility = clamp_fraction(self.stat_visibility, DEFAULT_STAT_VISIBILITY);
        self.skills_visibility = clamp_fraction(self.skills_visibility, DEFAULT_SKILLS_VISIBILITY);
        if self.visitor_steps == 0 {
            self.visitor_steps = DEFAULT_VISITOR_STEPS;
        }
        self
    }
}

fn clamp_fraction(value: f64, default: f64) -> f64 {
    if value.is_nan() { default } else { value.clamp(0.0, 1.0) }
}
