//! Scroll-triggered count-ups: stat numbers, skill bars, and the visitor
//! counter.

use crate::config::SiteConfig;

/// Count each `.stat-number` up to its `data-count` once half of it is
/// visible. Runs on animation frames; the first step is immediate.
pub fn init_stat_counters(config: &SiteConfig) {
    #[cfg(feature = "hydrate")]
    {
        use super::dom::{animation_loop, observe_once, query_all};
        use crate::state::counter::{CountUp, parse_leading_int};

        let counters = query_all(".stat-number");
        let (duration_ms, frame_ms) = (config.stat_duration_ms, config.frame_ms);
        observe_once(&counters, config.stat_visibility, move |el| {
            let Some(target) = el.get_attribute("data-count").as_deref().and_then(parse_leading_int) else {
                log::debug!("stat counter without numeric data-count");
                return;
            };
            let mut count = CountUp::over(target, duration_ms, frame_ms);
            let first = count.step();
            el.set_text_content(Some(&first.value().to_string()));
            if first.is_finished() {
                return;
            }
            animation_loop(move || {
                let tick = count.step();
                el.set_text_content(Some(&tick.value().to_string()));
                !tick.is_finished()
            });
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = config;
    }
}

/// Once `#skills` is in view, widen the skill bars and count every
/// `.skill-percent` up to its `data-percent`.
pub fn init_progress_bars(config: &SiteConfig) {
    #[cfg(feature = "hydrate")]
    {
        use super::dom::{by_id, observe_once, query, query_all, set_style};
        use crate::state::counter::parse_leading_int;
        use crate::state::progress::{format_percent, percent_counter, percent_interval_ms};

        let Some(skills) = by_id("skills") else {
            log::debug!("no #skills section on page");
            return;
        };

        let bars = config.skill_bars.clone();
        let duration_ms = config.skill_duration_ms;
        observe_once(&[skills], config.skills_visibility, move |_| {
            for bar in &bars {
                if let Some(el) = query(&bar.selector) {
                    set_style(&el, "width", &bar.width_css());
                }
            }
            for el in query_all(".skill-percent") {
                let target = el
                    .get_attribute("data-percent")
                    .as_deref()
                    .and_then(parse_leading_int)
                    .unwrap_or(0);
                tick_every(el, percent_counter(target), percent_interval_ms(target, duration_ms), format_percent);
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = config;
    }
}

/// Count `#visitorCount` up to a lightly randomized total.
pub fn init_visitor_counter(config: &SiteConfig) {
    #[cfg(feature = "hydrate")]
    {
        use crate::state::visitors::{visitor_counter, visitor_total};

        let Some(el) = super::dom::by_id("visitorCount") else {
            log::debug!("no #visitorCount on page");
            return;
        };
        let total = visitor_total(config.visitor_base, config.visitor_jitter, js_sys::Math::random());
        tick_every(
            el,
            visitor_counter(total, config.visitor_steps),
            config.visitor_interval_ms,
            |v| v.to_string(),
        );
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = config;
    }
}

/// Step `count` every `interval_ms`, writing each value into `el`, until it
/// finishes.
#[cfg(feature = "hydrate")]
fn tick_every(
    el: web_sys::Element,
    mut count: crate::state::counter::CountUp,
    interval_ms: u32,
    format: fn(i64) -> String,
) {
    gloo_timers::callback::Timeout::new(interval_ms, move || {
        let tick = count.step();
        el.set_text_content(Some(&format(tick.value())));
        if !tick.is_finished() {
            tick_every(el, count, interval_ms, format);
        }
    })
    .forget();
}
