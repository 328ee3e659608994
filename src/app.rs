//! Page-load lifecycle.
//!
//! Feature initializers run once the DOM is ready, in page order. Each one is
//! independent: a missing element turns that feature off without affecting
//! the rest. The fade-in waits for the window `load` event.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use crate::config::SiteConfig;
use crate::util::{contact_form, counters, fade_in, nav, theme_toggle};

/// Schedule [`init_features`] and the fade-in against the document's
/// readiness. Safe to call whether or not the DOM has finished loading.
pub fn run() {
    let config = SiteConfig::from_page();

    #[cfg(feature = "hydrate")]
    {
        use crate::util::dom::{document, on};

        let (Some(window), Some(doc)) = (web_sys::window(), document()) else {
            return;
        };

        match doc.ready_state().as_str() {
            "loading" => {
                let ready_config = config.clone();
                on(&doc, "DOMContentLoaded", move |_| init_features(&ready_config));
            }
            _ => init_features(&config),
        }

        let stagger_ms = config.fade_stagger_ms;
        if doc.ready_state() == "complete" {
            fade_in::run(stagger_ms);
        } else {
            on(&window, "load", move |_| fade_in::run(stagger_ms));
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        init_features(&config);
        fade_in::run(config.fade_stagger_ms);
    }
}

pub fn init_features(config: &SiteConfig) {
    theme_toggle::init();
    nav::init_mobile_menu();
    nav::init_smooth_scroll();
    nav::init_back_to_top(config.back_to_top_threshold_px);
    counters::init_stat_counters(config);
    counters::init_progress_bars(config);
    contact_form::init();
    counters::init_visitor_counter(config);

    #[cfg(feature = "hydrate")]
    log::debug!("page features ready");
}
