//! Navigation glue: mobile menu, smooth in-page scrolling, back-to-top.

/// Toggle `.menu-toggle` / `.nav-menu` together; any `.nav-link` closes them.
pub fn init_mobile_menu() {
    #[cfg(feature = "hydrate")]
    {
        use std::cell::Cell;
        use std::rc::Rc;

        use super::dom::{on, query, query_all, set_class};
        use crate::state::menu::{ACTIVE_CLASS, MenuState};

        let (Some(toggle), Some(menu)) = (query(".menu-toggle"), query(".nav-menu")) else {
            log::debug!("no mobile menu on page");
            return;
        };

        let state = Rc::new(Cell::new(MenuState::default()));
        let render = {
            let (toggle, menu) = (toggle.clone(), menu.clone());
            move |open: bool| {
                set_class(&toggle, ACTIVE_CLASS, open);
                set_class(&menu, ACTIVE_CLASS, open);
            }
        };

        let toggle_state = Rc::clone(&state);
        let toggle_render = render.clone();
        on(&toggle, "click", move |_| {
            let mut menu = toggle_state.get();
            let open = menu.toggle();
            toggle_state.set(menu);
            toggle_render(open);
        });

        for link in query_all(".nav-link") {
            let link_state = Rc::clone(&state);
            let link_render = render.clone();
            on(&link, "click", move |_| {
                let mut menu = link_state.get();
                menu.close();
                link_state.set(menu);
                link_render(false);
            });
        }
    }
}

/// Smooth-scroll `a[href^="#"]` links to their target, leaving room for the
/// fixed `.header`.
pub fn init_smooth_scroll() {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;
        use web_sys::HtmlElement;

        use super::dom::{on, query, query_all};
        use crate::state::scroll::{anchor_selector, scroll_target_top};

        for anchor in query_all(r##"a[href^="#"]"##) {
            let link = anchor.clone();
            on(&anchor, "click", move |event| {
                event.prevent_default();
                let Some(href) = link.get_attribute("href") else {
                    return;
                };
                let Some(selector) = anchor_selector(&href) else {
                    return;
                };
                let Some(target) = query(selector).and_then(|el| el.dyn_into::<HtmlElement>().ok()) else {
                    return;
                };
                let header_height = query(".header")
                    .and_then(|el| el.dyn_into::<HtmlElement>().ok())
                    .map_or(0.0, |h| f64::from(h.offset_height()));
                smooth_scroll_to(scroll_target_top(f64::from(target.offset_top()), header_height));
            });
        }
    }
}

/// Show `#backToTop` past the scroll threshold; clicking it returns to the top.
pub fn init_back_to_top(threshold_px: f64) {
    #[cfg(feature = "hydrate")]
    {
        use super::dom::{by_id, on, set_class};
        use crate::state::scroll::{VISIBLE_CLASS, back_to_top_visible};

        let Some(button) = by_id("backToTop") else {
            log::debug!("no #backToTop on page");
            return;
        };
        let Some(window) = web_sys::window() else {
            return;
        };

        let shown = button.clone();
        let scroller = window.clone();
        on(&window, "scroll", move |_| {
            let y = scroller.scroll_y().unwrap_or(0.0);
            set_class(&shown, VISIBLE_CLASS, back_to_top_visible(y, threshold_px));
        });
        on(&button, "click", move |_| smooth_scroll_to(0.0));
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = threshold_px;
    }
}

#[cfg(feature = "hydrate")]
fn smooth_scroll_to(top: f64) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let options = web_sys::ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}
