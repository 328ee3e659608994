//! Small web-sys helpers shared by the page feature initializers.
//!
//! Event closures are leaked with `forget()`: listeners stay attached for the
//! page lifetime.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::{JsCast, JsValue, closure::Closure};
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, IntersectionObserver, IntersectionObserverEntry};

pub fn document() -> Option<Document> {
    web_sys::window().and_then(|w| w.document())
}

pub fn by_id(id: &str) -> Option<Element> {
    document()?.get_element_by_id(id)
}

pub fn query(selector: &str) -> Option<Element> {
    document()?.query_selector(selector).ok().flatten()
}

/// Every element matching `selector`, in document order.
pub fn query_all(selector: &str) -> Vec<Element> {
    let Some(list) = document().and_then(|d| d.query_selector_all(selector).ok()) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Attach `handler` to `event` on `target` for the rest of the page lifetime.
pub fn on(target: &EventTarget, event: &str, handler: impl FnMut(Event) + 'static) {
    let cb = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    if let Err(e) = target.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref()) {
        log::warn!("failed to attach {event} listener: {}", js_error_text(&e));
    }
    cb.forget();
}

pub fn set_style(el: &Element, property: &str, value: &str) {
    if let Some(html) = el.dyn_ref::<HtmlElement>() {
        let _ = html.style().set_property(property, value);
    }
}

pub fn set_class(el: &Element, class: &str, enabled: bool) {
    let class_list = el.class_list();
    if enabled {
        let _ = class_list.add_1(class);
    } else {
        let _ = class_list.remove_1(class);
    }
}

/// Run `on_visible` for each of `targets` the first time at least
/// `threshold` of it is on screen; the target is unobserved right after.
pub fn observe_once(targets: &[Element], threshold: f64, on_visible: impl Fn(Element) + 'static) {
    if targets.is_empty() {
        return;
    }

    let cb = Closure::wrap(Box::new(move |entries: js_sys::Array, observer: IntersectionObserver| {
        for entry in entries.iter() {
            let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                continue;
            };
            if entry.is_intersecting() {
                let target = entry.target();
                observer.unobserve(&target);
                on_visible(target);
            }
        }
    }) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let options = web_sys::IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));
    match IntersectionObserver::new_with_options(cb.as_ref().unchecked_ref(), &options) {
        Ok(observer) => {
            for target in targets {
                observer.observe(target);
            }
        }
        Err(e) => log::warn!("IntersectionObserver unavailable: {}", js_error_text(&e)),
    }
    cb.forget();
}

/// Call `frame` on every animation frame until it returns `false`.
pub fn animation_loop(mut frame: impl FnMut() -> bool + 'static) {
    let Some(window) = web_sys::window() else {
        return;
    };

    let holder: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let holder_for_cb = Rc::clone(&holder);
    let window_for_cb = window.clone();
    let cb = Closure::wrap(Box::new(move |_ts: f64| {
        let keep_going = frame();
        let next = keep_going
            && holder_for_cb.borrow().as_ref().is_some_and(|cb| {
                window_for_cb
                    .request_animation_frame(cb.as_ref().unchecked_ref())
                    .is_ok()
            });
        if !next {
            holder_for_cb.borrow_mut().take();
        }
    }) as Box<dyn FnMut(f64)>);

    if window.request_animation_frame(cb.as_ref().unchecked_ref()).is_ok() {
        *holder.borrow_mut() = Some(cb);
    }
}

/// Best-effort readable text for a thrown JS value.
pub fn js_error_text(value: &JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return format!("{}: {}", String::from(err.name()), String::from(err.message()));
    }
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}
