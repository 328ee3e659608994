//! Floating toast renderer for [`inbox::Notification`]s.
//!
//! The toast is appended to `<body>`, slides in after a short delay, and is
//! removed once its exit transition ends. Timers are fire-and-forget.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use inbox::{Notification, Notifier};

/// Inline styles applied to every toast before it enters.
pub const BASE_STYLES: &[(&str, &str)] = &[
    ("position", "fixed"),
    ("bottom", "20px"),
    ("right", "20px"),
    ("background", "var(--bg-card)"),
    ("border", "1px solid var(--border-color)"),
    ("border-radius", "8px"),
    ("padding", "15px 20px"),
    ("display", "flex"),
    ("align-items", "center"),
    ("gap", "10px"),
    ("z-index", "2000"),
    ("transform", OFFSCREEN_TRANSFORM),
    ("opacity", "0"),
    ("transition", "all 0.3s ease"),
];

pub const OFFSCREEN_TRANSFORM: &str = "translateX(100px)";
pub const ONSCREEN_TRANSFORM: &str = "translateX(0)";

#[derive(Clone, Copy, Debug, Default)]
pub struct ToastNotifier;

impl Notifier for ToastNotifier {
    fn notify(&mut self, notification: Notification) {
        #[cfg(feature = "hydrate")]
        show(&notification);
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = notification;
        }
    }
}

#[cfg(feature = "hydrate")]
fn show(notification: &Notification) {
    use gloo_timers::callback::Timeout;
    use inbox::notify::{DISPLAY_MS, ENTER_DELAY_MS, EXIT_MS};

    use super::dom::{document, set_style};

    let Some(doc) = document() else {
        return;
    };
    let Some(body) = doc.body() else {
        return;
    };
    let (Ok(toast), Ok(icon), Ok(text)) =
        (doc.create_element("div"), doc.create_element("i"), doc.create_element("span"))
    else {
        log::warn!("could not create notification element");
        return;
    };

    toast.set_class_name(&notification.class_attr());
    icon.set_class_name(&format!("fas fa-{}", notification.kind.icon()));
    text.set_text_content(Some(&notification.text));
    let _ = toast.append_child(&icon);
    let _ = toast.append_child(&text);

    for (property, value) in BASE_STYLES {
        set_style(&toast, property, value);
    }
    set_style(&toast, "border-left", &notification.border_left());

    if let Err(e) = body.append_child(&toast) {
        log::warn!("could not show notification: {}", super::dom::js_error_text(&e));
        return;
    }

    let entering = toast.clone();
    Timeout::new(ENTER_DELAY_MS, move || {
        set_style(&entering, "transform", ONSCREEN_TRANSFORM);
        set_style(&entering, "opacity", "1");
    })
    .forget();

    Timeout::new(DISPLAY_MS, move || {
        set_style(&toast, "transform", OFFSCREEN_TRANSFORM);
        set_style(&toast, "opacity", "0");
        Timeout::new(EXIT_MS, move || toast.remove()).forget();
    })
    .forget();
}
