//! Wires `#messageForm` to an [`inbox::ContactDesk`].
//!
//! The desk is built once on page load with the browser store, toast renderer
//! and locale clock, reads back stored messages, and then handles every
//! submit event.

pub const FORM_ID: &str = "messageForm";
pub const NAME_FIELD_ID: &str = "name";
pub const EMAIL_FIELD_ID: &str = "email";
pub const BODY_FIELD_ID: &str = "message";

/// Attach the submit handler. Missing form is a no-op.
pub fn init() {
    #[cfg(feature = "hydrate")]
    {
        use std::cell::RefCell;
        use std::rc::Rc;

        use inbox::ContactDesk;
        use wasm_bindgen::JsCast;

        use super::clock::LocaleClock;
        use super::dom::{by_id, on};
        use super::storage::LocalStorage;
        use super::toast::ToastNotifier;

        let Some(form) = by_id(FORM_ID).and_then(|el| el.dyn_into::<web_sys::HtmlFormElement>().ok()) else {
            log::debug!("no #{FORM_ID}; contact form disabled");
            return;
        };

        let desk = ContactDesk::new(LocalStorage::open(), ToastNotifier, LocaleClock);
        desk.load_on_startup();
        let desk = Rc::new(RefCell::new(desk));

        let mut dom_form = DomContactForm { form: form.clone() };
        on(&form, "submit", move |event| {
            event.prevent_default();
            // Outcome is already reported to the user and the log.
            let _ = desk.borrow_mut().handle_submit(&mut dom_form);
        });
    }
}

#[cfg(feature = "hydrate")]
struct DomContactForm {
    form: web_sys::HtmlFormElement,
}

#[cfg(feature = "hydrate")]
impl DomContactForm {
    fn value(&self, id: &str) -> String {
        use wasm_bindgen::JsCast;

        let Ok(Some(el)) = self.form.query_selector(&format!("#{id}")) else {
            return String::new();
        };
        if let Some(input) = el.dyn_ref::<web_sys::HtmlInputElement>() {
            input.value()
        } else if let Some(area) = el.dyn_ref::<web_sys::HtmlTextAreaElement>() {
            area.value()
        } else {
            String::new()
        }
    }
}

#[cfg(feature = "hydrate")]
impl inbox::ContactForm for DomContactForm {
    fn fields(&self) -> inbox::FormFields {
        inbox::FormFields::new(self.value(NAME_FIELD_ID), self.value(EMAIL_FIELD_ID), self.value(BODY_FIELD_ID))
    }

    fn reset(&mut self) {
        self.form.reset();
    }
}
