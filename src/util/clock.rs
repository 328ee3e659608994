#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

use inbox::Clock;

/// Current local time rendered by the browser's default locale, as
/// `new Date().toLocaleString()` does.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocaleClock;

impl Clock for LocaleClock {
    fn now(&self) -> String {
        #[cfg(feature = "hydrate")]
        {
            js_sys::Date::new_0()
                .to_locale_string("default", &wasm_bindgen::JsValue::UNDEFINED)
                .into()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            String::new()
        }
    }
}
