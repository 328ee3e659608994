//! # portfolio
//!
//! WASM frontend for the personal portfolio site. It attaches behavior to the
//! server-rendered static markup: theme switching, the mobile menu, smooth
//! scrolling, back-to-top, scroll-triggered counters and skill bars, the fade
//! in, a decorative visitor counter, and the contact form.
//!
//! The contact form's validation and persistence live in the `inbox` crate;
//! this crate supplies its browser-side store, clock and toast renderer.

pub mod app;
pub mod config;
pub mod state;
pub mod util;

/// WASM entry point: install console logging and the panic hook, then start
/// the page lifecycle.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    app::run();
}
