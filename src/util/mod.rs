//! Browser glue for the page features.
//!
//! SYSTEM CONTEXT
//! ==============
//! These modules isolate web-sys calls from the pure models in
//! `crate::state` and the contact core in `inbox`. Every DOM access sits
//! behind the `hydrate` feature; without it the initializers are no-ops so
//! the crate builds and tests natively.

pub mod clock;
pub mod contact_form;
pub mod counters;
#[cfg(feature = "hydrate")]
pub mod dom;
pub mod fade_in;
pub mod nav;
pub mod storage;
pub mod theme_toggle;
pub mod toast;
