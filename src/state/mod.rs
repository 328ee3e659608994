//! Pure page-feature state.
//!
//! DESIGN
//! ======
//! Each module models one page feature without touching the DOM, so the
//! behavior is unit-tested natively. The browser glue in `crate::util` reads
//! these models and applies them to elements.

pub mod counter;
pub mod fade;
pub mod menu;
pub mod progress;
pub mod scroll;
pub mod theme;
pub mod visitors;
