#[cfg(test)]
#[path = "fade_test.rs"]
mod fade_test;

/// Elements that fade in, in document order, once the window has loaded.
pub const FADE_SELECTOR: &str = ".hero-content, .about-content, .project-card, .skill-item";

pub const HIDDEN_OPACITY: &str = "0";
pub const HIDDEN_TRANSFORM: &str = "translateY(20px)";
pub const SHOWN_OPACITY: &str = "1";
pub const SHOWN_TRANSFORM: &str = "translateY(0)";
pub const FADE_TRANSITION: &str = "opacity 0.5s ease, transform 0.5s ease";

/// Reveal delay for the `index`-th faded element.
#[must_use]
pub fn reveal_delay_ms(index: usize, stagger_ms: u32) -> u32 {
    u32::try_from(index).unwrap_or(u32::MAX).saturating_mul(stagger_ms)
}
