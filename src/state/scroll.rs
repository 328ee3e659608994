//! Scroll position math for in-page anchors and the back-to-top button.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

/// Class that reveals the back-to-top button.
pub const VISIBLE_CLASS: &str = "visible";

/// The back-to-top button shows once the page is scrolled strictly past
/// `threshold_px`.
#[must_use]
pub fn back_to_top_visible(scroll_y: f64, threshold_px: f64) -> bool {
    scroll_y > threshold_px
}

/// Selector to look up for an in-page link, or `None` for the bare `#`
/// placeholder and for hrefs that are not fragment links.
#[must_use]
pub fn anchor_selector(href: &str) -> Option<&str> {
    if href == "#" || !href.starts_with('#') {
        return None;
    }
    Some(href)
}

/// Document offset to scroll to so the target sits just under the fixed
/// header.
#[must_use]
pub fn scroll_target_top(target_offset_top: f64, header_height: f64) -> f64 {
    target_offset_top - header_height
}
