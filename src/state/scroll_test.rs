use super::*;

#[test]
fn back_to_top_threshold_is_strict() {
    assert!(!back_to_top_visible(0.0, 300.0));
    assert!(!back_to_top_visible(300.0, 300.0));
    assert!(back_to_top_visible(300.5, 300.0));
    assert!(back_to_top_visible(1200.0, 300.0));
}

#[test]
fn bare_hash_is_ignored() {
    assert_eq!(anchor_selector("#"), None);
}

#[test]
fn fragment_links_resolve_to_selector() {
    assert_eq!(anchor_selector("#about"), Some("#about"));
    assert_eq!(anchor_selector("#contact-me"), Some("#contact-me"));
}

#[test]
fn non_fragment_links_are_ignored() {
    assert_eq!(anchor_selector(""), None);
    assert_eq!(anchor_selector("/about#team"), None);
}

#[test]
fn scroll_target_subtracts_header() {
    assert_eq!(scroll_target_top(900.0, 70.0), 830.0);
    assert_eq!(scroll_target_top(40.0, 0.0), 40.0);
}
