#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn now_is_empty_outside_browser() {
    assert_eq!(LocaleClock.now(), "");
}
