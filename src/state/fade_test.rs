use super::*;

#[test]
fn reveal_delays_are_staggered() {
    let delays: Vec<u32> = (0..4).map(|i| reveal_delay_ms(i, 100)).collect();
    assert_eq!(delays, [0, 100, 200, 300]);
}

#[test]
fn reveal_delay_saturates() {
    assert_eq!(reveal_delay_ms(usize::MAX, 100), u32::MAX);
}

#[test]
fn selector_covers_all_sections() {
    for class in [".hero-content", ".about-content", ".project-card", ".skill-item"] {
        assert!(FADE_SELECTOR.contains(class));
    }
}
