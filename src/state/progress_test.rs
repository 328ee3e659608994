use super::*;
use crate::state::counter::Tick;

#[test]
fn default_bars_match_page_skills() {
    let bars = default_skill_bars();
    let widths: Vec<(&str, String)> = bars.iter().map(|b| (b.selector.as_str(), b.width_css())).collect();
    assert_eq!(
        widths,
        [
            (".js-progress", "90%".to_owned()),
            (".py-progress", "85%".to_owned()),
            (".react-progress", "80%".to_owned()),
            (".node-progress", "75%".to_owned()),
            (".design-progress", "70%".to_owned()),
            (".devops-progress", "65%".to_owned()),
        ]
    );
}

#[test]
fn skill_bar_width_is_capped() {
    assert_eq!(SkillBar::new(".x", 250).width_css(), "100%");
    let raw = SkillBar { selector: ".y".into(), width_percent: 140 };
    assert_eq!(raw.width_css(), "100%");
}

#[test]
fn skill_bar_deserializes_camel_case() {
    let bar: SkillBar = serde_json::from_str(r#"{"selector":".rust-progress","widthPercent":95}"#).unwrap();
    assert_eq!(bar, SkillBar::new(".rust-progress", 95));
}

#[test]
fn percent_counter_finishes_at_target() {
    let mut count = percent_counter(85);
    let mut last = Tick::Running(0);
    for _ in 0..200 {
        last = count.step();
        if last.is_finished() {
            break;
        }
    }
    assert_eq!(last, Tick::Finished(85));
    assert_eq!(format_percent(last.value()), "85%");
}

#[test]
fn percent_counter_zero_shows_zero() {
    let mut count = percent_counter(0);
    assert_eq!(format_percent(count.step().value()), "0%");
}

#[test]
fn percent_interval_spans_duration() {
    assert_eq!(percent_interval_ms(90, 1500.0), 17);
    assert_eq!(percent_interval_ms(50, 1500.0), 30);
    assert_eq!(percent_interval_ms(0, 1500.0), 0);
    assert_eq!(percent_interval_ms(-10, 1500.0), 0);
}
