use super::*;

#[test]
fn success_notification_styling() {
    let n = Notification::success(SUCCESS_TEXT);
    assert_eq!(n.kind, NotificationKind::Success);
    assert_eq!(n.class_attr(), "notification success");
    assert_eq!(n.kind.icon(), "check-circle");
    assert_eq!(n.border_left(), "4px solid var(--accent-success)");
}

#[test]
fn error_notification_styling() {
    let n = Notification::error("Please fill in all fields.");
    assert_eq!(n.class_attr(), "notification error");
    assert_eq!(n.kind.icon(), "exclamation-circle");
    assert_eq!(n.border_left(), "4px solid var(--accent-danger)");
}

#[test]
fn toast_timings() {
    assert_eq!(DISPLAY_MS, 3_000);
    assert!(ENTER_DELAY_MS < EXIT_MS);
}
