use super::*;

#[test]
fn menu_starts_closed() {
    assert!(!MenuState::default().open);
}

#[test]
fn toggle_alternates() {
    let mut menu = MenuState::default();
    assert!(menu.toggle());
    assert!(!menu.toggle());
    assert!(menu.toggle());
}

#[test]
fn close_is_idempotent() {
    let mut menu = MenuState { open: true };
    menu.close();
    menu.close();
    assert!(!menu.open);
}
