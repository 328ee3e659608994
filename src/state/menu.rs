#[cfg(test)]
#[path = "menu_test.rs"]
mod menu_test;

/// Class applied to both the menu toggle and the nav menu while open.
pub const ACTIVE_CLASS: &str = "active";

/// Open/closed state of the mobile navigation menu.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    pub open: bool,
}

impl MenuState {
    /// Flip the menu and return the new state.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Following any nav link closes the menu.
    pub fn close(&mut self) {
        self.open = false;
    }
}
