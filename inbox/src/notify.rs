//! Toast notifications shown after a submission.
//!
//! A notification has no state beyond its own lifetime: it slides in, stays
//! for [`DISPLAY_MS`], slides out over [`EXIT_MS`], and is removed.

#[cfg(test)]
#[path = "notify_test.rs"]
mod notify_test;

/// Delay before the entry transition starts, so the initial style applies.
pub const ENTER_DELAY_MS: u32 = 10;
/// Time the toast stays on screen before starting to leave.
pub const DISPLAY_MS: u32 = 3_000;
/// Length of the exit transition; the element is removed afterwards.
pub const EXIT_MS: u32 = 300;

pub const SUCCESS_TEXT: &str = "Message sent successfully!";
pub const SAVE_FAILED_TEXT: &str = "Your message could not be saved.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

impl NotificationKind {
    /// CSS modifier class, as in `notification success`.
    #[must_use]
    pub fn class_name(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }

    /// Font Awesome icon name without the `fa-` prefix.
    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Self::Success => "check-circle",
            Self::Error => "exclamation-circle",
        }
    }

    /// CSS custom property used for the left accent border.
    #[must_use]
    pub fn accent_var(self) -> &'static str {
        match self {
            Self::Success => "var(--accent-success)",
            Self::Error => "var(--accent-danger)",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub text: String,
    pub kind: NotificationKind,
}

impl Notification {
    pub fn success(text: impl Into<String>) -> Self {
        Self { text: text.into(), kind: NotificationKind::Success }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self { text: text.into(), kind: NotificationKind::Error }
    }

    /// Element class attribute.
    #[must_use]
    pub fn class_attr(&self) -> String {
        format!("notification {}", self.kind.class_name())
    }

    /// Left border declaration for the toast.
    #[must_use]
    pub fn border_left(&self) -> String {
        format!("4px solid {}", self.kind.accent_var())
    }
}

/// Sink that presents notifications to the user.
pub trait Notifier {
    fn notify(&mut self, notification: Notification);
}
