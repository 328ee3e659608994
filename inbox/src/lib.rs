//! Contact-message capture and storage for the portfolio site.
//!
//! This crate is UI-framework agnostic. The browser client injects a
//! [`store::KeyValueStore`] backed by `localStorage`, a [`notify::Notifier`]
//! that renders toasts, and a [`desk::Clock`] that formats the local time;
//! tests inject in-memory fakes.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`message`] | `Message`, raw `FormFields`, and pure validation |
//! | [`store`] | Key-value store seam and the in-memory `MemoryStore` |
//! | [`ledger`] | The persisted, newest-first `MessageLog` |
//! | [`notify`] | Toast model and the `Notifier` seam |
//! | [`desk`] | `ContactDesk`: submit handling and startup load |

pub mod desk;
pub mod ledger;
pub mod message;
pub mod notify;
pub mod store;

pub use desk::{Clock, ContactDesk, ContactForm, SubmitError};
pub use ledger::{MESSAGES_KEY, MessageLog};
pub use message::{FormFields, Message, ValidationError, is_valid_email, trim_form_value};
pub use notify::{Notification, NotificationKind, Notifier};
pub use store::{KeyValueStore, MemoryStore, StoreError};
