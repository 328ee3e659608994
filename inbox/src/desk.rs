//! Contact form submit handling.
//!
//! DESIGN
//! ======
//! `ContactDesk` owns the injected store, notifier and clock for the page
//! lifetime. [`ContactDesk::accept`] is the validate-and-persist step with no
//! UI effects; [`ContactDesk::handle_submit`] wraps it with the toast and the
//! form reset.

#[cfg(test)]
#[path = "desk_test.rs"]
mod desk_test;

use crate::ledger::MessageLog;
use crate::message::{FormFields, Message, ValidationError};
use crate::notify::{Notification, Notifier, SAVE_FAILED_TEXT, SUCCESS_TEXT};
use crate::store::{KeyValueStore, StoreError};

/// Source of the human-readable submission timestamp.
pub trait Clock {
    fn now(&self) -> String;
}

/// The form the desk reads from and clears.
pub trait ContactForm {
    /// Current raw values of the name, email and message inputs.
    fn fields(&self) -> FormFields;

    /// Clear every input.
    fn reset(&mut self);
}

/// Why a submission was not stored.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error("could not save message: {0}")]
    Persist(#[from] StoreError),
}

impl SubmitError {
    /// Text shown in the error toast.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Invalid(e) => e.to_string(),
            Self::Persist(_) => SAVE_FAILED_TEXT.to_owned(),
        }
    }
}

pub struct ContactDesk<S, N, C> {
    store: S,
    notifier: N,
    clock: C,
}

impl<S: KeyValueStore, N: Notifier, C: Clock> ContactDesk<S, N, C> {
    pub fn new(store: S, notifier: N, clock: C) -> Self {
        Self { store, notifier, clock }
    }

    /// Read back every stored message, newest first.
    ///
    /// Each message is reported to the log; nothing is rendered. An absent or
    /// unreadable slot yields an empty list.
    pub fn load_on_startup(&self) -> Vec<Message> {
        let log = MessageLog::load(&self.store);
        log::debug!("loaded {} stored message(s)", log.len());
        for message in log.messages() {
            report(message);
        }
        log.into_messages()
    }

    /// Validate `fields` and prepend the resulting message to the stored log.
    ///
    /// Validation failures never touch the store. On success the store
    /// receives exactly one write.
    pub fn accept(&mut self, fields: &FormFields) -> Result<Message, SubmitError> {
        let message = Message::from_fields(fields, self.clock.now())?;
        let mut log = MessageLog::load(&self.store);
        log.prepend(message.clone());
        log.save(&mut self.store)?;
        report(&message);
        Ok(message)
    }

    /// Full submit path: accept, toast the outcome, and clear the form on
    /// success. The form keeps its values on any failure.
    pub fn handle_submit(&mut self, form: &mut impl ContactForm) -> Result<Message, SubmitError> {
        match self.accept(&form.fields()) {
            Ok(message) => {
                self.notifier.notify(Notification::success(SUCCESS_TEXT));
                form.reset();
                Ok(message)
            }
            Err(e) => {
                if let SubmitError::Persist(cause) = &e {
                    log::warn!("contact message not saved: {cause}");
                }
                self.notifier.notify(Notification::error(e.user_message()));
                Err(e)
            }
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }
}

fn report(message: &Message) {
    log::info!(
        "message from {} <{}> at {}: {}",
        message.name,
        message.email,
        message.submitted_at,
        message.body
    );
}
