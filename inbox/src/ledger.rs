//! The persisted message log.
//!
//! The whole log lives in one store slot as a JSON array, newest first. It is
//! read in full, changed in memory, and written back in full.

#[cfg(test)]
#[path = "ledger_test.rs"]
mod ledger_test;

use serde::{Deserialize, Serialize};

use crate::message::Message;
use crate::store::{KeyValueStore, StoreError};

/// Store key holding the serialized [`MessageLog`].
pub const MESSAGES_KEY: &str = "portfolioMessages";

/// Ordered contact messages, newest first. Duplicates are kept.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageLog {
    messages: Vec<Message>,
}

impl MessageLog {
    /// Parse a log from its stored JSON text.
    pub fn decode(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    pub fn encode(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Read the log from `store`.
    ///
    /// A missing slot is an empty log. A slot that does not parse is also
    /// treated as empty; the next successful [`MessageLog::save`] replaces it.
    pub fn load(store: &impl KeyValueStore) -> Self {
        let Some(raw) = store.get(MESSAGES_KEY) else {
            return Self::default();
        };
        match Self::decode(&raw) {
            Ok(log) => log,
            Err(e) => {
                log::warn!("discarding unreadable message log under {MESSAGES_KEY}: {e}");
                Self::default()
            }
        }
    }

    /// Write the full log back to `store` in a single `set`.
    pub fn save(&self, store: &mut impl KeyValueStore) -> Result<(), StoreError> {
        let raw = self
            .encode()
            .map_err(|e| StoreError::Write { key: MESSAGES_KEY.to_owned(), reason: e.to_string() })?;
        store.set(MESSAGES_KEY, &raw)
    }

    /// Insert `message` as the newest entry.
    pub fn prepend(&mut self, message: Message) {
        self.messages.insert(0, message);
    }

    #[must_use]
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    #[must_use]
    pub fn into_messages(self) -> Vec<Message> {
        self.messages
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
