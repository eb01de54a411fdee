//! Mention store capability.

use std::collections::HashMap;

use chatter_richtext::{LookupError, Mention};

use crate::record::MessageId;

/// Read-only query for the placeholder mentions stored with a message.
///
/// Implementations may block on storage; call only from a context that
/// tolerates it.
pub trait MentionStore {
    fn mentions_for_message(&self, id: MessageId) -> Result<Vec<Mention>, LookupError>;
}

impl<F> MentionStore for F
where
    F: Fn(MessageId) -> Result<Vec<Mention>, LookupError>,
{
    fn mentions_for_message(&self, id: MessageId) -> Result<Vec<Mention>, LookupError> {
        self(id)
    }
}

impl MentionStore for HashMap<MessageId, Vec<Mention>> {
    fn mentions_for_message(&self, id: MessageId) -> Result<Vec<Mention>, LookupError> {
        Ok(self.get(&id).cloned().unwrap_or_default())
    }
}
