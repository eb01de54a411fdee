//! Construction strategies for [`ConversationMessage`].
//!
//! Which strategy applies depends on what the caller already has:
//! - nothing to resolve: [`MessageFactory::from_record`]
//! - a body and mentions resolved upstream: [`MessageFactory::from_resolved`]
//! - placeholder mentions: [`MessageFactory::from_placeholders`]
//! - only the record: [`MessageFactory::from_store`]
//!
//! The first two never touch a capability and are safe on any thread. The
//! last two may block on the mention store or the name lookup.

use std::sync::Arc;

use chatter_richtext::{DisplayNameLookup, Mention, RangeError, ResolveError, resolve_mentions};

use crate::config::DisplayConfig;
use crate::message::ConversationMessage;
use crate::record::MessageRecord;
use crate::store::MentionStore;

/// Builds messages against one mention store and one name lookup.
#[derive(Debug, Clone)]
pub struct MessageFactory<S, N> {
    store: S,
    names: N,
    config: DisplayConfig,
}

impl<S, N> MessageFactory<S, N>
where
    S: MentionStore,
    N: DisplayNameLookup,
{
    pub fn new(store: S, names: N) -> Self {
        Self {
            store,
            names,
            config: DisplayConfig::default(),
        }
    }

    pub fn with_config(mut self, config: DisplayConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &DisplayConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn names(&self) -> &N {
        &self.names
    }

    /// Wrap a record with no mentions to resolve.
    pub fn from_record<R: MessageRecord>(&self, record: Arc<R>) -> ConversationMessage<R> {
        tracing::debug!(
            target: "chatter::conversation",
            id = %record.id(),
            kind = %record.kind(),
            strategy = "resolved-empty",
            "building message"
        );
        ConversationMessage::from_record(record, self.config)
    }

    /// Wrap a record whose body and mentions are already resolved.
    pub fn from_resolved<R: MessageRecord>(
        &self,
        record: Arc<R>,
        body: impl Into<String>,
        mentions: Vec<Mention>,
    ) -> Result<ConversationMessage<R>, RangeError> {
        tracing::debug!(
            target: "chatter::conversation",
            id = %record.id(),
            kind = %record.kind(),
            mentions = mentions.len(),
            strategy = "resolved-with-data",
            "building message"
        );
        ConversationMessage::from_resolved(record, body, mentions, self.config)
    }

    /// Resolve placeholder `mentions` against the record's raw body.
    ///
    /// Blocks on the name lookup. Records that can't carry mentions, and
    /// empty mention lists, skip resolution entirely.
    pub fn from_placeholders<R: MessageRecord>(
        &self,
        record: Arc<R>,
        mentions: &[Mention],
    ) -> Result<ConversationMessage<R>, ResolveError> {
        if !record.is_multimedia_capable() || mentions.is_empty() {
            return Ok(self.from_record(record));
        }

        tracing::debug!(
            target: "chatter::conversation",
            id = %record.id(),
            kind = %record.kind(),
            mentions = mentions.len(),
            strategy = "unresolved-with-placeholders",
            "building message"
        );

        let resolved = resolve_mentions(&record.raw_display_body(), mentions, &self.names)?;
        Ok(ConversationMessage::from_resolved(
            record,
            resolved.text,
            resolved.mentions,
            self.config,
        )?)
    }

    /// Query the store for the record's mentions, then resolve them.
    ///
    /// Blocks on the store and the name lookup. Records that can't carry
    /// mentions never reach the store.
    pub fn from_store<R: MessageRecord>(
        &self,
        record: Arc<R>,
    ) -> Result<ConversationMessage<R>, ResolveError> {
        if !record.is_multimedia_capable() {
            return Ok(self.from_record(record));
        }

        tracing::debug!(
            target: "chatter::conversation",
            id = %record.id(),
            kind = %record.kind(),
            strategy = "unresolved-query",
            "building message"
        );

        let mentions = self.store.mentions_for_message(record.id())?;
        tracing::trace!(
            target: "chatter::conversation",
            id = %record.id(),
            found = mentions.len(),
            "queried mention store"
        );

        self.from_placeholders(record, &mentions)
    }
}
