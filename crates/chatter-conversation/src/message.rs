//! View-level model of one message, ready for display.

use std::borrow::Cow;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use chatter_richtext::{AnnotatedText, Mention, RangeError};

use crate::config::DisplayConfig;
use crate::record::{MessageId, MessageRecord, RecordKind};

/// A message record plus its display body, built once per display pass.
///
/// Holds a cached body only when the record carries resolved mentions;
/// otherwise the body is derived from the record on every read. Two
/// instances are equal when they wrap the same record, whatever their
/// cached contents.
pub struct ConversationMessage<R> {
    record: Arc<R>,
    body: Option<AnnotatedText>,
    config: DisplayConfig,
}

impl<R: MessageRecord> ConversationMessage<R> {
    /// Wrap a record that has no mentions. No lookups, no cached body.
    pub fn from_record(record: Arc<R>, config: DisplayConfig) -> Self {
        Self {
            record,
            body: None,
            config,
        }
    }

    /// Wrap a record whose body and mentions were already resolved upstream.
    ///
    /// `mentions` must be the resolved mentions anchored to `body`. Emphasis
    /// is applied here, once. With no mentions, or on a record that can't
    /// carry them, this is the same as [`ConversationMessage::from_record`].
    pub fn from_resolved(
        record: Arc<R>,
        body: impl Into<String>,
        mentions: Vec<Mention>,
        config: DisplayConfig,
    ) -> Result<Self, RangeError> {
        if mentions.is_empty() || !record.is_multimedia_capable() {
            return Ok(Self::from_record(record, config));
        }

        let body = AnnotatedText::with_mentions(body, mentions)?
            .apply_emphasis(config.delimiter, config.emphasis);

        Ok(Self {
            record,
            body: Some(body),
            config,
        })
    }

    pub fn record(&self) -> &Arc<R> {
        &self.record
    }

    pub fn config(&self) -> &DisplayConfig {
        &self.config
    }

    /// True when the display body was resolved and cached at construction.
    pub fn has_resolved_body(&self) -> bool {
        self.body.is_some()
    }

    /// Resolved mentions, anchored to [`ConversationMessage::display_body`].
    pub fn mentions(&self) -> &[Mention] {
        self.body
            .as_ref()
            .map(AnnotatedText::mentions)
            .unwrap_or_default()
    }

    /// Body to show, with emphasis applied.
    ///
    /// Returns the cached body when there is one. Otherwise the record's raw
    /// body is scanned for emphasis on each call. Never fails.
    pub fn display_body(&self) -> Cow<'_, AnnotatedText> {
        match &self.body {
            Some(body) => Cow::Borrowed(body),
            None => Cow::Owned(
                AnnotatedText::plain(self.record.raw_display_body())
                    .apply_emphasis(self.config.delimiter, self.config.emphasis),
            ),
        }
    }

    /// Stable content-independent key for this message's record.
    pub fn fingerprint(&self) -> u64 {
        fingerprint(self.record.kind(), self.record.id())
    }

    fn identity(&self) -> (RecordKind, MessageId) {
        (self.record.kind(), self.record.id())
    }
}

/// Fingerprint of the record `(kind, id)`.
///
/// The first eight bytes, big-endian, of the blake3 digest of `"{KIND}::{id}"`.
pub fn fingerprint(kind: RecordKind, id: MessageId) -> u64 {
    let unique = format!("{kind}::{id}");
    let digest = blake3::hash(unique.as_bytes());
    let mut prefix = [0u8; 8];
    prefix.copy_from_slice(&digest.as_bytes()[..8]);
    u64::from_be_bytes(prefix)
}

impl<R> Clone for ConversationMessage<R> {
    fn clone(&self) -> Self {
        Self {
            record: Arc::clone(&self.record),
            body: self.body.clone(),
            config: self.config,
        }
    }
}

impl<R: MessageRecord> PartialEq for ConversationMessage<R> {
    fn eq(&self, other: &Self) -> bool {
        self.identity() == other.identity()
    }
}

impl<R: MessageRecord> Eq for ConversationMessage<R> {}

impl<R: MessageRecord> Hash for ConversationMessage<R> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.identity().hash(state);
    }
}

impl<R: MessageRecord> fmt::Debug for ConversationMessage<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConversationMessage")
            .field("kind", &self.record.kind())
            .field("id", &self.record.id())
            .field("body", &self.body)
            .finish()
    }
}
