//! The externally owned message record, seen through a narrow interface.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// Row identifier of a message record within its kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageId(pub u64);

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for MessageId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// Storage family a record belongs to. Ids are only unique within a kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RecordKind {
    /// Plain text message.
    Sms,
    /// Multimedia message; the only kind that can carry mentions.
    Mms,
}

impl RecordKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordKind::Sms => "SMS",
            RecordKind::Mms => "MMS",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Read-only view of a stored message.
pub trait MessageRecord {
    fn id(&self) -> MessageId;

    fn kind(&self) -> RecordKind;

    /// Body text as stored, with mention placeholders still in place.
    fn raw_display_body(&self) -> Cow<'_, str>;

    /// Whether this record can carry mentions at all.
    fn is_multimedia_capable(&self) -> bool {
        self.kind() == RecordKind::Mms
    }
}
