use miette::Diagnostic;
use thiserror::Error;

use crate::mention::RecipientId;
use crate::range::TextRange;

/// Boxed source error from an injected capability.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Caller supplied offsets that don't fit together.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum RangeError {
    #[error("invalid range: start {start}, length {len} over a buffer of {buffer_len} chars")]
    #[diagnostic(
        code(chatter::range::invalid),
        help("start and length must be non-negative and end within the buffer")
    )]
    InvalidRange {
        start: i64,
        len: i64,
        buffer_len: usize,
    },

    #[error("edit {next:?} overlaps or precedes edit {previous:?}")]
    #[diagnostic(
        code(chatter::range::overlapping_edit),
        help("edits must be sorted by start and must not overlap")
    )]
    OverlappingEdit {
        previous: TextRange,
        next: TextRange,
    },

    #[error("mention placeholder {next:?} overlaps placeholder {previous:?}")]
    #[diagnostic(code(chatter::range::overlapping_mention))]
    OverlappingMention {
        previous: TextRange,
        next: TextRange,
    },

    #[error("edit plan expects {expected} for {what}, got {found}")]
    #[diagnostic(
        code(chatter::range::plan_mismatch),
        help("splice the buffer the plan was built for, with one replacement per edit")
    )]
    PlanMismatch {
        what: &'static str,
        expected: usize,
        found: usize,
    },
}

/// Failure reported by an external lookup capability.
#[derive(Debug, Error, Diagnostic)]
pub enum LookupError {
    #[error("lookup unavailable: {what}")]
    #[diagnostic(code(chatter::lookup::unavailable))]
    Unavailable {
        what: String,
        #[source]
        source: Option<BoxError>,
    },

    #[error("no display name for recipient {recipient}")]
    #[diagnostic(code(chatter::lookup::name_not_found))]
    NameNotFound { recipient: RecipientId },
}

impl LookupError {
    pub fn unavailable(what: impl Into<String>) -> Self {
        Self::Unavailable {
            what: what.into(),
            source: None,
        }
    }

    pub fn unavailable_with(what: impl Into<String>, source: impl Into<BoxError>) -> Self {
        Self::Unavailable {
            what: what.into(),
            source: Some(source.into()),
        }
    }

    pub fn name_not_found(recipient: &RecipientId) -> Self {
        Self::NameNotFound {
            recipient: recipient.clone(),
        }
    }
}

/// Anything that can stop a mention resolution pass.
#[derive(Debug, Error, Diagnostic)]
pub enum ResolveError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Range(#[from] RangeError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Lookup(#[from] LookupError),
}
