//! Mentions and display-name resolution.
//!
//! A raw message body carries one fixed-width placeholder token per mention.
//! [`resolve_mentions`] swaps every placeholder for the recipient's display
//! name and re-anchors each mention onto the name it now covers.

use serde::{Deserialize, Serialize};
use smol_str::{SmolStr, ToSmolStr};
use std::collections::HashMap;
use std::fmt;

use crate::edit::{Edit, EditPlan};
use crate::error::{LookupError, RangeError, ResolveError};
use crate::range::{TextRange, char_len};

/// Placeholder token the message store embeds for each mention.
pub const MENTION_PLACEHOLDER: char = '\u{FFFC}';

/// Opaque identity of the mentioned subject.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecipientId(SmolStr);

impl RecipientId {
    pub fn new(id: impl Into<SmolStr>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecipientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RecipientId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for RecipientId {
    fn from(id: String) -> Self {
        Self::new(id)
    }
}

impl From<u64> for RecipientId {
    fn from(id: u64) -> Self {
        Self(id.to_smolstr())
    }
}

/// A mention of `recipient` over `range`.
///
/// Before resolution the range covers the placeholder in the raw body; after
/// resolution it covers the display name in the resolved body.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Mention {
    range: TextRange,
    recipient: RecipientId,
}

impl Mention {
    pub fn new(range: TextRange, recipient: impl Into<RecipientId>) -> Self {
        Self {
            range,
            recipient: recipient.into(),
        }
    }

    pub fn range(&self) -> TextRange {
        self.range
    }

    pub fn recipient(&self) -> &RecipientId {
        &self.recipient
    }

    /// Same recipient, range moved through `plan`.
    pub fn remapped(&self, plan: &EditPlan) -> Self {
        Self {
            range: plan.remap(self.range),
            recipient: self.recipient.clone(),
        }
    }
}

/// Capability mapping a recipient to the text shown in its place.
///
/// Lookups may block. Implementations must answer deterministically for a
/// given recipient within one resolution pass; fallback labels for unknown
/// recipients are the implementation's call.
pub trait DisplayNameLookup {
    fn display_name(&self, recipient: &RecipientId) -> Result<SmolStr, LookupError>;
}

impl<F> DisplayNameLookup for F
where
    F: Fn(&RecipientId) -> Result<SmolStr, LookupError>,
{
    fn display_name(&self, recipient: &RecipientId) -> Result<SmolStr, LookupError> {
        self(recipient)
    }
}

impl DisplayNameLookup for HashMap<RecipientId, SmolStr> {
    fn display_name(&self, recipient: &RecipientId) -> Result<SmolStr, LookupError> {
        self.get(recipient)
            .cloned()
            .ok_or_else(|| LookupError::name_not_found(recipient))
    }
}

/// Body with display names substituted, plus mentions anchored to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedBody {
    pub text: String,
    pub mentions: Vec<Mention>,
}

/// Replace every placeholder in `body` with its recipient's display name.
///
/// Placeholders are processed in ascending start order and must not overlap.
/// Each distinct recipient is looked up once. The returned mentions keep the
/// order they were given in. Lookup failures propagate unchanged.
pub fn resolve_mentions<L>(
    body: &str,
    mentions: &[Mention],
    lookup: &L,
) -> Result<ResolvedBody, ResolveError>
where
    L: DisplayNameLookup + ?Sized,
{
    if mentions.is_empty() {
        return Ok(ResolvedBody {
            text: body.to_owned(),
            mentions: Vec::new(),
        });
    }

    let body_len = char_len(body);
    for mention in mentions {
        mention.range.check(body_len)?;
    }

    let mut order: Vec<usize> = (0..mentions.len()).collect();
    order.sort_by_key(|&idx| (mentions[idx].range.start(), mentions[idx].range.end()));

    for pair in order.windows(2) {
        let previous = mentions[pair[0]].range;
        let next = mentions[pair[1]].range;
        if previous.overlaps(&next) {
            return Err(RangeError::OverlappingMention { previous, next }.into());
        }
    }

    let mut names: HashMap<&RecipientId, SmolStr> = HashMap::new();
    let mut edits = Vec::with_capacity(order.len());
    let mut replacements = Vec::with_capacity(order.len());

    for &idx in &order {
        let mention = &mentions[idx];
        let name = match names.get(&mention.recipient) {
            Some(name) => name.clone(),
            None => {
                let name = lookup.display_name(&mention.recipient)?;
                names.insert(&mention.recipient, name.clone());
                name
            }
        };
        edits.push(Edit::new(mention.range, char_len(&name)));
        replacements.push(name);
    }

    let plan = EditPlan::new(edits, body_len)?;
    let text = plan.splice(body, &replacements)?;
    let resolved = mentions.iter().map(|m| m.remapped(&plan)).collect();

    tracing::debug!(
        target: "chatter::resolve",
        mentions = mentions.len(),
        lookups = names.len(),
        before = body_len,
        after = plan.target_len(),
        "resolved mention placeholders"
    );

    Ok(ResolvedBody {
        text,
        mentions: resolved,
    })
}
