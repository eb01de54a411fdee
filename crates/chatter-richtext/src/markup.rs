//! Single-delimiter emphasis scanning.
//!
//! `hello *world*` becomes `hello world` with a styled range over `world`.
//! Delimiters pair up in order of appearance; an odd trailing delimiter is
//! left in the text as-is. There is no nesting and no escaping.

use serde::{Deserialize, Serialize};

use crate::edit::{Edit, EditPlan};
use crate::range::TextRange;

/// Default emphasis delimiter.
pub const DEFAULT_DELIMITER: char = '*';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmphasisStyle {
    #[default]
    Bold,
    Italic,
    Monospace,
    Strikethrough,
}

/// A styled span of the scanned output. May be zero-length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StyledRange {
    pub range: TextRange,
    pub style: EmphasisStyle,
}

impl StyledRange {
    pub fn new(range: TextRange, style: EmphasisStyle) -> Self {
        Self { range, style }
    }
}

/// Result of one scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkupScan {
    /// Input with every paired delimiter removed.
    pub text: String,
    /// Styled spans in `text` coordinates, ascending.
    pub styles: Vec<StyledRange>,
    /// Delimiter deletions, for moving other annotations onto `text`.
    pub plan: EditPlan,
}

/// Scan `text` for `delimiter` pairs and strip them.
pub fn scan_markup(text: &str, delimiter: char, style: EmphasisStyle) -> MarkupScan {
    // Phase 1: every occurrence, ascending char offsets.
    let occurrences: Vec<usize> = text
        .chars()
        .enumerate()
        .filter_map(|(idx, c)| (c == delimiter).then_some(idx))
        .collect();
    let buffer_len = text.chars().count();

    if occurrences.len() < 2 {
        if occurrences.len() == 1 {
            tracing::debug!(
                target: "chatter::markup",
                offset = occurrences[0],
                "unmatched delimiter left as text"
            );
        }
        return MarkupScan {
            text: text.to_owned(),
            styles: Vec::new(),
            plan: EditPlan::identity(buffer_len),
        };
    }

    // Phase 2: pair up, drop the pair's delimiters.
    let pairs: Vec<(usize, usize)> = occurrences
        .chunks_exact(2)
        .map(|pair| (pair[0], pair[1]))
        .collect();

    if occurrences.len() % 2 == 1 {
        tracing::debug!(
            target: "chatter::markup",
            offset = occurrences[occurrences.len() - 1],
            "unmatched delimiter left as text"
        );
    }

    let edits = pairs
        .iter()
        .flat_map(|&(open, close)| {
            [
                Edit::delete(TextRange::new(open, 1)),
                Edit::delete(TextRange::new(close, 1)),
            ]
        })
        .collect();
    // Delimiter offsets are distinct and ascending, so the deletions never overlap.
    let plan = EditPlan::from_sorted(edits, buffer_len);

    let mut stripped = String::with_capacity(text.len());
    let mut next_pair = pairs.iter().flat_map(|&(open, close)| [open, close]).peekable();
    for (idx, c) in text.chars().enumerate() {
        if next_pair.peek() == Some(&idx) {
            next_pair.next();
            continue;
        }
        stripped.push(c);
    }

    let styles = pairs
        .iter()
        .map(|&(open, close)| {
            let inner = TextRange::new(open + 1, close - open - 1);
            StyledRange::new(plan.remap(inner), style)
        })
        .collect();

    tracing::trace!(
        target: "chatter::markup",
        delimiters = occurrences.len(),
        pairs = pairs.len(),
        "scanned emphasis"
    );

    MarkupScan {
        text: stripped,
        styles,
        plan,
    }
}
