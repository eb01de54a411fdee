//! Substitution plans and offset remapping.
//!
//! An [`EditPlan`] is an ordered list of non-overlapping substitutions
//! applied left-to-right to one buffer. Given the plan, any other range
//! anchored to the original buffer can be moved onto the edited buffer
//! without re-scanning the text.

use ropey::Rope;

use crate::error::RangeError;
use crate::range::{TextRange, char_len};

/// Replace `range` with `replacement_len` chars.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edit {
    pub range: TextRange,
    pub replacement_len: usize,
}

impl Edit {
    pub fn new(range: TextRange, replacement_len: usize) -> Self {
        Self {
            range,
            replacement_len,
        }
    }

    /// Deletion of `range`.
    pub fn delete(range: TextRange) -> Self {
        Self::new(range, 0)
    }

    /// Signed change in buffer length caused by this edit.
    pub fn delta(&self) -> isize {
        self.replacement_len as isize - self.range.len() as isize
    }
}

/// Which side of a replaced region an interior offset snaps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Bias {
    Start,
    End,
}

/// Validated, sorted, non-overlapping edits over a buffer of known length.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditPlan {
    edits: Vec<Edit>,
    buffer_len: usize,
}

impl EditPlan {
    /// Validate `edits` against a buffer of `buffer_len` chars.
    ///
    /// Edits must already be sorted by start. Unsorted or overlapping input
    /// is a caller bug and fails with [`RangeError::OverlappingEdit`].
    pub fn new(edits: Vec<Edit>, buffer_len: usize) -> Result<Self, RangeError> {
        for edit in &edits {
            edit.range.check(buffer_len)?;
        }
        for pair in edits.windows(2) {
            let (previous, next) = (pair[0].range, pair[1].range);
            if next.start() < previous.end() || previous == next {
                return Err(RangeError::OverlappingEdit { previous, next });
            }
        }
        Ok(Self { edits, buffer_len })
    }

    /// Plan over edits the caller built sorted and disjoint.
    pub(crate) fn from_sorted(edits: Vec<Edit>, buffer_len: usize) -> Self {
        debug_assert!(Self::new(edits.clone(), buffer_len).is_ok());
        Self { edits, buffer_len }
    }

    /// Plan with no edits; every range maps to itself.
    pub fn identity(buffer_len: usize) -> Self {
        Self {
            edits: Vec::new(),
            buffer_len,
        }
    }

    pub fn edits(&self) -> &[Edit] {
        &self.edits
    }

    pub fn is_empty(&self) -> bool {
        self.edits.is_empty()
    }

    /// Length of the original buffer.
    pub fn source_len(&self) -> usize {
        self.buffer_len
    }

    /// Length of the buffer after every edit is applied.
    pub fn target_len(&self) -> usize {
        let delta: isize = self.edits.iter().map(Edit::delta).sum();
        self.buffer_len.saturating_add_signed(delta)
    }

    /// Summed delta of every edit starting strictly before `offset`.
    pub fn delta_before(&self, offset: usize) -> isize {
        self.edits
            .iter()
            .take_while(|edit| edit.range.start() < offset)
            .map(Edit::delta)
            .sum()
    }

    /// Image of `range` in the edited buffer.
    ///
    /// A range that is itself one of the edits maps onto its replacement text,
    /// wherever the splice landed it.
    /// Otherwise each endpoint moves by the delta of the edits that start
    /// strictly before it; an endpoint inside a replaced region snaps to the
    /// near edge of the replacement.
    pub fn remap(&self, range: TextRange) -> TextRange {
        if let Some(idx) = self.edits.iter().position(|edit| edit.range == range) {
            let shift: isize = self.edits[..idx].iter().map(Edit::delta).sum();
            let edit = &self.edits[idx];
            return TextRange::new(
                edit.range.start().saturating_add_signed(shift),
                edit.replacement_len,
            );
        }

        let start = self.map_offset(range.start(), Bias::Start);
        let end = self.map_offset(range.end(), Bias::End).max(start);
        TextRange::new(start, end - start)
    }

    fn map_offset(&self, offset: usize, bias: Bias) -> usize {
        let mut shift: isize = 0;
        for edit in &self.edits {
            if edit.range.start() >= offset {
                break;
            }
            if edit.range.end() <= offset {
                shift += edit.delta();
                continue;
            }
            // Strictly inside a replaced region.
            let replaced_start = edit.range.start().saturating_add_signed(shift);
            return match bias {
                Bias::Start => replaced_start,
                Bias::End => replaced_start + edit.replacement_len,
            };
        }
        offset.saturating_add_signed(shift)
    }

    /// Apply the plan to `text`, inserting `replacements[i]` in place of
    /// edit `i`.
    ///
    /// Splices run in ascending order; each one lands at its original offset
    /// plus the net delta of the splices before it. `text` must be the buffer
    /// the plan was validated against and every replacement must have the
    /// length its edit declares; anything else is a
    /// [`RangeError::PlanMismatch`].
    pub fn splice<S: AsRef<str>>(
        &self,
        text: &str,
        replacements: &[S],
    ) -> Result<String, RangeError> {
        let text_len = char_len(text);
        if text_len != self.buffer_len {
            return Err(RangeError::PlanMismatch {
                what: "buffer length",
                expected: self.buffer_len,
                found: text_len,
            });
        }
        if replacements.len() != self.edits.len() {
            return Err(RangeError::PlanMismatch {
                what: "replacement count",
                expected: self.edits.len(),
                found: replacements.len(),
            });
        }

        let mut rope = Rope::from_str(text);
        let mut shift: isize = 0;

        for (edit, replacement) in self.edits.iter().zip(replacements) {
            let replacement = replacement.as_ref();
            let replacement_len = char_len(replacement);
            if replacement_len != edit.replacement_len {
                return Err(RangeError::PlanMismatch {
                    what: "replacement length",
                    expected: edit.replacement_len,
                    found: replacement_len,
                });
            }

            let at = edit.range.start().saturating_add_signed(shift);
            rope.remove(at..at + edit.range.len());
            rope.insert(at, replacement);

            tracing::trace!(
                target: "chatter::edit",
                at,
                removed = edit.range.len(),
                inserted = edit.replacement_len,
                "splice"
            );

            shift += edit.delta();
        }

        Ok(rope.to_string())
    }
}
