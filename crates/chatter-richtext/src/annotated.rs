//! Immutable text buffer carrying mention and emphasis annotations.

use crate::error::RangeError;
use crate::markup::{EmphasisStyle, StyledRange, scan_markup};
use crate::mention::Mention;
use crate::range::char_len;

/// Display-ready text with both annotation layers anchored to it.
///
/// Built once and never edited in place; every transformation returns a new
/// buffer with all ranges re-anchored.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AnnotatedText {
    text: String,
    mentions: Vec<Mention>,
    styles: Vec<StyledRange>,
}

impl AnnotatedText {
    /// Text with no annotations.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            mentions: Vec::new(),
            styles: Vec::new(),
        }
    }

    /// Text with resolved mentions. Every mention must fit `text`.
    pub fn with_mentions(
        text: impl Into<String>,
        mentions: Vec<Mention>,
    ) -> Result<Self, RangeError> {
        let text = text.into();
        let len = char_len(&text);
        for mention in &mentions {
            mention.range().check(len)?;
        }
        Ok(Self {
            text,
            mentions,
            styles: Vec::new(),
        })
    }

    /// Strip `delimiter` pairs and record the emphasised spans, moving the
    /// mention ranges onto the stripped text.
    ///
    /// Delimiters inside a mention's display name are scanned like any other
    /// text. Existing styled ranges are dropped along with the delimiters
    /// that produced them.
    pub fn apply_emphasis(self, delimiter: char, style: EmphasisStyle) -> Self {
        let scan = scan_markup(&self.text, delimiter, style);
        if scan.plan.is_empty() {
            return Self {
                styles: Vec::new(),
                ..self
            };
        }

        let mentions = self
            .mentions
            .iter()
            .map(|mention| mention.remapped(&scan.plan))
            .collect();

        Self {
            text: scan.text,
            mentions,
            styles: scan.styles,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn mentions(&self) -> &[Mention] {
        &self.mentions
    }

    pub fn styles(&self) -> &[StyledRange] {
        &self.styles
    }

    pub fn char_len(&self) -> usize {
        char_len(&self.text)
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Text currently covered by `mention`.
    pub fn mention_text(&self, mention: &Mention) -> Option<&str> {
        mention.range().slice(&self.text)
    }

    /// Text currently covered by `styled`.
    pub fn styled_text(&self, styled: &StyledRange) -> Option<&str> {
        styled.range.slice(&self.text)
    }

    pub fn into_text(self) -> String {
        self.text
    }
}

impl From<String> for AnnotatedText {
    fn from(text: String) -> Self {
        Self::plain(text)
    }
}

impl From<&str> for AnnotatedText {
    fn from(text: &str) -> Self {
        Self::plain(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::range::TextRange;

    #[test]
    fn test_with_mentions_validates_ranges() {
        let ok =
            AnnotatedText::with_mentions("hi Bob", vec![Mention::new(TextRange::new(3, 3), "b")]);
        assert!(ok.is_ok());

        let err =
            AnnotatedText::with_mentions("hi Bob", vec![Mention::new(TextRange::new(4, 3), "b")]);
        assert!(matches!(err, Err(RangeError::InvalidRange { .. })));
    }

    #[test]
    fn test_emphasis_moves_mentions() {
        // "*hey* Bob and Ann" with mentions over "Bob" and "Ann"
        let text = AnnotatedText::with_mentions(
            "*hey* Bob and Ann",
            vec![
                Mention::new(TextRange::new(6, 3), "b"),
                Mention::new(TextRange::new(14, 3), "a"),
            ],
        )
        .unwrap();

        let out = text.apply_emphasis('*', EmphasisStyle::Bold);
        assert_eq!(out.text(), "hey Bob and Ann");
        assert_eq!(out.mention_text(&out.mentions()[0]), Some("Bob"));
        assert_eq!(out.mention_text(&out.mentions()[1]), Some("Ann"));
        assert_eq!(out.styled_text(&out.styles()[0]), Some("hey"));
    }

    #[test]
    fn test_emphasis_around_mention() {
        let text = AnnotatedText::with_mentions(
            "ping *Bob* now",
            vec![Mention::new(TextRange::new(6, 3), "b")],
        )
        .unwrap();

        let out = text.apply_emphasis('*', EmphasisStyle::Bold);
        assert_eq!(out.text(), "ping Bob now");
        assert_eq!(out.mentions()[0].range(), TextRange::new(5, 3));
        assert_eq!(out.styles()[0].range, TextRange::new(5, 3));
    }

    #[test]
    fn test_delimiter_inside_mention_name() {
        // Display name "B*b" pairs with a later delimiter.
        let text = AnnotatedText::with_mentions(
            "B*b says hi*",
            vec![Mention::new(TextRange::new(0, 3), "b")],
        )
        .unwrap();

        let out = text.apply_emphasis('*', EmphasisStyle::Bold);
        assert_eq!(out.text(), "Bb says hi");
        assert_eq!(out.mention_text(&out.mentions()[0]), Some("Bb"));
        assert_eq!(out.styled_text(&out.styles()[0]), Some("b says hi"));
    }

    #[test]
    fn test_no_delimiters_returns_same_buffer() {
        let text =
            AnnotatedText::with_mentions("hi Bob", vec![Mention::new(TextRange::new(3, 3), "b")])
                .unwrap();
        let out = text.clone().apply_emphasis('*', EmphasisStyle::Bold);
        assert_eq!(out, text);
        assert!(out.styles().is_empty());
    }
}
