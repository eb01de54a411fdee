//! chatter-richtext: annotated message text without a UI toolkit.
//!
//! This crate provides:
//! - `TextRange` - half-open char ranges anchored to one buffer version
//! - `EditPlan` - ordered substitutions and the remapping of other ranges through them
//! - `resolve_mentions` - placeholder to display-name substitution
//! - `scan_markup` - single-delimiter emphasis scanning
//! - `AnnotatedText` - the immutable result carrying both annotation layers

pub mod annotated;
pub mod edit;
pub mod error;
pub mod markup;
pub mod mention;
pub mod range;


pub use annotated::AnnotatedText;
pub use edit::{Edit, EditPlan};
pub use error::{BoxError, LookupError, RangeError, ResolveError};
pub use markup::{DEFAULT_DELIMITER, EmphasisStyle, MarkupScan, StyledRange, scan_markup};
pub use mention::{
    DisplayNameLookup, MENTION_PLACEHOLDER, Mention, RecipientId, ResolvedBody, resolve_mentions,
};
pub use range::TextRange;
pub use smol_str::SmolStr;
