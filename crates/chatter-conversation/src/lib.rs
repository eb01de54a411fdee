//! chatter-conversation: display-ready conversation messages.
//!
//! Wraps an externally owned message record together with its resolved,
//! emphasis-annotated body:
//! - `MessageRecord` / `MentionStore` - capabilities supplied by the host
//! - `ConversationMessage` - immutable view model, equal by record identity
//! - `MessageFactory` - the construction strategies
//! - `DisplayConfig` - the emphasis convention

pub mod config;
pub mod factory;
pub mod message;
pub mod record;
pub mod store;


pub use chatter_richtext::{
    AnnotatedText, DisplayNameLookup, EmphasisStyle, LookupError, Mention, RangeError,
    RecipientId, ResolveError, StyledRange, TextRange,
};
pub use config::DisplayConfig;
pub use factory::MessageFactory;
pub use message::{ConversationMessage, fingerprint};
pub use record::{MessageId, MessageRecord, RecordKind};
pub use store::MentionStore;
