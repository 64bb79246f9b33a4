/// Message filter trait.
///
/// Filters observe or transform a candidate outbound message. Each returns
/// the (possibly modified) message together with a flag saying whether it
/// should still be forwarded.
use anyhow::Result;
use async_trait::async_trait;
use relayforge_core::{EventKind, Message};

/// Outcome of a filter: `(forward, message)`.
pub type FilterResult = Result<(bool, Message)>;

#[async_trait]
pub trait MessageFilter: Send + Sync {
    /// Human-readable name for logging.
    fn name(&self) -> &str;

    /// Whether this filter may run on messages from chats that forbid
    /// forwarding. Chains skip such messages for filters returning `false`.
    fn restricted_content_allowed(&self) -> bool {
        false
    }

    /// Process one message. Ownership moves in and back out, so filters are
    /// free to rewrite any field.
    async fn process(&self, message: Message, event: EventKind) -> FilterResult;
}
