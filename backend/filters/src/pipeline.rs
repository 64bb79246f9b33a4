/// Filter pipeline entry points.
///
/// The forwarding loop calls one method per incoming update:
/// 1. New post in a source chat → `pipeline.new_message(...)`
/// 2. Source post edited → `pipeline.edited_message(...)`
/// 3. Grouped album → `pipeline.album(...)` for each member
///
/// Each returns the chain's `(forward, message)` outcome.
use relayforge_core::{EventKind, Message};
use tracing::debug;

use crate::chain::FilterChain;
use crate::filter::{FilterResult, MessageFilter};

/// Top-level pipeline that wraps a chain with per-event methods.
#[derive(Clone)]
pub struct FilterPipeline {
    pub chain: FilterChain,
}

impl FilterPipeline {
    pub fn new(chain: FilterChain) -> Self {
        Self { chain }
    }

    pub async fn new_message(&self, message: Message) -> FilterResult {
        self.run(message, EventKind::NewMessage).await
    }

    pub async fn edited_message(&self, message: Message) -> FilterResult {
        self.run(message, EventKind::MessageEdited).await
    }

    pub async fn album(&self, message: Message) -> FilterResult {
        self.run(message, EventKind::Album).await
    }

    async fn run(&self, message: Message, event: EventKind) -> FilterResult {
        let message_id = message.id;
        let (forward, message) = self.chain.process(message, event).await?;
        debug!("[Pipeline] {} message={} forward={}", event, message_id, forward);
        Ok((forward, message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::restrict_saving::RestrictSavingBypassFilter;
    use relayforge_core::{Chat, Media, MemorySession, Photo};
    use std::sync::Arc;

    #[tokio::test]
    async fn new_message_reuploads_restricted_photo() {
        let session = Arc::new(MemorySession::new());
        session.store_photo(8, vec![1u8; 16]).await;
        let pipeline = FilterPipeline::new(
            FilterChain::new().with(Arc::new(RestrictSavingBypassFilter::new())),
        );

        let msg = Message::new(11, session.clone())
            .with_chat(Chat::restricted(2))
            .with_media(Media::Photo(Photo {
                id: 8,
                access_hash: 0,
                size: Some(16),
            }));
        let (forward, out) = pipeline.new_message(msg).await.unwrap();
        assert!(forward);
        assert!(matches!(out.media, Some(Media::Uploaded(_))));
        assert_eq!(session.upload_count(), 1);
    }

    #[tokio::test]
    async fn edited_and_album_use_same_chain() {
        let pipeline = FilterPipeline::new(FilterChain::new());
        let session = Arc::new(MemorySession::new());

        let (forward, _) = pipeline
            .edited_message(Message::new(1, session.clone()))
            .await
            .unwrap();
        assert!(forward);
        let (forward, _) = pipeline.album(Message::new(2, session)).await.unwrap();
        assert!(forward);
    }
}
